//! Score model the inference runs on, and its output type.

use roman::Chord;
use serde::{Deserialize, Serialize};

/// A note event, in absolute ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub onset_tick: u32,
    pub duration_tick: u32,
    /// MIDI pitch 0-127.
    pub pitch: u8,
    pub velocity: u8,
}

/// One instrument's notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Percussion tracks carry no harmonic information and are skipped.
    pub percussion: bool,
    pub notes: Vec<Note>,
}

impl Track {
    pub fn new(percussion: bool) -> Self {
        Track {
            percussion,
            notes: Vec::new(),
        }
    }
}

/// A time signature taking effect at an absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    pub tick: u32,
    pub numerator: u8,
    pub denominator: u8,
}

/// A bar carved out of the timeline, `[start_tick, end_tick)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub start_tick: u32,
    pub end_tick: u32,
    pub numerator: u8,
    pub denominator: u8,
}

impl Bar {
    /// Whether an onset falls inside this bar.
    pub fn contains(&self, tick: u32) -> bool {
        tick >= self.start_tick && tick < self.end_tick
    }
}

/// A chord inferred for one bar, with the bar's time signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedChord {
    pub chord: Chord,
    pub numerator: u8,
    pub denominator: u8,
}
