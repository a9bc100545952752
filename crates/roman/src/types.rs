//! Core notation types: modes, scales, and the chord record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Major scale degrees in semitones from the tonic.
pub const MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Harmonic minor scale degrees in semitones from the tonic.
pub const MINOR_SCALE: [i32; 7] = [0, 2, 3, 5, 7, 8, 11];

/// Tonality mode. Minor is harmonic minor throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Scale degrees for this mode, in semitones from the tonic.
    pub fn scale(&self) -> &'static [i32; 7] {
        match self {
            Mode::Major => &MAJOR_SCALE,
            Mode::Minor => &MINOR_SCALE,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::Major => "major",
                Mode::Minor => "minor",
            }
        )
    }
}

/// Scale of `mode` rotated to start on `degree`, each step ascending.
///
/// Entries wrapped past the octave are raised by 12 so the result is
/// strictly increasing. Degree 4 of major yields `[7, 9, 11, 12, 14, 16, 17]`.
pub fn rotated_scale(mode: Mode, degree: u8) -> [i32; 7] {
    let base = mode.scale();
    let d = degree as usize % 7;
    let mut out = [0i32; 7];
    for (i, slot) in out.iter_mut().enumerate() {
        let j = d + i;
        *slot = base[j % 7] + if j >= 7 { 12 } else { 0 };
    }
    out
}

/// Scale positions sounded by a chord carrying one of the candidate
/// extensions. Inversion figures have no entry here; they are assigned
/// after the chord's bass is known.
pub fn chord_tone_positions(extension: &str) -> Option<&'static [usize]> {
    match extension {
        "" => Some(&[0, 2, 4]),
        "7" => Some(&[0, 2, 4, 6]),
        "(sus2)" => Some(&[0, 1, 4]),
        "(sus4)" => Some(&[0, 3, 4]),
        _ => None,
    }
}

/// Absolute chord tones for a degree in a tonality, ascending.
///
/// Returns `None` for extensions that do not name a tone set of their own.
pub fn chord_tones(degree: u8, tonality: u8, mode: Mode, extension: &str) -> Option<Vec<i32>> {
    let positions = chord_tone_positions(extension)?;
    let scale = rotated_scale(mode, degree);
    Some(
        positions
            .iter()
            .map(|&p| tonality as i32 + scale[p])
            .collect(),
    )
}

/// Added-note tokens accepted by the grammar.
pub static ADDED_NOTES: [&str; 16] = [
    "[add9]", "[addb9]", "[add#9]", "[add11]", "[add#11]", "[add13]", "[addb13]", "[add#13]",
    "[9]", "[b9]", "[#9]", "[11]", "[#11]", "[13]", "[b13]", "[#13]",
];

/// Whether `token` is one of the recognized added-note tokens.
pub fn is_valid_added_note(token: &str) -> bool {
    ADDED_NOTES.contains(&token)
}

/// Whether `ext` is a recognized extension: an optional inversion figure
/// followed by an optional suspension.
pub fn is_valid_extension(ext: &str) -> bool {
    let base = ext
        .strip_suffix("(sus2)")
        .or_else(|| ext.strip_suffix("(sus4)"))
        .unwrap_or(ext);
    matches!(base, "" | "6" | "64" | "7" | "65" | "43" | "2")
}

/// A chord relative to a tonality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    /// Scale degree 0-6 (0 = tonic).
    pub degree: u8,
    /// Tonality root pitch class 0-11 (C=0, C#=1, ...).
    pub tonality: u8,
    pub mode: Mode,
    /// Octave shift applied to the whole chord.
    pub octave: i32,
    /// Inversion figure and/or suspension, e.g. `"7"`, `"64"`, `"6(sus4)"`.
    pub extension: String,
    /// Added-note tokens, e.g. `"[add9]"`.
    pub added_notes: Vec<String>,
}

impl Chord {
    pub fn new(degree: u8, tonality: u8, mode: Mode, extension: impl Into<String>) -> Self {
        Chord {
            degree,
            tonality,
            mode,
            octave: 0,
            extension: extension.into(),
            added_notes: Vec::new(),
        }
    }

    /// The scale of this chord's tonality rotated to its degree.
    pub fn scale(&self) -> [i32; 7] {
        rotated_scale(self.mode, self.degree)
    }

    /// Checks every field against the notation's closed vocabularies.
    pub fn validate(&self) -> Result<()> {
        if self.degree > 6 {
            return Err(Error::DegreeRange(self.degree));
        }
        if self.tonality > 11 {
            return Err(Error::TonalityRange(self.tonality));
        }
        if !is_valid_extension(&self.extension) {
            return Err(Error::ExtensionVocabulary(self.extension.clone()));
        }
        for note in &self.added_notes {
            if !is_valid_added_note(note) {
                return Err(Error::AddedNoteVocabulary(note.clone()));
            }
        }
        Ok(())
    }
}
