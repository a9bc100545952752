//! Expansion of chord candidates into roman numeral readings.

use std::collections::HashMap;

use roman::{chord_tones, Mode};

use crate::chroma::BarChroma;
use crate::templates::TemplateMatch;

/// Extensions a reading may carry. Inversions are resolved later from the
/// bass, so only root-position qualities are enumerated.
const CANDIDATE_EXTENSIONS: [&str; 4] = ["", "7", "(sus2)", "(sus4)"];

/// One roman numeral reading of a bar: a degree in a concrete tonality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonalityCandidate {
    pub degree: u8,
    pub tonality: u8,
    pub mode: Mode,
    pub extension: &'static str,
}

/// Lookup table from a sorted pitch-class set to every roman numeral
/// reading whose chord tones produce that set.
pub struct TonalityExpander {
    by_pitch_classes: HashMap<Vec<u8>, Vec<TonalityCandidate>>,
}

impl TonalityExpander {
    /// Enumerates every (extension, mode, tonality, degree) combination
    /// once. Readings under one key keep this enumeration order, which
    /// fixes the candidate order downstream.
    pub fn new() -> Self {
        let mut by_pitch_classes: HashMap<Vec<u8>, Vec<TonalityCandidate>> = HashMap::new();
        for extension in CANDIDATE_EXTENSIONS {
            for mode in [Mode::Major, Mode::Minor] {
                for tonality in 0..12u8 {
                    for degree in 0..7u8 {
                        let Some(tones) = chord_tones(degree, tonality, mode, extension) else {
                            continue;
                        };
                        let mut classes: Vec<u8> =
                            tones.iter().map(|&t| t.rem_euclid(12) as u8).collect();
                        classes.sort_unstable();
                        by_pitch_classes.entry(classes).or_default().push(
                            TonalityCandidate {
                                degree,
                                tonality,
                                mode,
                                extension,
                            },
                        );
                    }
                }
            }
        }
        Self { by_pitch_classes }
    }

    /// Expands template matches into readings, keeping for each match only
    /// the readings whose tonality fits the chroma best.
    ///
    /// Readings survive as long as their tonality's scale catches a
    /// maximal share of the chroma mass; ties all stay, and matches
    /// contribute independently even when they share a pitch-class set. A
    /// bar with nothing to say falls back to the C major tonic.
    pub fn expand(
        &self,
        matches: &[TemplateMatch],
        chroma: &BarChroma,
    ) -> Vec<TonalityCandidate> {
        let mut candidates = Vec::new();
        for placed in matches {
            let Some(readings) = self.by_pitch_classes.get(&placed.pitch_classes()) else {
                continue;
            };
            let scores: Vec<f64> = readings
                .iter()
                .map(|r| tonality_affinity(&chroma.vector, r.tonality, r.mode))
                .collect();
            let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            candidates.extend(
                readings
                    .iter()
                    .zip(&scores)
                    .filter(|&(_, &score)| score == best)
                    .map(|(reading, _)| *reading),
            );
        }
        if candidates.is_empty() {
            candidates.push(TonalityCandidate {
                degree: 0,
                tonality: 0,
                mode: Mode::Major,
                extension: "",
            });
        }
        candidates
    }
}

impl Default for TonalityExpander {
    fn default() -> Self {
        Self::new()
    }
}

/// Chroma mass caught by the tonality's scale classes.
fn tonality_affinity(chroma: &[f64; 12], tonality: u8, mode: Mode) -> f64 {
    mode.scale()
        .iter()
        .map(|&step| chroma[(step + i32::from(tonality)).rem_euclid(12) as usize])
        .sum()
}
