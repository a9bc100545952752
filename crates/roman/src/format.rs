//! Formatting chords back into roman numeral notation.
//!
//! Every chord is spelled from inside its own tonality, so a chord that
//! was written with a secondary numeral (`V/V` in C) comes back under
//! its resolved tonality (`G: V`). Reparsing the output yields the same
//! chords.

use crate::parser::tables;
use crate::types::{Chord, Mode};
use crate::{Error, Result};

/// Formats one chord as a token, without its tonality prefix.
///
/// The chord's octave has no place in the notation and is ignored.
pub fn format_chord(chord: &Chord) -> Result<String> {
    chord.validate()?;
    let token = tables::degree_token(chord.mode, chord.degree).ok_or(Error::Unrepresentable {
        degree: chord.degree,
        mode: chord.mode,
    })?;
    let mut out = String::from(token);
    out.push_str(&chord.extension);
    for added in &chord.added_notes {
        out.push_str(added);
    }
    Ok(out)
}

/// Canonical spelling of a tonality root, e.g. `"Eb"` or `"f#"`.
pub fn tonality_name(tonality: u8, mode: Mode) -> Result<&'static str> {
    let names = match mode {
        Mode::Major => &tables::MAJOR_KEYS,
        Mode::Minor => &tables::MINOR_KEYS,
    };
    names
        .get(tonality as usize)
        .copied()
        .ok_or(Error::TonalityRange(tonality))
}

/// Formats a progression, emitting a tonality prefix only where the
/// tonality changes.
pub fn format_progression(chords: &[Chord]) -> Result<String> {
    let mut out = String::new();
    let mut current: Option<(u8, Mode)> = None;
    for chord in chords {
        let token = format_chord(chord)?;
        if !out.is_empty() {
            out.push(' ');
        }
        let key = (chord.tonality, chord.mode);
        if current != Some(key) {
            out.push_str(tonality_name(chord.tonality, chord.mode)?);
            out.push_str(": ");
            current = Some(key);
        }
        out.push_str(&token);
    }
    Ok(out)
}
