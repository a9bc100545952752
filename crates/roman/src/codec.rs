//! Chord-relative pitch codes.
//!
//! A pitch is stored against a chord as a kind, an index, and an octave,
//! so the same code names the analogous note under a different chord.
//! Scale codes index the seven tones of the chord's rotated scale;
//! chromatic codes index the twelve semitones anchored at the chord
//! root. Drum and absolute codes ignore the chord. Encoding and decoding
//! are exact inverses for every chord and every pitch.

use serde::{Deserialize, Serialize};

use crate::types::Chord;
use crate::{Error, Result};

/// MIDI pitch the codec is centered on.
pub const REFERENCE_PITCH: i32 = 60;

/// How a pitch code's index is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Scale,
    Chromatic,
    Drum,
    Absolute,
}

impl NoteKind {
    /// One-letter tag used in serialized note names.
    pub fn letter(&self) -> char {
        match self {
            NoteKind::Scale => 's',
            NoteKind::Chromatic => 'h',
            NoteKind::Drum => 'd',
            NoteKind::Absolute => 'a',
        }
    }
}

/// A pitch expressed relative to a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchCode {
    pub kind: NoteKind,
    /// Scale or chromatic position, 0-6 for scale codes, 0-11 otherwise.
    pub index: u8,
    /// Octaves above the chord root (or above the reference pitch for
    /// drum and absolute codes).
    pub octave: i32,
}

/// Pitch of the chord root relative to the reference pitch.
fn root_pitch(chord: &Chord) -> i32 {
    chord.scale()[0] + chord.tonality as i32 + 12 * chord.octave
}

/// The chord's rotated scale as pitches relative to the reference.
fn absolute_scale(chord: &Chord) -> [i32; 7] {
    let mut scale = chord.scale();
    for s in &mut scale {
        *s += chord.tonality as i32 + 12 * chord.octave;
    }
    scale
}

/// Encodes a pitch relative to a chord.
///
/// Pitches whose class lies on the chord's scale become scale codes;
/// everything else becomes a chromatic code. The octave counts whole
/// octaves above the chord root.
pub fn encode(pitch: i32, chord: &Chord) -> PitchCode {
    let value = pitch - REFERENCE_PITCH;
    let root = root_pitch(chord);
    let scale = absolute_scale(chord);
    let class = value.rem_euclid(12);
    let octave = (value - root).div_euclid(12);
    match scale.iter().position(|&s| s.rem_euclid(12) == class) {
        Some(index) => PitchCode {
            kind: NoteKind::Scale,
            index: index as u8,
            octave,
        },
        None => PitchCode {
            kind: NoteKind::Chromatic,
            index: (value - root).rem_euclid(12) as u8,
            octave,
        },
    }
}

/// Encodes a percussion pitch, which has no chord to be relative to.
pub fn encode_drum(pitch: i32) -> PitchCode {
    let value = pitch - REFERENCE_PITCH;
    PitchCode {
        kind: NoteKind::Drum,
        index: value.rem_euclid(12) as u8,
        octave: value.div_euclid(12),
    }
}

/// Encodes a pitch absolutely, bypassing the chord like a drum code.
pub fn encode_absolute(pitch: i32) -> PitchCode {
    PitchCode {
        kind: NoteKind::Absolute,
        ..encode_drum(pitch)
    }
}

/// Decodes a pitch code against a chord.
pub fn decode(code: &PitchCode, chord: &Chord) -> Result<i32> {
    let limit = match code.kind {
        NoteKind::Scale => 7,
        _ => 12,
    };
    if code.index as usize >= limit {
        return Err(Error::PitchIndex {
            kind: code.kind,
            index: code.index,
        });
    }
    let base = match code.kind {
        NoteKind::Scale => absolute_scale(chord)[code.index as usize],
        NoteKind::Chromatic => root_pitch(chord) + code.index as i32,
        NoteKind::Drum | NoteKind::Absolute => code.index as i32,
    };
    Ok(REFERENCE_PITCH + base + 12 * code.octave)
}

/// Named notes used by chord tags, each an alias for a pitch code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialNote {
    Ninth,
    Eleventh,
    Sixth,
    DiminishedNinth,
    MajorSecond,
    MinorThird,
    MajorThird,
    DiminishedFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl SpecialNote {
    /// Kind and index of the pitch code this note names.
    pub fn pitch_code(&self) -> (NoteKind, u8) {
        match self {
            SpecialNote::Ninth => (NoteKind::Scale, 1),
            SpecialNote::Eleventh => (NoteKind::Scale, 3),
            SpecialNote::Sixth => (NoteKind::Scale, 5),
            SpecialNote::DiminishedNinth => (NoteKind::Chromatic, 1),
            SpecialNote::MajorSecond => (NoteKind::Chromatic, 2),
            SpecialNote::MinorThird => (NoteKind::Chromatic, 3),
            SpecialNote::MajorThird => (NoteKind::Chromatic, 4),
            SpecialNote::DiminishedFifth => (NoteKind::Chromatic, 6),
            SpecialNote::MinorSixth => (NoteKind::Chromatic, 8),
            SpecialNote::MajorSixth => (NoteKind::Chromatic, 9),
            SpecialNote::MinorSeventh => (NoteKind::Chromatic, 10),
            SpecialNote::MajorSeventh => (NoteKind::Chromatic, 11),
        }
    }

    /// The note an added-note token asks for, where one exists. The token
    /// surface here is wider than the progression grammar accepts, so
    /// aliases like `[addb5]` resolve too.
    pub fn from_added_note(token: &str) -> Option<SpecialNote> {
        let note = match token {
            "[add9]" => SpecialNote::Ninth,
            "[addb9]" => SpecialNote::DiminishedNinth,
            "[add#9]" => SpecialNote::MinorThird,
            "[add#10]" => SpecialNote::MajorThird,
            "[add11]" => SpecialNote::Eleventh,
            "[addb5]" | "[add#11]" => SpecialNote::DiminishedFifth,
            "[add6]" | "[add13]" => SpecialNote::Sixth,
            "[addb6]" | "[addb13]" => SpecialNote::MinorSixth,
            "[add#6]" | "[add#13]" => SpecialNote::MajorSixth,
            "[addb7]" => SpecialNote::MinorSeventh,
            "[add7]" => SpecialNote::MajorSeventh,
            _ => return None,
        };
        Some(note)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Mode;

    fn code(kind: NoteKind, index: u8, octave: i32) -> PitchCode {
        PitchCode {
            kind,
            index,
            octave,
        }
    }

    #[test]
    fn scale_codes_on_the_tonic_chord() {
        let chord = Chord::new(0, 0, Mode::Major, "");
        assert_eq!(encode(60, &chord), code(NoteKind::Scale, 0, 0));
        assert_eq!(encode(64, &chord), code(NoteKind::Scale, 2, 0));
        assert_eq!(encode(72, &chord), code(NoteKind::Scale, 0, 1));
        assert_eq!(encode(59, &chord), code(NoteKind::Scale, 6, -1));
    }

    #[test]
    fn chromatic_codes_anchor_at_the_chord_root() {
        let chord = Chord::new(0, 0, Mode::Major, "");
        assert_eq!(encode(61, &chord), code(NoteKind::Chromatic, 1, 0));
        // C under a G chord sits an octave below the root's octave.
        let dominant = Chord::new(4, 0, Mode::Major, "");
        assert_eq!(encode(60, &dominant), code(NoteKind::Scale, 3, -1));
        assert_eq!(decode(&code(NoteKind::Scale, 3, -1), &dominant).unwrap(), 60);
    }

    #[test]
    fn chord_octave_shifts_the_frame() {
        let mut chord = Chord::new(0, 0, Mode::Major, "");
        chord.octave = -1;
        assert_eq!(encode(60, &chord), code(NoteKind::Scale, 0, 1));
        assert_eq!(decode(&code(NoteKind::Scale, 0, 1), &chord).unwrap(), 60);
    }

    #[test]
    fn drum_and_absolute_codes_ignore_the_chord() {
        assert_eq!(encode_drum(60), code(NoteKind::Drum, 0, 0));
        assert_eq!(encode_drum(38), code(NoteKind::Drum, 2, -2));
        assert_eq!(encode_absolute(61), code(NoteKind::Absolute, 1, 0));
        let chord = Chord::new(3, 7, Mode::Minor, "7");
        assert_eq!(decode(&encode_drum(38), &chord).unwrap(), 38);
    }

    #[test]
    fn encode_then_decode_is_identity_for_any_chord() {
        let chords = [
            Chord::new(0, 0, Mode::Major, ""),
            Chord::new(4, 7, Mode::Major, "7"),
            Chord::new(6, 3, Mode::Minor, "65"),
            Chord::new(2, 10, Mode::Minor, "(sus4)"),
            {
                let mut c = Chord::new(1, 5, Mode::Major, "");
                c.octave = 2;
                c
            },
        ];
        for chord in &chords {
            for pitch in -12..140 {
                let encoded = encode(pitch, chord);
                assert_eq!(decode(&encoded, chord).unwrap(), pitch, "{chord:?}");
            }
        }
    }

    #[test]
    fn decode_rejects_out_of_range_indices() {
        let chord = Chord::new(0, 0, Mode::Major, "");
        assert!(decode(&code(NoteKind::Scale, 7, 0), &chord).is_err());
        assert!(decode(&code(NoteKind::Chromatic, 12, 0), &chord).is_err());
        assert!(decode(&code(NoteKind::Scale, 6, 0), &chord).is_ok());
    }

    #[test]
    fn special_notes_name_pitch_codes() {
        assert_eq!(SpecialNote::Ninth.pitch_code(), (NoteKind::Scale, 1));
        assert_eq!(
            SpecialNote::MajorSeventh.pitch_code(),
            (NoteKind::Chromatic, 11)
        );
        assert_eq!(
            SpecialNote::from_added_note("[add13]"),
            Some(SpecialNote::Sixth)
        );
        assert_eq!(
            SpecialNote::from_added_note("[addb13]"),
            Some(SpecialNote::MinorSixth)
        );
        assert_eq!(SpecialNote::from_added_note("[9]"), None);
    }
}
