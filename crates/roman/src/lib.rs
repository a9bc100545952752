//! Roman numeral chord notation.
//!
//! Parses progressions like `"C: I V65/V d: i"` into [`Chord`] records,
//! formats chords back to notation, and converts pitches to and from
//! chord-relative pitch codes.
//!
//! ```
//! use roman::{parse_progression, Mode};
//!
//! let chords = parse_progression("C: I V7 a: i").unwrap();
//! let five = chords[1].as_ref().unwrap();
//! assert_eq!((five.degree, five.tonality, five.mode), (4, 0, Mode::Major));
//! ```

pub mod codec;
pub mod dynamics;
pub mod format;
pub mod parser;
pub mod types;

pub use codec::{
    decode, encode, encode_absolute, encode_drum, NoteKind, PitchCode, SpecialNote,
    REFERENCE_PITCH,
};
pub use dynamics::Dynamics;
pub use format::{format_chord, format_progression, tonality_name};
pub use parser::{parse_chord, parse_progression};
pub use types::{chord_tone_positions, chord_tones, rotated_scale, Chord, Mode};

/// Errors from parsing, formatting, and pitch code conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no tonality prefix in {expression:?}")]
    NoTonality { expression: String },
    #[error("tonality prefixes and chords are not properly paired in {expression:?}")]
    UnpairedTonality { expression: String },
    #[error("invalid chord {token:?}")]
    InvalidChord { token: String },
    #[error("unknown degree {token:?} in chord {chord:?}")]
    UnknownDegree { token: String, chord: String },
    #[error("unknown secondary numeral {token:?} in chord {chord:?}")]
    UnknownSecondary { token: String, chord: String },
    #[error("chord degree {0} out of range")]
    DegreeRange(u8),
    #[error("tonality root {0} out of range")]
    TonalityRange(u8),
    #[error("unrecognized extension {0:?}")]
    ExtensionVocabulary(String),
    #[error("unrecognized added note {0:?}")]
    AddedNoteVocabulary(String),
    #[error("degree {degree} of {mode} has no roman numeral spelling")]
    Unrepresentable { degree: u8, mode: Mode },
    #[error("pitch code index {index} out of range for {kind:?} notes")]
    PitchIndex { kind: NoteKind, index: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
