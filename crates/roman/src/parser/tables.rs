//! Lookup tables for numeral tokens.
//!
//! Both tables are keyed by the mode of the tonality the token is read
//! against. `secondary_tonality` resolves the target of a `/X` suffix;
//! `relative_change` resolves a degree token, possibly escaping to a
//! neighboring tonality.

use crate::types::Mode;

/// Pitch class of a tonality letter, case-insensitive.
pub(crate) fn letter_class(c: char) -> Option<u8> {
    Some(match c.to_ascii_lowercase() {
        'c' => 0,
        'd' => 2,
        'e' => 4,
        'f' => 5,
        'g' => 7,
        'a' => 9,
        'b' => 11,
        _ => return None,
    })
}

/// Canonical tonality spellings used when formatting, indexed by root.
pub(crate) static MAJOR_KEYS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];
pub(crate) static MINOR_KEYS: [&str; 12] = [
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "bb", "b",
];

/// Canonical degree token for a diatonic degree of a tonality.
///
/// Degree 5 of minor has no token that stays inside its own tonality, so
/// it cannot be formatted.
pub(crate) fn degree_token(mode: Mode, degree: u8) -> Option<&'static str> {
    let token = match (mode, degree) {
        (Mode::Major, 0) => "I",
        (Mode::Major, 1) => "ii",
        (Mode::Major, 2) => "iii",
        (Mode::Major, 3) => "IV",
        (Mode::Major, 4) => "V",
        (Mode::Major, 5) => "vi",
        (Mode::Major, 6) => "viiø",
        (Mode::Minor, 0) => "i",
        (Mode::Minor, 1) => "iiø",
        (Mode::Minor, 2) => "III+",
        (Mode::Minor, 3) => "iv",
        (Mode::Minor, 4) => "V",
        (Mode::Minor, 6) => "viio",
        _ => return None,
    };
    Some(token)
}

/// Root offset and mode of the tonality a secondary numeral points at.
pub(crate) fn secondary_tonality(mode: Mode, token: &str) -> Option<(u8, Mode)> {
    use Mode::{Major, Minor};
    let entry = match mode {
        Major => match token {
            "I" => (0, Major),
            "II" => (2, Major),
            "III" => (4, Major),
            "IV" => (5, Major),
            "V" => (7, Major),
            "VI" => (9, Major),
            "VII" => (11, Major),
            "i" => (0, Minor),
            "ii" => (2, Minor),
            "iii" => (4, Minor),
            "iv" => (5, Minor),
            "v" => (7, Minor),
            "vi" => (9, Minor),
            "vii" => (11, Minor),
            "bII" => (1, Major),
            "bii" => (1, Minor),
            "bIII" => (3, Major),
            "biii" => (3, Minor),
            "bV" => (6, Major),
            "bv" => (6, Minor),
            "bVI" => (8, Major),
            "#VI" => (9, Major),
            "#vi" => (9, Minor),
            "bvi" => (8, Major),
            "bVII" => (10, Major),
            "bvii" => (10, Minor),
            "#IV" => (6, Major),
            "#iv" => (6, Minor),
            "#VII" => (11, Major),
            "#vii" => (11, Minor),
            "#i" => (1, Minor),
            "#I" => (1, Major),
            "#ii" => (3, Minor),
            "#II" => (3, Major),
            "bbii" => (0, Minor),
            "bbII" => (0, Major),
            "bbIII" => (2, Major),
            "bbiii" => (2, Minor),
            "bbvi" => (7, Minor),
            "bbVI" => (7, Major),
            "bbvii" => (9, Minor),
            "bbVII" => (9, Major),
            "#V" => (8, Major),
            "#v" => (8, Minor),
            "biv" => (4, Minor),
            "bbiv" => (3, Minor),
            "bbIV" => (3, Major),
            "bbv" => (5, Minor),
            "bbV" => (5, Major),
            "bbI" => (10, Major),
            "bI" => (11, Major),
            "bi" => (11, Minor),
            "bbi" => (10, Minor),
            "#III" => (5, Major),
            "#iii" => (5, Minor),
            _ => return None,
        },
        Minor => match token {
            "I" => (0, Major),
            "II" => (2, Major),
            "III" => (3, Major),
            "#III" => (4, Major),
            "bIV" => (4, Major),
            "IV" => (5, Major),
            "V" => (7, Major),
            "VI" => (8, Major),
            "VII" => (10, Major),
            "i" => (0, Minor),
            "ii" => (2, Minor),
            "iii" => (3, Minor),
            "iv" => (5, Minor),
            "v" => (7, Minor),
            "vi" => (9, Minor),
            "vii" => (11, Minor),
            "bII" => (1, Major),
            "bii" => (1, Minor),
            "bIII" => (3, Major),
            "biii" => (3, Minor),
            "bV" => (6, Major),
            "bv" => (6, Minor),
            "bVI" => (8, Major),
            "bvi" => (8, Major),
            "#VI" => (9, Major),
            "#vi" => (9, Minor),
            "bVII" => (10, Major),
            "bvii" => (10, Minor),
            "bbvii" => (9, Minor),
            "bbVII" => (9, Major),
            "#VII" => (11, Major),
            "#vii" => (11, Minor),
            "#IV" => (6, Major),
            "#iv" => (6, Minor),
            "#i" => (1, Minor),
            "#I" => (1, Major),
            "#ii" => (3, Minor),
            "#II" => (3, Major),
            "bbii" => (0, Minor),
            "bbII" => (0, Major),
            "bbIII" => (1, Major),
            "bbiii" => (1, Minor),
            "bbvi" => (7, Minor),
            "bbVI" => (6, Major),
            "#V" => (8, Major),
            "#v" => (8, Minor),
            "biv" => (4, Minor),
            "bbiv" => (3, Minor),
            "bbIV" => (3, Major),
            "bbv" => (5, Minor),
            "bbV" => (5, Major),
            "bI" => (11, Major),
            "bi" => (11, Minor),
            "bbi" => (10, Minor),
            "bbI" => (10, Major),
            "#iii" => (4, Minor),
            _ => return None,
        },
    };
    Some(entry)
}

/// Degree, tonality mode, and tonality root offset for a degree token.
///
/// An offset of 0 with the same mode keeps the chord in its own tonality;
/// anything else reinterprets it from a neighboring one, e.g. `v` in C
/// major is the tonic minor chord of G minor.
pub(crate) fn relative_change(mode: Mode, token: &str) -> Option<(u8, Mode, u8)> {
    use Mode::{Major, Minor};
    let entry = match mode {
        Major => match token {
            "I" => (0, Major, 0),
            "II" => (4, Major, 7),
            "III" => (4, Minor, 9),
            "IV" => (3, Major, 0),
            "V" => (4, Major, 0),
            "VI" => (4, Minor, 2),
            "VII" => (4, Minor, 4),
            "i" => (0, Minor, 0),
            "ii" => (1, Major, 0),
            "iii" => (2, Major, 0),
            "iv" => (3, Minor, 0),
            "v" => (0, Minor, 7),
            "vi" => (5, Major, 0),
            "vii" => (5, Major, 2),
            "bII" => (4, Major, 6),
            "bii" => (0, Minor, 1),
            "bIII" => (0, Major, 3),
            "biii" => (0, Minor, 3),
            "bV" => (0, Major, 6),
            "bv" => (0, Minor, 6),
            "bVI" => (0, Major, 8),
            "bvi" => (0, Minor, 8),
            "bVII" => (0, Major, 10),
            "bvii" => (0, Minor, 10),
            "#IV" => (0, Major, 6),
            "#iv" => (0, Minor, 6),
            "#VII" => (0, Major, 11),
            "#vii" => (0, Minor, 11),
            "Ger" => (4, Major, 1),
            "It" => (4, Major, 1),
            "Fr" => (4, Major, 1),
            "N" => (4, Minor, 6),
            "io" => (6, Minor, 1),
            "iø" => (6, Major, 1),
            "iio" => (6, Minor, 3),
            "iiø" => (1, Minor, 0),
            "iiio" => (6, Minor, 5),
            "iiiø" => (6, Major, 5),
            "ivo" => (6, Minor, 6),
            "ivø" => (6, Major, 6),
            "vo" => (6, Minor, 8),
            "vø" => (6, Major, 8),
            "vio" => (6, Minor, 10),
            "viø" => (6, Major, 10),
            "#vio" => (6, Minor, 10),
            "#viø" => (6, Major, 10),
            "viio" => (6, Minor, 0),
            "viiø" => (6, Major, 0),
            "Cad" => (0, Major, 0),
            "#ivo" => (6, Minor, 7),
            "#ivø" => (6, Major, 7),
            "#iiio" => (6, Minor, 5),
            "#viio" => (6, Minor, 0),
            _ => return None,
        },
        Minor => match token {
            "I" => (0, Major, 0),
            "II" => (4, Major, 7),
            "III" => (0, Major, 3),
            "IV" => (3, Major, 0),
            "V" => (4, Minor, 0),
            "VI" => (3, Major, 3),
            "VII" => (4, Major, 3),
            "i" => (0, Minor, 0),
            "ii" => (1, Major, 0),
            "iii" => (2, Major, 0),
            "#iii" => (0, Minor, 4),
            "iv" => (3, Minor, 0),
            "v" => (0, Minor, 7),
            "vi" => (5, Major, 0),
            "vii" => (5, Major, 2),
            "bII" => (4, Major, 6),
            "bii" => (0, Minor, 1),
            "bIII" => (0, Major, 3),
            "biii" => (0, Minor, 3),
            "bV" => (0, Major, 6),
            "bv" => (0, Minor, 6),
            "bVI" => (0, Major, 8),
            "bvi" => (0, Minor, 8),
            "bVII" => (4, Major, 3),
            "bvii" => (0, Minor, 10),
            "#IV" => (0, Major, 6),
            "#iv" => (0, Minor, 6),
            "#VII" => (0, Major, 11),
            "#vii" => (0, Minor, 11),
            "Ger" => (4, Major, 1),
            "It" => (4, Major, 1),
            "Fr" => (4, Major, 1),
            "N" => (4, Minor, 6),
            "io" => (6, Minor, 1),
            "iø" => (6, Major, 1),
            "iio" => (6, Minor, 3),
            "iiø" => (1, Minor, 0),
            "iiio" => (6, Minor, 5),
            "iiiø" => (6, Major, 5),
            "ivo" => (6, Minor, 6),
            "ivø" => (6, Major, 6),
            "vo" => (6, Minor, 8),
            "vø" => (6, Major, 8),
            "vio" => (6, Minor, 10),
            "viø" => (6, Major, 10),
            "#vio" => (6, Minor, 10),
            "#viø" => (6, Major, 10),
            "viio" => (6, Minor, 0),
            "viiø" => (6, Major, 0),
            "Cad" => (0, Minor, 0),
            "#ivo" => (6, Minor, 7),
            "#ivø" => (6, Major, 7),
            "#iiio" => (6, Minor, 5),
            "III+" => (2, Minor, 0),
            "#viio" => (6, Minor, 0),
            _ => return None,
        },
    };
    Some(entry)
}
