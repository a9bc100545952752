//! Parser for roman numeral chord progressions.
//!
//! A progression is a whitespace-separated sequence of tonality prefixes
//! (`C:`, `f#:`) and chord tokens (`V65/V`, `iiø7`, `N`, `x`). Every chord
//! is read against the most recent tonality prefix; `x` stands for a
//! position with no chord.

pub(crate) mod tables;

use winnow::combinator::{alt, opt};
use winnow::token::{one_of, take_while};
use winnow::Parser;

use crate::types::{is_valid_added_note, Chord, Mode};
use crate::{Error, Result};

type PResult<T> = winnow::ModalResult<T>;

/// Parses a chord progression into one entry per chord token.
///
/// `x` tokens come back as `None`. Chords appearing before the first
/// tonality prefix, or a trailing prefix with no chords after it, are
/// rejected.
pub fn parse_progression(input: &str) -> Result<Vec<Option<Chord>>> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");

    // Tonality prefixes may be glued to the surrounding text ("C:I V"),
    // so scan for them by position rather than by word.
    let mut keys: Vec<(usize, usize, u8, Mode)> = Vec::new();
    let mut at = 0;
    while at < normalized.len() {
        match key_prefix(&normalized[at..]) {
            Some((len, root, mode)) => {
                keys.push((at, at + len, root, mode));
                at += len;
            }
            None => {
                at += normalized[at..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if keys.is_empty() {
        return Err(Error::NoTonality {
            expression: normalized,
        });
    }
    if !normalized[..keys[0].0].trim().is_empty() {
        return Err(Error::UnpairedTonality {
            expression: normalized,
        });
    }

    let mut chords = Vec::new();
    for (k, &(_, end, root, mode)) in keys.iter().enumerate() {
        let section = match keys.get(k + 1) {
            Some(&(next_start, ..)) => &normalized[end..next_start],
            None => &normalized[end..],
        };
        if k == keys.len() - 1 && section.trim().is_empty() {
            return Err(Error::UnpairedTonality {
                expression: normalized,
            });
        }
        for token in section.split_whitespace() {
            if token == "x" {
                chords.push(None);
            } else {
                chords.push(Some(parse_chord(token, root, mode)?));
            }
        }
    }
    Ok(chords)
}

/// Parses a single chord token against a tonality.
pub fn parse_chord(token: &str, key_root: u8, key_mode: Mode) -> Result<Chord> {
    let mut input = token;
    let raw = parse_raw_chord(&mut input).map_err(|_| Error::InvalidChord {
        token: token.to_owned(),
    })?;
    if !input.is_empty() {
        return Err(Error::InvalidChord {
            token: token.to_owned(),
        });
    }
    if let Some(added) = &raw.added {
        if !is_valid_added_note(added) {
            return Err(Error::AddedNoteVocabulary(added.clone()));
        }
    }

    // A secondary numeral re-anchors the degree in another tonality.
    let (real_root, real_mode) = match &raw.secondary {
        Some(sec) => {
            let (offset, mode) =
                tables::secondary_tonality(key_mode, sec).ok_or_else(|| Error::UnknownSecondary {
                    token: sec.clone(),
                    chord: token.to_owned(),
                })?;
            ((key_root + offset) % 12, mode)
        }
        None => (key_root, key_mode),
    };

    // The quality mark is part of the degree name; % reads as ø.
    let mut degree_name = raw.degree.clone();
    if let Some(q) = raw.quality {
        degree_name.push(if q == '%' { 'ø' } else { q });
    }
    let (degree, mode, offset) =
        tables::relative_change(real_mode, &degree_name).ok_or_else(|| Error::UnknownDegree {
            token: degree_name.clone(),
            chord: token.to_owned(),
        })?;
    let tonality = (real_root + offset) % 12;

    let mut extension = String::new();
    if let Some(figure) = raw.figure {
        extension.push_str(figure);
    }
    if let Some(sus) = raw.suspension {
        extension.push_str(sus);
    }
    // Bare N and Cad imply a figure.
    if extension.is_empty() && raw.added.is_none() {
        match raw.degree.as_str() {
            "N" => extension.push('6'),
            "Cad" => extension.push_str("64"),
            _ => {}
        }
    }

    let mut chord = Chord::new(degree, tonality, mode, extension);
    if let Some(added) = raw.added {
        chord.added_notes.push(added);
    }
    Ok(chord)
}

/// A tonality prefix at the start of `text`: letter, optional accidental,
/// colon. Returns its byte length, root pitch class, and mode.
fn key_prefix(text: &str) -> Option<(usize, u8, Mode)> {
    let letter = text.chars().next()?;
    let class = tables::letter_class(letter)? as i32;
    let mode = if letter.is_ascii_uppercase() {
        Mode::Major
    } else {
        Mode::Minor
    };
    let rest = &text[1..];
    let (shift, len) = if rest.starts_with("#:") {
        (1, 3)
    } else if rest.starts_with("b:") {
        (-1, 3)
    } else if rest.starts_with(':') {
        (0, 2)
    } else {
        return None;
    };
    Some((len, (class + shift).rem_euclid(12) as u8, mode))
}

struct RawChord<'a> {
    degree: String,
    quality: Option<char>,
    figure: Option<&'a str>,
    suspension: Option<&'a str>,
    added: Option<String>,
    secondary: Option<String>,
}

fn parse_raw_chord<'a>(input: &mut &'a str) -> PResult<RawChord<'a>> {
    let (degree, quality) = parse_degree(input)?;
    let figure = opt(parse_figure).parse_next(input)?;
    let suspension = opt(parse_suspension).parse_next(input)?;
    let added = opt(parse_added_note).parse_next(input)?;
    let secondary = opt(parse_secondary).parse_next(input)?;
    Ok(RawChord {
        degree,
        quality,
        figure,
        suspension,
        added,
        secondary,
    })
}

fn parse_degree(input: &mut &str) -> PResult<(String, Option<char>)> {
    if let Some(named) = opt(alt(("Ger", "Cad", "Fr", "It", "N"))).parse_next(input)? {
        return Ok((named.to_owned(), None));
    }
    let numeral = parse_numeral(input)?;
    let quality = opt(one_of(['o', '%', 'ø', '+'])).parse_next(input)?;
    Ok((numeral, quality))
}

fn parse_numeral(input: &mut &str) -> PResult<String> {
    let accidentals: &str = take_while(0.., |c| c == '#' || c == 'b').parse_next(input)?;
    let numeral: &str =
        take_while(1.., |c: char| matches!(c, 'i' | 'v' | 'I' | 'V')).parse_next(input)?;
    Ok(format!("{accidentals}{numeral}"))
}

fn parse_figure<'a>(input: &mut &'a str) -> PResult<&'a str> {
    alt(("65", "64", "43", "6", "7", "2")).parse_next(input)
}

fn parse_suspension<'a>(input: &mut &'a str) -> PResult<&'a str> {
    alt(("(sus2)", "(sus4)")).parse_next(input)
}

fn parse_added_note(input: &mut &str) -> PResult<String> {
    let _ = '['.parse_next(input)?;
    let name: &str = take_while(1.., |c: char| c != '[' && c != ']').parse_next(input)?;
    let _ = ']'.parse_next(input)?;
    Ok(format!("[{name}]"))
}

fn parse_secondary(input: &mut &str) -> PResult<String> {
    let _ = '/'.parse_next(input)?;
    parse_numeral(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chord(token: &str, key: &str) -> Chord {
        let (_, root, mode) = key_prefix(key).unwrap();
        parse_chord(token, root, mode).unwrap()
    }

    fn tuple(c: &Chord) -> (u8, u8, Mode, String) {
        (c.degree, c.tonality, c.mode, c.extension.clone())
    }

    #[test]
    fn key_prefix_forms() {
        assert_eq!(key_prefix("C:"), Some((2, 0, Mode::Major)));
        assert_eq!(key_prefix("f#:"), Some((3, 6, Mode::Minor)));
        assert_eq!(key_prefix("bb:"), Some((3, 10, Mode::Minor)));
        assert_eq!(key_prefix("Cb:"), Some((3, 11, Mode::Major)));
        assert_eq!(key_prefix("H:"), None);
        assert_eq!(key_prefix("C"), None);
    }

    #[test]
    fn plain_degrees() {
        assert_eq!(tuple(&chord("I", "C:")), (0, 0, Mode::Major, String::new()));
        assert_eq!(tuple(&chord("I", "Db:")), (0, 1, Mode::Major, String::new()));
        assert_eq!(tuple(&chord("V7", "C:")), (4, 0, Mode::Major, "7".into()));
        assert_eq!(
            tuple(&chord("#iv6", "C:")),
            (0, 6, Mode::Minor, "6".into())
        );
    }

    #[test]
    fn quality_marks_fold_into_the_degree() {
        assert_eq!(
            tuple(&chord("ii%65", "C:")),
            (1, 0, Mode::Minor, "65".into())
        );
        assert_eq!(
            tuple(&chord("iiø65", "C:")),
            (1, 0, Mode::Minor, "65".into())
        );
        assert_eq!(
            tuple(&chord("viio", "c:")),
            (6, 0, Mode::Minor, String::new())
        );
        assert_eq!(
            tuple(&chord("III+7", "c:")),
            (2, 0, Mode::Minor, "7".into())
        );
    }

    #[test]
    fn secondary_numerals_reanchor_the_degree() {
        assert_eq!(tuple(&chord("V7/V", "f#:")), (4, 1, Mode::Major, "7".into()));
        let c = chord("V6(sus2)[add9]/ii", "C:");
        assert_eq!(tuple(&c), (4, 2, Mode::Minor, "6(sus2)".into()));
        assert_eq!(c.added_notes, vec!["[add9]".to_owned()]);
    }

    #[test]
    fn bare_neapolitan_and_cadential_imply_figures() {
        assert_eq!(tuple(&chord("N", "c:")), (4, 6, Mode::Minor, "6".into()));
        assert_eq!(tuple(&chord("Cad", "D:")), (0, 2, Mode::Major, "64".into()));
        // An explicit figure or added note suppresses the implied one.
        assert_eq!(tuple(&chord("N6", "c:")), (4, 6, Mode::Minor, "6".into()));
        let c = chord("N[add9]", "c:");
        assert_eq!(tuple(&c), (4, 6, Mode::Minor, String::new()));
        assert_eq!(c.added_notes, vec!["[add9]".to_owned()]);
    }

    #[test]
    fn progression_tracks_tonality_prefixes() {
        let chords = parse_progression("C: I V6 d: i x V").unwrap();
        assert_eq!(chords.len(), 5);
        assert_eq!(
            tuple(chords[0].as_ref().unwrap()),
            (0, 0, Mode::Major, String::new())
        );
        assert_eq!(
            tuple(chords[1].as_ref().unwrap()),
            (4, 0, Mode::Major, "6".into())
        );
        assert_eq!(
            tuple(chords[2].as_ref().unwrap()),
            (0, 2, Mode::Minor, String::new())
        );
        assert_eq!(chords[3], None);
        assert_eq!(
            tuple(chords[4].as_ref().unwrap()),
            (4, 2, Mode::Minor, String::new())
        );
    }

    #[test]
    fn prefix_may_be_glued_to_the_first_chord() {
        let chords = parse_progression("C:I V").unwrap();
        assert_eq!(chords.len(), 2);
        let spaced = parse_progression("C: I V").unwrap();
        assert_eq!(chords, spaced);
    }

    #[test]
    fn whitespace_is_normalized() {
        let chords = parse_progression("  C:   I\n\tV  ").unwrap();
        assert_eq!(chords.len(), 2);
    }

    #[test]
    fn progression_errors() {
        assert!(matches!(
            parse_progression("I V vi IV"),
            Err(Error::NoTonality { .. })
        ));
        assert!(matches!(
            parse_progression("I C: V"),
            Err(Error::UnpairedTonality { .. })
        ));
        assert!(matches!(
            parse_progression("x C: I"),
            Err(Error::UnpairedTonality { .. })
        ));
        assert!(matches!(
            parse_progression("C: I G:"),
            Err(Error::UnpairedTonality { .. })
        ));
        // A prefix immediately overridden carries no chords and is fine.
        assert_eq!(parse_progression("C: G: I").unwrap().len(), 1);
    }

    #[test]
    fn chord_errors() {
        assert!(matches!(
            parse_chord("Q", 0, Mode::Major),
            Err(Error::InvalidChord { .. })
        ));
        assert!(matches!(
            parse_chord("V66", 0, Mode::Major),
            Err(Error::InvalidChord { .. })
        ));
        assert!(matches!(
            parse_chord("V[add9][add11]", 0, Mode::Major),
            Err(Error::InvalidChord { .. })
        ));
        assert!(matches!(
            parse_chord("III+", 0, Mode::Major),
            Err(Error::UnknownDegree { .. })
        ));
        assert!(matches!(
            parse_chord("V/Ger", 0, Mode::Major),
            Err(Error::InvalidChord { .. })
        ));
        assert!(matches!(
            parse_chord("V7/bIV", 0, Mode::Major),
            Err(Error::UnknownSecondary { .. })
        ));
        assert!(matches!(
            parse_chord("V[add10]", 0, Mode::Major),
            Err(Error::AddedNoteVocabulary(_))
        ));
    }

    #[test]
    fn x_is_only_a_placeholder_in_progressions() {
        assert!(parse_chord("x6", 0, Mode::Major).is_err());
        let chords = parse_progression("C: x x I").unwrap();
        assert_eq!(chords[0], None);
        assert_eq!(chords[1], None);
        assert!(chords[2].is_some());
    }
}
