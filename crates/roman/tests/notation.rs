//! End-to-end tests for progression parsing and formatting.

use pretty_assertions::assert_eq;
use roman::{format_progression, parse_progression, Chord, Mode, NoteKind, PitchCode};

const PROGRESSION: &str = "
C: #iv6 ii%6 V6/V Ger6 N V[add9]/ii ii64 V7 I
c: i vii%7 iio d#: V VI bVII iii65 i(sus2) Fr65
";

fn tuple(chord: &Chord) -> (u8, u8, Mode, &str, &[String]) {
    (
        chord.degree,
        chord.tonality,
        chord.mode,
        chord.extension.as_str(),
        chord.added_notes.as_slice(),
    )
}

#[test]
fn long_progression_with_modulations() {
    let chords = parse_progression(PROGRESSION).unwrap();
    let chords: Vec<Chord> = chords.into_iter().map(Option::unwrap).collect();
    let added9 = ["[add9]".to_owned()];
    let expected: [(u8, u8, Mode, &str, &[String]); 18] = [
        (0, 6, Mode::Minor, "6", &[]),   // #iv6
        (1, 0, Mode::Minor, "6", &[]),   // ii%6
        (4, 7, Mode::Major, "6", &[]),   // V6/V
        (4, 1, Mode::Major, "6", &[]),   // Ger6
        (4, 6, Mode::Minor, "6", &[]),   // N
        (4, 2, Mode::Minor, "", &added9), // V[add9]/ii
        (1, 0, Mode::Major, "64", &[]),  // ii64
        (4, 0, Mode::Major, "7", &[]),   // V7
        (0, 0, Mode::Major, "", &[]),    // I
        (0, 0, Mode::Minor, "", &[]),    // c: i
        (6, 0, Mode::Major, "7", &[]),   // vii%7
        (6, 3, Mode::Minor, "", &[]),    // iio
        (4, 3, Mode::Minor, "", &[]),    // d#: V
        (3, 6, Mode::Major, "", &[]),    // VI escapes to F# major
        (4, 6, Mode::Major, "", &[]),    // bVII
        (2, 3, Mode::Major, "65", &[]),  // iii65
        (0, 3, Mode::Minor, "(sus2)", &[]), // i(sus2)
        (4, 4, Mode::Major, "65", &[]),  // Fr65
    ];
    assert_eq!(chords.len(), expected.len());
    for (chord, want) in chords.iter().zip(expected.iter()) {
        assert_eq!(tuple(chord), *want);
    }
}

#[test]
fn placeholders_hold_positions() {
    let chords = parse_progression("C: I x x V d: x i").unwrap();
    let pattern: Vec<bool> = chords.iter().map(Option::is_some).collect();
    assert_eq!(pattern, [true, false, false, true, false, true]);
}

#[test]
fn formatting_a_parsed_progression_reparses_identically() {
    let parsed: Vec<Chord> = parse_progression(PROGRESSION)
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    let formatted = format_progression(&parsed).unwrap();
    let reparsed: Vec<Chord> = parse_progression(&formatted)
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(parsed, reparsed, "{formatted}");
}

#[test]
fn chord_wire_shape() {
    let mut chord = Chord::new(4, 7, Mode::Major, "7");
    chord.added_notes.push("[add9]".to_owned());
    let json = serde_json::to_value(&chord).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "degree": 4,
            "tonality": 7,
            "mode": "major",
            "octave": 0,
            "extension": "7",
            "added_notes": ["[add9]"],
        })
    );
    let back: Chord = serde_json::from_value(json).unwrap();
    assert_eq!(back, chord);
}

#[test]
fn pitch_code_wire_shape() {
    let code = PitchCode {
        kind: NoteKind::Chromatic,
        index: 6,
        octave: -1,
    };
    let json = serde_json::to_value(code).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "chromatic", "index": 6, "octave": -1 })
    );
}
