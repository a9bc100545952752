//! Tonality path optimization and inversion resolution.

use roman::{chord_tones, Chord, Mode};

use crate::tonality::TonalityCandidate;

/// Tonality fingerprint used by the path cost. Relative keys fold onto the
/// same code, so moving between them is free.
fn tonality_code(candidate: &TonalityCandidate) -> u8 {
    let shift = match candidate.mode {
        Mode::Major => 0,
        Mode::Minor => 3,
    };
    (candidate.tonality + shift) % 12
}

/// Picks one candidate index per bar, minimizing the number of tonality
/// changes across the sequence.
///
/// Ties resolve deterministically: each cell keeps the first predecessor
/// reaching its minimum, and the final bar takes its lowest-index minimum.
pub fn optimal_path(candidates: &[Vec<TonalityCandidate>]) -> Vec<usize> {
    let bars = candidates.len();
    if bars == 0 {
        return Vec::new();
    }
    let codes: Vec<Vec<u8>> = candidates
        .iter()
        .map(|bar| bar.iter().map(tonality_code).collect())
        .collect();
    let width = codes.iter().map(Vec::len).max().unwrap_or(0);

    let mut cost = vec![vec![u32::MAX; width]; bars];
    let mut back = vec![vec![0usize; width]; bars];
    for j in 0..codes[0].len() {
        cost[0][j] = 0;
    }
    for i in 1..bars {
        for j in 0..codes[i].len() {
            for k in 0..codes[i - 1].len() {
                let step =
                    cost[i - 1][k].saturating_add(u32::from(codes[i][j] != codes[i - 1][k]));
                if cost[i][j] > step {
                    cost[i][j] = step;
                    back[i][j] = k;
                }
            }
        }
    }

    let last = bars - 1;
    let mut best = (u32::MAX, 0);
    for (j, &c) in cost[last][..codes[last].len()].iter().enumerate() {
        if c < best.0 {
            best = (c, j);
        }
    }
    let mut path = vec![0usize; bars];
    path[last] = best.1;
    for i in (1..bars).rev() {
        path[i - 1] = back[i][path[i]];
    }
    path
}

/// Figured-bass name for a chord tone index within a tone stack.
fn inversion_figure(bass_index: usize, tone_count: usize) -> Option<&'static str> {
    match (bass_index, tone_count) {
        (0, 3) => Some(""),
        (1, 3) => Some("6"),
        (2, 3) => Some("64"),
        (0, 4) => Some("7"),
        (1, 4) => Some("65"),
        (2, 4) => Some("43"),
        (3, 4) => Some("2"),
        _ => None,
    }
}

/// Turns a reading into a concrete chord, resolving the inversion figure
/// and octave from the bar's bass pitch class.
///
/// A bass outside the chord tones leaves the extension alone and anchors
/// the octave at the root; no bass leaves the chord in root position.
pub fn resolve(candidate: &TonalityCandidate, bass: Option<u8>) -> Chord {
    let mut chord = Chord::new(
        candidate.degree,
        candidate.tonality,
        candidate.mode,
        candidate.extension,
    );
    let Some(bass) = bass else {
        return chord;
    };
    let Some(tones) = chord_tones(
        candidate.degree,
        candidate.tonality,
        candidate.mode,
        candidate.extension,
    ) else {
        return chord;
    };

    let classes: Vec<u8> = tones.iter().map(|&t| t.rem_euclid(12) as u8).collect();
    let anchor = match classes.iter().position(|&pc| pc == bass) {
        Some(index) => {
            if let Some(figure) = inversion_figure(index, tones.len()) {
                // "7" is already implied by a seventh-chord figure.
                let tail = candidate
                    .extension
                    .strip_prefix('7')
                    .unwrap_or(candidate.extension);
                chord.extension = format!("{figure}{tail}");
            }
            tones[index]
        }
        None => tones[0],
    };
    // Centers the chord so its anchor tone lands nearest the reference
    // octave.
    chord.octave = -((anchor + 5).div_euclid(12));
    chord
}
