//! Harmonic analysis of symbolic music.
//!
//! Takes note events grouped in tracks, splits the timeline into bars,
//! profiles each bar's pitch content, and infers one roman numeral chord
//! per bar under a tonality path with as few key changes as possible.
//!
//! ```
//! use harmony::{infer_progression, Note, Track};
//!
//! let mut track = Track::new(false);
//! for pitch in [60, 64, 67] {
//!     track.notes.push(Note {
//!         onset_tick: 0,
//!         duration_tick: 480,
//!         pitch,
//!         velocity: 96,
//!     });
//! }
//! let chords = infer_progression(&[track], &[], 480, 1920)?;
//! assert_eq!(chords.len(), 1);
//! assert_eq!(chords[0].chord.degree, 0);
//! # Ok::<(), harmony::Error>(())
//! ```

pub mod chroma;
pub mod optimize;
pub mod segment;
pub mod templates;
pub mod tonality;
pub mod types;

pub use chroma::{bar_chromas, BarChroma};
pub use optimize::{optimal_path, resolve};
pub use segment::segment_bars;
pub use templates::{correlate, ChordTemplate, TemplateMatch, TEMPLATES};
pub use tonality::{TonalityCandidate, TonalityExpander};
pub use types::{Bar, Note, ResolvedChord, TimeSignature, Track};

use tracing::{debug, info};

/// Runs the whole pipeline: segment bars, profile chromas, correlate
/// templates, expand tonalities, optimize the path, resolve inversions.
pub fn infer_progression(
    tracks: &[Track],
    time_signatures: &[TimeSignature],
    ticks_per_quarter: u32,
    end_tick: u32,
) -> Result<Vec<ResolvedChord>> {
    let bars = segment_bars(time_signatures, ticks_per_quarter, end_tick)?;

    let mut chromas = bar_chromas(tracks, &bars);
    let expander = TonalityExpander::new();
    let candidates: Vec<Vec<TonalityCandidate>> = chromas
        .iter_mut()
        .map(|chroma| {
            let matches = correlate(chroma);
            expander.expand(&matches, chroma)
        })
        .collect();
    debug!(
        bars = bars.len(),
        candidates = candidates.iter().map(Vec::len).sum::<usize>(),
        "expanded candidate readings"
    );

    let path = optimal_path(&candidates);
    let resolved: Vec<ResolvedChord> = path
        .iter()
        .enumerate()
        .map(|(bar, &pick)| ResolvedChord {
            chord: resolve(&candidates[bar][pick], chromas[bar].bass),
            numerator: bars[bar].numerator,
            denominator: bars[bar].denominator,
        })
        .collect();
    info!(chords = resolved.len(), "inferred chord progression");
    Ok(resolved)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("time signature at tick {tick} has a zero denominator")]
    ZeroDenominator { tick: u32 },
    #[error("time signature at tick {tick} yields a zero-length bar")]
    ZeroLengthBar { tick: u32 },
    #[error("bar starting at tick {tick} overflows the tick range")]
    TickRange { tick: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
