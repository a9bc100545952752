//! Per-bar pitch class profiles.

use crate::types::{Bar, Track};

/// Normalized onset histogram over the twelve pitch classes, plus the
/// pitch class of the lowest sounding note.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChroma {
    pub vector: [f64; 12],
    pub bass: Option<u8>,
}

/// Builds one chroma per bar from note onsets.
///
/// A note counts toward the bar containing its onset tick; sustains into
/// later bars are ignored, as are percussion tracks. The histogram is
/// normalized to sum to one. A bar with no onsets keeps an all-zero
/// vector and no bass.
pub fn bar_chromas(tracks: &[Track], bars: &[Bar]) -> Vec<BarChroma> {
    bars.iter()
        .map(|bar| {
            let mut counts = [0u32; 12];
            let mut lowest: Option<u8> = None;
            for track in tracks.iter().filter(|t| !t.percussion) {
                for note in track.notes.iter().filter(|n| bar.contains(n.onset_tick)) {
                    counts[usize::from(note.pitch % 12)] += 1;
                    lowest = Some(lowest.map_or(note.pitch, |p| p.min(note.pitch)));
                }
            }
            let total: u32 = counts.iter().sum();
            let mut vector = [0.0; 12];
            if total > 0 {
                for (slot, count) in vector.iter_mut().zip(counts) {
                    *slot = f64::from(count) / f64::from(total);
                }
            }
            BarChroma {
                vector,
                bass: lowest.map(|p| p % 12),
            }
        })
        .collect()
}
