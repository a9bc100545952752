//! Bar segmentation from time signature events.

use crate::types::{Bar, TimeSignature};
use crate::{Error, Result};

/// Splits the timeline `[0, end_tick)` into bars.
///
/// Each bar takes the latest time signature at or before its start, with
/// half a quarter note of slack for events written slightly after the
/// barline. Bars with no event in reach default to 4/4. The last bar may
/// extend past `end_tick`.
pub fn segment_bars(
    events: &[TimeSignature],
    ticks_per_quarter: u32,
    end_tick: u32,
) -> Result<Vec<Bar>> {
    let mut events = events.to_vec();
    events.sort_by_key(|ts| ts.tick);
    let slack = u64::from(ticks_per_quarter / 2);

    let mut bars = Vec::new();
    let mut start = 0u32;
    while start < end_tick {
        let active = events
            .iter()
            .rev()
            .find(|ts| u64::from(ts.tick) <= u64::from(start) + slack);
        let (numerator, denominator) = active.map_or((4, 4), |ts| (ts.numerator, ts.denominator));
        if denominator == 0 {
            return Err(Error::ZeroDenominator { tick: start });
        }
        // 4 quarters per whole note; exact division, truncated to ticks.
        let length = 4 * u64::from(numerator) * u64::from(ticks_per_quarter) / u64::from(denominator);
        if length == 0 {
            return Err(Error::ZeroLengthBar { tick: start });
        }
        let end = u64::from(start) + length;
        if end > u64::from(u32::MAX) {
            return Err(Error::TickRange { tick: start });
        }
        bars.push(Bar {
            start_tick: start,
            end_tick: end as u32,
            numerator,
            denominator,
        });
        start = end as u32;
    }
    Ok(bars)
}
