//! Pixel ranges where fitted data must not render as continuous geometry.

use tracing::trace;

use crate::core::geometry::ClippedRanges;
use crate::core::scales::XScale;
use crate::core::types::SeriesDatum;

/// Collects the pixel ranges spanning runs of null `y1` values.
///
/// A range opens at the last non-null x position before a gap (or 0 when the
/// series starts with a gap) and closes at the first non-null position after
/// it. A series ending in a gap emits a trailing range up to that final null
/// position, detected by it landing exactly two thirds of a band before the
/// range end. An all-null series emits nothing.
#[must_use]
pub fn clipped_ranges(
    dataset: &[SeriesDatum],
    x_scale: &XScale,
    x_scale_offset: f64,
) -> ClippedRanges {
    let mut ranges = ClippedRanges::new();
    let mut first_non_null_x: Option<f64> = None;
    let mut has_null = false;
    for datum in dataset {
        let Some(scaled) = x_scale.scale(&datum.x) else {
            continue;
        };
        let x_scaled = scaled - x_scale_offset + x_scale.bandwidth() / 2.0;
        if datum.y1.is_some() {
            if has_null {
                let start = first_non_null_x.unwrap_or(0.0);
                trace!(start, end = x_scaled, "closed clipped range");
                ranges.push((start, x_scaled));
                has_null = false;
            }
            first_non_null_x = Some(x_scaled);
        } else {
            let end_x = x_scale.range().1 - x_scale.bandwidth() * (2.0 / 3.0);
            if x_scaled == end_x {
                if let Some(start) = first_non_null_x {
                    trace!(start, end = x_scaled, "trailing clipped range");
                    ranges.push((start, x_scaled));
                }
            }
            has_null = true;
        }
    }
    ranges
}
