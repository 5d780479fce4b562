//! Area geometry generation, including stacked areas and banded areas.

use kurbo::BezPath;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::geometry::{AreaGeometry, PointStyleAccessor};
use crate::core::index::GeometryIndex;
use crate::core::line_series::{baseline_fallback, is_datum_defined, render_line, LineRenderOptions};
use crate::core::path::{area_path, line_path, AreaPoint, LinePoint};
use crate::core::scales::{ContinuousScale, XScale};
use crate::core::types::SeriesDatum;
use crate::style::{AreaSeriesStyle, LineSeriesStyle};

/// Fixed inputs of one [`render_area`] call.
///
/// Same shape as the line renderer's options plus the stacking flag, since
/// the area's top boundary is exactly the line the line renderer would draw.
#[derive(Debug, Clone)]
pub struct AreaRenderOptions {
    pub line: LineRenderOptions,
    /// Whether this area sits on top of other series in a stack. Stacked
    /// areas never report clipped ranges, as their baseline is another
    /// series rather than the chart baseline.
    pub is_stacked: bool,
}

/// Output of [`render_area`].
#[derive(Debug, Clone)]
pub struct RenderedArea {
    pub area: AreaGeometry,
    /// Point geometries keyed by domain x, for hover lookups on the area.
    pub index: GeometryIndex,
}

/// Converts a series into an area geometry plus a spatial index of its
/// points.
///
/// The fill is bounded above by the effective `y1` values and below by `y0`,
/// clamped to the start of the y range when `y0` is null or non-positive on
/// a log scale. Dual-accessor series get a second boundary stroke along
/// their `y0` edge, split at the same `y1` gaps as the fill.
pub fn render_area(
    dataset: &[SeriesDatum],
    x_scale: &XScale,
    y_scale: &ContinuousScale,
    options: &AreaRenderOptions,
    style: &AreaSeriesStyle,
    style_accessor: Option<PointStyleAccessor<'_>>,
) -> RenderedArea {
    let area_points: Vec<AreaPoint> = dataset
        .iter()
        .map(|datum| {
            let x = x_scale.scale(&datum.x).unwrap_or(f64::NAN) - options.line.x_scale_offset;
            let y1 = match datum.effective_y1() {
                Some(value) => y_scale.scale(value),
                None => baseline_fallback(y_scale),
            };
            let y0 = match datum.y0 {
                Some(value) if !(y_scale.is_log() && value <= 0.0) => y_scale.scale(value),
                _ => y_scale.range().0,
            };
            AreaPoint {
                x,
                y1,
                y0,
                defined: is_datum_defined(datum, x_scale, y_scale),
            }
        })
        .collect();
    let area = area_path(&area_points, options.line.curve);

    let line_style = LineSeriesStyle {
        line: style.line.clone(),
        point: style.point.clone(),
    };
    let rendered_line = render_line(
        dataset,
        x_scale,
        y_scale,
        &options.line,
        &line_style,
        style_accessor,
    );

    let mut lines: SmallVec<[BezPath; 2]> = SmallVec::new();
    if !rendered_line.line.path.elements().is_empty() {
        lines.push(rendered_line.line.path);
    }
    if options.line.has_y0_accessors {
        let y0_points: Vec<LinePoint> = dataset
            .iter()
            .map(|datum| {
                let x =
                    x_scale.scale(&datum.x).unwrap_or(f64::NAN) - options.line.x_scale_offset;
                let y = match datum.y0 {
                    Some(value) if !(y_scale.is_log() && value <= 0.0) => y_scale.scale(value),
                    _ => y_scale.range().0,
                };
                LinePoint {
                    x,
                    y,
                    defined: is_datum_defined(datum, x_scale, y_scale),
                }
            })
            .collect();
        let y0_line = line_path(&y0_points, options.line.curve);
        if !y0_line.elements().is_empty() {
            lines.push(y0_line);
        }
    }

    let clipped_ranges = if options.is_stacked {
        Vec::new()
    } else {
        rendered_line.line.clipped_ranges
    };
    debug!(
        boundaries = lines.len(),
        points = rendered_line.line.points.len(),
        is_stacked = options.is_stacked,
        "rendered area geometry"
    );

    RenderedArea {
        area: AreaGeometry {
            area,
            lines,
            points: rendered_line.line.points,
            color: options.line.color,
            transform: rendered_line.line.transform,
            geometry_id: options.line.geometry_id.clone(),
            series_style: style.clone(),
            is_stacked: options.is_stacked,
            clipped_ranges,
        },
        index: rendered_line.index,
    }
}
