//! Line geometry generation.

use tracing::debug;

use crate::core::clip::clipped_ranges;
use crate::core::curves::CurveType;
use crate::core::geometry::{
    ClippedRanges, GeometryId, LineGeometry, PointStyleAccessor, Transform,
};
use crate::core::index::GeometryIndex;
use crate::core::path::{line_path, LinePoint};
use crate::core::point_series::{render_points, PointRenderOptions};
use crate::core::scales::{ContinuousScale, XScale};
use crate::core::types::SeriesDatum;
use crate::style::{Color, LineSeriesStyle};

/// Fixed inputs of one [`render_line`] call.
#[derive(Debug, Clone)]
pub struct LineRenderOptions {
    /// Horizontal pixel shift recorded on the geometry's transform.
    pub shift: f64,
    /// Cluster offset subtracted from every scaled x position.
    pub x_scale_offset: f64,
    pub color: Color,
    pub curve: CurveType,
    pub geometry_id: GeometryId,
    /// Whether the series carries both `y0` and `y1` accessors.
    pub has_y0_accessors: bool,
    /// Whether missing values were interpolated upstream.
    pub has_fit: bool,
}

/// Output of [`render_line`].
#[derive(Debug, Clone)]
pub struct RenderedLine {
    pub line: LineGeometry,
    /// Point geometries keyed by domain x, for hover lookups along the line.
    pub index: GeometryIndex,
}

/// Converts a series into a line geometry plus a spatial index of its points.
///
/// Undefined datums break the path into separate subpaths. When the series is
/// fitted and single-accessor, the gap ranges bridged by interpolation are
/// reported as `clipped_ranges` so the drawing layer can restyle them.
pub fn render_line(
    dataset: &[SeriesDatum],
    x_scale: &XScale,
    y_scale: &ContinuousScale,
    options: &LineRenderOptions,
    style: &LineSeriesStyle,
    style_accessor: Option<PointStyleAccessor<'_>>,
) -> RenderedLine {
    let line_points: Vec<LinePoint> = dataset
        .iter()
        .map(|datum| {
            let x = x_scale.scale(&datum.x).unwrap_or(f64::NAN) - options.x_scale_offset;
            let y = match datum.effective_y1() {
                Some(value) => y_scale.scale(value),
                None => baseline_fallback(y_scale),
            };
            LinePoint {
                x,
                y,
                defined: is_datum_defined(datum, x_scale, y_scale),
            }
        })
        .collect();
    let path = line_path(&line_points, options.curve);

    let rendered_points = render_points(
        dataset,
        x_scale,
        y_scale,
        &PointRenderOptions {
            shift: options.shift - options.x_scale_offset,
            color: options.color,
            geometry_id: options.geometry_id.clone(),
            has_y0_accessors: options.has_y0_accessors,
        },
        style_accessor,
    );

    let clipped = if options.has_fit && !options.has_y0_accessors {
        clipped_ranges(dataset, x_scale, options.x_scale_offset)
    } else {
        ClippedRanges::new()
    };
    debug!(
        points = rendered_points.points.len(),
        clipped = clipped.len(),
        "rendered line geometry"
    );

    RenderedLine {
        line: LineGeometry {
            path,
            points: rendered_points.points,
            color: options.color,
            transform: Transform {
                x: options.shift,
                y: 0.0,
            },
            geometry_id: options.geometry_id.clone(),
            series_style: style.clone(),
            clipped_ranges: clipped,
        },
        index: rendered_points.index,
    }
}

/// Whether a datum contributes to the continuous path.
pub(crate) fn is_datum_defined(
    datum: &SeriesDatum,
    x_scale: &XScale,
    y_scale: &ContinuousScale,
) -> bool {
    match datum.effective_y1() {
        None => false,
        Some(value) => {
            !(y_scale.is_log() && value <= 0.0) && x_scale.is_value_in_domain(&datum.x)
        }
    }
}

/// Pixel fallback for a null value, unreachable through the defined
/// predicate but kept total.
pub(crate) fn baseline_fallback(y_scale: &ContinuousScale) -> f64 {
    if y_scale.is_inverted() {
        y_scale.range().1
    } else {
        y_scale.range().0
    }
}
