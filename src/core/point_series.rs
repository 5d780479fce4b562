//! Point geometry generation for point, line, and area series.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::geometry::{
    GeometryId, GeometryValue, PointGeometry, PointStyleAccessor, Transform, YAccessor,
};
use crate::core::index::{GeometryIndex, IndexedGeometry};
use crate::core::scales::{ContinuousScale, XScale};
use crate::core::types::SeriesDatum;
use crate::style::{Color, PointStyleOverride, PointStylePartial};

/// Radius of a visible point mark before styling.
const DEFAULT_POINT_RADIUS: f64 = 10.0;

/// Fixed inputs of one [`render_points`] call.
#[derive(Debug, Clone)]
pub struct PointRenderOptions {
    /// Horizontal pixel shift recorded on each point's transform.
    pub shift: f64,
    pub color: Color,
    pub geometry_id: GeometryId,
    /// Whether the series carries both `y0` and `y1` accessors.
    pub has_y0_accessors: bool,
}

/// Output of [`render_points`].
#[derive(Debug, Clone, Default)]
pub struct RenderedPoints {
    /// Points to draw, in dataset order.
    pub points: Vec<PointGeometry>,
    /// Every generated point keyed by domain x, including invisible ones.
    pub index: GeometryIndex,
}

/// Converts a series into point geometries plus a spatial index.
///
/// Datums outside the x domain produce nothing. Datums already traced by a
/// fit-interpolated path (`filled.y1` set) are skipped so they are not drawn
/// twice. Null values, and non-positive values on a log scale, still enter
/// the index as zero-radius points pinned to the start of the y range so
/// hover lookups stay complete.
pub fn render_points(
    dataset: &[SeriesDatum],
    x_scale: &XScale,
    y_scale: &ContinuousScale,
    options: &PointRenderOptions,
    style_accessor: Option<PointStyleAccessor<'_>>,
) -> RenderedPoints {
    let mut rendered = RenderedPoints::default();
    for datum in dataset {
        if !x_scale.is_value_in_domain(&datum.x) || datum.is_fit_substituted() {
            trace!(x = ?datum.x, "skipped datum");
            continue;
        }
        let Some(x) = x_scale.scale(&datum.x) else {
            continue;
        };
        let mut y_datums: SmallVec<[(YAccessor, Option<f64>); 2]> = SmallVec::new();
        if options.has_y0_accessors {
            y_datums.push((YAccessor::Y0, datum.y0));
        }
        y_datums.push((YAccessor::Y1, datum.y1));
        for (accessor, y_datum) in y_datums {
            // A null y1 suppresses the whole datum, its y0 companion included.
            if datum.y1.is_none() {
                continue;
            }
            let hidden = y_datum.is_none()
                || (y_scale.is_log() && y_datum.is_some_and(|value| value <= 0.0));
            let (y, radius) = match y_datum {
                Some(value) if !hidden => (y_scale.scale(value), DEFAULT_POINT_RADIUS),
                _ => (y_scale.range().0, 0.0),
            };
            let original_y = match accessor {
                YAccessor::Y0 => datum.initial_y0,
                YAccessor::Y1 => datum.initial_y1,
            };
            let style_overrides = point_style_overrides(datum, &options.geometry_id, style_accessor);
            let point = PointGeometry {
                x,
                y,
                radius,
                color: options.color,
                transform: Transform {
                    x: options.shift,
                    y: 0.0,
                },
                geometry_id: options.geometry_id.clone(),
                value: GeometryValue {
                    x: datum.x.clone(),
                    y: original_y,
                    accessor,
                },
                style_overrides,
            };
            rendered
                .index
                .upsert(datum.x.clone(), IndexedGeometry::Point(point.clone()));
            if !hidden && y_datum.is_some_and(|value| y_scale.is_value_in_domain(value)) {
                rendered.points.push(point);
            }
        }
    }
    debug!(
        visible = rendered.points.len(),
        indexed = rendered.index.geometry_count(),
        "rendered point geometries"
    );
    rendered
}

/// Resolves the per-datum override hook into a partial point style.
///
/// A bare color is shorthand for overriding the stroke.
#[must_use]
pub fn point_style_overrides(
    datum: &SeriesDatum,
    geometry_id: &GeometryId,
    style_accessor: Option<PointStyleAccessor<'_>>,
) -> Option<PointStylePartial> {
    let accessor = style_accessor?;
    match accessor(datum, geometry_id)? {
        PointStyleOverride::Color(color) => Some(PointStylePartial {
            stroke: Some(color),
            ..PointStylePartial::default()
        }),
        PointStyleOverride::Partial(partial) => Some(partial),
    }
}
