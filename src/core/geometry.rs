//! Drawable primitive descriptors produced by the series renderers.
//!
//! Geometries are plain data: the drawing layer turns them into pixels, the
//! interaction layer hit-tests them. They are rebuilt from scratch on every
//! render pass and never mutated in place.

use kurbo::BezPath;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{SeriesDatum, XValue};
use crate::style::{
    AreaSeriesStyle, BarSeriesStyle, BarStyleOverride, Color, LineSeriesStyle, PointStyleOverride,
    PointStylePartial,
};

/// Accessor values identifying one sub-series within a spec.
pub type SeriesKey = Vec<String>;

/// Pixel ranges `[start, end]` to exclude from plain rendering because the
/// underlying data was fitted, not observed.
pub type ClippedRanges = Vec<(f64, f64)>;

/// Identity of the series a geometry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeometryId {
    pub spec_id: String,
    pub series_key: SeriesKey,
}

impl GeometryId {
    #[must_use]
    pub fn new(spec_id: impl Into<String>, series_key: SeriesKey) -> Self {
        Self {
            spec_id: spec_id.into(),
            series_key,
        }
    }

    /// Flattened string identity used by host-side element lists and legend
    /// items.
    #[must_use]
    pub fn render_key(&self, prefix: Option<&str>, postfix: Option<&str>) -> String {
        format!(
            "{}spec:{}_{}{}",
            prefix.unwrap_or(""),
            self.spec_id,
            self.series_key.join("::-::"),
            postfix.unwrap_or("")
        )
    }
}

/// Which accessor of the datum a geometry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YAccessor {
    Y0,
    Y1,
}

/// The original domain values behind a geometry, kept for tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryValue {
    pub x: XValue,
    pub y: Option<f64>,
    pub accessor: YAccessor,
}

/// Series-level pixel shift applied by the drawing layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
}

/// Measured value label attached to a bar.
///
/// `text` is absent on bars skipped by alternating-label mode; the box is
/// still produced so layout stays stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayValue {
    pub text: Option<String>,
    pub width: f64,
    pub height: f64,
    pub hide_clipped_value: bool,
    pub is_value_contained_in_element: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    pub x: f64,
    pub y: f64,
    /// 0 marks an invisible but still indexable point (null value, or a
    /// non-positive value on a log scale).
    pub radius: f64,
    pub color: Color,
    pub transform: Transform,
    pub geometry_id: GeometryId,
    pub value: GeometryValue,
    pub style_overrides: Option<PointStylePartial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub display_value: Option<DisplayValue>,
    pub geometry_id: GeometryId,
    pub value: GeometryValue,
    pub series_style: BarSeriesStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub path: BezPath,
    pub points: Vec<PointGeometry>,
    pub color: Color,
    pub transform: Transform,
    pub geometry_id: GeometryId,
    pub series_style: LineSeriesStyle,
    pub clipped_ranges: ClippedRanges,
}

impl LineGeometry {
    /// SVG path data for hosts stroking through an SVG or canvas `Path2D`.
    #[must_use]
    pub fn svg_path(&self) -> String {
        self.path.to_svg()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub area: BezPath,
    /// Boundary stroke paths: the `y1` boundary, plus the `y0` boundary for
    /// dual-accessor series.
    pub lines: SmallVec<[BezPath; 2]>,
    pub points: Vec<PointGeometry>,
    pub color: Color,
    pub transform: Transform,
    pub geometry_id: GeometryId,
    pub series_style: AreaSeriesStyle,
    pub is_stacked: bool,
    pub clipped_ranges: ClippedRanges,
}

impl AreaGeometry {
    /// SVG path data of the fill outline.
    #[must_use]
    pub fn svg_area_path(&self) -> String {
        self.area.to_svg()
    }
}

/// Per-datum style hook shared by the point, line, and area renderers.
pub type PointStyleAccessor<'a> = &'a dyn Fn(&SeriesDatum, &GeometryId) -> Option<PointStyleOverride>;

/// Per-datum style hook of the bar renderer.
pub type BarStyleAccessor<'a> = &'a dyn Fn(&SeriesDatum, &GeometryId) -> Option<BarStyleOverride>;
