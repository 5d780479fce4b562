//! Series styling: base styles, per-datum override variants, and the
//! deep-merge policy applied when a partial override lands on a shared style.
//!
//! Styles never carry the series color; geometries keep color separately and
//! optional style colors default to it at draw time.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                warn!(channel, value, "rejected color channel");
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Style of the visible points of a point, line, or area series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub visible: bool,
    pub radius: f64,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            visible: true,
            radius: 2.0,
            stroke: None,
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointStylePartial {
    pub visible: Option<bool>,
    pub radius: Option<f64>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl PointStyle {
    /// Explicitly-set partial fields win over the base values.
    #[must_use]
    pub fn merge_partial(&self, partial: &PointStylePartial) -> Self {
        Self {
            visible: partial.visible.unwrap_or(self.visible),
            radius: partial.radius.unwrap_or(self.radius),
            stroke: partial.stroke.or(self.stroke),
            stroke_width: partial.stroke_width.unwrap_or(self.stroke_width),
            opacity: partial.opacity.unwrap_or(self.opacity),
        }
    }
}

/// Stroke style of a line series or an area boundary line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub visible: bool,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            visible: true,
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }
}

/// Fill style of an area series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub visible: bool,
    pub opacity: f64,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSeriesStyle {
    pub line: LineStyle,
    pub point: PointStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaSeriesStyle {
    pub area: AreaStyle,
    pub line: LineStyle,
    pub point: PointStyle,
}

/// Fill of the bar body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectStyle {
    pub fill: Option<Color>,
    pub opacity: f64,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: None,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectStylePartial {
    pub fill: Option<Color>,
    pub opacity: Option<f64>,
}

impl RectStyle {
    #[must_use]
    pub fn merge_partial(&self, partial: &RectStylePartial) -> Self {
        Self {
            fill: partial.fill.or(self.fill),
            opacity: partial.opacity.unwrap_or(self.opacity),
        }
    }
}

/// Border stroke of the bar body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectBorderStyle {
    pub visible: bool,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl Default for RectBorderStyle {
    fn default() -> Self {
        Self {
            visible: false,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectBorderStylePartial {
    pub visible: Option<bool>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

impl RectBorderStyle {
    #[must_use]
    pub fn merge_partial(&self, partial: &RectBorderStylePartial) -> Self {
        Self {
            visible: partial.visible.unwrap_or(self.visible),
            stroke: partial.stroke.or(self.stroke),
            stroke_width: partial.stroke_width.unwrap_or(self.stroke_width),
        }
    }
}

/// Typography of the value label drawn on or above a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayValueStyle {
    pub font_size: f64,
    pub font_family: String,
    pub fill: Color,
    pub padding: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for DisplayValueStyle {
    fn default() -> Self {
        Self {
            font_size: 8.0,
            font_family: "sans-serif".to_owned(),
            fill: Color::rgb(0.47, 0.47, 0.47),
            padding: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayValueStylePartial {
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub fill: Option<Color>,
    pub padding: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

impl DisplayValueStyle {
    #[must_use]
    pub fn merge_partial(&self, partial: &DisplayValueStylePartial) -> Self {
        Self {
            font_size: partial.font_size.unwrap_or(self.font_size),
            font_family: partial
                .font_family
                .clone()
                .unwrap_or_else(|| self.font_family.clone()),
            fill: partial.fill.unwrap_or(self.fill),
            padding: partial.padding.unwrap_or(self.padding),
            offset_x: partial.offset_x.unwrap_or(self.offset_x),
            offset_y: partial.offset_y.unwrap_or(self.offset_y),
        }
    }
}

/// Shared style of every bar in a series, resolved per datum when an
/// override accessor is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarSeriesStyle {
    pub rect: RectStyle,
    pub rect_border: RectBorderStyle,
    pub display_value: DisplayValueStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarSeriesStylePartial {
    pub rect: Option<RectStylePartial>,
    pub rect_border: Option<RectBorderStylePartial>,
    pub display_value: Option<DisplayValueStylePartial>,
}

impl BarSeriesStyle {
    /// Deep merge: each present sub-partial merges into its sub-style.
    #[must_use]
    pub fn merge_partial(&self, partial: &BarSeriesStylePartial) -> Self {
        Self {
            rect: partial
                .rect
                .as_ref()
                .map_or(self.rect, |rect| self.rect.merge_partial(rect)),
            rect_border: partial
                .rect_border
                .as_ref()
                .map_or(self.rect_border, |border| {
                    self.rect_border.merge_partial(border)
                }),
            display_value: partial
                .display_value
                .as_ref()
                .map_or_else(|| self.display_value.clone(), |text| {
                    self.display_value.merge_partial(text)
                }),
        }
    }
}

/// Per-datum override returned by a point style accessor: a bare color is
/// shorthand for a stroke override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointStyleOverride {
    Color(Color),
    Partial(PointStylePartial),
}

/// Per-datum override returned by a bar style accessor: a bare color is
/// shorthand for a rect fill override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarStyleOverride {
    Color(Color),
    Partial(BarSeriesStylePartial),
}

/// Opacity bucket applied to a geometry depending on interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryStateStyle {
    pub opacity: f64,
}

/// The three interaction buckets a geometry can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedGeometryStyle {
    pub default: GeometryStateStyle,
    pub highlighted: GeometryStateStyle,
    pub unhighlighted: GeometryStateStyle,
}

impl Default for SharedGeometryStyle {
    fn default() -> Self {
        Self {
            default: GeometryStateStyle { opacity: 1.0 },
            highlighted: GeometryStateStyle { opacity: 1.0 },
            unhighlighted: GeometryStateStyle { opacity: 0.25 },
        }
    }
}
