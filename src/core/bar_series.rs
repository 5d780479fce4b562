//! Bar geometry generation, including value labels and height flooring.

use std::fmt;

use tracing::{debug, trace};

use crate::core::geometry::{
    BarGeometry, BarStyleAccessor, DisplayValue, GeometryId, GeometryValue, YAccessor,
};
use crate::core::index::{GeometryIndex, IndexedGeometry};
use crate::core::scales::{ContinuousScale, XScale};
use crate::core::types::SeriesDatum;
use crate::style::{BarSeriesStyle, BarStyleOverride, Color};
use crate::text::TextBoxCalculator;

/// Formats a raw y value into label text.
pub type ValueFormatter<'a> = &'a dyn Fn(f64) -> String;

/// Fixed inputs of one [`render_bars`] call.
#[derive(Debug, Clone)]
pub struct BarRenderOptions {
    /// Position of this series within a cluster of bars sharing an x slot.
    pub order_index: usize,
    pub color: Color,
    pub geometry_id: GeometryId,
    /// Bars shorter than this get expanded to it, keeping their far edge
    /// anchored. Zero and missing both disable the floor.
    pub min_bar_height: Option<f64>,
}

/// Value-label settings for one [`render_bars`] call.
#[derive(Clone, Default)]
pub struct DisplayValueOptions<'a> {
    pub show_value_label: bool,
    /// Label only every second bar to reduce clutter on dense sets.
    pub is_alternating_value_label: bool,
    /// Clamp the label box to the bar's own width instead of the text width.
    pub is_value_contained_in_element: bool,
    pub hide_clipped_value: bool,
    pub value_formatter: Option<ValueFormatter<'a>>,
}

impl fmt::Debug for DisplayValueOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayValueOptions")
            .field("show_value_label", &self.show_value_label)
            .field("is_alternating_value_label", &self.is_alternating_value_label)
            .field(
                "is_value_contained_in_element",
                &self.is_value_contained_in_element,
            )
            .field("hide_clipped_value", &self.hide_clipped_value)
            .field("value_formatter", &self.value_formatter.map(|_| "<fn>"))
            .finish()
    }
}

/// Output of [`render_bars`].
#[derive(Debug, Clone, Default)]
pub struct RenderedBars {
    /// Bars to draw, in dataset order.
    pub bars: Vec<BarGeometry>,
    /// Every generated bar keyed by domain x.
    pub index: GeometryIndex,
}

/// Converts a series into bar geometries plus a spatial index.
///
/// A datum is skipped when its `y1` or `initial_y1` is null, when it was
/// fit-substituted, or when its `x` falls outside the x domain. The label
/// measurement session lives for exactly one call.
pub fn render_bars(
    dataset: &[SeriesDatum],
    x_scale: &XScale,
    y_scale: &ContinuousScale,
    options: &BarRenderOptions,
    shared_style: &BarSeriesStyle,
    display_value_options: Option<&DisplayValueOptions<'_>>,
    style_accessor: Option<BarStyleAccessor<'_>>,
) -> RenderedBars {
    let mut rendered = RenderedBars::default();
    let mut calculator = TextBoxCalculator::new();
    // TODO: wire padding through from the display value style.
    let padding = 1.0;
    let font_size = shared_style.display_value.font_size;
    let font_family = shared_style.display_value.font_family.as_str();
    let abs_min_height = options.min_bar_height.map(f64::abs);

    for datum in dataset {
        let (Some(y1), Some(initial_y1)) = (datum.y1, datum.initial_y1) else {
            continue;
        };
        if datum.is_fit_substituted() || !x_scale.is_value_in_domain(&datum.x) {
            trace!(x = ?datum.x, "skipped datum");
            continue;
        }
        let Some(scaled_x) = x_scale.scale(&datum.x) else {
            continue;
        };

        let (mut y, y0_scaled) = if y_scale.is_log() {
            let y = if y1 == 0.0 {
                y_scale.range().0
            } else {
                y_scale.scale(y1)
            };
            let zero_baseline = if y_scale.is_inverted() {
                y_scale.range().1
            } else {
                y_scale.range().0
            };
            let y0_scaled = match datum.y0 {
                Some(y0) if y0 != 0.0 => y_scale.scale(y0),
                _ => zero_baseline,
            };
            (y, y0_scaled)
        } else {
            (y_scale.scale(y1), y_scale.scale(datum.y0.unwrap_or(0.0)))
        };
        let mut height = y0_scaled - y;

        if let Some(min_height) = abs_min_height {
            if height != 0.0 && height.abs() < min_height {
                let delta = min_height - height.abs();
                if height < 0.0 {
                    height = -min_height;
                    y += delta;
                } else {
                    height = min_height;
                    y -= delta;
                }
            }
        }

        let x = scaled_x + x_scale.bandwidth() * options.order_index as f64;
        let width = x_scale.bandwidth();

        let display_value = display_value_options.and_then(|settings| {
            if !settings.show_value_label {
                return None;
            }
            let formatted = settings.value_formatter.map(|format| format(initial_y1));
            let text = if settings.is_alternating_value_label && rendered.bars.len() % 2 != 0 {
                None
            } else {
                formatted
            };
            let dims =
                calculator.compute(text.as_deref().unwrap_or(""), padding, font_size, font_family);
            Some(DisplayValue {
                text,
                width: if settings.is_value_contained_in_element {
                    width
                } else {
                    dims.width
                },
                height: dims.height,
                hide_clipped_value: settings.hide_clipped_value,
                is_value_contained_in_element: settings.is_value_contained_in_element,
            })
        });

        let series_style =
            bar_style_overrides(datum, &options.geometry_id, shared_style, style_accessor);
        let bar = BarGeometry {
            x,
            y,
            width,
            height,
            color: options.color,
            display_value,
            geometry_id: options.geometry_id.clone(),
            value: GeometryValue {
                x: datum.x.clone(),
                y: Some(initial_y1),
                accessor: YAccessor::Y1,
            },
            series_style,
        };
        rendered
            .index
            .upsert(datum.x.clone(), IndexedGeometry::Bar(bar.clone()));
        rendered.bars.push(bar);
    }
    debug!(bars = rendered.bars.len(), "rendered bar geometries");
    rendered
}

/// Resolves the per-datum override hook into a full bar style.
///
/// A bare color is shorthand for overriding the rect fill; a partial style is
/// deep-merged over the shared style, explicitly set fields winning.
#[must_use]
pub fn bar_style_overrides(
    datum: &SeriesDatum,
    geometry_id: &GeometryId,
    shared_style: &BarSeriesStyle,
    style_accessor: Option<BarStyleAccessor<'_>>,
) -> BarSeriesStyle {
    let Some(accessor) = style_accessor else {
        return shared_style.clone();
    };
    match accessor(datum, geometry_id) {
        None => shared_style.clone(),
        Some(BarStyleOverride::Color(color)) => {
            let mut style = shared_style.clone();
            style.rect.fill = Some(color);
            style
        }
        Some(BarStyleOverride::Partial(partial)) => shared_style.merge_partial(&partial),
    }
}
