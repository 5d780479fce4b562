//! Hit testing and highlight resolution over rendered geometries.

use serde::{Deserialize, Serialize};

use crate::core::geometry::GeometryId;
use crate::core::index::{GeometryIndex, IndexedGeometry};
use crate::core::types::XValue;
use crate::style::{Color, GeometryStateStyle, SharedGeometryStyle};

/// One legend entry, carrying the identity of the series it represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub key: String,
    pub label: String,
    pub color: Color,
    pub geometry_id: GeometryId,
}

impl LegendItem {
    #[must_use]
    pub fn new(geometry_id: GeometryId, label: impl Into<String>, color: Color) -> Self {
        Self {
            key: geometry_id.render_key(Some("legendItem:"), None),
            label: label.into(),
            color,
            geometry_id,
        }
    }
}

/// Per-geometry highlight flags used when no legend item is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndividualHighlight {
    /// Whether this geometry itself is flagged as highlighted.
    pub has_highlight: bool,
    /// Whether any geometry hover is active on the chart.
    pub has_geometry_hover: bool,
}

/// Whether a cursor pixel position falls on a point or bar geometry.
///
/// Points hit within a square box of side `2 * radius` centered on their
/// shifted position; bars hit within their rectangle, edges included.
#[must_use]
pub fn is_point_on_geometry(cursor_x: f64, cursor_y: f64, geometry: &IndexedGeometry) -> bool {
    match geometry {
        IndexedGeometry::Point(point) => {
            let center_x = point.x + point.transform.x;
            cursor_y >= point.y - point.radius
                && cursor_y <= point.y + point.radius
                && cursor_x >= center_x - point.radius
                && cursor_x <= center_x + point.radius
        }
        IndexedGeometry::Bar(bar) => {
            cursor_y >= bar.y
                && cursor_y <= bar.y + bar.height
                && cursor_x >= bar.x
                && cursor_x <= bar.x + bar.width
        }
    }
}

/// Every indexed geometry under `x` that the cursor actually touches,
/// newest first.
#[must_use]
pub fn geometries_at_cursor<'a>(
    index: &'a GeometryIndex,
    x: &XValue,
    cursor_x: f64,
    cursor_y: f64,
) -> Vec<&'a IndexedGeometry> {
    index
        .geometries_at(x)
        .iter()
        .filter(|geometry| is_point_on_geometry(cursor_x, cursor_y, geometry))
        .collect()
}

/// Resolves the opacity bucket of a geometry for the current interaction
/// state.
///
/// A hovered legend item wins: members of its series get the highlighted
/// bucket, everything else the unhighlighted one. Without one, the
/// individual flags decide: no active hover shows everything highlighted,
/// an active hover highlights only the flagged geometry. Without either,
/// the default bucket applies.
#[must_use]
pub fn geometry_state_style(
    geometry_id: &GeometryId,
    highlighted_legend_item: Option<&LegendItem>,
    shared_style: &SharedGeometryStyle,
    individual_highlight: Option<IndividualHighlight>,
) -> GeometryStateStyle {
    if let Some(item) = highlighted_legend_item {
        return if item.geometry_id == *geometry_id {
            shared_style.highlighted
        } else {
            shared_style.unhighlighted
        };
    }
    if let Some(flags) = individual_highlight {
        if !flags.has_geometry_hover {
            return shared_style.highlighted;
        }
        return if flags.has_highlight {
            shared_style.highlighted
        } else {
            shared_style.unhighlighted
        };
    }
    shared_style.default
}
