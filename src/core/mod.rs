pub mod area_series;
pub mod bar_series;
pub mod clip;
pub mod curves;
pub mod geometry;
pub mod index;
pub mod line_series;
pub mod path;
pub mod point_series;
pub mod scales;
pub mod types;

pub use area_series::{AreaRenderOptions, RenderedArea, render_area};
pub use bar_series::{
    BarRenderOptions, DisplayValueOptions, RenderedBars, ValueFormatter, bar_style_overrides,
    render_bars,
};
pub use clip::clipped_ranges;
pub use curves::CurveType;
pub use geometry::{
    AreaGeometry, BarGeometry, BarStyleAccessor, ClippedRanges, DisplayValue, GeometryId,
    GeometryValue, LineGeometry, PointGeometry, PointStyleAccessor, SeriesKey, Transform,
    YAccessor,
};
pub use index::{GeometryIndex, IndexedGeometry};
pub use line_series::{LineRenderOptions, RenderedLine, render_line};
pub use point_series::{PointRenderOptions, RenderedPoints, point_style_overrides, render_points};
pub use scales::{ContinuousScale, OrdinalScale, ScaleKind, XScale};
pub use types::{FilledValues, SeriesDatum, XValue};
