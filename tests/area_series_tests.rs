use chart_geom::core::{
    AreaRenderOptions, ContinuousScale, CurveType, GeometryId, LineRenderOptions, SeriesDatum,
    XScale, render_area,
};
use chart_geom::style::{AreaSeriesStyle, Color};
use kurbo::PathEl;

fn x_scale() -> XScale {
    ContinuousScale::linear((0.0, 2.0), (0.0, 100.0))
        .expect("x scale")
        .into()
}

fn y_scale() -> ContinuousScale {
    ContinuousScale::linear((0.0, 100.0), (100.0, 0.0)).expect("y scale")
}

fn options(is_stacked: bool, has_y0_accessors: bool) -> AreaRenderOptions {
    AreaRenderOptions {
        line: LineRenderOptions {
            shift: 0.0,
            x_scale_offset: 0.0,
            color: Color::rgb(0.3, 0.3, 0.8),
            curve: CurveType::Linear,
            geometry_id: GeometryId::new("area", vec!["series-a".to_owned()]),
            has_y0_accessors,
            has_fit: false,
        },
        is_stacked,
    }
}

fn count(path: &kurbo::BezPath, wanted: fn(&PathEl) -> bool) -> usize {
    path.elements().iter().filter(|el| wanted(el)).count()
}

fn moves(el: &PathEl) -> bool {
    matches!(el, PathEl::MoveTo(_))
}

fn closes(el: &PathEl) -> bool {
    matches!(el, PathEl::ClosePath)
}

#[test]
fn area_fill_closes_against_the_chart_baseline() {
    let data = vec![
        SeriesDatum::new(0.0, Some(10.0)),
        SeriesDatum::new(1.0, Some(12.0)),
        SeriesDatum::new(2.0, Some(8.0)),
    ];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, false),
        &AreaSeriesStyle::default(),
        None,
    );

    assert_eq!(count(&rendered.area.area, moves), 1);
    assert_eq!(count(&rendered.area.area, closes), 1);
    // Null y0 clamps the baseline to the start of the y range.
    let baseline_hits = rendered
        .area
        .area
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::LineTo(p) if (p.y - 100.0).abs() <= 1e-9))
        .count();
    assert_eq!(baseline_hits, 3);
}

#[test]
fn gaps_produce_one_outline_per_defined_run() {
    let data = vec![
        SeriesDatum::new(0.0, Some(10.0)),
        SeriesDatum::new(0.5, Some(11.0)),
        SeriesDatum::new(1.0, None),
        SeriesDatum::new(1.5, Some(12.0)),
        SeriesDatum::new(2.0, Some(13.0)),
    ];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, false),
        &AreaSeriesStyle::default(),
        None,
    );

    assert_eq!(count(&rendered.area.area, moves), 2);
    assert_eq!(count(&rendered.area.area, closes), 2);
}

#[test]
fn explicit_y0_raises_the_fill_floor() {
    let data = vec![
        SeriesDatum::new(0.0, Some(60.0)).with_y0(Some(20.0)),
        SeriesDatum::new(2.0, Some(80.0)).with_y0(Some(20.0)),
    ];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, false),
        &AreaSeriesStyle::default(),
        None,
    );

    let floor_hits = rendered
        .area
        .area
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::LineTo(p) if (p.y - 80.0).abs() <= 1e-9))
        .count();
    assert_eq!(floor_hits, 2);
}

#[test]
fn single_boundary_line_for_single_accessor_series() {
    let data = vec![
        SeriesDatum::new(0.0, Some(10.0)),
        SeriesDatum::new(2.0, Some(12.0)),
    ];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, false),
        &AreaSeriesStyle::default(),
        None,
    );

    assert_eq!(rendered.area.lines.len(), 1);
}

#[test]
fn banded_series_adds_a_lower_boundary_line() {
    let data = vec![
        SeriesDatum::new(0.0, Some(60.0)).with_y0(Some(20.0)),
        SeriesDatum::new(2.0, Some(80.0)).with_y0(Some(30.0)),
    ];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, true),
        &AreaSeriesStyle::default(),
        None,
    );

    assert_eq!(rendered.area.lines.len(), 2);
    let lower = &rendered.area.lines[1];
    let PathEl::MoveTo(start) = lower.elements()[0] else {
        panic!("lower boundary must start with a move");
    };
    assert!((start.y - 80.0).abs() <= 1e-9);
    // Visible marks double up: one per accessor per datum.
    assert_eq!(rendered.area.points.len(), 4);
}

#[test]
fn null_y0_clamps_the_lower_boundary_to_the_baseline() {
    let data = vec![
        SeriesDatum::new(0.0, Some(60.0)).with_y0(Some(20.0)),
        SeriesDatum::new(1.0, Some(70.0)).with_y0(None),
        SeriesDatum::new(2.0, Some(80.0)).with_y0(Some(30.0)),
    ];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, true),
        &AreaSeriesStyle::default(),
        None,
    );

    let lower = &rendered.area.lines[1];
    assert_eq!(count(lower, moves), 1);
    let hits_baseline = lower.elements().iter().any(|el| match el {
        PathEl::LineTo(p) => (p.x - 50.0).abs() <= 1e-9 && (p.y - 100.0).abs() <= 1e-9,
        _ => false,
    });
    assert!(hits_baseline);
}

#[test]
fn null_y1_splits_the_lower_boundary_with_the_fill() {
    let data = vec![
        SeriesDatum::new(0.0, Some(60.0)).with_y0(Some(20.0)),
        SeriesDatum::new(1.0, None).with_y0(Some(25.0)),
        SeriesDatum::new(2.0, Some(80.0)).with_y0(Some(30.0)),
    ];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, true),
        &AreaSeriesStyle::default(),
        None,
    );

    assert_eq!(count(&rendered.area.area, moves), 2);
    let lower = &rendered.area.lines[1];
    assert_eq!(count(lower, moves), 2);
}

#[test]
fn stacked_areas_never_report_clipped_ranges() {
    let data = vec![
        SeriesDatum::new(0.0, Some(12.0)),
        SeriesDatum::new(1.0, None),
        SeriesDatum::new(2.0, Some(14.0)),
    ];
    let mut opts = options(true, false);
    opts.line.has_fit = true;

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &opts,
        &AreaSeriesStyle::default(),
        None,
    );

    assert!(rendered.area.is_stacked);
    assert!(rendered.area.clipped_ranges.is_empty());
}

#[test]
fn unstacked_fitted_areas_report_clipped_ranges() {
    let data = vec![
        SeriesDatum::new(0.0, Some(12.0)),
        SeriesDatum::new(1.0, None),
        SeriesDatum::new(2.0, Some(14.0)),
    ];
    let mut opts = options(false, false);
    opts.line.has_fit = true;

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &opts,
        &AreaSeriesStyle::default(),
        None,
    );

    assert_eq!(rendered.area.clipped_ranges, vec![(0.0, 100.0)]);
}

#[test]
fn area_geometry_carries_identity_and_svg_fill() {
    let data = vec![
        SeriesDatum::new(0.0, Some(10.0)),
        SeriesDatum::new(2.0, Some(12.0)),
    ];
    let style = AreaSeriesStyle::default();

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, false),
        &style,
        None,
    );

    assert_eq!(rendered.area.series_style, style);
    assert_eq!(rendered.area.color, Color::rgb(0.3, 0.3, 0.8));
    assert!(rendered.area.svg_area_path().starts_with('M'));
    assert_eq!(rendered.index.geometry_count(), 2);
}

#[test]
fn fully_null_series_produces_no_outline_and_no_boundaries() {
    let data = vec![SeriesDatum::new(0.0, None), SeriesDatum::new(1.0, None)];

    let rendered = render_area(
        &data,
        &x_scale(),
        &y_scale(),
        &options(false, false),
        &AreaSeriesStyle::default(),
        None,
    );

    assert!(rendered.area.area.elements().is_empty());
    assert!(rendered.area.lines.is_empty());
    assert!(rendered.area.points.is_empty());
}
