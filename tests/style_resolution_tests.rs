use chart_geom::ChartError;
use chart_geom::style::{
    BarSeriesStyle, BarSeriesStylePartial, Color, DisplayValueStylePartial, PointStyle,
    PointStylePartial, RectBorderStylePartial, RectStyle, RectStylePartial,
};

#[test]
fn point_style_merge_overrides_only_set_fields() {
    let base = PointStyle {
        visible: true,
        radius: 2.0,
        stroke: None,
        stroke_width: 1.0,
        opacity: 1.0,
    };
    let partial = PointStylePartial {
        radius: Some(6.0),
        opacity: Some(0.4),
        ..PointStylePartial::default()
    };

    let merged = base.merge_partial(&partial);

    assert!((merged.radius - 6.0).abs() <= 1e-9);
    assert!((merged.opacity - 0.4).abs() <= 1e-9);
    assert!(merged.visible);
    assert_eq!(merged.stroke, None);
    assert!((merged.stroke_width - 1.0).abs() <= 1e-9);
}

#[test]
fn rect_merge_keeps_the_base_fill_when_unset() {
    let base = RectStyle {
        fill: Some(Color::rgb(0.1, 0.2, 0.3)),
        opacity: 1.0,
    };
    let merged = base.merge_partial(&RectStylePartial {
        fill: None,
        opacity: Some(0.7),
    });

    assert_eq!(merged.fill, Some(Color::rgb(0.1, 0.2, 0.3)));
    assert!((merged.opacity - 0.7).abs() <= 1e-9);
}

#[test]
fn bar_series_merge_is_deep_per_section() {
    let base = BarSeriesStyle::default();
    let partial = BarSeriesStylePartial {
        rect: Some(RectStylePartial {
            fill: Some(Color::rgb(0.9, 0.0, 0.0)),
            opacity: None,
        }),
        rect_border: Some(RectBorderStylePartial {
            visible: Some(true),
            stroke: None,
            stroke_width: Some(2.0),
        }),
        display_value: Some(DisplayValueStylePartial {
            font_size: Some(12.0),
            ..DisplayValueStylePartial::default()
        }),
    };

    let merged = base.merge_partial(&partial);

    assert_eq!(merged.rect.fill, Some(Color::rgb(0.9, 0.0, 0.0)));
    assert!((merged.rect.opacity - 1.0).abs() <= 1e-9);
    assert!(merged.rect_border.visible);
    assert!((merged.rect_border.stroke_width - 2.0).abs() <= 1e-9);
    assert!((merged.display_value.font_size - 12.0).abs() <= 1e-9);
    assert_eq!(merged.display_value.font_family, "sans-serif");
}

#[test]
fn absent_sections_leave_the_base_untouched() {
    let base = BarSeriesStyle::default();
    let merged = base.merge_partial(&BarSeriesStylePartial::default());

    assert_eq!(merged, base);
}

#[test]
fn color_validation_accepts_channel_bounds() {
    Color::rgba(0.0, 0.0, 0.0, 0.0).validate().expect("black");
    Color::rgba(1.0, 1.0, 1.0, 1.0).validate().expect("white");
}

#[test]
fn color_validation_rejects_out_of_range_channels() {
    let err = Color::rgba(1.5, 0.0, 0.0, 1.0)
        .validate()
        .expect_err("red channel out of range");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = Color::rgba(0.0, -0.1, 0.0, 1.0)
        .validate()
        .expect_err("negative channel");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = Color::rgba(0.0, 0.0, f64::NAN, 1.0)
        .validate()
        .expect_err("non-finite channel");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
