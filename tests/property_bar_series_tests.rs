use chart_geom::core::{
    BarRenderOptions, ContinuousScale, GeometryId, SeriesDatum, XScale, render_bars,
};
use chart_geom::style::{BarSeriesStyle, Color};
use proptest::prelude::*;

fn options(min_bar_height: Option<f64>) -> BarRenderOptions {
    BarRenderOptions {
        order_index: 0,
        color: Color::rgb(0.2, 0.4, 0.8),
        geometry_id: GeometryId::new("bars", vec!["series-a".to_owned()]),
        min_bar_height,
    }
}

fn x_scale() -> XScale {
    ContinuousScale::linear((0.0, 10.0), (0.0, 100.0))
        .expect("x scale")
        .with_bandwidth(10.0)
        .expect("bandwidth")
        .into()
}

proptest! {
    #[test]
    fn floored_bars_keep_their_far_edge(
        y1 in -100.0f64..100.0,
        min_height in 0.1f64..20.0
    ) {
        let x_scale = x_scale();
        let y_scale = ContinuousScale::linear((-100.0, 100.0), (200.0, 0.0)).expect("y scale");
        let dataset = vec![SeriesDatum::new(5.0, Some(y1))];
        let style = BarSeriesStyle::default();

        let plain = render_bars(&dataset, &x_scale, &y_scale, &options(None), &style, None, None);
        let floored = render_bars(
            &dataset,
            &x_scale,
            &y_scale,
            &options(Some(min_height)),
            &style,
            None,
            None,
        );

        let raw = &plain.bars[0];
        let bar = &floored.bars[0];

        prop_assert!(bar.height == 0.0 || bar.height.abs() >= min_height - 1e-9);
        prop_assert!((bar.y + bar.height - (raw.y + raw.height)).abs() <= 1e-9);
        if raw.height == 0.0 {
            prop_assert!(bar.height == 0.0);
        }
        if raw.height.abs() >= min_height {
            prop_assert!((bar.y - raw.y).abs() <= 1e-9);
            prop_assert!((bar.height - raw.height).abs() <= 1e-9);
        }
    }

    #[test]
    fn out_of_domain_datums_are_never_rendered(
        x in -50.0f64..50.0,
        y1 in -100.0f64..100.0
    ) {
        let x_scale = x_scale();
        let y_scale = ContinuousScale::linear((-100.0, 100.0), (200.0, 0.0)).expect("y scale");
        let dataset = vec![SeriesDatum::new(x, Some(y1))];

        let rendered = render_bars(
            &dataset,
            &x_scale,
            &y_scale,
            &options(None),
            &BarSeriesStyle::default(),
            None,
            None,
        );

        let in_domain = (0.0..=10.0).contains(&x);
        prop_assert_eq!(rendered.bars.len(), usize::from(in_domain));
        prop_assert_eq!(rendered.index.geometry_count(), usize::from(in_domain));
    }

    #[test]
    fn every_rendered_bar_is_indexed(
        values in proptest::collection::vec(proptest::option::of(-50.0f64..50.0), 1..40)
    ) {
        let x_scale: XScale = ContinuousScale::linear((0.0, 40.0), (0.0, 400.0))
            .expect("x scale")
            .with_bandwidth(10.0)
            .expect("bandwidth")
            .into();
        let y_scale = ContinuousScale::linear((-50.0, 50.0), (100.0, 0.0)).expect("y scale");
        let dataset: Vec<SeriesDatum> = values
            .iter()
            .enumerate()
            .map(|(i, y1)| SeriesDatum::new(i as f64, *y1))
            .collect();

        let rendered = render_bars(
            &dataset,
            &x_scale,
            &y_scale,
            &options(None),
            &BarSeriesStyle::default(),
            None,
            None,
        );

        let defined = values.iter().filter(|y1| y1.is_some()).count();
        prop_assert_eq!(rendered.bars.len(), defined);
        prop_assert_eq!(rendered.index.geometry_count(), defined);
        for bar in &rendered.bars {
            let bucket = rendered.index.geometries_at(&bar.value.x);
            prop_assert!(bucket.iter().any(|indexed| indexed.value() == &bar.value));
        }
    }

    #[test]
    fn cluster_order_offsets_bars_by_whole_bandwidths(
        bandwidth in 0.5f64..30.0,
        order_index in 0usize..4
    ) {
        let x_scale: XScale = ContinuousScale::linear((0.0, 10.0), (0.0, 100.0))
            .expect("x scale")
            .with_bandwidth(bandwidth)
            .expect("bandwidth")
            .into();
        let y_scale = ContinuousScale::linear((0.0, 100.0), (100.0, 0.0)).expect("y scale");
        let dataset = vec![SeriesDatum::new(5.0, Some(10.0))];
        let mut options = options(None);
        options.order_index = order_index;

        let rendered = render_bars(
            &dataset,
            &x_scale,
            &y_scale,
            &options,
            &BarSeriesStyle::default(),
            None,
            None,
        );

        let bar = &rendered.bars[0];
        prop_assert!((bar.width - bandwidth).abs() <= 1e-9);
        prop_assert!((bar.x - (50.0 + bandwidth * order_index as f64)).abs() <= 1e-9);
    }
}
