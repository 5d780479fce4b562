use chart_geom::core::{
    BarRenderOptions, ContinuousScale, DisplayValueOptions, GeometryId, SeriesDatum, XScale,
    render_bars,
};
use chart_geom::style::{BarSeriesStyle, Color};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x_scale: XScale = ContinuousScale::linear((0.0, 12.0), (0.0, 720.0))?
        .with_bandwidth(60.0)?
        .into();
    let y_scale = ContinuousScale::linear((0.0, 50.0), (400.0, 0.0))?;

    let dataset: Vec<SeriesDatum> = (0..12)
        .map(|i| {
            let x = i as f64;
            SeriesDatum::new(x, Some(8.0 + (x * 0.9).cos().abs() * 30.0))
        })
        .collect();

    let options = BarRenderOptions {
        order_index: 0,
        color: Color::rgb(0.84, 0.37, 0.22),
        geometry_id: GeometryId::new("revenue", vec!["2025".to_owned()]),
        min_bar_height: Some(2.0),
    };
    let formatter = |value: f64| format!("{value:.1}");
    let display = DisplayValueOptions {
        show_value_label: true,
        is_alternating_value_label: true,
        is_value_contained_in_element: false,
        hide_clipped_value: false,
        value_formatter: Some(&formatter),
    };

    let rendered = render_bars(
        &dataset,
        &x_scale,
        &y_scale,
        &options,
        &BarSeriesStyle::default(),
        Some(&display),
        None,
    );

    println!("bars: {}", rendered.bars.len());
    println!("indexed x slots: {}", rendered.index.len());
    for bar in rendered.bars.iter().take(4) {
        let label = bar
            .display_value
            .as_ref()
            .and_then(|value| value.text.as_deref())
            .unwrap_or("(skipped)");
        println!(
            "x={:6.1} y={:6.1} h={:6.1} label={label}",
            bar.x, bar.y, bar.height
        );
    }

    Ok(())
}
