use chart_geom::core::{
    ContinuousScale, CurveType, GeometryId, LineRenderOptions, SeriesDatum, XScale, render_line,
};
use chart_geom::interaction::geometries_at_cursor;
use chart_geom::style::{Color, LineSeriesStyle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x_scale: XScale = ContinuousScale::linear((0.0, 120.0), (0.0, 960.0))?.into();
    let y_scale = ContinuousScale::linear((0.0, 400.0), (540.0, 0.0))?;

    let dataset: Vec<SeriesDatum> = (0..120)
        .map(|i| {
            let x = i as f64;
            // A hole in the middle of the series becomes a clipped range.
            let y1 = (!(40..=45).contains(&i)).then(|| 150.0 + (x / 6.0).sin() * 20.0 + x * 0.4);
            SeriesDatum::new(x, y1)
        })
        .collect();

    let options = LineRenderOptions {
        shift: 0.0,
        x_scale_offset: 0.0,
        color: Color::rgb(0.12, 0.47, 0.71),
        curve: CurveType::MonotoneX,
        geometry_id: GeometryId::new("price", vec!["close".to_owned()]),
        has_y0_accessors: false,
        has_fit: true,
    };
    let rendered = render_line(
        &dataset,
        &x_scale,
        &y_scale,
        &options,
        &LineSeriesStyle::default(),
        None,
    );

    println!("path elements: {}", rendered.line.path.elements().len());
    println!("visible points: {}", rendered.line.points.len());
    println!("clipped ranges: {:?}", rendered.line.clipped_ranges);
    println!("svg path head: {:.60}", rendered.line.svg_path());

    let cursor_x = dataset[30].x.clone();
    let under_cursor = rendered.index.geometries_at(&cursor_x);
    let point_y = match under_cursor.first() {
        Some(geometry) => format!("{:?}", geometry.value().y),
        None => "none".to_owned(),
    };
    println!(
        "geometries under x=30: {} (y: {point_y})",
        under_cursor.len()
    );

    let hits = geometries_at_cursor(&rendered.index, &cursor_x, 240.0, 347.0);
    println!("of those, cursor (240, 347) touches: {}", hits.len());

    Ok(())
}
