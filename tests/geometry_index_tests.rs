use chart_geom::core::{
    BarGeometry, GeometryId, GeometryIndex, GeometryValue, IndexedGeometry, PointGeometry,
    Transform, XValue, YAccessor,
};
use chart_geom::style::{BarSeriesStyle, Color};

fn point(x: f64, tag: f64) -> IndexedGeometry {
    IndexedGeometry::Point(PointGeometry {
        x: x * 10.0,
        y: 50.0,
        radius: 10.0,
        color: Color::rgb(0.2, 0.2, 0.2),
        transform: Transform::default(),
        geometry_id: GeometryId::new("points", vec!["a".to_owned()]),
        value: GeometryValue {
            x: XValue::number(x),
            y: Some(tag),
            accessor: YAccessor::Y1,
        },
        style_overrides: None,
    })
}

fn bar(x: f64, tag: f64) -> IndexedGeometry {
    IndexedGeometry::Bar(BarGeometry {
        x: x * 10.0,
        y: 40.0,
        width: 10.0,
        height: 20.0,
        color: Color::rgb(0.8, 0.2, 0.2),
        display_value: None,
        geometry_id: GeometryId::new("bars", vec!["b".to_owned()]),
        value: GeometryValue {
            x: XValue::number(x),
            y: Some(tag),
            accessor: YAccessor::Y1,
        },
        series_style: BarSeriesStyle::default(),
    })
}

fn tag(geometry: &IndexedGeometry) -> f64 {
    geometry.value().y.expect("tagged value")
}

#[test]
fn upsert_prepends_newer_entries_within_a_bucket() {
    let mut index = GeometryIndex::new();
    index.upsert(XValue::number(1.0), point(1.0, 1.0));
    index.upsert(XValue::number(1.0), point(1.0, 2.0));

    let bucket = index.geometries_at(&XValue::number(1.0));
    assert_eq!(bucket.len(), 2);
    assert!((tag(&bucket[0]) - 2.0).abs() <= 1e-9);
    assert!((tag(&bucket[1]) - 1.0).abs() <= 1e-9);
    assert_eq!(index.len(), 1);
    assert_eq!(index.geometry_count(), 2);
}

#[test]
fn distinct_x_values_keep_first_seen_order() {
    let mut index = GeometryIndex::new();
    index.upsert(XValue::number(3.0), point(3.0, 1.0));
    index.upsert(XValue::number(1.0), point(1.0, 2.0));
    index.upsert(XValue::number(2.0), point(2.0, 3.0));
    index.upsert(XValue::number(1.0), point(1.0, 4.0));

    let keys: Vec<&XValue> = index.keys().collect();
    assert_eq!(
        keys,
        vec![
            &XValue::number(3.0),
            &XValue::number(1.0),
            &XValue::number(2.0),
        ]
    );
}

#[test]
fn merge_puts_incoming_entries_first() {
    let mut base = GeometryIndex::new();
    base.upsert(XValue::number(1.0), point(1.0, 1.0));
    base.upsert(XValue::number(1.0), point(1.0, 2.0));

    let mut incoming = GeometryIndex::new();
    incoming.upsert(XValue::number(1.0), bar(1.0, 3.0));
    incoming.upsert(XValue::number(1.0), bar(1.0, 4.0));

    base.merge(incoming);

    let bucket = base.geometries_at(&XValue::number(1.0));
    let tags: Vec<f64> = bucket.iter().map(tag).collect();
    assert_eq!(tags, vec![4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn merge_appends_unseen_x_buckets() {
    let mut base = GeometryIndex::new();
    base.upsert(XValue::number(1.0), point(1.0, 1.0));

    let mut incoming = GeometryIndex::new();
    incoming.upsert(XValue::number(9.0), bar(9.0, 2.0));

    base.merge(incoming);

    assert_eq!(base.len(), 2);
    let keys: Vec<&XValue> = base.keys().collect();
    assert_eq!(keys, vec![&XValue::number(1.0), &XValue::number(9.0)]);
    assert_eq!(base.geometries_at(&XValue::number(9.0)).len(), 1);
}

#[test]
fn lookup_misses_return_an_empty_slice() {
    let mut index = GeometryIndex::new();
    index.upsert(XValue::number(1.0), point(1.0, 1.0));

    assert!(index.geometries_at(&XValue::number(2.0)).is_empty());
    assert!(index.geometries_at(&XValue::category("a")).is_empty());
}

#[test]
fn empty_index_reports_empty() {
    let index = GeometryIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.geometry_count(), 0);
}

#[test]
fn iter_walks_buckets_in_insertion_order() {
    let mut index = GeometryIndex::new();
    index.upsert(XValue::number(2.0), point(2.0, 1.0));
    index.upsert(XValue::number(1.0), bar(1.0, 2.0));

    let snapshot: Vec<(&XValue, usize)> =
        index.iter().map(|(x, bucket)| (x, bucket.len())).collect();
    assert_eq!(
        snapshot,
        vec![(&XValue::number(2.0), 1), (&XValue::number(1.0), 1)]
    );
}

#[test]
fn indexed_geometry_exposes_identity_value_and_color() {
    let entry = bar(1.0, 7.0);

    assert_eq!(entry.geometry_id().spec_id, "bars");
    assert_eq!(entry.value().y, Some(7.0));
    assert_eq!(entry.color(), Color::rgb(0.8, 0.2, 0.2));

    let entry = point(1.0, 8.0);
    assert_eq!(entry.geometry_id().spec_id, "points");
    assert_eq!(entry.color(), Color::rgb(0.2, 0.2, 0.2));
}
