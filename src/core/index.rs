//! Spatial lookup of geometries by domain x value.
//!
//! The index is rebuilt for every render pass and owned by the caller; the
//! drawing layer never sees it. Interaction code resolves the hovered x value
//! and asks for every geometry stacked under it.

use indexmap::IndexMap;

use crate::core::geometry::{BarGeometry, GeometryId, GeometryValue, PointGeometry};
use crate::core::types::XValue;
use crate::style::Color;

/// A point or bar retrievable through the [`GeometryIndex`].
#[derive(Debug, Clone, PartialEq)]
pub enum IndexedGeometry {
    Point(PointGeometry),
    Bar(BarGeometry),
}

impl IndexedGeometry {
    #[must_use]
    pub fn geometry_id(&self) -> &GeometryId {
        match self {
            IndexedGeometry::Point(p) => &p.geometry_id,
            IndexedGeometry::Bar(b) => &b.geometry_id,
        }
    }

    #[must_use]
    pub fn value(&self) -> &GeometryValue {
        match self {
            IndexedGeometry::Point(p) => &p.value,
            IndexedGeometry::Bar(b) => &b.value,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            IndexedGeometry::Point(p) => p.color,
            IndexedGeometry::Bar(b) => b.color,
        }
    }
}

/// Geometries grouped under their domain x value, in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryIndex {
    buckets: IndexMap<XValue, Vec<IndexedGeometry>>,
}

impl GeometryIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a geometry under `x`. Newer entries go in front of older ones
    /// within the bucket.
    pub fn upsert(&mut self, x: XValue, geometry: IndexedGeometry) {
        self.buckets.entry(x).or_default().insert(0, geometry);
    }

    /// Folds another index into this one. Incoming buckets count as newer:
    /// they land in front of existing entries, keeping their own order.
    pub fn merge(&mut self, other: GeometryIndex) {
        for (x, bucket) in other.buckets {
            let entry = self.buckets.entry(x).or_default();
            entry.splice(0..0, bucket);
        }
    }

    /// Every geometry recorded under `x`, newest first.
    #[must_use]
    pub fn geometries_at(&self, x: &XValue) -> &[IndexedGeometry] {
        self.buckets.get(x).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct x values carrying at least one geometry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total geometry count across all buckets.
    #[must_use]
    pub fn geometry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &XValue> {
        self.buckets.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&XValue, &[IndexedGeometry])> {
        self.buckets.iter().map(|(x, bucket)| (x, bucket.as_slice()))
    }
}
