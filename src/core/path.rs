//! Line and area path generation with gap support.
//!
//! Undefined samples split the output into independent subpaths, so a series
//! with missing data renders as separate strokes instead of bridging the gap.

use kurbo::BezPath;

use crate::core::curves::{CurveType, PathSink, curve_strategy};

/// One sample prepared for line path generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub defined: bool,
}

/// One sample prepared for area path generation: top boundary `y1`, baseline
/// `y0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaPoint {
    pub x: f64,
    pub y1: f64,
    pub y0: f64,
    pub defined: bool,
}

/// Builds a stroke path over the defined runs of `points`.
#[must_use]
pub fn line_path(points: &[LinePoint], curve: CurveType) -> BezPath {
    let mut sink = PathSink::default();
    let mut strategy = curve_strategy(curve);
    let mut in_run = false;
    for i in 0..=points.len() {
        let defined = points.get(i).is_some_and(|p| p.defined);
        if defined != in_run {
            in_run = defined;
            if in_run {
                strategy.line_start();
            } else {
                strategy.line_end(&mut sink);
            }
        }
        if in_run {
            let p = points[i];
            strategy.point(&mut sink, p.x, p.y);
        }
    }
    sink.finish()
}

/// Builds a closed fill path over the defined runs of `points`: top boundary
/// forward, baseline backward, one closed outline per run.
#[must_use]
pub fn area_path(points: &[AreaPoint], curve: CurveType) -> BezPath {
    let mut sink = PathSink::default();
    let mut strategy = curve_strategy(curve);
    let mut in_run = false;
    let mut baseline: Vec<(f64, f64)> = Vec::new();
    for i in 0..=points.len() {
        let defined = points.get(i).is_some_and(|p| p.defined);
        if defined != in_run {
            in_run = defined;
            if in_run {
                baseline.clear();
                strategy.area_start();
                strategy.line_start();
            } else {
                strategy.line_end(&mut sink);
                strategy.line_start();
                for &(x, y0) in baseline.iter().rev() {
                    strategy.point(&mut sink, x, y0);
                }
                strategy.line_end(&mut sink);
                strategy.area_end();
            }
        }
        if in_run {
            let p = points[i];
            baseline.push((p.x, p.y0));
            strategy.point(&mut sink, p.x, p.y1);
        }
    }
    sink.finish()
}
