//! Curve interpolation strategies for line/area path generation.
//!
//! The strategy set and its numeric behavior match the d3-shape curves so
//! that hosts migrating from SVG charting stacks keep identical rendering:
//! cardinal tension 0, Catmull-Rom alpha 0.5, Fritsch-Carlson monotone
//! slopes, natural cubic spline control points, step midpoint 0.5.

use kurbo::BezPath;
use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-12;

/// Path interpolation selected per series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurveType {
    #[default]
    Linear,
    Cardinal,
    Natural,
    MonotoneX,
    MonotoneY,
    Basis,
    CatmullRom,
    Step,
    StepAfter,
    StepBefore,
}

/// Output sink shared by all curve strategies.
#[derive(Debug, Default)]
pub(crate) struct PathSink {
    path: BezPath,
}

impl PathSink {
    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x, y));
    }

    fn bezier_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.path.curve_to((x1, y1), (x2, y2), (x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }

    pub(crate) fn finish(self) -> BezPath {
        self.path
    }
}

/// Where the current segment sits inside a line or area outline.
///
/// Area fills feed two boundaries through one strategy: the opening boundary
/// starts a subpath, the closing boundary connects to it and closes the
/// outline. Standalone lines start a fresh subpath per defined run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentMode {
    Standalone,
    AreaOpen,
    AreaClose,
}

fn toggle(mode: SegmentMode) -> SegmentMode {
    match mode {
        SegmentMode::Standalone => SegmentMode::Standalone,
        SegmentMode::AreaOpen => SegmentMode::AreaClose,
        SegmentMode::AreaClose => SegmentMode::AreaOpen,
    }
}

/// A single-sample segment still emits a degenerate closed dot.
fn closes_segment(mode: SegmentMode, single_point: bool) -> bool {
    mode == SegmentMode::AreaClose || (mode != SegmentMode::AreaOpen && single_point)
}

fn open_segment(sink: &mut PathSink, mode: SegmentMode, x: f64, y: f64) {
    if mode == SegmentMode::AreaClose {
        sink.line_to(x, y);
    } else {
        sink.move_to(x, y);
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Segment protocol consumed by the path generators: one `line_start` /
/// `point`* / `line_end` cycle per defined run, with `area_start` /
/// `area_end` bracketing the two boundaries of an area run.
pub(crate) trait Curve {
    fn area_start(&mut self);
    fn area_end(&mut self);
    fn line_start(&mut self);
    fn line_end(&mut self, sink: &mut PathSink);
    fn point(&mut self, sink: &mut PathSink, x: f64, y: f64);
}

pub(crate) fn curve_strategy(curve: CurveType) -> Box<dyn Curve> {
    match curve {
        CurveType::Linear => Box::new(LinearCurve::new()),
        CurveType::Cardinal => Box::new(CardinalCurve::new(0.0)),
        CurveType::Natural => Box::new(NaturalCurve::new()),
        CurveType::MonotoneX => Box::new(MonotoneCurve::new(false)),
        CurveType::MonotoneY => Box::new(MonotoneCurve::new(true)),
        CurveType::Basis => Box::new(BasisCurve::new()),
        CurveType::CatmullRom => Box::new(CatmullRomCurve::new(0.5)),
        CurveType::Step => Box::new(StepCurve::new(0.5)),
        CurveType::StepAfter => Box::new(StepCurve::new(1.0)),
        CurveType::StepBefore => Box::new(StepCurve::new(0.0)),
    }
}

#[derive(Debug)]
struct LinearCurve {
    mode: SegmentMode,
    state: u8,
}

impl LinearCurve {
    fn new() -> Self {
        Self {
            mode: SegmentMode::Standalone,
            state: 0,
        }
    }
}

impl Curve for LinearCurve {
    fn area_start(&mut self) {
        self.mode = SegmentMode::AreaOpen;
    }

    fn area_end(&mut self) {
        self.mode = SegmentMode::Standalone;
    }

    fn line_start(&mut self) {
        self.state = 0;
    }

    fn line_end(&mut self, sink: &mut PathSink) {
        if closes_segment(self.mode, self.state == 1) {
            sink.close();
        }
        self.mode = toggle(self.mode);
    }

    fn point(&mut self, sink: &mut PathSink, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                open_segment(sink, self.mode, x, y);
            }
            1 => {
                self.state = 2;
                sink.line_to(x, y);
            }
            _ => sink.line_to(x, y),
        }
    }
}

#[derive(Debug)]
struct StepCurve {
    mode: SegmentMode,
    state: u8,
    t: f64,
    x: f64,
    y: f64,
}

impl StepCurve {
    fn new(t: f64) -> Self {
        Self {
            mode: SegmentMode::Standalone,
            state: 0,
            t,
            x: f64::NAN,
            y: f64::NAN,
        }
    }
}

impl Curve for StepCurve {
    fn area_start(&mut self) {
        self.mode = SegmentMode::AreaOpen;
    }

    fn area_end(&mut self) {
        self.mode = SegmentMode::Standalone;
    }

    fn line_start(&mut self) {
        self.x = f64::NAN;
        self.y = f64::NAN;
        self.state = 0;
    }

    fn line_end(&mut self, sink: &mut PathSink) {
        if 0.0 < self.t && self.t < 1.0 && self.state == 2 {
            sink.line_to(self.x, self.y);
        }
        if closes_segment(self.mode, self.state == 1) {
            sink.close();
        }
        if self.mode != SegmentMode::Standalone {
            // The closing boundary of an area steps in mirror image.
            self.t = 1.0 - self.t;
            self.mode = toggle(self.mode);
        }
    }

    fn point(&mut self, sink: &mut PathSink, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                open_segment(sink, self.mode, x, y);
            }
            _ => {
                if self.state == 1 {
                    self.state = 2;
                }
                if self.t <= 0.0 {
                    sink.line_to(self.x, y);
                    sink.line_to(x, y);
                } else {
                    let x1 = self.x * (1.0 - self.t) + x * self.t;
                    sink.line_to(x1, self.y);
                    sink.line_to(x1, y);
                }
            }
        }
        self.x = x;
        self.y = y;
    }
}

#[derive(Debug)]
struct BasisCurve {
    mode: SegmentMode,
    state: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl BasisCurve {
    fn new() -> Self {
        Self {
            mode: SegmentMode::Standalone,
            state: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
        }
    }

    fn emit(&self, sink: &mut PathSink, x: f64, y: f64) {
        sink.bezier_to(
            (2.0 * self.x0 + self.x1) / 3.0,
            (2.0 * self.y0 + self.y1) / 3.0,
            (self.x0 + 2.0 * self.x1) / 3.0,
            (self.y0 + 2.0 * self.y1) / 3.0,
            (self.x0 + 4.0 * self.x1 + x) / 6.0,
            (self.y0 + 4.0 * self.y1 + y) / 6.0,
        );
    }
}

impl Curve for BasisCurve {
    fn area_start(&mut self) {
        self.mode = SegmentMode::AreaOpen;
    }

    fn area_end(&mut self) {
        self.mode = SegmentMode::Standalone;
    }

    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.state = 0;
    }

    fn line_end(&mut self, sink: &mut PathSink) {
        match self.state {
            3 => {
                self.emit(sink, self.x1, self.y1);
                sink.line_to(self.x1, self.y1);
            }
            2 => sink.line_to(self.x1, self.y1),
            _ => {}
        }
        if closes_segment(self.mode, self.state == 1) {
            sink.close();
        }
        self.mode = toggle(self.mode);
    }

    fn point(&mut self, sink: &mut PathSink, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                open_segment(sink, self.mode, x, y);
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                sink.line_to(
                    (5.0 * self.x0 + self.x1) / 6.0,
                    (5.0 * self.y0 + self.y1) / 6.0,
                );
                self.emit(sink, x, y);
            }
            _ => self.emit(sink, x, y),
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }
}

#[derive(Debug)]
struct CardinalCurve {
    mode: SegmentMode,
    state: u8,
    k: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CardinalCurve {
    fn new(tension: f64) -> Self {
        Self {
            mode: SegmentMode::Standalone,
            state: 0,
            k: (1.0 - tension) / 6.0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
        }
    }

    fn emit(&self, sink: &mut PathSink, x: f64, y: f64) {
        sink.bezier_to(
            self.x1 + self.k * (self.x2 - self.x0),
            self.y1 + self.k * (self.y2 - self.y0),
            self.x2 + self.k * (self.x1 - x),
            self.y2 + self.k * (self.y1 - y),
            self.x2,
            self.y2,
        );
    }
}

impl Curve for CardinalCurve {
    fn area_start(&mut self) {
        self.mode = SegmentMode::AreaOpen;
    }

    fn area_end(&mut self) {
        self.mode = SegmentMode::Standalone;
    }

    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.x2 = f64::NAN;
        self.y2 = f64::NAN;
        self.state = 0;
    }

    fn line_end(&mut self, sink: &mut PathSink) {
        match self.state {
            2 => sink.line_to(self.x2, self.y2),
            3 => self.emit(sink, self.x1, self.y1),
            _ => {}
        }
        if closes_segment(self.mode, self.state == 1) {
            sink.close();
        }
        self.mode = toggle(self.mode);
    }

    fn point(&mut self, sink: &mut PathSink, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                open_segment(sink, self.mode, x, y);
            }
            1 => {
                self.state = 2;
                self.x1 = x;
                self.y1 = y;
            }
            2 => {
                self.state = 3;
                self.emit(sink, x, y);
            }
            _ => self.emit(sink, x, y),
        }
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

#[derive(Debug)]
struct CatmullRomCurve {
    mode: SegmentMode,
    state: u8,
    alpha: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl CatmullRomCurve {
    fn new(alpha: f64) -> Self {
        Self {
            mode: SegmentMode::Standalone,
            state: 0,
            alpha,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    fn emit(&self, sink: &mut PathSink, x: f64, y: f64) {
        let mut x1 = self.x1;
        let mut y1 = self.y1;
        let mut x2 = self.x2;
        let mut y2 = self.y2;
        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            x1 = (x1 * a - self.x0 * self.l12_2a + self.x2 * self.l01_2a) / n;
            y1 = (y1 * a - self.y0 * self.l12_2a + self.y2 * self.l01_2a) / n;
        }
        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            x2 = (x2 * b + self.x1 * self.l23_2a - x * self.l12_2a) / m;
            y2 = (y2 * b + self.y1 * self.l23_2a - y * self.l12_2a) / m;
        }
        sink.bezier_to(x1, y1, x2, y2, self.x2, self.y2);
    }
}

impl Curve for CatmullRomCurve {
    fn area_start(&mut self) {
        self.mode = SegmentMode::AreaOpen;
    }

    fn area_end(&mut self) {
        self.mode = SegmentMode::Standalone;
    }

    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.x2 = f64::NAN;
        self.y2 = f64::NAN;
        self.l01_a = 0.0;
        self.l12_a = 0.0;
        self.l23_a = 0.0;
        self.l01_2a = 0.0;
        self.l12_2a = 0.0;
        self.l23_2a = 0.0;
        self.state = 0;
    }

    fn line_end(&mut self, sink: &mut PathSink) {
        match self.state {
            2 => sink.line_to(self.x2, self.y2),
            3 => {
                let (x, y) = (self.x2, self.y2);
                self.point(sink, x, y);
            }
            _ => {}
        }
        if closes_segment(self.mode, self.state == 1) {
            sink.close();
        }
        self.mode = toggle(self.mode);
    }

    fn point(&mut self, sink: &mut PathSink, x: f64, y: f64) {
        if self.state != 0 {
            let x23 = self.x2 - x;
            let y23 = self.y2 - y;
            self.l23_2a = (x23 * x23 + y23 * y23).powf(self.alpha);
            self.l23_a = self.l23_2a.sqrt();
        }
        match self.state {
            0 => {
                self.state = 1;
                open_segment(sink, self.mode, x, y);
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                self.emit(sink, x, y);
            }
            _ => self.emit(sink, x, y),
        }
        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

#[derive(Debug)]
struct NaturalCurve {
    mode: SegmentMode,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl NaturalCurve {
    fn new() -> Self {
        Self {
            mode: SegmentMode::Standalone,
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }
}

/// Solves the tridiagonal system of a natural cubic spline, returning the
/// first and second Bezier control values per segment.
fn natural_control_points(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = values.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];
    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = values[0] + 2.0 * values[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * values[i] + 2.0 * values[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * values[n - 1] + values[n];
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (values[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * values[i + 1] - a[i + 1];
    }
    (a, b)
}

impl Curve for NaturalCurve {
    fn area_start(&mut self) {
        self.mode = SegmentMode::AreaOpen;
    }

    fn area_end(&mut self) {
        self.mode = SegmentMode::Standalone;
    }

    fn line_start(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }

    fn line_end(&mut self, sink: &mut PathSink) {
        let n = self.xs.len();
        if n > 0 {
            open_segment(sink, self.mode, self.xs[0], self.ys[0]);
            if n == 2 {
                sink.line_to(self.xs[1], self.ys[1]);
            } else if n > 2 {
                let (ax, bx) = natural_control_points(&self.xs);
                let (ay, by) = natural_control_points(&self.ys);
                for i in 0..n - 1 {
                    sink.bezier_to(ax[i], ay[i], bx[i], by[i], self.xs[i + 1], self.ys[i + 1]);
                }
            }
        }
        if closes_segment(self.mode, n == 1) {
            sink.close();
        }
        self.mode = toggle(self.mode);
        self.xs.clear();
        self.ys.clear();
    }

    fn point(&mut self, _sink: &mut PathSink, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}

#[derive(Debug)]
struct MonotoneCurve {
    mode: SegmentMode,
    state: u8,
    /// Swap input and output axes: monotone-in-y instead of monotone-in-x.
    swap: bool,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
}

impl MonotoneCurve {
    fn new(swap: bool) -> Self {
        Self {
            mode: SegmentMode::Standalone,
            state: 0,
            swap,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            t0: f64::NAN,
        }
    }

    fn emit_open(&self, sink: &mut PathSink, x: f64, y: f64) {
        let (x, y) = if self.swap { (y, x) } else { (x, y) };
        open_segment(sink, self.mode, x, y);
    }

    fn emit_line(&self, sink: &mut PathSink, x: f64, y: f64) {
        let (x, y) = if self.swap { (y, x) } else { (x, y) };
        sink.line_to(x, y);
    }

    fn emit_bezier(&self, sink: &mut PathSink, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        if self.swap {
            sink.bezier_to(y1, x1, y2, x2, y, x);
        } else {
            sink.bezier_to(x1, y1, x2, y2, x, y);
        }
    }

    /// Fritsch-Carlson three-point slope, limited to keep the interpolant
    /// monotone between samples.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let d0 = if h0 != 0.0 && !h0.is_nan() {
            h0
        } else if h1 < 0.0 {
            -0.0
        } else {
            0.0
        };
        let d1 = if h1 != 0.0 && !h1.is_nan() {
            h1
        } else if h0 < 0.0 {
            -0.0
        } else {
            0.0
        };
        let s0 = (self.y1 - self.y0) / d0;
        let s1 = (y2 - self.y1) / d1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let value = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if value.is_nan() { 0.0 } else { value }
    }

    /// One-sided slope for the segment endpoints.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 && !h.is_nan() {
            (3.0 * (self.y1 - self.y0) / h - t) / 2.0
        } else {
            t
        }
    }

    fn emit_segment(&self, sink: &mut PathSink, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.emit_bezier(
            sink,
            self.x0 + dx,
            self.y0 + dx * t0,
            self.x1 - dx,
            self.y1 - dx * t1,
            self.x1,
            self.y1,
        );
    }
}

impl Curve for MonotoneCurve {
    fn area_start(&mut self) {
        self.mode = SegmentMode::AreaOpen;
    }

    fn area_end(&mut self) {
        self.mode = SegmentMode::Standalone;
    }

    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.t0 = f64::NAN;
        self.state = 0;
    }

    fn line_end(&mut self, sink: &mut PathSink) {
        match self.state {
            2 => self.emit_line(sink, self.x1, self.y1),
            3 => {
                let t0 = self.t0;
                let t1 = self.slope2(t0);
                self.emit_segment(sink, t0, t1);
            }
            _ => {}
        }
        if closes_segment(self.mode, self.state == 1) {
            sink.close();
        }
        self.mode = toggle(self.mode);
    }

    fn point(&mut self, sink: &mut PathSink, x: f64, y: f64) {
        let (x, y) = if self.swap { (y, x) } else { (x, y) };
        if x == self.x1 && y == self.y1 {
            // Coincident samples carry no slope information.
            return;
        }
        let mut t1 = f64::NAN;
        match self.state {
            0 => {
                self.state = 1;
                self.emit_open(sink, x, y);
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.emit_segment(sink, t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                let t0 = self.t0;
                self.emit_segment(sink, t0, t1);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }
}

#[cfg(test)]
mod tests {
    use super::natural_control_points;

    #[test]
    fn natural_control_points_of_collinear_samples_sit_at_thirds() {
        let (first, second) = natural_control_points(&[0.0, 1.0, 2.0]);
        assert!((first[0] - 1.0 / 3.0).abs() <= 1e-9);
        assert!((second[0] - 2.0 / 3.0).abs() <= 1e-9);
        assert!((first[1] - 4.0 / 3.0).abs() <= 1e-9);
        assert!((second[1] - 5.0 / 3.0).abs() <= 1e-9);
    }
}
