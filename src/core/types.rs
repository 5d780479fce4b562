use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Domain-side x value prior to pixel scaling.
///
/// Continuous scales consume the numeric variant; ordinal scales match the
/// category variant against their domain. Equality and hashing are total so
/// the value can key the spatial index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum XValue {
    Number(OrderedFloat<f64>),
    Category(String),
}

impl XValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }

    /// Unix epoch seconds as the numeric domain value.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::number(time.timestamp_millis() as f64 / 1000.0)
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            Self::Category(_) => None,
        }
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for XValue {
    fn from(name: &str) -> Self {
        Self::category(name)
    }
}

/// Values substituted by an upstream fit pass where the source series had
/// nulls. A present `y1` marks the datum as synthesized rather than observed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilledValues {
    pub y0: Option<f64>,
    pub y1: Option<f64>,
}

/// One sample of a data series after domain transforms.
///
/// `y0`/`y1` are the lower/upper values actually plotted; `initial_y0`/
/// `initial_y1` keep the pre-transform originals for labels and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDatum {
    pub x: XValue,
    pub y0: Option<f64>,
    pub y1: Option<f64>,
    pub initial_y0: Option<f64>,
    pub initial_y1: Option<f64>,
    pub filled: Option<FilledValues>,
}

impl SeriesDatum {
    #[must_use]
    pub fn new(x: impl Into<XValue>, y1: Option<f64>) -> Self {
        Self {
            x: x.into(),
            y0: None,
            y1,
            initial_y0: None,
            initial_y1: y1,
            filled: None,
        }
    }

    #[must_use]
    pub fn with_y0(mut self, y0: Option<f64>) -> Self {
        self.y0 = y0;
        self.initial_y0 = y0;
        self
    }

    #[must_use]
    pub fn with_initial(mut self, initial_y0: Option<f64>, initial_y1: Option<f64>) -> Self {
        self.initial_y0 = initial_y0;
        self.initial_y1 = initial_y1;
        self
    }

    #[must_use]
    pub fn with_filled_y1(mut self, y1: f64) -> Self {
        let mut filled = self.filled.unwrap_or_default();
        filled.y1 = Some(y1);
        self.filled = Some(filled);
        self
    }

    /// The value the line/area path plots: `y1`, or its fit substitute when
    /// the observed `y1` is null.
    #[must_use]
    pub fn effective_y1(&self) -> Option<f64> {
        self.y1.or_else(|| self.filled.and_then(|filled| filled.y1))
    }

    /// True when an upstream fit pass substituted this datum's `y1`.
    #[must_use]
    pub fn is_fit_substituted(&self) -> bool {
        self.filled.is_some_and(|filled| filled.y1.is_some())
    }
}
