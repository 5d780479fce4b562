use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::XValue;
use crate::error::{ChartError, ChartResult};

/// Mapping kind reported by a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Uniform spacing in raw domain units.
    #[default]
    Linear,
    /// Uniform spacing in natural-log domain units (domain must be > 0).
    Log,
    /// Discrete category slots of equal bandwidth.
    Ordinal,
}

/// Continuous domain-to-pixel mapping used for y axes and numeric x axes.
///
/// The domain may be authored descending; `is_inverted` reports that
/// orientation and `range.0` stays the baseline endpoint either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousScale {
    kind: ScaleKind,
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    bandwidth: f64,
}

impl ContinuousScale {
    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if kind == ScaleKind::Ordinal {
            return Err(ChartError::InvalidData(
                "continuous scale cannot use the ordinal kind".to_owned(),
            ));
        }
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            warn!(start = domain.0, end = domain.1, "rejected scale domain");
            return Err(ChartError::InvalidDomain {
                start: domain.0,
                end: domain.1,
            });
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            warn!(start = range.0, end = range.1, "rejected scale range");
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        if kind == ScaleKind::Log && (domain.0 <= 0.0 || domain.1 <= 0.0) {
            warn!(start = domain.0, end = domain.1, "rejected log scale domain");
            return Err(ChartError::InvalidData(
                "log scale domain must be strictly positive".to_owned(),
            ));
        }

        Ok(Self {
            kind,
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            bandwidth: 0.0,
        })
    }

    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Linear, domain, range)
    }

    pub fn log(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::new(ScaleKind::Log, domain, range)
    }

    /// Band width for clustered bars laid out on a continuous x axis.
    pub fn with_bandwidth(mut self, bandwidth: f64) -> ChartResult<Self> {
        if !bandwidth.is_finite() || bandwidth < 0.0 {
            warn!(bandwidth, "rejected scale bandwidth");
            return Err(ChartError::InvalidData(
                "scale bandwidth must be finite and >= 0".to_owned(),
            ));
        }
        self.bandwidth = bandwidth;
        Ok(self)
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn is_log(self) -> bool {
        self.kind == ScaleKind::Log
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }

    /// A descending domain flips the axis orientation.
    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.domain_start > self.domain_end
    }

    /// Maps a domain value to a pixel coordinate. Total by construction;
    /// non-positive input on a log scale clamps to the range start, callers
    /// filter such values before plotting.
    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let (v, d0, d1) = match self.kind {
            ScaleKind::Log => {
                if value <= 0.0 {
                    return self.range_start;
                }
                (value.ln(), self.domain_start.ln(), self.domain_end.ln())
            }
            _ => (value, self.domain_start, self.domain_end),
        };
        let normalized = (v - d0) / (d1 - d0);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn is_value_in_domain(self, value: f64) -> bool {
        let min = self.domain_start.min(self.domain_end);
        let max = self.domain_start.max(self.domain_end);
        value >= min && value <= max
    }
}

/// Discrete category-to-pixel mapping with equal band slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalScale {
    domain: Vec<XValue>,
    range_start: f64,
    range_end: f64,
}

impl OrdinalScale {
    pub fn new(domain: Vec<XValue>, range: (f64, f64)) -> ChartResult<Self> {
        if domain.is_empty() {
            warn!("rejected empty ordinal domain");
            return Err(ChartError::InvalidData(
                "ordinal scale requires at least one category".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            warn!(start = range.0, end = range.1, "rejected scale range");
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(&self) -> &[XValue] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Pixel span of one category slot.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.range_end - self.range_start) / self.domain.len() as f64
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    /// Pixel position of a category slot start, `None` for unknown categories.
    #[must_use]
    pub fn scale(&self, value: &XValue) -> Option<f64> {
        self.domain
            .iter()
            .position(|category| category == value)
            .map(|index| self.range_start + self.step() * index as f64)
    }

    #[must_use]
    pub fn is_value_in_domain(&self, value: &XValue) -> bool {
        self.domain.contains(value)
    }
}

/// X-axis scale: either continuous (numeric) or ordinal (categorical).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum XScale {
    Continuous(ContinuousScale),
    Ordinal(OrdinalScale),
}

impl XScale {
    #[must_use]
    pub fn scale(&self, value: &XValue) -> Option<f64> {
        match self {
            Self::Continuous(scale) => value.as_number().map(|v| scale.scale(v)),
            Self::Ordinal(scale) => scale.scale(value),
        }
    }

    #[must_use]
    pub fn is_value_in_domain(&self, value: &XValue) -> bool {
        match self {
            Self::Continuous(scale) => value
                .as_number()
                .is_some_and(|v| scale.is_value_in_domain(v)),
            Self::Ordinal(scale) => scale.is_value_in_domain(value),
        }
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        match self {
            Self::Continuous(scale) => scale.bandwidth(),
            Self::Ordinal(scale) => scale.bandwidth(),
        }
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Continuous(scale) => scale.range(),
            Self::Ordinal(scale) => scale.range(),
        }
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        match self {
            Self::Continuous(scale) => scale.is_inverted(),
            Self::Ordinal(_) => false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Continuous(scale) => scale.kind(),
            Self::Ordinal(_) => ScaleKind::Ordinal,
        }
    }
}

impl From<ContinuousScale> for XScale {
    fn from(scale: ContinuousScale) -> Self {
        Self::Continuous(scale)
    }
}

impl From<OrdinalScale> for XScale {
    fn from(scale: OrdinalScale) -> Self {
        Self::Ordinal(scale)
    }
}
