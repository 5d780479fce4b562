//! Single-number series summaries shown next to legend items.

use std::collections::HashSet;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::scales::XScale;
use crate::core::types::SeriesDatum;

/// Aggregation kind shown next to a legend item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendValueKind {
    /// Value at the first x position of the domain.
    FirstValue,
    /// Value at the last x position of the domain.
    LastValue,
    FirstNonNullValue,
    LastNonNullValue,
    Average,
    Median,
    Min,
    Max,
    Total,
    Count,
    DistinctCount,
    Variance,
    StdDeviation,
    Range,
    Difference,
    DifferencePercent,
}

impl LegendValueKind {
    /// Column title shown in the legend header.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            LegendValueKind::FirstValue => "First",
            LegendValueKind::FirstNonNullValue => "First non-null",
            LegendValueKind::LastValue => "Last",
            LegendValueKind::LastNonNullValue => "Last non-null",
            LegendValueKind::Average => "Avg",
            LegendValueKind::Median => "Median",
            LegendValueKind::Min => "Min",
            LegendValueKind::Max => "Max",
            LegendValueKind::Total => "Total",
            LegendValueKind::Count => "Count",
            LegendValueKind::DistinctCount => "Dist Count",
            LegendValueKind::Variance => "Variance",
            LegendValueKind::StdDeviation => "Std dev",
            LegendValueKind::Range => "Range",
            LegendValueKind::Difference => "Diff",
            LegendValueKind::DifferencePercent => "Diff %",
        }
    }
}

/// Computes the legend value of a series.
///
/// Ordinal x domains have no positional first/last semantics, so every kind
/// yields `None` on them. All other aggregations run over the non-null
/// effective `y1` values, so fit substitutes count as data; `Count` and
/// `DistinctCount` report 0 on fully-null data, the rest yield `None`.
#[must_use]
pub fn legend_value(
    data: &[SeriesDatum],
    x_scale: &XScale,
    kind: LegendValueKind,
) -> Option<f64> {
    let XScale::Continuous(scale) = x_scale else {
        return None;
    };
    let (domain_start, domain_end) = scale.domain();
    match kind {
        LegendValueKind::FirstValue => value_at(data, domain_start),
        LegendValueKind::LastValue => last_value_at(data, domain_end),
        LegendValueKind::FirstNonNullValue => data.iter().find_map(|datum| datum.effective_y1()),
        LegendValueKind::LastNonNullValue => {
            data.iter().rev().find_map(|datum| datum.effective_y1())
        }
        LegendValueKind::Average => {
            let values = non_null_values(data);
            if values.is_empty() {
                return None;
            }
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
        LegendValueKind::Median => median(&non_null_values(data)),
        LegendValueKind::Min => non_null_values(data).into_iter().reduce(f64::min),
        LegendValueKind::Max => non_null_values(data).into_iter().reduce(f64::max),
        LegendValueKind::Total => {
            let values = non_null_values(data);
            if values.is_empty() {
                return None;
            }
            Some(values.iter().sum())
        }
        LegendValueKind::Count => Some(non_null_values(data).len() as f64),
        LegendValueKind::DistinctCount => {
            let distinct: HashSet<OrderedFloat<f64>> = data
                .iter()
                .filter_map(|datum| datum.effective_y1())
                .map(OrderedFloat)
                .collect();
            Some(distinct.len() as f64)
        }
        LegendValueKind::Variance => sample_variance(&non_null_values(data)),
        LegendValueKind::StdDeviation => {
            sample_variance(&non_null_values(data)).map(f64::sqrt)
        }
        LegendValueKind::Range => {
            let values = non_null_values(data);
            let min = values.iter().copied().reduce(f64::min)?;
            let max = values.iter().copied().reduce(f64::max)?;
            Some(max - min)
        }
        LegendValueKind::Difference => {
            let (first, last) = non_null_endpoints(data)?;
            Some(last - first)
        }
        LegendValueKind::DifferencePercent => {
            let (first, last) = non_null_endpoints(data)?;
            if first == 0.0 {
                return None;
            }
            Some((last - first) / first * 100.0)
        }
    }
}

fn value_at(data: &[SeriesDatum], domain_x: f64) -> Option<f64> {
    data.iter()
        .find(|datum| datum.x.as_number() == Some(domain_x))
        .and_then(|datum| datum.effective_y1())
}

/// Duplicate x entries at the domain end resolve to the latest datum.
fn last_value_at(data: &[SeriesDatum], domain_x: f64) -> Option<f64> {
    data.iter()
        .rev()
        .find(|datum| datum.x.as_number() == Some(domain_x))
        .and_then(|datum| datum.effective_y1())
}

fn non_null_values(data: &[SeriesDatum]) -> Vec<f64> {
    data.iter().filter_map(|datum| datum.effective_y1()).collect()
}

fn non_null_endpoints(data: &[SeriesDatum]) -> Option<(f64, f64)> {
    let first = data.iter().find_map(|datum| datum.effective_y1())?;
    let last = data.iter().rev().find_map(|datum| datum.effective_y1())?;
    Some((first, last))
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_of_squares = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>();
    Some(sum_of_squares / (n - 1.0))
}
