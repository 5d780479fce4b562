//! Deterministic, backend-independent text measurement.
//!
//! Hosts draw labels with whatever text stack they have; geometry generation
//! only needs stable box estimates. A [`TextBoxCalculator`] is acquired once
//! before a render loop, measures every label in the batch, and releases its
//! cache when dropped at the end of the scope.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Estimated bounding box of a rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextDimensions {
    pub width: f64,
    pub height: f64,
}

/// Label measurement session with per-text memoization.
///
/// Bar sets tend to repeat label strings, so raw measurements are cached by
/// `(text, font_family, font_size)` for the lifetime of the session.
#[derive(Debug, Default)]
pub struct TextBoxCalculator {
    cache: HashMap<(String, String, OrderedFloat<f64>), f64>,
}

impl TextBoxCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures `text` at `font_size`, adding `padding` to the width.
    /// The height of a single-line label is its font size.
    pub fn compute(
        &mut self,
        text: &str,
        padding: f64,
        font_size: f64,
        font_family: &str,
    ) -> TextDimensions {
        let raw_width = if text.is_empty() {
            0.0
        } else {
            *self
                .cache
                .entry((
                    text.to_owned(),
                    font_family.to_owned(),
                    OrderedFloat(font_size),
                ))
                .or_insert_with(|| estimate_text_width(text, font_size, font_family))
        };
        TextDimensions {
            width: raw_width + padding,
            height: font_size,
        }
    }
}

fn estimate_text_width(text: &str, font_size: f64, font_family: &str) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let monospace = font_family.contains("mono");
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + if monospace {
            0.6
        } else {
            match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        }
    });
    (units * font_size).max(font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_labels_hit_the_cache() {
        let mut calculator = TextBoxCalculator::new();
        let first = calculator.compute("100", 1.0, 8.0, "sans-serif");
        let second = calculator.compute("100", 1.0, 8.0, "sans-serif");
        assert_eq!(first, second);
        assert_eq!(calculator.cache.len(), 1);
    }

    #[test]
    fn empty_text_measures_only_padding() {
        let mut calculator = TextBoxCalculator::new();
        let dims = calculator.compute("", 1.0, 8.0, "sans-serif");
        assert_eq!(dims.width, 1.0);
        assert_eq!(dims.height, 8.0);
    }

    #[test]
    fn monospace_families_measure_per_cell() {
        let mut calculator = TextBoxCalculator::new();
        let dims = calculator.compute("1.5", 0.0, 10.0, "monospace");
        assert!((dims.width - 18.0).abs() <= 1e-9);
    }
}
