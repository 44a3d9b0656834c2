//! Nonparametric confidence interval around the sample median.
//!
//! The interval is rank-based: with sample size `n`, critical value `z` and
//! finite population correction `fpc`, the bounds sit at rank offsets
//!
//! ```text
//! j = ceil(n/2 + z * fpc * sqrt(n * 0.25))    (upper)
//! k = ceil(n/2 - z * fpc * sqrt(n * 0.25))    (lower)
//! ```
//!
//! into the sorted sample. A rank that falls at or beyond the sample edge is
//! clamped to the sample minimum/maximum, so small samples still yield a
//! (maximally wide) interval rather than none.

use crate::{descriptive, population};

/// Median and its rank-based confidence bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianInterval {
    /// Lower confidence bound.
    pub lower: f64,
    /// Statistical median of the sample.
    pub median: f64,
    /// Upper confidence bound.
    pub upper: f64,
}

/// Computes the median confidence interval for a sample drawn from a finite
/// population of the given size.
///
/// Returns `None` for an empty sample. A single-observation sample collapses
/// to a zero-width interval at that observation.
///
/// # Examples
///
/// ```
/// use likert_stats::median_ci::median_confidence_interval;
///
/// let scores = [1.0, 1.0, 0.0, 2.0, -2.0];
/// let interval = median_confidence_interval(&scores, 1.96, 350).unwrap();
/// assert_eq!(interval.lower, 0.0);
/// assert_eq!(interval.median, 1.0);
/// assert_eq!(interval.upper, 2.0);
///
/// assert!(median_confidence_interval(&[], 1.96, 350).is_none());
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn median_confidence_interval(
    values: &[f64],
    zscore: f64,
    population: usize,
) -> Option<MedianInterval> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let fpc = population::finite_population_correction(population, n);
    let offset = zscore * fpc * (n as f64 * 0.25).sqrt();
    let j = (n as f64 * 0.5 + offset).ceil();
    let k = (n as f64 * 0.5 - offset).ceil();

    let last = n - 1;
    let upper = if j > 0.0 && (j as usize) < last {
        sorted[j as usize]
    } else {
        sorted[last]
    };
    let lower = if k > 0.0 && (k as usize) < last {
        sorted[k as usize]
    } else {
        sorted[0]
    };
    let median = descriptive::median_sorted(&sorted)?;

    Some(MedianInterval {
        lower,
        median,
        upper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_has_no_interval() {
        assert!(median_confidence_interval(&[], 1.96, 350).is_none());
    }

    #[test]
    fn test_single_observation_collapses_to_point() {
        let interval = median_confidence_interval(&[1.0], 1.96, 350).unwrap();
        assert_eq!(interval.lower, 1.0);
        assert_eq!(interval.median, 1.0);
        assert_eq!(interval.upper, 1.0);
    }

    #[test]
    fn test_bounds_clamp_to_sample_edges() {
        // Small n pushes both rank offsets past the edges.
        let interval = median_confidence_interval(&[-1.0, 0.0, 2.0], 1.96, 350).unwrap();
        assert_eq!(interval.lower, -1.0);
        assert_eq!(interval.upper, 2.0);
        assert_eq!(interval.median, 0.0);
    }

    #[test]
    fn test_interval_orders_around_median() {
        let values: Vec<f64> = (0..40).map(f64::from).collect();
        let interval = median_confidence_interval(&values, 1.96, 350).unwrap();
        assert!(interval.lower <= interval.median);
        assert!(interval.median <= interval.upper);
        // Large enough sample: bounds are interior, not clamped.
        assert!(interval.lower > 0.0);
        assert!(interval.upper < 39.0);
    }

    #[test]
    fn test_interval_narrows_with_sample_size() {
        let narrow: Vec<f64> = (0..100).map(|i| f64::from(i % 5)).collect();
        let wide: Vec<f64> = (0..10).map(|i| f64::from(i % 5)).collect();
        let narrow = median_confidence_interval(&narrow, 1.96, 350).unwrap();
        let wide = median_confidence_interval(&wide, 1.96, 350).unwrap();
        assert!(narrow.upper - narrow.lower <= wide.upper - wide.lower);
    }
}
