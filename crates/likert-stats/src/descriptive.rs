//! Descriptive statistics over a sample of scored responses.
//!
//! All functions take the sample as a plain `f64` slice and return `None`
//! when the sample is below the minimum size for the statistic: one
//! observation for [`mean`] and [`median`], two for [`standard_error`]
//! (a single observation has no estimable spread).

/// Arithmetic mean of the sample.
///
/// # Examples
///
/// ```
/// use likert_stats::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 1.0, 0.0, 2.0, -2.0]), Some(0.4));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of the sample.
///
/// Uses the population formula (divisor `n`, not `n - 1`), matching the
/// variance definition the margin-of-error calculation is built on.
///
/// # Examples
///
/// ```
/// use likert_stats::descriptive::population_std_dev;
///
/// let sd = population_std_dev(&[1.0, 1.0, 0.0, 2.0, -2.0]).unwrap();
/// assert!((sd - 1.3565).abs() < 1e-4);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let n = values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

/// Standard error of the mean: population standard deviation over `sqrt(n)`.
///
/// `None` for samples of fewer than two observations.
///
/// # Examples
///
/// ```
/// use likert_stats::descriptive::standard_error;
///
/// let se = standard_error(&[1.0, 1.0, 0.0, 2.0, -2.0]).unwrap();
/// assert!((se - 0.6066).abs() < 1e-4);
/// assert_eq!(standard_error(&[3.0]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn standard_error(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    Some(population_std_dev(values)? / (values.len() as f64).sqrt())
}

/// Statistical median of the sample: middle value for odd sizes, mid-pair
/// average for even sizes.
///
/// # Examples
///
/// ```
/// use likert_stats::descriptive::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
/// ```
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_sorted(&sorted)
}

/// [`median`] over values already sorted in ascending order.
#[must_use]
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(f64::midpoint(sorted[mid - 1], sorted[mid]))
    }
}
