//! Finite-population sampling corrections.
//!
//! Survey samples are drawn without replacement from a small, known
//! population (a department of a few hundred people), so naive standard
//! errors overstate the sampling variance. The finite population correction
//! shrinks them by `sqrt((N - n) / (N - 1))`.

use crate::descriptive;

/// Finite population correction factor `sqrt((N - n) / (N - 1))`.
///
/// `population` is the estimated population size `N`, `sample` the number of
/// observations `n`. The factor is 1 for a negligible sampling fraction and
/// falls to 0 as the sample exhausts the population. Degenerate inputs
/// (population of at most one, or a sample at least as large as the
/// population) yield 0: there is no sampling variance left to correct.
///
/// # Examples
///
/// ```
/// use likert_stats::population::finite_population_correction;
///
/// let fpc = finite_population_correction(350, 5);
/// assert!((fpc - 0.9943).abs() < 1e-4);
/// assert_eq!(finite_population_correction(10, 10), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn finite_population_correction(population: usize, sample: usize) -> f64 {
    if population <= 1 || sample >= population {
        return 0.0;
    }
    let n_pop = population as f64;
    let n = sample as f64;
    ((n_pop - n) / (n_pop - 1.0)).sqrt()
}

/// Margin of error of the sample mean at the configured confidence level.
///
/// `standard_error(values) * zscore * fpc(population, n)` — the
/// finite-population-corrected half-width of the confidence interval around
/// the mean. `None` when the standard error is undefined (fewer than two
/// observations).
///
/// # Examples
///
/// ```
/// use likert_stats::population::margin_of_error;
///
/// let scores = [1.0, 1.0, 0.0, 2.0, -2.0];
/// let moe = margin_of_error(&scores, 1.96, 350).unwrap();
/// assert!((moe - 1.182).abs() < 1e-3);
///
/// assert_eq!(margin_of_error(&[1.0], 1.96, 350), None);
/// ```
#[must_use]
pub fn margin_of_error(values: &[f64], zscore: f64, population: usize) -> Option<f64> {
    let se = descriptive::standard_error(values)?;
    Some(se * zscore * finite_population_correction(population, values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fpc_is_one_for_tiny_sampling_fraction() {
        let fpc = finite_population_correction(1_000_000, 2);
        assert!((fpc - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fpc_shrinks_with_sample_size() {
        let small = finite_population_correction(350, 5);
        let large = finite_population_correction(350, 300);
        assert!(large < small);
        assert!(small < 1.0);
    }

    #[test]
    fn test_fpc_degenerate_population() {
        assert_eq!(finite_population_correction(1, 0), 0.0);
        assert_eq!(finite_population_correction(0, 0), 0.0);
        assert_eq!(finite_population_correction(5, 7), 0.0);
    }

    #[test]
    fn test_margin_of_error_known_sample() {
        // scores for answers [Thriving, Thriving, Surviving, Excelling, In crisis]
        let scores = [1.0, 1.0, 0.0, 2.0, -2.0];
        let moe = margin_of_error(&scores, 1.96, 350).unwrap();
        let se = 1.356_465_996_625_054_6 / 5.0_f64.sqrt();
        let fpc = (345.0_f64 / 349.0).sqrt();
        assert!((moe - se * 1.96 * fpc).abs() < 1e-12);
    }

    #[test]
    fn test_margin_of_error_undefined_below_two() {
        assert_eq!(margin_of_error(&[], 1.96, 350), None);
        assert_eq!(margin_of_error(&[0.0], 1.96, 350), None);
    }
}
