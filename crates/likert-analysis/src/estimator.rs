//! Per-cohort point estimates for one scored response series.

use likert_stats::{descriptive, mann_whitney, median_ci, population};
use likert_survey::SurveyConfig;
use serde::{Deserialize, Serialize};

/// Point estimates for one (question code, cohort) score series.
///
/// Every statistic degrades independently to `None` when its sample-size
/// precondition is unmet: the mean needs one observation, the margin of
/// error two, the median bounds one. `sample_size` is always the number of
/// scoreable responses, so a sparse slice stays distinguishable from a
/// neutral one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortEstimate {
    /// Number of scored (substantive) responses.
    pub sample_size: usize,
    /// Arithmetic mean of the scores.
    pub mean: Option<f64>,
    /// Finite-population-corrected margin of error of the mean.
    #[serde(rename = "moe")]
    pub margin_of_error: Option<f64>,
    /// Lower bound of the median confidence interval.
    #[serde(rename = "lconf")]
    pub lower_conf: Option<f64>,
    /// Statistical median.
    pub median: Option<f64>,
    /// Upper bound of the median confidence interval.
    #[serde(rename = "hconf")]
    pub upper_conf: Option<f64>,
}

impl CohortEstimate {
    /// Estimates every statistic the series supports.
    #[must_use]
    pub fn from_scores(scores: &[i32], config: &SurveyConfig) -> Self {
        let values: Vec<f64> = scores.iter().copied().map(f64::from).collect();
        let interval =
            median_ci::median_confidence_interval(&values, config.zscore, config.population);
        Self {
            sample_size: values.len(),
            mean: descriptive::mean(&values),
            margin_of_error: population::margin_of_error(
                &values,
                config.zscore,
                config.population,
            ),
            lower_conf: interval.map(|i| i.lower),
            median: interval.map(|i| i.median),
            upper_conf: interval.map(|i| i.upper),
        }
    }

    /// The all-`None` estimate of an empty or unscoreable series.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sample_size: 0,
            mean: None,
            margin_of_error: None,
            lower_conf: None,
            median: None,
            upper_conf: None,
        }
    }
}

/// Two-sided Mann–Whitney p-value between two score series, `None` when
/// either side has no scored responses.
#[must_use]
pub fn significance(include_scores: &[i32], comparison_scores: &[i32]) -> Option<f64> {
    let xs: Vec<f64> = include_scores.iter().copied().map(f64::from).collect();
    let ys: Vec<f64> = comparison_scores.iter().copied().map(f64::from).collect();
    mann_whitney::p_value(&xs, &ys)
}
