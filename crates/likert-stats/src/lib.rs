//! Statistical estimation utilities for small-sample survey analysis.
//!
//! This crate provides the sampling-theory kernel used to compare scored
//! Likert responses between respondent cohorts:
//!
//! - **Descriptive statistics**: mean, population standard deviation,
//!   standard error of the mean
//! - **Finite population correction**: variance correction for sampling
//!   without replacement from a known-size population
//! - **Margin of error**: finite-population-corrected half-width of the
//!   confidence interval around the mean
//! - **Median confidence interval**: nonparametric, rank-based interval
//!   around the sample median
//! - **Mann–Whitney U test**: two-sided, two-sample significance test with
//!   an exact small-sample method and a tie-corrected normal approximation
//!
//! # Degradation policy
//!
//! Survey slices are routinely tiny (a cohort of one respondent is an
//! expected, user-visible outcome), so every estimator degrades to `None`
//! when its minimum sample size is unmet instead of returning an error. A
//! mean needs one observation, a standard error two, a significance test one
//! observation on each side.
//!
//! # Modules
//!
//! - [`descriptive`]: mean, standard deviation, standard error
//! - [`population`]: finite population correction and margin of error
//! - [`median_ci`]: rank-based median confidence intervals
//! - [`mann_whitney`]: the two-sample significance test
//!
//! # Examples
//!
//! ## Mean and margin of error
//!
//! ```
//! use likert_stats::{descriptive, population};
//!
//! let scores = [1.0, 1.0, 0.0, 2.0, -2.0];
//! assert_eq!(descriptive::mean(&scores), Some(0.4));
//!
//! let moe = population::margin_of_error(&scores, 1.96, 350).unwrap();
//! assert!((moe - 1.182).abs() < 1e-3);
//! ```
//!
//! ## Median confidence interval
//!
//! ```
//! use likert_stats::median_ci;
//!
//! let scores = [1.0, 1.0, 0.0, 2.0, -2.0];
//! let interval = median_ci::median_confidence_interval(&scores, 1.96, 350).unwrap();
//! assert_eq!(interval.median, 1.0);
//! assert!(interval.lower <= interval.median && interval.median <= interval.upper);
//! ```
//!
//! ## Significance test
//!
//! ```
//! use likert_stats::mann_whitney;
//!
//! let low = [1.0, 2.0, 3.0];
//! let high = [4.0, 5.0, 6.0];
//! let p = mann_whitney::p_value(&low, &high).unwrap();
//! assert!((p - 0.1).abs() < 1e-9);
//! ```

pub mod descriptive;
pub mod mann_whitney;
pub mod median_ci;
pub mod population;
