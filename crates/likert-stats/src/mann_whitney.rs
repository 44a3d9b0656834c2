//! Two-sided Mann–Whitney U test.
//!
//! Nonparametric two-sample test for a difference in distribution, used to
//! compare the scored responses of an include cohort against a comparison
//! cohort. Ordinal Likert scores are heavily tied and far from normal, which
//! rules out the t-test.
//!
//! Two methods are provided:
//!
//! - [`Method::Exact`]: the exact null distribution of U, obtained by
//!   counting rank-sum subsets. Used whenever either sample has fewer than 8
//!   observations, where the normal approximation is unreliable. Like the
//!   reference implementations, the exact null distribution assumes no ties.
//! - [`Method::Asymptotic`]: normal approximation with tie correction and
//!   continuity correction, for samples of 8 or more on both sides.
//!
//! [`p_value`] picks the method by that sample-size rule; use
//! [`p_value_with`] to force one.
//!
//! # Examples
//!
//! ```
//! use likert_stats::mann_whitney::p_value;
//!
//! // Complete separation of two samples of three: p = 2 / C(6, 3) = 0.1
//! let p = p_value(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
//! assert!((p - 0.1).abs() < 1e-9);
//!
//! // Either sample empty: no test.
//! assert!(p_value(&[], &[1.0]).is_none());
//! ```

use statrs::distribution::{ContinuousCDF, Normal};

/// Which null-distribution evaluation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Exact subset-counting null distribution.
    Exact,
    /// Normal approximation with tie and continuity corrections.
    Asymptotic,
}

/// Smallest per-sample size at which the normal approximation is trusted.
const ASYMPTOTIC_MIN: usize = 8;

/// Two-sided p-value, choosing the method from the sample sizes: exact when
/// either sample has fewer than [`ASYMPTOTIC_MIN`] observations, asymptotic
/// otherwise. `None` when either sample is empty.
#[must_use]
pub fn p_value(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let method = if xs.len() < ASYMPTOTIC_MIN || ys.len() < ASYMPTOTIC_MIN {
        Method::Exact
    } else {
        Method::Asymptotic
    };
    p_value_with(xs, ys, method)
}

/// Two-sided p-value with an explicit method. `None` when either sample is
/// empty.
#[must_use]
pub fn p_value_with(xs: &[f64], ys: &[f64], method: Method) -> Option<f64> {
    if xs.is_empty() || ys.is_empty() {
        return None;
    }
    let u1 = u_statistic(xs, ys);
    let p = match method {
        Method::Exact => exact_p(u1, xs.len(), ys.len()),
        Method::Asymptotic => asymptotic_p(u1, xs, ys),
    };
    Some(p.clamp(0.0, 1.0))
}

/// U statistic of the first sample, from tie-averaged ranks.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn u_statistic(xs: &[f64], ys: &[f64]) -> f64 {
    let ranks = average_ranks(xs, ys);
    let r1: f64 = ranks[..xs.len()].iter().sum();
    let n1 = xs.len() as f64;
    r1 - n1 * (n1 + 1.0) / 2.0
}

/// Ranks of the combined sample (first sample's entries first), with tied
/// values sharing their average rank.
#[expect(clippy::cast_precision_loss)]
fn average_ranks(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let combined: Vec<f64> = xs.iter().chain(ys).copied().collect();
    let mut order: Vec<usize> = (0..combined.len()).collect();
    order.sort_by(|&a, &b| combined[a].total_cmp(&combined[b]));

    let mut ranks = vec![0.0; combined.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len()
            && combined[order[end + 1]].total_cmp(&combined[order[start]]).is_eq()
        {
            end += 1;
        }
        // Ranks are 1-based; tied entries share the group's average rank.
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end] {
            ranks[index] = rank;
        }
        start = end + 1;
    }
    ranks
}

/// Exact two-sided p-value: `2 * P(U <= min(U1, U2))` under the tie-free
/// null distribution of U.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn exact_p(u1: f64, n1: usize, n2: usize) -> f64 {
    let u2 = (n1 * n2) as f64 - u1;
    let u_min = u1.min(u2);

    // Count over the smaller sample; the null distribution is the same for
    // either side.
    let n = n1.min(n2);
    let total = n1 + n2;
    let counts = rank_sum_counts(n, total);

    // Rank sums are integers; a half-integer U from tie-averaged ranks
    // rounds down in the CDF.
    let min_rank_sum = n * (n + 1) / 2;
    let cutoff = u_min.floor() as usize + min_rank_sum;
    let below: f64 = counts.iter().take(cutoff + 1).sum();
    let all: f64 = counts.iter().sum();
    2.0 * below / all
}

/// `counts[s]` = number of size-`n` subsets of ranks `1..=total` whose rank
/// sum is `s`. Exact in `f64` for the sample sizes the exact method accepts.
fn rank_sum_counts(n: usize, total: usize) -> Vec<f64> {
    let max_sum = (0..n).map(|i| total - i).sum::<usize>();
    let mut counts = vec![vec![0.0; max_sum + 1]; n + 1];
    counts[0][0] = 1.0;
    for rank in 1..=total {
        for size in (1..=n).rev() {
            for sum in (rank..=max_sum).rev() {
                counts[size][sum] += counts[size - 1][sum - rank];
            }
        }
    }
    counts.pop().unwrap()
}

/// Normal-approximation two-sided p-value with tie correction and
/// continuity correction.
#[expect(clippy::cast_precision_loss)]
fn asymptotic_p(u1: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let n1 = xs.len() as f64;
    let n2 = ys.len() as f64;
    let n = n1 + n2;

    let mu = n1 * n2 / 2.0;
    let tie_term = tie_correction(xs, ys);
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance <= 0.0 {
        // Every observation tied: no evidence of a difference.
        return 1.0;
    }

    // Evaluate at the larger of the two U statistics; the continuity
    // correction then always pulls toward the null.
    let u_big = u1.max(n1 * n2 - u1);
    let z = (u_big - mu - 0.5) / variance.sqrt();

    let normal = Normal::new(0.0, 1.0).expect("unit normal");
    2.0 * (1.0 - normal.cdf(z))
}

/// `sum(t^3 - t)` over the tie groups of the combined sample.
#[expect(clippy::cast_precision_loss)]
fn tie_correction(xs: &[f64], ys: &[f64]) -> f64 {
    let mut combined: Vec<f64> = xs.iter().chain(ys).copied().collect();
    combined.sort_by(f64::total_cmp);

    let mut term = 0.0;
    let mut start = 0;
    while start < combined.len() {
        let mut end = start;
        while end + 1 < combined.len()
            && combined[end + 1].total_cmp(&combined[start]).is_eq()
        {
            end += 1;
        }
        let t = (end - start + 1) as f64;
        term += t.powi(3) - t;
        start = end + 1;
    }
    term
}
