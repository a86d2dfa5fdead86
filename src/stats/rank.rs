//! Rank-based tests: Wilcoxon signed-rank and Mann-Whitney U.
//!
//! Both use the large-sample normal approximation with average ranks for
//! ties, the standard tie correction of the null variance, and a 0.5
//! continuity correction. The raw rank statistic is reported alongside the
//! z value actually used for the p-value.

use serde::{Deserialize, Serialize};

use super::{p_value, std_normal};
use crate::error::{StatError, StatResult};
use crate::types::Alternative;

/// Output of a rank-based test.
///
/// `statistic` is the rank statistic itself (W⁺ for Wilcoxon, U for
/// Mann-Whitney); `z` is the continuity-corrected normal deviate from which
/// `p_value` is computed. Callers that want a labeled report wrap `z` and
/// `p_value` in [`crate::report::TestReport::z`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankTest {
    /// Rank statistic (W⁺ or U).
    pub statistic: f64,
    /// Continuity-corrected normal deviate.
    pub z: f64,
    /// p-value under the normal approximation.
    pub p_value: f64,
}

/// Wilcoxon signed-rank test of a sample of differences against a zero
/// median.
///
/// Zero differences are dropped before ranking, following the standard
/// treatment. The statistic is W⁺, the sum of ranks of the positive
/// differences.
///
/// # Errors
/// `EmptySample` if the input is empty, `DegenerateSample` if every
/// difference is zero or all magnitudes are tied.
pub fn wilcoxon_signed_rank(diffs: &[f64], alternative: Alternative) -> StatResult<RankTest> {
    if diffs.is_empty() {
        return Err(StatError::EmptySample {
            label: "differences".to_string(),
        });
    }

    let mut nonzero: Vec<f64> = diffs.iter().copied().filter(|&d| d != 0.0).collect();
    if nonzero.is_empty() {
        return Err(StatError::DegenerateSample {
            label: "differences".to_string(),
            message: "every difference is zero".to_string(),
        });
    }
    nonzero.sort_unstable_by(|a, b| a.abs().total_cmp(&b.abs()));

    let magnitudes: Vec<f64> = nonzero.iter().map(|d| d.abs()).collect();
    let (ranks, tie_term) = average_ranks(&magnitudes);

    let n = nonzero.len() as f64;
    let w_plus: f64 = nonzero
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| r)
        .sum();

    let mu = n * (n + 1.0) / 4.0;
    let var = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_term / 48.0;
    if var <= 0.0 {
        return Err(StatError::DegenerateSample {
            label: "differences".to_string(),
            message: "null variance of the signed-rank statistic is zero".to_string(),
        });
    }

    let (z, p) = normal_approximation(w_plus, mu, var.sqrt(), alternative);
    Ok(RankTest {
        statistic: w_plus,
        z,
        p_value: p,
    })
}

/// Mann-Whitney U test of two independent samples.
///
/// The statistic is U for the first sample, derived from its rank sum in
/// the pooled ordering.
///
/// # Errors
/// `EmptySample` if either sample is empty, `DegenerateSample` if every
/// pooled value is identical.
pub fn mannwhitney_u(a: &[f64], b: &[f64], alternative: Alternative) -> StatResult<RankTest> {
    if a.is_empty() {
        return Err(StatError::EmptySample {
            label: "first sample".to_string(),
        });
    }
    if b.is_empty() {
        return Err(StatError::EmptySample {
            label: "second sample".to_string(),
        });
    }

    let mut pooled: Vec<(f64, bool)> = a
        .iter()
        .map(|&v| (v, true))
        .chain(b.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_unstable_by(|x, y| x.0.total_cmp(&y.0));

    let values: Vec<f64> = pooled.iter().map(|(v, _)| *v).collect();
    let (ranks, tie_term) = average_ranks(&values);

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let big_n = n1 + n2;
    let r1: f64 = pooled
        .iter()
        .zip(&ranks)
        .filter(|((_, first), _)| *first)
        .map(|(_, r)| r)
        .sum();
    let u1 = r1 - n1 * (n1 + 1.0) / 2.0;

    let mu = n1 * n2 / 2.0;
    let var = n1 * n2 / 12.0 * (big_n + 1.0 - tie_term / (big_n * (big_n - 1.0)));
    if var <= 0.0 {
        return Err(StatError::DegenerateSample {
            label: "pooled samples".to_string(),
            message: "null variance of the U statistic is zero".to_string(),
        });
    }

    let (z, p) = normal_approximation(u1, mu, var.sqrt(), alternative);
    Ok(RankTest {
        statistic: u1,
        z,
        p_value: p,
    })
}

/// Continuity-corrected normal deviate and p-value for a rank statistic.
fn normal_approximation(
    statistic: f64,
    mu: f64,
    sigma: f64,
    alternative: Alternative,
) -> (f64, f64) {
    let z = match alternative {
        Alternative::TwoSided => {
            let corrected = ((statistic - mu).abs() - 0.5).max(0.0) / sigma;
            corrected.copysign(statistic - mu)
        }
        Alternative::Greater => (statistic - mu - 0.5) / sigma,
        Alternative::Less => (statistic - mu + 0.5) / sigma,
    };
    (z, p_value(&std_normal(), z, alternative))
}

/// Average ranks (1-based) for a sorted slice, plus the tie term Σ(t³ − t).
fn average_ranks(sorted: &[f64]) -> (Vec<f64>, f64) {
    let n = sorted.len();
    let mut ranks = vec![0.0; n];
    let mut tie_term = 0.0;

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && sorted[j] == sorted[i] {
            j += 1;
        }
        let run = (j - i) as f64;
        let rank = (i + 1 + j) as f64 / 2.0;
        for r in ranks.iter_mut().take(j).skip(i) {
            *r = rank;
        }
        tie_term += run * run * run - run;
        i = j;
    }

    (ranks, tie_term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mann_whitney_reference() {
        let a = [19.0, 22.0, 16.0, 29.0, 24.0];
        let b = [20.0, 11.0, 17.0, 12.0];
        let r = mannwhitney_u(&a, &b, Alternative::TwoSided).unwrap();
        assert!((r.statistic - 17.0).abs() < 1e-12);
        assert!((r.z - 1.592168).abs() < 1e-5);
        assert!((r.p_value - 0.111347).abs() < 1e-5);
    }

    #[test]
    fn mann_whitney_one_sided() {
        let a = [19.0, 22.0, 16.0, 29.0, 24.0];
        let b = [20.0, 11.0, 17.0, 12.0];
        let r = mannwhitney_u(&a, &b, Alternative::Greater).unwrap();
        assert!((r.p_value - 0.055673).abs() < 1e-5);
    }

    #[test]
    fn wilcoxon_reference() {
        let diffs = [1.83, 0.50, 1.62, 2.48, 1.68, 1.88, 1.55, 3.06, 1.30];
        let r = wilcoxon_signed_rank(&diffs, Alternative::TwoSided).unwrap();
        assert!((r.statistic - 45.0).abs() < 1e-12);
        assert!((r.z - 2.606335).abs() < 1e-5);
        assert!((r.p_value - 0.009152).abs() < 1e-5);
    }

    #[test]
    fn wilcoxon_greater() {
        let diffs = [1.83, 0.50, 1.62, 2.48, 1.68, 1.88, 1.55, 3.06, 1.30];
        let r = wilcoxon_signed_rank(&diffs, Alternative::Greater).unwrap();
        assert!((r.p_value - 0.004576).abs() < 1e-5);
    }

    #[test]
    fn wilcoxon_drops_zeros() {
        let with_zeros = [0.0, 1.83, 0.50, 0.0, 1.62];
        let without = [1.83, 0.50, 1.62];
        let r1 = wilcoxon_signed_rank(&with_zeros, Alternative::TwoSided).unwrap();
        let r2 = wilcoxon_signed_rank(&without, Alternative::TwoSided).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn wilcoxon_all_zero_degenerates() {
        let err = wilcoxon_signed_rank(&[0.0, 0.0], Alternative::TwoSided).unwrap_err();
        assert!(matches!(err, StatError::DegenerateSample { .. }));
    }

    #[test]
    fn average_ranks_with_ties() {
        let sorted = [1.0, 2.0, 2.0, 3.0];
        let (ranks, tie_term) = average_ranks(&sorted);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
        assert!((tie_term - 6.0).abs() < 1e-12);
    }
}
