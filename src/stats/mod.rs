//! Statistical routines backing the summary builders and test reports.
//!
//! This module is the statistics-library surface of the crate:
//! - Confidence intervals for a mean (t and z variants) and a proportion
//! - One- and two-sample tests of means (t pooled/Welch, z) and paired t
//! - One- and two-sample tests of a proportion
//! - Chi-square goodness-of-fit with estimated-parameter adjustment
//! - Wilcoxon signed-rank and Mann-Whitney U (normal approximation)
//! - Simple linear regression with residuals and prediction intervals
//!
//! Every routine is a pure function of its inputs. p-values come from
//! `statrs` distribution CDFs and critical values from inverse CDFs; none
//! of the distribution math is reimplemented here.

mod chisquare;
mod interval;
mod means;
mod proportion;
mod rank;
mod regression;

pub use chisquare::chisq_gof;
pub use interval::{diff_confint_ind, mean_confint, proportion_confint};
pub use means::{ttest_1samp, ttest_ind, ttest_paired, ztest_1samp, ztest_ind};
pub use proportion::{proportions_ztest, proportions_ztest_ind};
pub use rank::{mannwhitney_u, wilcoxon_signed_rank, RankTest};
pub use regression::{fit_linear, LinearFit};

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::error::{StatError, StatResult};
use crate::types::Alternative;

/// Reject a significance level outside the open interval (0, 1).
pub(crate) fn check_alpha(alpha: f64) -> StatResult<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatError::InvalidAlpha { alpha });
    }
    Ok(())
}

/// Reject an empty or too-small sample.
pub(crate) fn check_sample(label: &str, data: &[f64], min: usize) -> StatResult<()> {
    if data.is_empty() {
        return Err(StatError::EmptySample {
            label: label.to_string(),
        });
    }
    if data.len() < min {
        return Err(StatError::TooFewObservations {
            label: label.to_string(),
            got: data.len(),
            min,
        });
    }
    Ok(())
}

/// Arithmetic mean of a non-empty slice.
pub(crate) fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (n − 1 denominator). Requires len ≥ 2.
pub(crate) fn sample_variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (data.len() - 1) as f64
}

/// Standard normal distribution. Construction cannot fail.
pub(crate) fn std_normal() -> Normal {
    Normal::new(0.0, 1.0).unwrap()
}

/// Student's t with the given degrees of freedom.
///
/// Degrees of freedom must be positive; a non-positive value means the
/// caller's sample degenerated and is surfaced as such.
pub(crate) fn students_t(label: &str, df: f64) -> StatResult<StudentsT> {
    StudentsT::new(0.0, 1.0, df).map_err(|_| StatError::DegenerateSample {
        label: label.to_string(),
        message: format!("t-distribution undefined for {} degrees of freedom", df),
    })
}

/// p-value of a statistic against a standard continuous null distribution.
pub(crate) fn p_value<D: ContinuousCDF<f64, f64>>(
    dist: &D,
    statistic: f64,
    alternative: Alternative,
) -> f64 {
    match alternative {
        Alternative::TwoSided => 2.0 * (1.0 - dist.cdf(statistic.abs())),
        Alternative::Less => dist.cdf(statistic),
        Alternative::Greater => 1.0 - dist.cdf(statistic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((mean(&data) - 3.0).abs() < 1e-12);
        assert!((sample_variance(&data) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn alpha_bounds() {
        assert!(check_alpha(0.05).is_ok());
        assert!(check_alpha(0.0).is_err());
        assert!(check_alpha(1.0).is_err());
        assert!(check_alpha(-0.1).is_err());
        assert!(check_alpha(f64::NAN).is_err());
    }

    #[test]
    fn two_sided_p_is_symmetric() {
        let n = std_normal();
        let p_pos = p_value(&n, 1.7, Alternative::TwoSided);
        let p_neg = p_value(&n, -1.7, Alternative::TwoSided);
        assert!((p_pos - p_neg).abs() < 1e-12);
    }
}
