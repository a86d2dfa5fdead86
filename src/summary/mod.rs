//! Labeled summaries of samples, differences, and proportions.
//!
//! These are the value types handed back to analysis scripts: a sample's
//! count, mean, and confidence interval under a chosen interval method, the
//! mean difference between two samples with its interval, and a proportion
//! with its normal-approximation interval. All are immutable once built and
//! carry no reference back to the data they came from.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StatError, StatResult};
use crate::stats;
use crate::types::{IntervalMethod, Variances};

/// Largest ratio of sample variances under which pooling is customarily
/// considered reasonable.
pub const MAX_VARIANCE_RATIO: f64 = 3.0;

// ============================================================================
// SampleSummary
// ============================================================================

/// Parametric description of a sample modelled as approximately normal:
/// its size, mean, and a two-sided confidence interval for the mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Descriptive label for the sample.
    pub label: String,
    /// Number of observations.
    pub size: usize,
    /// Sample mean.
    pub mean: f64,
    /// Two-sided (1 − α) confidence interval for the mean, lower ≤ upper.
    pub confint: (f64, f64),
}

impl SampleSummary {
    /// Build a summary from raw data: size, mean, and the (1 − α) interval
    /// under the chosen method.
    ///
    /// # Errors
    /// `EmptySample` / `TooFewObservations` for samples with fewer than two
    /// observations (the t-interval has zero degrees of freedom at size 1,
    /// and both methods need a sample standard deviation), `InvalidAlpha`
    /// for α outside (0, 1).
    pub fn from_data(
        label: impl Into<String>,
        data: &[f64],
        method: IntervalMethod,
        alpha: f64,
    ) -> StatResult<Self> {
        let label = label.into();
        let confint = stats::mean_confint(data, method, alpha)?;
        Ok(Self {
            label,
            size: data.len(),
            mean: stats::mean(data),
            confint,
        })
    }

    /// Wrap pre-computed descriptor values from an external routine.
    ///
    /// External descriptors sometimes report the observation count as a
    /// float; it is rounded to the nearest integer here rather than
    /// silently truncated.
    ///
    /// # Errors
    /// `DegenerateSample` if the count is negative or non-finite, or the
    /// interval is reversed.
    pub fn from_parts(
        label: impl Into<String>,
        size: f64,
        mean: f64,
        confint: (f64, f64),
    ) -> StatResult<Self> {
        let label = label.into();
        if !size.is_finite() || size < 0.0 {
            return Err(StatError::DegenerateSample {
                label,
                message: format!("observation count {} is not a valid size", size),
            });
        }
        if confint.0 > confint.1 {
            return Err(StatError::DegenerateSample {
                label,
                message: "confidence interval bounds are reversed".to_string(),
            });
        }
        Ok(Self {
            label,
            size: size.round() as usize,
            mean,
            confint,
        })
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sample(label=\"{}\", size={}, mean={:.6}, confint=({:.6}, {:.6}))",
            self.label, self.size, self.mean, self.confint.0, self.confint.1
        )
    }
}

// ============================================================================
// DifferenceSummary
// ============================================================================

/// Parametric description of the difference between two samples: the mean
/// difference and a two-sided confidence interval for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceSummary {
    /// Mean difference (first minus second, or mean of paired differences).
    pub diff: f64,
    /// Two-sided (1 − α) confidence interval for the difference.
    pub confint: (f64, f64),
}

impl DifferenceSummary {
    /// Describe the difference of means of two independent samples,
    /// `mean(a) − mean(b)`.
    ///
    /// Pooled variances use n₁ + n₂ − 2 degrees of freedom for the t
    /// interval; `Variances::Unequal` switches to the Welch adjusted
    /// degrees of freedom. Check [`variance_check`] before pooling.
    pub fn independent(
        a: &[f64],
        b: &[f64],
        method: IntervalMethod,
        variances: Variances,
        alpha: f64,
    ) -> StatResult<Self> {
        let confint = stats::diff_confint_ind(a, b, method, variances, alpha)?;
        Ok(Self {
            diff: stats::mean(a) - stats::mean(b),
            confint,
        })
    }

    /// Describe the mean of paired differences `x[i] − y[i]`.
    ///
    /// # Errors
    /// `LengthMismatch` if the samples differ in length, plus the usual
    /// size and α checks on the differenced sample.
    pub fn paired(
        x: &[f64],
        y: &[f64],
        method: IntervalMethod,
        alpha: f64,
    ) -> StatResult<Self> {
        if x.len() != y.len() {
            return Err(StatError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        let diffs: Vec<f64> = x.iter().zip(y).map(|(xi, yi)| xi - yi).collect();
        let confint = stats::mean_confint(&diffs, method, alpha)?;
        Ok(Self {
            diff: stats::mean(&diffs),
            confint,
        })
    }
}

impl fmt::Display for DifferenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference(diff={:.6}, confint=({:.6}, {:.6}))",
            self.diff, self.confint.0, self.confint.1
        )
    }
}

// ============================================================================
// ProportionSummary
// ============================================================================

/// Description of a sample proportion under the normal approximation to
/// the binomial: the point estimate and its Wald interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionSummary {
    /// Descriptive label for the sample.
    pub label: String,
    /// Observed success count.
    pub successes: u64,
    /// Number of trials.
    pub trials: u64,
    /// Point estimate successes / trials.
    pub p_hat: f64,
    /// Two-sided (1 − α) confidence interval for the proportion.
    pub confint: (f64, f64),
}

impl ProportionSummary {
    /// Build a proportion summary from counts.
    ///
    /// # Errors
    /// `InvalidProportion` if `trials` is zero or `successes > trials`,
    /// `InvalidAlpha` for α outside (0, 1).
    pub fn from_counts(
        label: impl Into<String>,
        successes: u64,
        trials: u64,
        alpha: f64,
    ) -> StatResult<Self> {
        let confint = stats::proportion_confint(successes, trials, alpha)?;
        Ok(Self {
            label: label.into(),
            successes,
            trials,
            p_hat: successes as f64 / trials as f64,
            confint,
        })
    }
}

impl fmt::Display for ProportionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Proportion(label=\"{}\", p_hat={:.6}, confint=({:.6}, {:.6}))",
            self.label, self.p_hat, self.confint.0, self.confint.1
        )
    }
}

// ============================================================================
// Variance-ratio check
// ============================================================================

/// Outcome of the ratio-of-variances screen for the equal-variance
/// assumption.
///
/// This is advisory: the difference builders never block on it. Callers
/// inspect `pooling_reasonable` when deciding between `Variances::Pooled`
/// and `Variances::Unequal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceCheck {
    /// max(s₁², s₂²) / min(s₁², s₂²).
    pub ratio: f64,
    /// True when the ratio is below [`MAX_VARIANCE_RATIO`].
    pub pooling_reasonable: bool,
}

/// Compare the sample variances of two samples ahead of a pooled analysis.
///
/// The customary screen accepts pooling when the larger sample variance is
/// less than three times the smaller.
pub fn variance_check(a: &[f64], b: &[f64]) -> StatResult<VarianceCheck> {
    stats::check_sample("first sample", a, 2)?;
    stats::check_sample("second sample", b, 2)?;

    let (va, vb) = (stats::sample_variance(a), stats::sample_variance(b));
    if va == 0.0 || vb == 0.0 {
        let label = if va == 0.0 { "first sample" } else { "second sample" };
        return Err(StatError::DegenerateSample {
            label: label.to_string(),
            message: "zero variance, ratio undefined".to_string(),
        });
    }
    let ratio = va.max(vb) / va.min(vb);

    Ok(VarianceCheck {
        ratio,
        pooling_reasonable: ratio < MAX_VARIANCE_RATIO,
    })
}
