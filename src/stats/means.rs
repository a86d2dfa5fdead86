//! Significance tests for means: one-sample, two-sample, and paired.

use super::{check_sample, mean, p_value, sample_variance, std_normal, students_t};
use crate::error::{StatError, StatResult};
use crate::types::{Alternative, Variances};

/// One-sample t-test of the hypothesis mean = `popmean`.
///
/// Returns `(statistic, p_value, df)`.
pub fn ttest_1samp(
    data: &[f64],
    popmean: f64,
    alternative: Alternative,
) -> StatResult<(f64, f64, f64)> {
    check_sample("sample", data, 2)?;

    let n = data.len() as f64;
    let se = (sample_variance(data) / n).sqrt();
    if se == 0.0 {
        return Err(StatError::DegenerateSample {
            label: "sample".to_string(),
            message: "zero variance, t-statistic undefined".to_string(),
        });
    }
    let df = n - 1.0;
    let t = (mean(data) - popmean) / se;
    let p = p_value(&students_t("sample", df)?, t, alternative);

    Ok((t, p, df))
}

/// Two-sample t-test of equal means for independent samples.
///
/// Under `Variances::Pooled` the sample variances are pooled with
/// n₁ + n₂ − 2 degrees of freedom; under `Variances::Unequal` the Welch
/// statistic and adjusted degrees of freedom are used.
///
/// Returns `(statistic, p_value, df)`.
pub fn ttest_ind(
    a: &[f64],
    b: &[f64],
    variances: Variances,
    alternative: Alternative,
) -> StatResult<(f64, f64, f64)> {
    check_sample("first sample", a, 2)?;
    check_sample("second sample", b, 2)?;

    let (se, df) = diff_standard_error(a, b, variances);
    if se == 0.0 {
        return Err(StatError::DegenerateSample {
            label: "difference".to_string(),
            message: "zero variance in both samples, t-statistic undefined".to_string(),
        });
    }
    let t = (mean(a) - mean(b)) / se;
    let p = p_value(&students_t("difference", df)?, t, alternative);

    Ok((t, p, df))
}

/// Paired t-test: one-sample t-test of the elementwise differences
/// `x[i] − y[i]` against a zero mean.
///
/// Returns `(statistic, p_value, df)`.
pub fn ttest_paired(x: &[f64], y: &[f64], alternative: Alternative) -> StatResult<(f64, f64, f64)> {
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let diffs: Vec<f64> = x.iter().zip(y).map(|(xi, yi)| xi - yi).collect();
    ttest_1samp(&diffs, 0.0, alternative)
}

/// One-sample z-test of the hypothesis mean = `popmean`, with the standard
/// error estimated from the sample (large-sample approximation).
///
/// Returns `(statistic, p_value)`.
pub fn ztest_1samp(data: &[f64], popmean: f64, alternative: Alternative) -> StatResult<(f64, f64)> {
    check_sample("sample", data, 2)?;

    let n = data.len() as f64;
    let se = (sample_variance(data) / n).sqrt();
    if se == 0.0 {
        return Err(StatError::DegenerateSample {
            label: "sample".to_string(),
            message: "zero variance, z-statistic undefined".to_string(),
        });
    }
    let z = (mean(data) - popmean) / se;
    let p = p_value(&std_normal(), z, alternative);

    Ok((z, p))
}

/// Two-sample z-test of equal means for independent samples.
///
/// The standard error is the unpooled large-sample combination
/// √(s₁²/n₁ + s₂²/n₂). Returns `(statistic, p_value)`.
pub fn ztest_ind(a: &[f64], b: &[f64], alternative: Alternative) -> StatResult<(f64, f64)> {
    check_sample("first sample", a, 2)?;
    check_sample("second sample", b, 2)?;

    let (se, _) = diff_standard_error(a, b, Variances::Unequal);
    if se == 0.0 {
        return Err(StatError::DegenerateSample {
            label: "difference".to_string(),
            message: "zero variance in both samples, z-statistic undefined".to_string(),
        });
    }
    let z = (mean(a) - mean(b)) / se;
    let p = p_value(&std_normal(), z, alternative);

    Ok((z, p))
}

/// Standard error of `mean(a) − mean(b)` and the matching t degrees of
/// freedom, for the chosen variance treatment.
///
/// Callers must have validated both samples (len ≥ 2).
pub(crate) fn diff_standard_error(a: &[f64], b: &[f64], variances: Variances) -> (f64, f64) {
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let (v1, v2) = (sample_variance(a), sample_variance(b));

    match variances {
        Variances::Pooled => {
            let df = n1 + n2 - 2.0;
            let pooled = ((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / df;
            ((pooled * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
        }
        Variances::Unequal => {
            let (r1, r2) = (v1 / n1, v2 / n2);
            let se = (r1 + r2).sqrt();
            // Welch-Satterthwaite adjusted degrees of freedom.
            let df = (r1 + r2) * (r1 + r2)
                / (r1 * r1 / (n1 - 1.0) + r2 * r2 / (n2 - 1.0));
            (se, df)
        }
    }
}
