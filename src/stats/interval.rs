//! Confidence intervals for a mean, a difference of means, and a proportion.

use statrs::distribution::ContinuousCDF;

use super::{check_alpha, check_sample, mean, sample_variance, std_normal, students_t};
use crate::error::{StatError, StatResult};
use crate::types::{IntervalMethod, Variances};

/// Two-sided (1 − α) confidence interval for the mean of a sample.
///
/// The t variant uses the sample degrees of freedom; the z variant uses the
/// standard normal quantile. Both estimate the standard error from the
/// sample standard deviation, so at least two observations are required.
///
/// # Errors
/// `EmptySample` / `TooFewObservations` if the sample has fewer than two
/// observations, `InvalidAlpha` if α ∉ (0, 1).
pub fn mean_confint(
    data: &[f64],
    method: IntervalMethod,
    alpha: f64,
) -> StatResult<(f64, f64)> {
    check_alpha(alpha)?;
    check_sample("sample", data, 2)?;

    let n = data.len() as f64;
    let m = mean(data);
    let se = (sample_variance(data) / n).sqrt();
    let half = critical_value("sample", method, n - 1.0, alpha)? * se;

    Ok((m - half, m + half))
}

/// Two-sided (1 − α) confidence interval for the difference of means of two
/// independent samples, `mean(a) − mean(b)`.
///
/// Under `Variances::Pooled` the sample variances are pooled and the t
/// variant uses n₁ + n₂ − 2 degrees of freedom; under `Variances::Unequal`
/// the standard error is the Welch combination and the t variant uses the
/// Welch adjusted degrees of freedom.
pub fn diff_confint_ind(
    a: &[f64],
    b: &[f64],
    method: IntervalMethod,
    variances: Variances,
    alpha: f64,
) -> StatResult<(f64, f64)> {
    check_alpha(alpha)?;
    check_sample("first sample", a, 2)?;
    check_sample("second sample", b, 2)?;

    let diff = mean(a) - mean(b);
    let (se, df) = super::means::diff_standard_error(a, b, variances);
    let half = critical_value("difference", method, df, alpha)? * se;

    Ok((diff - half, diff + half))
}

/// Two-sided (1 − α) normal-approximation (Wald) confidence interval for a
/// proportion, centred on `successes / trials`.
///
/// # Errors
/// `InvalidProportion` if `trials` is zero or `successes > trials`,
/// `InvalidAlpha` if α ∉ (0, 1).
pub fn proportion_confint(successes: u64, trials: u64, alpha: f64) -> StatResult<(f64, f64)> {
    check_alpha(alpha)?;
    if trials == 0 || successes > trials {
        return Err(StatError::InvalidProportion { successes, trials });
    }

    let n = trials as f64;
    let p_hat = successes as f64 / n;
    let se = (p_hat * (1.0 - p_hat) / n).sqrt();
    let half = std_normal().inverse_cdf(1.0 - alpha / 2.0) * se;

    Ok((p_hat - half, p_hat + half))
}

/// Two-sided critical value for the chosen interval method.
fn critical_value(label: &str, method: IntervalMethod, df: f64, alpha: f64) -> StatResult<f64> {
    let q = 1.0 - alpha / 2.0;
    match method {
        IntervalMethod::T => Ok(students_t(label, df)?.inverse_cdf(q)),
        IntervalMethod::Z => Ok(std_normal().inverse_cdf(q)),
    }
}
