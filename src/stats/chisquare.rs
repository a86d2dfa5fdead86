//! Chi-square goodness-of-fit test.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{StatError, StatResult};

/// Chi-square goodness-of-fit test of observed against expected category
/// counts.
///
/// `estimated_params` is the number of distribution parameters estimated
/// from the data (e.g. 1 when the expected counts come from a Poisson
/// model with the rate taken from the sample mean); the degrees of freedom
/// are k − 1 − `estimated_params`.
///
/// Returns `(statistic, p_value, df)`. The p-value is the upper tail of
/// the chi-square distribution, so the test is one-sided by construction.
///
/// # Errors
/// `EmptySample` if there are no categories, `LengthMismatch` if the two
/// count slices differ in length, `DegenerateSample` if an expected count
/// is not positive or the adjusted degrees of freedom are not positive.
pub fn chisq_gof(
    observed: &[f64],
    expected: &[f64],
    estimated_params: usize,
) -> StatResult<(f64, f64, u64)> {
    if observed.is_empty() {
        return Err(StatError::EmptySample {
            label: "observed".to_string(),
        });
    }
    if observed.len() != expected.len() {
        return Err(StatError::LengthMismatch {
            left: observed.len(),
            right: expected.len(),
        });
    }
    if expected.iter().any(|&e| e <= 0.0) {
        return Err(StatError::DegenerateSample {
            label: "expected".to_string(),
            message: "every expected count must be positive".to_string(),
        });
    }

    let k = observed.len();
    if k < 2 + estimated_params {
        return Err(StatError::DegenerateSample {
            label: "observed".to_string(),
            message: format!(
                "{} categories leave no degrees of freedom after estimating {} parameters",
                k, estimated_params
            ),
        });
    }
    let df = (k - 1 - estimated_params) as u64;

    let statistic: f64 = observed
        .iter()
        .zip(expected)
        .map(|(o, e)| (o - e) * (o - e) / e)
        .sum();

    let dist = ChiSquared::new(df as f64).map_err(|_| StatError::DegenerateSample {
        label: "observed".to_string(),
        message: format!("chi-square undefined for {} degrees of freedom", df),
    })?;
    let p = 1.0 - dist.cdf(statistic);

    Ok((statistic, p, df))
}
