//! Significance tests for proportions under the normal approximation to
//! the binomial.

use super::{p_value, std_normal};
use crate::error::{StatError, StatResult};
use crate::types::Alternative;

/// One-sample test of a proportion against the hypothesized value `p0`.
///
/// The standard error uses the null proportion, √(p₀(1−p₀)/n), so the
/// statistic is exact under the null rather than plugged in from the
/// observed proportion.
///
/// Returns `(statistic, p_value)`.
///
/// # Errors
/// `InvalidProportion` if `trials` is zero, `successes > trials`, or `p0`
/// lies outside (0, 1).
pub fn proportions_ztest(
    successes: u64,
    trials: u64,
    p0: f64,
    alternative: Alternative,
) -> StatResult<(f64, f64)> {
    if trials == 0 || successes > trials {
        return Err(StatError::InvalidProportion { successes, trials });
    }
    if !(p0 > 0.0 && p0 < 1.0) {
        return Err(StatError::InvalidProportion { successes, trials });
    }

    let n = trials as f64;
    let p_hat = successes as f64 / n;
    let se = (p0 * (1.0 - p0) / n).sqrt();
    let z = (p_hat - p0) / se;
    let p = p_value(&std_normal(), z, alternative);

    Ok((z, p))
}

/// Two-sample test of equal proportions.
///
/// The variance is pooled under the null of a common proportion:
/// p̄ = (x₁ + x₂)/(n₁ + n₂), SE = √(p̄(1−p̄)(1/n₁ + 1/n₂)).
///
/// Returns `(statistic, p_value)`.
pub fn proportions_ztest_ind(
    successes1: u64,
    trials1: u64,
    successes2: u64,
    trials2: u64,
    alternative: Alternative,
) -> StatResult<(f64, f64)> {
    if trials1 == 0 || successes1 > trials1 {
        return Err(StatError::InvalidProportion {
            successes: successes1,
            trials: trials1,
        });
    }
    if trials2 == 0 || successes2 > trials2 {
        return Err(StatError::InvalidProportion {
            successes: successes2,
            trials: trials2,
        });
    }

    let (n1, n2) = (trials1 as f64, trials2 as f64);
    let (p1, p2) = (successes1 as f64 / n1, successes2 as f64 / n2);
    let pooled = (successes1 + successes2) as f64 / (n1 + n2);
    let se = (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();
    if se == 0.0 {
        return Err(StatError::DegenerateSample {
            label: "proportions".to_string(),
            message: "pooled proportion is 0 or 1, z-statistic undefined".to_string(),
        });
    }
    let z = (p1 - p2) / se;
    let p = p_value(&std_normal(), z, alternative);

    Ok((z, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wales_under30s_reference() {
        // 68 of 254 under-30s living at home against a hypothesized 25%.
        let (z, p) = proportions_ztest(68, 254, 0.25, Alternative::Greater).unwrap();
        assert!((z - 0.652071).abs() < 1e-5);
        assert!((p - 0.257178).abs() < 1e-5);
    }

    #[test]
    fn two_sided_doubles_the_tail() {
        let (_, p1) = proportions_ztest(68, 254, 0.25, Alternative::Greater).unwrap();
        let (_, p2) = proportions_ztest(68, 254, 0.25, Alternative::TwoSided).unwrap();
        assert!((p2 - 2.0 * p1).abs() < 1e-10);
    }

    #[test]
    fn home_advantage_two_proportions() {
        // 260 of 380 home results against 195 of 380.
        let (z, p) = proportions_ztest_ind(260, 380, 195, 380, Alternative::TwoSided).unwrap();
        assert!((z - 4.810216).abs() < 1e-5);
        assert!(p < 1e-5);
    }

    #[test]
    fn rejects_count_above_trials() {
        assert!(proportions_ztest(300, 254, 0.25, Alternative::TwoSided).is_err());
        assert!(proportions_ztest_ind(10, 5, 1, 5, Alternative::TwoSided).is_err());
    }

    #[test]
    fn rejects_degenerate_null_proportion() {
        assert!(proportions_ztest(68, 254, 0.0, Alternative::TwoSided).is_err());
        assert!(proportions_ztest(68, 254, 1.0, Alternative::TwoSided).is_err());
    }
}
