//! Fixed-precision reports of hypothesis-test results.
//!
//! A [`TestReport`] tags the raw numeric outputs of a test routine by test
//! family and renders them at a fixed six decimal places, with integer
//! degrees of freedom where the family carries them. This is a presentation
//! boundary, not an analytical one: the stored values keep full precision,
//! rounding happens only in `Display`, and re-formatting a report built
//! from its own displayed values reproduces the display exactly.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StatError, StatResult};

/// Decimal places used when displaying statistics and p-values.
const DISPLAY_PRECISION: i32 = 6;

/// Result of a hypothesis test, tagged by test family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TestReport {
    /// A t-test: statistic, p-value, and (possibly fractional, e.g. Welch)
    /// degrees of freedom.
    TTest {
        /// t statistic.
        statistic: f64,
        /// p-value in [0, 1].
        p_value: f64,
        /// Degrees of freedom; fractional under the Welch adjustment,
        /// displayed rounded to the nearest integer.
        df: f64,
    },

    /// A z-test of means.
    ZTest {
        /// z statistic.
        statistic: f64,
        /// p-value in [0, 1].
        p_value: f64,
    },

    /// A z-test of one or two proportions.
    Proportion {
        /// z statistic.
        statistic: f64,
        /// p-value in [0, 1].
        p_value: f64,
    },

    /// A chi-square goodness-of-fit test.
    ChiSquare {
        /// Chi-square statistic, non-negative.
        statistic: f64,
        /// p-value in [0, 1].
        p_value: f64,
        /// Degrees of freedom.
        df: u64,
    },
}

impl TestReport {
    /// Wrap a t-test result.
    ///
    /// # Errors
    /// `InvalidPValue` if the p-value lies outside [0, 1];
    /// `DegenerateSample` if the degrees of freedom are negative or
    /// non-finite.
    pub fn t(statistic: f64, p_value: f64, df: f64) -> StatResult<Self> {
        check_p(p_value)?;
        if !df.is_finite() || df < 0.0 {
            return Err(StatError::DegenerateSample {
                label: "t-test report".to_string(),
                message: format!("invalid degrees of freedom {}", df),
            });
        }
        Ok(TestReport::TTest {
            statistic,
            p_value,
            df,
        })
    }

    /// Wrap a z-test result.
    ///
    /// # Errors
    /// `InvalidPValue` if the p-value lies outside [0, 1].
    pub fn z(statistic: f64, p_value: f64) -> StatResult<Self> {
        check_p(p_value)?;
        Ok(TestReport::ZTest { statistic, p_value })
    }

    /// Wrap a proportion-test result.
    ///
    /// # Errors
    /// `InvalidPValue` if the p-value lies outside [0, 1].
    pub fn proportion(statistic: f64, p_value: f64) -> StatResult<Self> {
        check_p(p_value)?;
        Ok(TestReport::Proportion { statistic, p_value })
    }

    /// Wrap a chi-square goodness-of-fit result.
    ///
    /// # Errors
    /// `InvalidPValue` if the p-value lies outside [0, 1];
    /// `DegenerateSample` if the statistic is negative or non-finite.
    pub fn chi_square(statistic: f64, p_value: f64, df: u64) -> StatResult<Self> {
        check_p(p_value)?;
        if !statistic.is_finite() || statistic < 0.0 {
            return Err(StatError::DegenerateSample {
                label: "chi-square report".to_string(),
                message: format!("invalid chi-square statistic {}", statistic),
            });
        }
        Ok(TestReport::ChiSquare {
            statistic,
            p_value,
            df,
        })
    }

    /// The test statistic, at full stored precision.
    pub fn statistic(&self) -> f64 {
        match self {
            TestReport::TTest { statistic, .. }
            | TestReport::ZTest { statistic, .. }
            | TestReport::Proportion { statistic, .. }
            | TestReport::ChiSquare { statistic, .. } => *statistic,
        }
    }

    /// The p-value, at full stored precision.
    pub fn p_value(&self) -> f64 {
        match self {
            TestReport::TTest { p_value, .. }
            | TestReport::ZTest { p_value, .. }
            | TestReport::Proportion { p_value, .. }
            | TestReport::ChiSquare { p_value, .. } => *p_value,
        }
    }

    /// Human-readable name of the test family.
    pub fn family(&self) -> &'static str {
        match self {
            TestReport::TTest { .. } => "t-test",
            TestReport::ZTest { .. } => "z-test",
            TestReport::Proportion { .. } => "test of a proportion",
            TestReport::ChiSquare { .. } => "chi-square goodness-of-fit",
        }
    }

    /// Degrees of freedom, where the family carries them.
    pub fn df(&self) -> Option<f64> {
        match self {
            TestReport::TTest { df, .. } => Some(*df),
            TestReport::ChiSquare { df, .. } => Some(*df as f64),
            TestReport::ZTest { .. } | TestReport::Proportion { .. } => None,
        }
    }

    /// Whether the p-value falls below a significance level.
    ///
    /// Comparison is against the stored p-value, not the displayed one, so
    /// display rounding can never flip this decision.
    pub fn significant_at(&self, alpha: f64) -> StatResult<bool> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(StatError::InvalidAlpha { alpha });
        }
        Ok(self.p_value() < alpha)
    }

    /// The same report with its fields coerced to the displayed precision.
    ///
    /// Applying this twice gives the same result as applying it once, which
    /// is what makes the display idempotent.
    pub fn rounded(&self) -> Self {
        match *self {
            TestReport::TTest {
                statistic,
                p_value,
                df,
            } => TestReport::TTest {
                statistic: round_dp(statistic),
                p_value: round_dp(p_value),
                df: df.round(),
            },
            TestReport::ZTest { statistic, p_value } => TestReport::ZTest {
                statistic: round_dp(statistic),
                p_value: round_dp(p_value),
            },
            TestReport::Proportion { statistic, p_value } => TestReport::Proportion {
                statistic: round_dp(statistic),
                p_value: round_dp(p_value),
            },
            TestReport::ChiSquare {
                statistic,
                p_value,
                df,
            } => TestReport::ChiSquare {
                statistic: round_dp(statistic),
                p_value: round_dp(p_value),
                df,
            },
        }
    }
}

fn check_p(p_value: f64) -> StatResult<()> {
    if !(0.0..=1.0).contains(&p_value) {
        return Err(StatError::InvalidPValue { p_value });
    }
    Ok(())
}

fn round_dp(x: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_PRECISION);
    (x * scale).round() / scale
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestReport::TTest {
                statistic,
                p_value,
                df,
            } => write!(
                f,
                "ResultSummary(tstat={:.6}, pval={:.6}, dof={:.0})",
                statistic, p_value, df
            ),
            TestReport::ZTest { statistic, p_value } => write!(
                f,
                "ResultSummary(zstat={:.6}, pval={:.6})",
                statistic, p_value
            ),
            TestReport::Proportion { statistic, p_value } => write!(
                f,
                "ResultSummary(zstat={:.6}, pval={:.6})",
                statistic, p_value
            ),
            TestReport::ChiSquare {
                statistic,
                p_value,
                df,
            } => write!(
                f,
                "ResultSummary(chisq={:.6}, pval={:.6}, dof={})",
                statistic, p_value, df
            ),
        }
    }
}
