//! Shared selector enums for interval methods and test alternatives.

use serde::{Deserialize, Serialize};

/// Interval method for a mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalMethod {
    /// Student's-t interval.
    ///
    /// Appropriate when the population variance is estimated from the
    /// sample; uses the sample degrees of freedom.
    T,

    /// Normal (z) interval.
    ///
    /// Large-sample approximation, or known/well-estimated variance.
    Z,
}

/// Alternative hypothesis of a significance test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alternative {
    /// The parameter differs from the null value (two-sided).
    #[default]
    TwoSided,

    /// The parameter is smaller than the null value.
    Less,

    /// The parameter is greater than the null value.
    Greater,
}

/// Treatment of the population variances in a two-sample comparison.
///
/// Callers are responsible for checking the equal-variance assumption
/// before choosing; see [`crate::summary::variance_check`] for the
/// customary ratio-of-variances screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variances {
    /// Assume a common population variance and pool the sample variances.
    #[default]
    Pooled,

    /// Do not assume a common variance; use Welch adjusted degrees of
    /// freedom.
    Unequal,
}
