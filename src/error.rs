//! Error types for the summary builders and the statistics surface.
//!
//! Every condition here is detected at a component boundary and returned to
//! the caller immediately. There is no retry, no silent recovery, and no
//! partial result; a failed analysis never affects any other analysis.
//! Failures inside `statrs` (a distribution that cannot be constructed from
//! a degenerate scale) are mapped to [`StatError::DegenerateSample`] without
//! reinterpretation.

use std::fmt;

/// Error returned when an input fails a boundary check.
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    /// The sample contains no observations.
    EmptySample {
        /// Label of the offending sample.
        label: String,
    },

    /// The sample has too few observations for the requested computation.
    ///
    /// Both interval methods need a sample standard deviation, which is
    /// undefined for a single observation; the t-interval additionally has
    /// zero degrees of freedom there.
    TooFewObservations {
        /// Label of the offending sample.
        label: String,
        /// Number of observations supplied.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// Significance level outside the open interval (0, 1).
    InvalidAlpha {
        /// The rejected significance level.
        alpha: f64,
    },

    /// p-value outside [0, 1].
    ///
    /// Defensive check against a misused external test routine; a report
    /// never carries a probability that is not one.
    InvalidPValue {
        /// The rejected p-value.
        p_value: f64,
    },

    /// Paired samples differ in length.
    LengthMismatch {
        /// Length of the first sample.
        left: usize,
        /// Length of the second sample.
        right: usize,
    },

    /// Success count exceeds the number of trials, or there are no trials.
    InvalidProportion {
        /// Observed success count.
        successes: u64,
        /// Number of trials.
        trials: u64,
    },

    /// A spread estimate degenerated where a positive scale is required.
    DegenerateSample {
        /// Label of the offending sample.
        label: String,
        /// What degenerated.
        message: String,
    },
}

impl fmt::Display for StatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatError::EmptySample { label } => {
                write!(f, "Sample '{}' is empty", label)
            }
            StatError::TooFewObservations { label, got, min } => {
                write!(
                    f,
                    "Sample '{}' has too few observations: got {}, need at least {}",
                    label, got, min
                )
            }
            StatError::InvalidAlpha { alpha } => {
                write!(
                    f,
                    "Significance level must lie in (0, 1), got {}",
                    alpha
                )
            }
            StatError::InvalidPValue { p_value } => {
                write!(f, "p-value must lie in [0, 1], got {}", p_value)
            }
            StatError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "Paired samples differ in length: {} vs {}",
                    left, right
                )
            }
            StatError::InvalidProportion { successes, trials } => {
                write!(
                    f,
                    "Invalid proportion input: {} successes out of {} trials",
                    successes, trials
                )
            }
            StatError::DegenerateSample { label, message } => {
                write!(f, "Degenerate sample '{}': {}", label, message)
            }
        }
    }
}

impl std::error::Error for StatError {}

/// Convenience alias for fallible statistics operations.
pub type StatResult<T> = Result<T, StatError>;
