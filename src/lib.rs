//! # statsum
//!
//! Labeled sample summaries, confidence intervals, and fixed-precision
//! hypothesis-test reports.
//!
//! The crate formalizes the pattern shared by a family of classical
//! statistics analyses: load a sample from a named dataset, check a
//! distributional assumption, compute a point estimate with its confidence
//! interval, run a significance test, and report the result in a fixed,
//! readable shape.
//!
//! - [`summary`] builds labeled descriptions of samples, differences of
//!   means (pooled or Welch), and proportions.
//! - [`report`] tags raw test outputs by family and renders them at six
//!   decimal places without altering the stored values.
//! - [`stats`] is the statistics surface behind both: intervals, t/z tests,
//!   proportion tests, chi-square goodness-of-fit, rank tests, and simple
//!   linear regression, all on top of `statrs` distributions.
//! - [`data`] loads named CSV datasets as typed tables with scoped file
//!   access.
//! - [`output`] renders summaries and reports for terminals or as JSON.
//!
//! ## Quick start
//!
//! ```ignore
//! use statsum::{
//!     data::Store,
//!     report::TestReport,
//!     stats,
//!     summary::{variance_check, DifferenceSummary, SampleSummary},
//!     IntervalMethod, Variances,
//! };
//!
//! let skulls = Store::new("data").get("skulls")?;
//! let etruscan = skulls.real_where("size", "type", "Etruscan")?;
//! let italian = skulls.real_where("size", "type", "Italian")?;
//!
//! println!(
//!     "{}",
//!     SampleSummary::from_data("Etruscans", &etruscan, IntervalMethod::T, 0.05)?
//! );
//!
//! // Ratio-of-variances screen before pooling.
//! let check = variance_check(&etruscan, &italian)?;
//! let variances = if check.pooling_reasonable {
//!     Variances::Pooled
//! } else {
//!     Variances::Unequal
//! };
//!
//! let (t, p, df) = stats::ttest_ind(&etruscan, &italian, variances, Default::default())?;
//! println!("{}", TestReport::t(t, p, df)?);
//! ```
//!
//! Every operation is a pure, synchronous function of its inputs; the only
//! I/O in the crate is the scoped CSV read inside [`data::Store::get`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod error;
mod types;

// Functional modules
pub mod data;
pub mod output;
pub mod report;
pub mod stats;
pub mod summary;

// Re-exports for public API
pub use error::{StatError, StatResult};
pub use report::TestReport;
pub use summary::{
    variance_check, DifferenceSummary, ProportionSummary, SampleSummary, VarianceCheck,
    MAX_VARIANCE_RATIO,
};
pub use types::{Alternative, IntervalMethod, Variances};
