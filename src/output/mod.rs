//! Output formatting for summaries and test reports.
//!
//! Two formats:
//! - Terminal: human-readable output with ANSI colors
//! - JSON: machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_difference, format_proportion, format_report, format_sample};
