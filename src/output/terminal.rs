//! Terminal rendering of summaries and reports with ANSI colors.

use std::fmt::Write;

use colored::Colorize;

use crate::report::TestReport;
use crate::summary::{DifferenceSummary, ProportionSummary, SampleSummary};

/// Separator line used under headings.
const SEPARATOR: &str = "──────────────────────────────────────────────";

/// Format a sample summary for terminal display.
pub fn format_sample(summary: &SampleSummary) -> String {
    let mut out = String::new();

    writeln!(out, "{}", summary.label.bold()).unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out, "  size:  {}", summary.size).unwrap();
    writeln!(out, "  mean:  {:.6}", summary.mean).unwrap();
    writeln!(
        out,
        "  CI:    ({:.6}, {:.6})",
        summary.confint.0, summary.confint.1
    )
    .unwrap();

    out
}

/// Format a difference summary for terminal display.
pub fn format_difference(summary: &DifferenceSummary) -> String {
    let mut out = String::new();

    writeln!(out, "{}", "Difference of means".bold()).unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out, "  diff:  {:.6}", summary.diff).unwrap();
    writeln!(
        out,
        "  CI:    ({:.6}, {:.6})",
        summary.confint.0, summary.confint.1
    )
    .unwrap();

    out
}

/// Format a proportion summary for terminal display.
pub fn format_proportion(summary: &ProportionSummary) -> String {
    let mut out = String::new();

    writeln!(out, "{}", summary.label.bold()).unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(
        out,
        "  counts: {} of {}",
        summary.successes, summary.trials
    )
    .unwrap();
    writeln!(out, "  p_hat:  {:.6}", summary.p_hat).unwrap();
    writeln!(
        out,
        "  CI:     ({:.6}, {:.6})",
        summary.confint.0, summary.confint.1
    )
    .unwrap();

    out
}

/// Format a test report for terminal display.
///
/// The verdict line compares the stored p-value against the conventional
/// 5% level; the displayed values are rounded to six decimals but the
/// verdict never is.
pub fn format_report(report: &TestReport) -> String {
    let mut out = String::new();

    writeln!(out, "{}", report.family().bold()).unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out, "  statistic: {:.6}", report.statistic()).unwrap();
    writeln!(out, "  p-value:   {:.6}", report.p_value()).unwrap();
    if let Some(df) = report.df() {
        writeln!(out, "  df:        {:.0}", df).unwrap();
    }

    let verdict = if report.p_value() < 0.05 {
        "evidence against the null hypothesis at the 5% level"
            .yellow()
            .bold()
            .to_string()
    } else {
        "no evidence against the null hypothesis at the 5% level"
            .green()
            .to_string()
    };
    writeln!(out, "  {}", verdict).unwrap();

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_output_contains_fields() {
        colored::control::set_override(false);
        let s = SampleSummary {
            label: "Etruscans".to_string(),
            size: 84,
            mean: 143.773810,
            confint: (142.478129, 145.069490),
        };
        let text = format_sample(&s);
        assert!(text.contains("Etruscans"));
        assert!(text.contains("size:  84"));
        assert!(text.contains("mean:  143.773810"));
        assert!(text.contains("(142.478129, 145.069490)"));
    }

    #[test]
    fn report_output_shows_df_only_when_present() {
        colored::control::set_override(false);
        let t = TestReport::t(11.924823, 0.00001, 152.0).unwrap();
        assert!(format_report(&t).contains("df:        152"));

        let z = TestReport::z(0.652071, 0.257178).unwrap();
        assert!(!format_report(&z).contains("df:"));
    }

    #[test]
    fn verdict_follows_stored_p_value() {
        colored::control::set_override(false);
        let significant = TestReport::z(2.5, 0.012).unwrap();
        assert!(format_report(&significant).contains("evidence against"));

        let not = TestReport::z(0.65, 0.257178).unwrap();
        assert!(format_report(&not).contains("no evidence against"));
    }
}
