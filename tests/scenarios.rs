//! End-to-end scenarios against historical datasets.
//!
//! These walk the full analysis pattern: load a named dataset, split it
//! into samples, summarize, check the pooling assumption, run the test,
//! and wrap the raw outputs in a report.

use statsum::data::Store;
use statsum::{
    stats, summary::variance_check, Alternative, DifferenceSummary, IntervalMethod,
    ProportionSummary, SampleSummary, TestReport, Variances,
};

fn skulls() -> statsum::data::Table {
    Store::new("tests/data").get("skulls").unwrap()
}

// ============================================================================
// Etruscan vs Italian skull breadths (two-sample t)
// ============================================================================

#[test]
fn skulls_table_shape() {
    let table = skulls();
    assert_eq!(table.rows(), 154);
    assert_eq!(table.column_names(), &["type", "size"]);
}

#[test]
fn etruscan_sample_summary() {
    let table = skulls();
    let etruscan = table.real_where("size", "type", "Etruscan").unwrap();
    let s = SampleSummary::from_data("Etruscans", &etruscan, IntervalMethod::T, 0.05).unwrap();

    assert_eq!(s.size, 84);
    assert!((s.mean - 143.773810).abs() < 1e-5);
    assert!((s.confint.0 - 142.478129).abs() < 1e-4);
    assert!((s.confint.1 - 145.069490).abs() < 1e-4);
}

#[test]
fn italian_sample_summary() {
    let table = skulls();
    let italian = table.real_where("size", "type", "Italian").unwrap();
    let s = SampleSummary::from_data("Italians", &italian, IntervalMethod::T, 0.05).unwrap();

    assert_eq!(s.size, 70);
    assert!((s.mean - 132.442857).abs() < 1e-5);
    assert!((s.confint.0 - 131.071830).abs() < 1e-4);
    assert!((s.confint.1 - 133.813884).abs() < 1e-4);
}

#[test]
fn skulls_pooling_is_reasonable() {
    let table = skulls();
    let etruscan = table.real_where("size", "type", "Etruscan").unwrap();
    let italian = table.real_where("size", "type", "Italian").unwrap();

    let check = variance_check(&etruscan, &italian).unwrap();
    assert!((check.ratio - 1.078190).abs() < 1e-4);
    assert!(check.pooling_reasonable);
}

#[test]
fn skulls_two_sample_t_test() {
    let table = skulls();
    let etruscan = table.real_where("size", "type", "Etruscan").unwrap();
    let italian = table.real_where("size", "type", "Italian").unwrap();

    let (t, p, df) =
        stats::ttest_ind(&etruscan, &italian, Variances::Pooled, Alternative::TwoSided).unwrap();
    assert!((t - 11.924823).abs() < 1e-4);
    assert!((df - 152.0).abs() < 1e-12);
    assert!(p < 1e-4);

    let report = TestReport::t(t, p, df).unwrap();
    assert!(report.significant_at(0.05).unwrap());
    assert_eq!(
        report.to_string(),
        "ResultSummary(tstat=11.924823, pval=0.000000, dof=152)"
    );
}

#[test]
fn skulls_difference_summary() {
    let table = skulls();
    let etruscan = table.real_where("size", "type", "Etruscan").unwrap();
    let italian = table.real_where("size", "type", "Italian").unwrap();

    let d = DifferenceSummary::independent(
        &etruscan,
        &italian,
        IntervalMethod::T,
        Variances::Pooled,
        0.05,
    )
    .unwrap();

    assert!((d.diff - 11.330952).abs() < 1e-5);
    assert!((d.confint.0 - 9.453650).abs() < 1e-4);
    assert!((d.confint.1 - 13.208254).abs() < 1e-4);
}

#[test]
fn skulls_welch_agrees_with_pooled() {
    // The variances are close, so Welch should barely move the statistic.
    let table = skulls();
    let etruscan = table.real_where("size", "type", "Etruscan").unwrap();
    let italian = table.real_where("size", "type", "Italian").unwrap();

    let (t, p, df) =
        stats::ttest_ind(&etruscan, &italian, Variances::Unequal, Alternative::TwoSided).unwrap();
    assert!((t - 11.965949).abs() < 1e-4);
    assert!((df - 148.819307).abs() < 1e-3);
    assert!(p < 1e-4);
}

// ============================================================================
// Under-30s living at home (test of a proportion)
// ============================================================================

#[test]
fn wales_proportion_summary() {
    let s = ProportionSummary::from_counts("Wales", 68, 254, 0.05).unwrap();
    assert!((s.p_hat - 0.267717).abs() < 1e-5);
    assert!((s.confint.0 - 0.213265).abs() < 1e-5);
    assert!((s.confint.1 - 0.322168).abs() < 1e-5);
}

#[test]
fn wales_proportion_test() {
    let (z, p) = stats::proportions_ztest(68, 254, 0.25, Alternative::Greater).unwrap();
    assert!((z - 0.652071).abs() < 1e-5);
    assert!((p - 0.257178).abs() < 1e-5);

    let report = TestReport::proportion(z, p).unwrap();
    assert!(!report.significant_at(0.05).unwrap());
    assert!(!report.significant_at(0.1).unwrap());
}

// ============================================================================
// Alpha-particle emissions (chi-square goodness-of-fit to a Poisson model)
// ============================================================================

#[test]
fn particles_poisson_goodness_of_fit() {
    use statrs::distribution::{Discrete, Poisson};

    let table = Store::new("tests/data").get("particles").unwrap();
    let observed = table.real("observed").unwrap();
    assert_eq!(observed.len(), 12);

    // Rate estimated from the ungrouped emission counts; the table's last
    // category pools every count of 11 or more.
    let ungrouped = [
        57.0, 203.0, 383.0, 525.0, 532.0, 408.0, 273.0, 139.0, 45.0, 27.0, 10.0, 4.0, 0.0, 1.0,
        1.0,
    ];
    let n: f64 = ungrouped.iter().sum();
    let lambda = ungrouped
        .iter()
        .enumerate()
        .map(|(k, o)| k as f64 * o)
        .sum::<f64>()
        / n;
    assert!((lambda - 3.871549).abs() < 1e-5);

    let poisson = Poisson::new(lambda).unwrap();
    let mut expected: Vec<f64> = (0..11).map(|k| n * poisson.pmf(k)).collect();
    let head: f64 = expected.iter().sum();
    expected.push(n - head);

    // One parameter (the rate) was estimated from the data.
    let (stat, p, df) = stats::chisq_gof(observed, &expected, 1).unwrap();
    assert!((stat - 12.961296).abs() < 1e-3);
    assert_eq!(df, 10);
    assert!((p - 0.225844).abs() < 1e-3);

    let report = TestReport::chi_square(stat, p, df).unwrap();
    assert!(!report.significant_at(0.05).unwrap());
}
