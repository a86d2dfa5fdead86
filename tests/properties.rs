//! Property tests for the summary builders and intervals.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

use statsum::{stats, Alternative, DifferenceSummary, IntervalMethod, Variances};

fn mean_of(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

proptest! {
    /// The confidence interval always brackets the sample mean.
    #[test]
    fn interval_brackets_mean(
        data in prop::collection::vec(-1e6..1e6f64, 2..64),
        alpha in 0.001..0.999f64,
    ) {
        let m = mean_of(&data);
        for method in [IntervalMethod::T, IntervalMethod::Z] {
            let (lo, hi) = stats::mean_confint(&data, method, alpha).unwrap();
            prop_assert!(lo <= m && m <= hi);
        }
    }

    /// Tighter confidence (smaller alpha) never narrows the interval.
    #[test]
    fn interval_width_monotone_in_alpha(
        data in prop::collection::vec(-1e3..1e3f64, 2..64),
        a in 0.01..0.5f64,
        b in 0.01..0.5f64,
    ) {
        let (tight, loose) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(tight < loose);

        for method in [IntervalMethod::T, IntervalMethod::Z] {
            let (lo_t, hi_t) = stats::mean_confint(&data, method, tight).unwrap();
            let (lo_l, hi_l) = stats::mean_confint(&data, method, loose).unwrap();
            prop_assert!(hi_t - lo_t >= hi_l - lo_l);
        }
    }

    /// The independent difference summary is exactly the difference of means.
    #[test]
    fn difference_mean_identity(
        a in prop::collection::vec(-1e3..1e3f64, 2..40),
        b in prop::collection::vec(-1e3..1e3f64, 2..40),
    ) {
        let d = DifferenceSummary::independent(
            &a,
            &b,
            IntervalMethod::T,
            Variances::Pooled,
            0.05,
        )
        .unwrap();
        let expected = mean_of(&a) - mean_of(&b);
        prop_assert!((d.diff - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
    }

    /// The paired difference summary is the mean of elementwise differences.
    #[test]
    fn paired_mean_identity(
        pairs in prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 2..40),
    ) {
        let x: Vec<f64> = pairs.iter().map(|(a, _)| *a).collect();
        let y: Vec<f64> = pairs.iter().map(|(_, b)| *b).collect();
        let d = DifferenceSummary::paired(&x, &y, IntervalMethod::T, 0.05).unwrap();
        let diffs: Vec<f64> = x.iter().zip(&y).map(|(a, b)| a - b).collect();
        let expected = mean_of(&diffs);
        prop_assert!((d.diff - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
    }

    /// p-values stay inside [0, 1] whatever the inputs.
    #[test]
    fn p_values_lie_in_unit_interval(
        a in prop::collection::vec(-1e3..1e3f64, 3..40),
        b in prop::collection::vec(-1e3..1e3f64, 3..40),
    ) {
        for variances in [Variances::Pooled, Variances::Unequal] {
            if let Ok((_, p, _)) = stats::ttest_ind(&a, &b, variances, Alternative::TwoSided) {
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}

/// The t quantile strictly exceeds the z quantile at finite degrees of
/// freedom, so the t interval is wider for the same data and alpha.
#[test]
fn t_interval_wider_than_z() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
    let normal = Normal::new(10.0, 2.0).unwrap();

    for size in [3usize, 8, 30, 120] {
        let data: Vec<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();
        let (lo_t, hi_t) = stats::mean_confint(&data, IntervalMethod::T, 0.05).unwrap();
        let (lo_z, hi_z) = stats::mean_confint(&data, IntervalMethod::Z, 0.05).unwrap();
        assert!(hi_t - lo_t > hi_z - lo_z);
    }
}

/// Welch and pooled coincide when the two samples share size and spread.
#[test]
fn welch_matches_pooled_for_balanced_samples() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let a: Vec<f64> = (0..50).map(|_| normal.sample(&mut rng)).collect();
    let mut b = a.clone();
    // Same spread, shifted location.
    for v in &mut b {
        *v += 0.3;
    }

    let (t_pooled, _, df_pooled) =
        stats::ttest_ind(&a, &b, Variances::Pooled, Alternative::TwoSided).unwrap();
    let (t_welch, _, df_welch) =
        stats::ttest_ind(&a, &b, Variances::Unequal, Alternative::TwoSided).unwrap();

    assert!((t_pooled - t_welch).abs() < 1e-9);
    assert!((df_pooled - 98.0).abs() < 1e-12);
    // Identical variances make the Welch correction exact.
    assert!((df_welch - 98.0).abs() < 1e-6);
}
