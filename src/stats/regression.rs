//! Simple linear regression with residuals and prediction intervals.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use statrs::distribution::ContinuousCDF;

use super::{check_alpha, p_value, students_t};
use crate::error::{StatError, StatResult};
use crate::types::Alternative;

/// A fitted simple linear regression y = β₀ + β₁x (or y = βx through the
/// origin).
///
/// Holds the residuals and the pieces needed for slope inference and for
/// confidence/prediction intervals at a new point. Immutable once fitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearFit {
    /// Estimated slope β₁.
    pub slope: f64,
    /// Estimated intercept β₀ (exactly 0 for a through-origin fit).
    pub intercept: f64,
    /// Whether the model was constrained through the origin.
    pub through_origin: bool,
    /// Residuals yᵢ − ŷᵢ, in input order.
    pub residuals: Vec<f64>,
    /// Residual variance s² = Σe² / df.
    pub residual_variance: f64,
    /// Residual degrees of freedom (n − 2, or n − 1 through the origin).
    pub df: f64,
    n: f64,
    x_mean: f64,
    sxx: f64,
    sum_x2: f64,
}

/// Fit a simple linear regression of `y` on `x` by least squares.
///
/// With `through_origin` the intercept is constrained to zero (the model
/// for quantities known to vanish together, e.g. road distance against
/// straight-line distance).
///
/// # Errors
/// `LengthMismatch` if the slices differ in length, `TooFewObservations`
/// if there are fewer points than residual degrees of freedom require,
/// `DegenerateSample` if the predictor has no spread.
pub fn fit_linear(x: &[f64], y: &[f64], through_origin: bool) -> StatResult<LinearFit> {
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let min = if through_origin { 2 } else { 3 };
    if x.len() < min {
        return Err(StatError::TooFewObservations {
            label: "regression points".to_string(),
            got: x.len(),
            min,
        });
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_x2: f64 = x.iter().map(|v| v * v).sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(xi, yi)| xi * yi).sum();
    let x_mean = sum_x / n;
    let sxx = sum_x2 - n * x_mean * x_mean;

    let (slope, intercept) = if through_origin {
        if sum_x2 == 0.0 {
            return Err(degenerate_predictor());
        }
        (sum_xy / sum_x2, 0.0)
    } else {
        // Normal equations XᵀXβ = Xᵀy for the 2-parameter design.
        let xtx = Matrix2::new(n, sum_x, sum_x, sum_x2);
        let xty = Vector2::new(sum_y, sum_xy);
        let beta = xtx.lu().solve(&xty).ok_or_else(degenerate_predictor)?;
        (beta[1], beta[0])
    };

    let residuals: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| yi - (intercept + slope * xi))
        .collect();
    let df = if through_origin { n - 1.0 } else { n - 2.0 };
    let residual_variance = residuals.iter().map(|e| e * e).sum::<f64>() / df;

    Ok(LinearFit {
        slope,
        intercept,
        through_origin,
        residuals,
        residual_variance,
        df,
        n,
        x_mean,
        sxx,
        sum_x2,
    })
}

impl LinearFit {
    /// Fitted value at `x0`.
    pub fn predict(&self, x0: f64) -> f64 {
        self.intercept + self.slope * x0
    }

    /// Standard error of the slope estimate.
    pub fn slope_se(&self) -> f64 {
        let denom = if self.through_origin {
            self.sum_x2
        } else {
            self.sxx
        };
        (self.residual_variance / denom).sqrt()
    }

    /// t-test of the hypothesis β₁ = 0.
    ///
    /// Returns `(statistic, p_value, df)`.
    pub fn slope_test(&self, alternative: Alternative) -> StatResult<(f64, f64, f64)> {
        let se = self.slope_se();
        if se == 0.0 {
            return Err(StatError::DegenerateSample {
                label: "regression".to_string(),
                message: "zero residual variance, slope test undefined".to_string(),
            });
        }
        let t = self.slope / se;
        let p = p_value(&students_t("regression", self.df)?, t, alternative);
        Ok((t, p, self.df))
    }

    /// Two-sided (1 − α) confidence interval for the mean response at `x0`.
    pub fn confint_mean(&self, x0: f64, alpha: f64) -> StatResult<(f64, f64)> {
        let se = (self.residual_variance * self.leverage(x0)).sqrt();
        self.interval_around(x0, se, alpha)
    }

    /// Two-sided (1 − α) prediction interval for a new observation at `x0`.
    pub fn predict_interval(&self, x0: f64, alpha: f64) -> StatResult<(f64, f64)> {
        let se = (self.residual_variance * (1.0 + self.leverage(x0))).sqrt();
        self.interval_around(x0, se, alpha)
    }

    /// Leverage of a point: Var(ŷ₀) / s².
    fn leverage(&self, x0: f64) -> f64 {
        if self.through_origin {
            x0 * x0 / self.sum_x2
        } else {
            1.0 / self.n + (x0 - self.x_mean) * (x0 - self.x_mean) / self.sxx
        }
    }

    fn interval_around(&self, x0: f64, se: f64, alpha: f64) -> StatResult<(f64, f64)> {
        check_alpha(alpha)?;
        let fit = self.predict(x0);
        let half = students_t("regression", self.df)?.inverse_cdf(1.0 - alpha / 2.0) * se;
        Ok((fit - half, fit + half))
    }
}

fn degenerate_predictor() -> StatError {
    StatError::DegenerateSample {
        label: "predictor".to_string(),
        message: "no spread in x, least-squares fit undefined".to_string(),
    }
}
