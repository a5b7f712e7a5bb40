//! Reduction of terminal discount factors to a price estimate.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{PricingError, Result};
use super::matrix::PathMatrix;

/// Decimal places kept in reported prices and variances.
pub const RESULT_DECIMALS: i32 = 10;

/// Monte Carlo estimate of a zero-coupon bond price.
///
/// `bond_price` and `variance` are rounded to [`RESULT_DECIMALS`] places.
/// `variance` is the population variance of the terminal discount factor
/// across paths; the standard error of the price is derived from it.
///
/// Non-finite values are not errors: extreme inputs can push discount
/// factors to infinity, and the resulting NaN/Inf is reported here as-is.
/// Check [`is_finite`](Self::is_finite) before using the numbers.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     bond_price: 0.96,
///     variance: 0.0004,
///     effective_simulations: 10_000,
/// };
///
/// assert!((result.std_error() - 0.0002).abs() < 1e-12);
/// assert!(result.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Estimated bond price `P(0, T)`.
    pub bond_price: f64,
    /// Sample (population) variance of the terminal discount factor.
    pub variance: f64,
    /// Number of paths the estimate was computed from.
    pub effective_simulations: usize,
}

impl PricingResult {
    /// Standard error of the price, `sqrt(variance / n)`.
    #[inline]
    pub fn std_error(&self) -> f64 {
        (self.variance / self.effective_simulations as f64).sqrt()
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error()
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error()
    }

    /// True when both price and variance are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.bond_price.is_finite() && self.variance.is_finite()
    }
}

/// Computes price and variance from a Discount Factor Matrix.
///
/// Takes the last column, then its mean and population variance
/// (divisor `n`), each rounded to 10 decimal places.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] if the matrix has no rows.
pub fn estimate_bond_price(discount_factors: &PathMatrix) -> Result<PricingResult> {
    if discount_factors.n_rows() == 0 {
        return Err(PricingError::invalid_parameter(
            "discount_factors",
            "at least one simulated path is required",
        ));
    }

    let terminal = discount_factors.last_column();
    let (mean, variance) = mean_and_variance(&terminal);

    let result = PricingResult {
        bond_price: round_decimals(mean, RESULT_DECIMALS),
        variance: round_decimals(variance, RESULT_DECIMALS),
        effective_simulations: terminal.len(),
    };

    if !result.is_finite() {
        warn!(
            bond_price = result.bond_price,
            variance = result.variance,
            "non-finite bond price estimate"
        );
    }

    Ok(result)
}

/// Mean and population variance, two-pass.
pub(crate) fn mean_and_variance(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}

/// Rounds `value` to `decimals` places, half away from zero.
///
/// Non-finite values, and values too large to carry that many decimals,
/// are returned unchanged.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / factor
}
