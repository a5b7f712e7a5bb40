//! Discount-factor integration.
//!
//! Each rate trajectory is integrated with a left Riemann sum:
//!
//! ```text
//! I_k = Σ_{j<k} r[j] · (t[j+1] - t[j])
//! DF_k = exp(-I_k)
//! ```
//!
//! The scheme is first-order in the step size. `DF_0 = 1` exactly since no
//! time has elapsed.

use super::error::{PricingError, Result};
use super::grid::TimeGrid;
use super::matrix::PathMatrix;

/// Converts a Rate Path Matrix into a Discount Factor Matrix.
///
/// The output has the same shape as `rates`.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] if the number of columns of
/// `rates` differs from the number of grid points.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::mc::{compute_discount_factors, PathMatrix, TimeGrid};
///
/// let grid = TimeGrid::uniform(1.0, 2);
/// let rates = PathMatrix::from_vec(vec![0.02, 0.04, 0.06], 1, 3).unwrap();
///
/// let df = compute_discount_factors(&rates, &grid).unwrap();
/// assert_eq!(df.get(0, 0), 1.0);
/// assert!((df.get(0, 2) - (-0.03_f64).exp()).abs() < 1e-15);
/// ```
pub fn compute_discount_factors(rates: &PathMatrix, time_grid: &TimeGrid) -> Result<PathMatrix> {
    if rates.n_cols() != time_grid.len() {
        return Err(PricingError::invalid_parameter(
            "rates",
            format!(
                "rate paths have {} columns but the time grid has {} points",
                rates.n_cols(),
                time_grid.len()
            ),
        ));
    }

    let dt = time_grid.increments();
    let mut discount_factors = PathMatrix::filled(rates.n_rows(), rates.n_cols(), 1.0);

    for (row, path) in rates.rows().enumerate() {
        integrate_path(discount_factors.row_mut(row), path, &dt);
    }

    Ok(discount_factors)
}

#[inline]
fn integrate_path(out: &mut [f64], rates: &[f64], dt: &[f64]) {
    let mut integral = 0.0;
    for ((slot, &rate), &width) in out[1..].iter_mut().zip(rates).zip(dt) {
        integral += rate * width;
        *slot = (-integral).exp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_column_is_one() {
        let grid = TimeGrid::uniform(1.0, 4);
        let rates = PathMatrix::from_vec(
            vec![0.05, 0.06, 0.07, 0.08, 0.09, -0.02, -0.01, 0.0, 0.01, 0.02],
            2,
            5,
        )
        .unwrap();

        let df = compute_discount_factors(&rates, &grid).unwrap();
        assert_eq!(df.column(0), vec![1.0, 1.0]);
    }

    #[test]
    fn test_constant_rate_matches_exponential() {
        let r = 0.03;
        let grid = TimeGrid::uniform(2.0, 200);
        let rates = PathMatrix::filled(3, 201, r);

        let df = compute_discount_factors(&rates, &grid).unwrap();
        for (k, &t) in grid.points().iter().enumerate() {
            assert_relative_eq!(df.get(1, k), (-r * t).exp(), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_left_endpoint_is_used() {
        // The last rate never enters the integral.
        let grid = TimeGrid::uniform(1.0, 1);
        let rates = PathMatrix::from_vec(vec![0.01, 100.0], 1, 2).unwrap();

        let df = compute_discount_factors(&rates, &grid).unwrap();
        assert_relative_eq!(df.get(0, 1), (-0.01_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_negative_rates_exceed_one() {
        let grid = TimeGrid::uniform(1.0, 10);
        let rates = PathMatrix::filled(1, 11, -0.01);

        let df = compute_discount_factors(&rates, &grid).unwrap();
        assert!(df.get(0, 10) > 1.0);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let grid = TimeGrid::uniform(1.0, 10);
        let rates = PathMatrix::filled(2, 5, 0.01);

        let err = compute_discount_factors(&rates, &grid).unwrap_err();
        assert_eq!(err.parameter(), "rates");
    }
}
