//! Closed-form reference prices for verification.
//!
//! Under `dr = σ dW` the integrated rate is Gaussian,
//!
//! ```text
//! ∫₀ᵀ r(s) ds ~ N(r0·T, σ²T³/3)
//! P(0, T) = exp(-r0·T + σ²T³/6)
//! ```
//!
//! The Monte Carlo estimator integrates with a left Riemann sum on a grid,
//! so its expectation is the discrete analogue, also available in closed
//! form through [`discretised_zero_coupon_price`].

use crate::mc::SimulationParams;

/// Continuous-time zero-coupon bond price.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::analytical::zero_coupon_price;
///
/// let price = zero_coupon_price(0.03, 0.0, 1.0);
/// assert!((price - (-0.03_f64).exp()).abs() < 1e-15);
/// ```
pub fn zero_coupon_price(initial_rate: f64, volatility: f64, maturity: f64) -> f64 {
    let mean = initial_rate * maturity;
    let variance = volatility * volatility * maturity.powi(3) / 3.0;
    (-mean + 0.5 * variance).exp()
}

/// Mean and variance of the discretised integral `Σ r[k]·Δ`.
///
/// With `N` steps of width `Δ = T/N` and Brownian increments of variance
/// `h` (the configured time step):
///
/// ```text
/// Σ_{k<N} r[k]·Δ = r0·T + σΔ Σ_{j≤N-2} (N-1-j) ΔW_j
/// Var = σ²Δ²h · (N-1)N(2N-1)/6
/// ```
pub fn discretised_integral_moments(params: &SimulationParams) -> (f64, f64) {
    let n = params.num_steps() as f64;
    let width = params.maturity() / n;
    let sigma = params.volatility();

    let mean = params.initial_rate() * params.maturity();
    let weights = (n - 1.0) * n * (2.0 * n - 1.0) / 6.0;
    let variance = sigma * sigma * width * width * params.time_step() * weights;
    (mean, variance)
}

/// Expected value of the Monte Carlo estimator on its own grid.
pub fn discretised_zero_coupon_price(params: &SimulationParams) -> f64 {
    let (mean, variance) = discretised_integral_moments(params);
    (-mean + 0.5 * variance).exp()
}

/// Variance of the terminal discount factor on the simulation grid.
///
/// For `X ~ N(μ, v)`: `Var[e^{-X}] = e^{-2μ+v}(e^{v} - 1)`.
pub fn discretised_discount_variance(params: &SimulationParams) -> f64 {
    let (mean, variance) = discretised_integral_moments(params);
    (-2.0 * mean + variance).exp() * variance.exp_m1()
}
