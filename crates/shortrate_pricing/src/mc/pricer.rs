//! Zero-coupon bond pricing entry points.
//!
//! # Overview
//!
//! [`monte_carlo_bond_price`] chains the three stateless stages:
//! 1. Path generation (via [`simulate_short_rate`])
//! 2. Discount integration (via [`compute_discount_factors`])
//! 3. Estimation (via [`estimate_bond_price`])
//!
//! [`ZeroCouponBondPricer`] bundles validated parameters with an owned
//! generator for callers that price repeatedly.

use tracing::debug;

use super::config::SimulationParams;
use super::discount::compute_discount_factors;
use super::error::Result;
use super::estimator::{estimate_bond_price, PricingResult};
use super::paths::simulate_short_rate;
use crate::rng::ShortRateRng;

/// Prices a zero-coupon bond by Monte Carlo simulation.
///
/// Every call allocates its own matrices; the only state touched is `rng`.
///
/// # Errors
///
/// Propagates [`PricingError`](super::PricingError) from the stages. With
/// validated [`SimulationParams`] no stage is expected to fail.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::mc::{monte_carlo_bond_price, SimulationParams};
/// use shortrate_pricing::rng::ShortRateRng;
///
/// let params = SimulationParams::new(0.03, 0.0, 1.0, 1_000).unwrap();
/// let result = monte_carlo_bond_price(&params, &mut ShortRateRng::from_seed(1)).unwrap();
///
/// assert_eq!(result.bond_price, 0.9704455335);
/// assert_eq!(result.variance, 0.0);
/// ```
pub fn monte_carlo_bond_price(
    params: &SimulationParams,
    rng: &mut ShortRateRng,
) -> Result<PricingResult> {
    let paths = simulate_short_rate(params, rng);
    let discount_factors = compute_discount_factors(&paths.rates, &paths.time_grid)?;
    let result = estimate_bond_price(&discount_factors)?;

    debug!(
        bond_price = result.bond_price,
        variance = result.variance,
        effective_simulations = result.effective_simulations,
        "zero-coupon bond priced"
    );

    Ok(result)
}

/// Monte Carlo pricer owning its parameters and generator.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::mc::{SimulationParams, ZeroCouponBondPricer};
///
/// let params = SimulationParams::new(0.04, 0.02, 1.0, 2_000).unwrap();
/// let mut pricer = ZeroCouponBondPricer::with_seed(params, 42);
///
/// let first = pricer.price().unwrap();
/// pricer.reset();
/// let replay = pricer.price().unwrap();
///
/// assert_eq!(first, replay);
/// ```
#[derive(Debug)]
pub struct ZeroCouponBondPricer {
    params: SimulationParams,
    rng: ShortRateRng,
}

impl ZeroCouponBondPricer {
    /// Creates a pricer seeded from entropy.
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            rng: ShortRateRng::from_entropy(),
        }
    }

    /// Creates a pricer with a fixed seed.
    pub fn with_seed(params: SimulationParams, seed: u64) -> Self {
        Self {
            params,
            rng: ShortRateRng::from_seed(seed),
        }
    }

    /// Creates a pricer around an existing generator.
    pub fn with_rng(params: SimulationParams, rng: ShortRateRng) -> Self {
        Self { params, rng }
    }

    /// Returns the pricing parameters.
    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Returns the seed the generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the generator from its initial seed.
    pub fn reset(&mut self) {
        self.rng = ShortRateRng::from_seed(self.rng.seed());
    }

    /// Restarts the generator from a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = ShortRateRng::from_seed(seed);
    }

    /// Runs one simulation.
    ///
    /// Successive calls continue the random stream.
    pub fn price(&mut self) -> Result<PricingResult> {
        monte_carlo_bond_price(&self.params, &mut self.rng)
    }
}
