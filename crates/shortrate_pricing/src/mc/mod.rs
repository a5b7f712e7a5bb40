//! Monte Carlo pipeline for zero-coupon bonds under `dr = σ dW`.
//!
//! # Architecture
//!
//! ```text
//! SimulationParams (validated bundle)
//! └── monte_carlo_bond_price()
//!     ├── simulate_short_rate()       -> Rate Path Matrix + TimeGrid
//!     ├── compute_discount_factors()  -> Discount Factor Matrix
//!     └── estimate_bond_price()       -> PricingResult
//! ```
//!
//! Each stage is a pure function over owned buffers. The only mutable input
//! is the [`ShortRateRng`](crate::rng::ShortRateRng) handed to the path
//! generator.
//!
//! # Examples
//!
//! ```rust
//! use shortrate_pricing::mc::{
//!     compute_discount_factors, estimate_bond_price, simulate_short_rate, SimulationParams,
//! };
//! use shortrate_pricing::rng::ShortRateRng;
//!
//! let params = SimulationParams::builder()
//!     .initial_rate(0.04)
//!     .volatility(0.02)
//!     .maturity(1.0)
//!     .num_simulations(5_000)
//!     .build()
//!     .unwrap();
//! let mut rng = ShortRateRng::from_seed(42);
//!
//! let paths = simulate_short_rate(&params, &mut rng);
//! let discount_factors = compute_discount_factors(&paths.rates, &paths.time_grid).unwrap();
//! let result = estimate_bond_price(&discount_factors).unwrap();
//!
//! println!("Price: {:.6} +/- {:.6}", result.bond_price, result.confidence_95());
//! ```

pub mod config;
pub mod discount;
pub mod error;
pub mod estimator;
pub mod grid;
pub mod matrix;
pub mod paths;
pub mod pricer;

// Re-exports for convenient access
pub use config::{
    SimulationParams, SimulationParamsBuilder, DEFAULT_NUM_SIMULATIONS, DEFAULT_TIME_STEP,
    MAX_SIMULATIONS, MAX_STEPS, MIN_SIMULATIONS,
};
pub use discount::compute_discount_factors;
pub use error::{PricingError, Result};
pub use estimator::{estimate_bond_price, round_decimals, PricingResult, RESULT_DECIMALS};
pub use grid::TimeGrid;
pub use matrix::PathMatrix;
pub use paths::{simulate_short_rate, ShortRatePaths};
pub use pricer::{monte_carlo_bond_price, ZeroCouponBondPricer};
