//! # Short-Rate Bond Pricer
//!
//! Monte Carlo valuation of zero-coupon bonds when the short rate follows an
//! arithmetic Brownian motion, `dr = σ dW`.
//!
//! ## Pipeline
//!
//! 1. [`mc::simulate_short_rate`]: antithetic Euler-Maruyama rate paths
//! 2. [`mc::compute_discount_factors`]: left Riemann integration
//! 3. [`mc::estimate_bond_price`]: mean and variance of terminal discount factors
//!
//! ## Usage Example
//!
//! ```rust
//! use shortrate_pricing::mc::{SimulationParams, ZeroCouponBondPricer};
//!
//! let params = SimulationParams::builder()
//!     .initial_rate(0.03)
//!     .volatility(0.01)
//!     .maturity_months(24.0)
//!     .num_simulations(10_000)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = ZeroCouponBondPricer::with_seed(params, 42);
//! let result = pricer.price().unwrap();
//! assert!(result.bond_price > 0.9 && result.bond_price < 1.0);
//! ```
//!
//! ## Modules
//!
//! - [`mc`]: parameters, path generation, integration, estimation
//! - [`rng`]: seedable random number generation
//! - [`analytical`]: closed-form reference prices
//! - [`request`]: JSON record entry point

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod mc;
pub mod request;
pub mod rng;
