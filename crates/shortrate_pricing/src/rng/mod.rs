//! # Random Number Generation
//!
//! Seedable generator used by the path generator. Every simulation receives
//! its generator explicitly; nothing in this crate touches a process-global
//! RNG, so two pricing calls never interfere with each other and a fixed
//! seed reproduces a run bit for bit.
//!
//! ## Usage Example
//!
//! ```rust
//! use shortrate_pricing::rng::ShortRateRng;
//!
//! let mut rng = ShortRateRng::from_seed(12345);
//!
//! // Brownian increments for a step of 0.01 years
//! let mut increments = vec![0.0; 100];
//! rng.fill_normal_scaled(&mut increments, 0.01_f64.sqrt());
//! ```

mod prng;

pub use prng::ShortRateRng;
