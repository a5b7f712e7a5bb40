//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod analytical;
pub mod price;
pub mod run;

use shortrate_pricing::mc::PricingResult;

use crate::{CliError, Result};

/// Fails once a degenerate estimate has been reported.
pub(crate) fn ensure_finite(bond_price: f64, variance: f64) -> Result<()> {
    let result = PricingResult {
        bond_price,
        variance,
        ..Default::default()
    };
    if result.is_finite() {
        Ok(())
    } else {
        Err(CliError::NumericalDegeneracy {
            bond_price,
            variance,
        })
    }
}
