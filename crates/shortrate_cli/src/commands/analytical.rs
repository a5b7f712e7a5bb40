//! Analytical command implementation
//!
//! Prints the closed-form zero-coupon price under `dr = σ dW`.

use serde::Serialize;
use shortrate_pricing::analytical::zero_coupon_price;
use shortrate_pricing::mc::SimulationParams;
use tracing::info;

use crate::config::ShortRateConfig;
use crate::output::{decimal, render};
use crate::Result;

#[derive(Debug, Serialize)]
struct AnalyticalReport {
    bond_price: f64,
}

/// Computes and renders the closed-form price.
///
/// Inputs go through the same validation as the Monte Carlo path.
pub fn execute(
    rate: f64,
    volatility: f64,
    maturity_months: f64,
    config: &ShortRateConfig,
) -> Result<(String, f64)> {
    let params = SimulationParams::builder()
        .initial_rate(rate)
        .volatility(volatility)
        .maturity_months(maturity_months)
        .time_step(config.time_step)
        .build()?;

    let price = zero_coupon_price(params.initial_rate(), params.volatility(), params.maturity());
    let report = AnalyticalReport { bond_price: price };
    let rows = [("Closed-form price", decimal(price))];
    Ok((render(&report, &rows, config.format)?, price))
}

/// Run the analytical command
pub fn run(
    rate: f64,
    volatility: f64,
    maturity_months: f64,
    config: &ShortRateConfig,
) -> Result<()> {
    info!("Computing closed-form price...");
    let (rendered, _) = execute(rate, volatility, maturity_months, config)?;
    println!("{}", rendered);
    Ok(())
}
