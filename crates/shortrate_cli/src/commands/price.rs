//! Price command implementation
//!
//! Prices a single zero-coupon bond from command line parameters.

use serde::Serialize;
use shortrate_pricing::mc::{PricingResult, SimulationParams, ZeroCouponBondPricer};
use shortrate_pricing::rng::ShortRateRng;
use tracing::info;

use super::ensure_finite;
use crate::config::ShortRateConfig;
use crate::output::{decimal, render};
use crate::Result;

/// Bond and solver arguments of the `price` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceArgs {
    /// Initial short rate.
    pub rate: f64,
    /// Short-rate volatility.
    pub volatility: f64,
    /// Maturity in months.
    pub maturity_months: f64,
    /// Simulation count; the configured default when absent.
    pub simulations: Option<usize>,
    /// Time step in years; the configured default when absent.
    pub time_step: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PriceReport {
    bond_price: f64,
    variance: f64,
    effective_simulations: usize,
    num_steps: usize,
    seed: u64,
}

/// Prices the bond and returns the rendered report with the raw result.
pub fn execute(args: &PriceArgs, config: &ShortRateConfig) -> Result<(String, PricingResult)> {
    let params = SimulationParams::builder()
        .initial_rate(args.rate)
        .volatility(args.volatility)
        .maturity_months(args.maturity_months)
        .num_simulations(args.simulations.unwrap_or(config.num_simulations))
        .time_step(args.time_step.unwrap_or(config.time_step))
        .build()?;

    info!("Starting pricing...");
    info!("  Initial rate: {}", params.initial_rate());
    info!("  Volatility: {}", params.volatility());
    info!("  Maturity (years): {}", params.maturity());
    info!("  Monte Carlo paths: {}", params.num_simulations());
    info!("  Time steps: {}", params.num_steps());

    let rng = ShortRateRng::from_optional_seed(config.seed);
    let mut pricer = ZeroCouponBondPricer::with_rng(params, rng);
    let seed = pricer.seed();
    let result = pricer.price()?;

    let report = PriceReport {
        bond_price: result.bond_price,
        variance: result.variance,
        effective_simulations: result.effective_simulations,
        num_steps: pricer.params().num_steps(),
        seed,
    };
    let rows = [
        ("Bond price", decimal(report.bond_price)),
        ("Variance", decimal(report.variance)),
        ("95% half-width", decimal(result.confidence_95())),
        ("Simulations", report.effective_simulations.to_string()),
        ("Time steps", report.num_steps.to_string()),
        ("Seed", report.seed.to_string()),
    ];

    let rendered = render(&report, &rows, config.format)?;
    Ok((rendered, result))
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &ShortRateConfig) -> Result<()> {
    let (rendered, result) = execute(args, config)?;
    println!("{}", rendered);
    info!("Pricing complete");
    ensure_finite(result.bond_price, result.variance)
}
