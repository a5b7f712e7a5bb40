//! Record-level entry point.
//!
//! Maps the bond input record and the solver options record onto
//! [`SimulationParams`], prices, and packages the response record.
//!
//! # Record Format
//!
//! Input:
//!
//! ```json
//! { "Initial Interest Rate": 0.04, "Volatility": 0.02, "Maturity Time": 12 }
//! ```
//!
//! `"Maturity Time"` is in months and is divided by 12.
//!
//! Options (all optional):
//!
//! ```json
//! { "NumberOfSimulations": 5000, "Seed": 42, "TimeStep": 0.01 }
//! ```
//!
//! Response:
//!
//! ```json
//! { "bond_price": 0.9608..., "variance": 0.0000... }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::mc::{
    monte_carlo_bond_price, PricingError, PricingResult, SimulationParams,
    DEFAULT_NUM_SIMULATIONS,
};
use crate::rng::ShortRateRng;

/// Months per year used for the maturity conversion.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Error raised while handling a pricing record.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The record is not shaped as expected (missing key, wrong type).
    #[error("Malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record field holds an unusable value.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Record key.
        key: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// The pricing pipeline rejected the parameters.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Bond input record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BondInput {
    /// Initial short rate.
    #[serde(rename = "Initial Interest Rate")]
    pub initial_rate: f64,
    /// Short-rate volatility.
    #[serde(rename = "Volatility")]
    pub volatility: f64,
    /// Maturity in months.
    #[serde(rename = "Maturity Time")]
    pub maturity_months: f64,
}

impl BondInput {
    /// Maturity converted to years.
    #[inline]
    pub fn maturity_years(&self) -> f64 {
        self.maturity_months / MONTHS_PER_YEAR
    }
}

/// Solver options record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Number of simulations; integral floats are accepted and truncated.
    #[serde(rename = "NumberOfSimulations", default)]
    pub num_simulations: Option<f64>,
    /// Generator seed; drawn from entropy when absent.
    #[serde(rename = "Seed", default)]
    pub seed: Option<u64>,
    /// Time step in years.
    #[serde(rename = "TimeStep", default)]
    pub time_step: Option<f64>,
}

impl SolverOptions {
    /// Simulation count, defaulting to 10,000.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidValue`] for negative or non-finite counts.
    pub fn simulation_count(&self) -> Result<usize, RequestError> {
        match self.num_simulations {
            None => Ok(DEFAULT_NUM_SIMULATIONS),
            Some(n) if n.is_finite() && n >= 0.0 => Ok(n.trunc() as usize),
            Some(n) => Err(RequestError::InvalidValue {
                key: "NumberOfSimulations",
                reason: format!("must be a non-negative number, got {}", n),
            }),
        }
    }
}

/// Response record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BondPriceResponse {
    /// Estimated bond price, 10 decimal places.
    pub bond_price: f64,
    /// Estimator variance, 10 decimal places.
    pub variance: f64,
}

impl From<PricingResult> for BondPriceResponse {
    fn from(result: PricingResult) -> Self {
        Self {
            bond_price: result.bond_price,
            variance: result.variance,
        }
    }
}

/// Builds validated simulation parameters from the two records.
///
/// # Errors
///
/// Returns [`RequestError`] if an option is unusable or the resulting
/// parameters fail validation.
pub fn simulation_params(
    input: &BondInput,
    options: &SolverOptions,
) -> Result<SimulationParams, RequestError> {
    let mut builder = SimulationParams::builder()
        .initial_rate(input.initial_rate)
        .volatility(input.volatility)
        .maturity(input.maturity_years())
        .num_simulations(options.simulation_count()?);
    if let Some(time_step) = options.time_step {
        builder = builder.time_step(time_step);
    }
    Ok(builder.build()?)
}

/// Prices typed records.
///
/// # Errors
///
/// See [`simulation_params`].
pub fn price_records(
    input: &BondInput,
    options: &SolverOptions,
) -> Result<BondPriceResponse, RequestError> {
    let params = simulation_params(input, options)?;
    let mut rng = ShortRateRng::from_optional_seed(options.seed);
    debug!(seed = rng.seed(), "pricing bond record");

    let result = monte_carlo_bond_price(&params, &mut rng)?;
    Ok(result.into())
}

/// Prices JSON records.
///
/// `options` may be `None` or `null`, in which case every default applies.
///
/// # Errors
///
/// Returns [`RequestError::Malformed`] when a record cannot be decoded, and
/// the errors of [`price_records`] otherwise.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shortrate_pricing::request::run;
///
/// let input = json!({
///     "Initial Interest Rate": 0.03,
///     "Volatility": 0.0,
///     "Maturity Time": 12
/// });
/// let options = json!({ "NumberOfSimulations": 1000, "Seed": 1 });
///
/// let response = run(&input, Some(&options)).unwrap();
/// assert_eq!(response.bond_price, 0.9704455335);
/// assert_eq!(response.variance, 0.0);
/// ```
pub fn run(input: &Value, options: Option<&Value>) -> Result<BondPriceResponse, RequestError> {
    let input = BondInput::deserialize(input)?;
    let options = match options {
        None | Some(Value::Null) => SolverOptions::default(),
        Some(value) => SolverOptions::deserialize(value)?,
    };
    price_records(&input, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(months: f64) -> Value {
        json!({
            "Initial Interest Rate": 0.05,
            "Volatility": 0.01,
            "Maturity Time": months
        })
    }

    #[test]
    fn test_maturity_months_to_years() {
        let record: BondInput = serde_json::from_value(input(18.0)).unwrap();
        assert_eq!(record.maturity_years(), 1.5);
    }

    #[test]
    fn test_default_simulation_count() {
        assert_eq!(SolverOptions::default().simulation_count().unwrap(), 10_000);
    }

    #[test]
    fn test_float_simulation_count_truncated() {
        let options: SolverOptions =
            serde_json::from_value(json!({ "NumberOfSimulations": 5000.0 })).unwrap();
        assert_eq!(options.simulation_count().unwrap(), 5_000);
    }

    #[test]
    fn test_negative_simulation_count_rejected() {
        let options = SolverOptions {
            num_simulations: Some(-4.0),
            ..Default::default()
        };
        assert!(matches!(
            options.simulation_count(),
            Err(RequestError::InvalidValue {
                key: "NumberOfSimulations",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let record = json!({ "Initial Interest Rate": 0.05, "Volatility": 0.01 });

        let err = run(&record, None).unwrap_err();
        assert!(matches!(err, RequestError::Malformed(_)));
        assert!(err.to_string().contains("Maturity Time"));
    }

    #[test]
    fn test_zero_maturity_rejected() {
        let err = run(&input(0.0), None).unwrap_err();
        assert!(matches!(
            err,
            RequestError::Pricing(PricingError::InvalidParameter {
                name: "maturity",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_options_use_defaults() {
        let record: BondInput = serde_json::from_value(input(12.0)).unwrap();
        let options = SolverOptions::deserialize(&json!({})).unwrap();

        let params = simulation_params(&record, &options).unwrap();
        assert_eq!(params.num_simulations(), 10_000);
        assert_eq!(params.time_step(), 0.01);
    }

    #[test]
    fn test_null_options_accepted() {
        assert!(run(&input(1.0), Some(&Value::Null)).is_ok());
    }

    #[test]
    fn test_seed_makes_records_reproducible() {
        let options = json!({ "NumberOfSimulations": 200, "Seed": 17 });

        let a = run(&input(24.0), Some(&options)).unwrap();
        let b = run(&input(24.0), Some(&options)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_time_step_option() {
        let record: BondInput = serde_json::from_value(input(12.0)).unwrap();
        let options = SolverOptions {
            time_step: Some(0.1),
            ..Default::default()
        };

        let params = simulation_params(&record, &options).unwrap();
        assert_eq!(params.num_steps(), 10);
    }

    #[test]
    fn test_response_serialises_with_record_keys() {
        let response = BondPriceResponse {
            bond_price: 0.95,
            variance: 0.0001,
        };
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value, json!({ "bond_price": 0.95, "variance": 0.0001 }));
    }
}
