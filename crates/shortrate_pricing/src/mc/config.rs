//! Simulation parameters for the short-rate Monte Carlo pipeline.
//!
//! [`SimulationParams`] is the validated parameter bundle consumed by the
//! path generator. It can only be obtained through
//! [`SimulationParamsBuilder::build`] or [`SimulationParams::new`], both of
//! which reject invalid input before anything is allocated.

use super::error::{PricingError, Result};

/// Default Euler-Maruyama step, in years.
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Default number of simulated paths.
pub const DEFAULT_NUM_SIMULATIONS: usize = 10_000;

/// Smallest simulation count that still forms one antithetic pair.
pub const MIN_SIMULATIONS: usize = 2;

/// Maximum number of simulated paths allowed.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Validated parameters of one pricing run.
///
/// # Model
///
/// ```text
/// dr = σ dW,  r(0) = r0
/// P(0, T) = E[exp(-∫₀ᵀ r(s) ds)]
/// ```
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::mc::SimulationParams;
///
/// let params = SimulationParams::builder()
///     .initial_rate(0.03)
///     .volatility(0.01)
///     .maturity(2.0)
///     .num_simulations(1_000)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.num_steps(), 200);
/// assert_eq!(params.half_simulations(), 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    initial_rate: f64,
    volatility: f64,
    maturity: f64,
    num_simulations: usize,
    time_step: f64,
}

impl SimulationParams {
    /// Creates parameters with the default time step.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(
        initial_rate: f64,
        volatility: f64,
        maturity: f64,
        num_simulations: usize,
    ) -> Result<Self> {
        Self::builder()
            .initial_rate(initial_rate)
            .volatility(volatility)
            .maturity(maturity)
            .num_simulations(num_simulations)
            .build()
    }

    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParamsBuilder {
        SimulationParamsBuilder::default()
    }

    /// Initial short rate r(0).
    #[inline]
    pub fn initial_rate(&self) -> f64 {
        self.initial_rate
    }

    /// Absolute volatility σ of the short rate.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Bond maturity (total simulated time) in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Requested number of simulations.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Euler-Maruyama step in years.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Number of time steps, `round(maturity / time_step)` with ties to even.
    #[inline]
    pub fn num_steps(&self) -> usize {
        steps_for(self.maturity, self.time_step) as usize
    }

    /// Number of antithetic pairs, `floor(num_simulations / 2)`.
    #[inline]
    pub fn half_simulations(&self) -> usize {
        self.num_simulations / 2
    }

    /// Number of paths actually simulated.
    ///
    /// An odd request drops the unpaired simulation.
    #[inline]
    pub fn effective_simulations(&self) -> usize {
        2 * self.half_simulations()
    }

    /// Returns a copy with a different simulation count.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn with_num_simulations(&self, num_simulations: usize) -> Result<Self> {
        let params = Self {
            num_simulations,
            ..*self
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if:
    /// - `time_step` or `maturity` is not a positive finite number
    /// - `num_simulations` is below 2 or above 10,000,000
    /// - `initial_rate` is not finite
    /// - `volatility` is negative or not finite
    /// - `maturity / time_step` rounds to zero steps or more than 100,000
    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(PricingError::invalid_parameter(
                "time_step",
                format!("must be a positive finite number, got {}", self.time_step),
            ));
        }
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(PricingError::invalid_parameter(
                "maturity",
                format!("must be a positive finite number, got {}", self.maturity),
            ));
        }
        if self.num_simulations < MIN_SIMULATIONS || self.num_simulations > MAX_SIMULATIONS {
            return Err(PricingError::invalid_parameter(
                "num_simulations",
                format!(
                    "must be in range [{}, {}], got {}",
                    MIN_SIMULATIONS, MAX_SIMULATIONS, self.num_simulations
                ),
            ));
        }
        if !self.initial_rate.is_finite() {
            return Err(PricingError::invalid_parameter(
                "initial_rate",
                format!("must be finite, got {}", self.initial_rate),
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(PricingError::invalid_parameter(
                "volatility",
                format!("must be a non-negative finite number, got {}", self.volatility),
            ));
        }

        let steps = steps_for(self.maturity, self.time_step);
        if steps < 1.0 {
            return Err(PricingError::invalid_parameter(
                "maturity",
                format!(
                    "maturity {} is shorter than half a time step of {}",
                    self.maturity, self.time_step
                ),
            ));
        }
        if steps > MAX_STEPS as f64 {
            return Err(PricingError::invalid_parameter(
                "time_step",
                format!(
                    "maturity {} with time step {} needs {} steps, maximum is {}",
                    self.maturity, self.time_step, steps, MAX_STEPS
                ),
            ));
        }
        Ok(())
    }
}

#[inline]
fn steps_for(maturity: f64, time_step: f64) -> f64 {
    (maturity / time_step).round_ties_even()
}

/// Builder for [`SimulationParams`].
///
/// `num_simulations` defaults to 10,000 and `time_step` to 0.01 years;
/// `initial_rate`, `volatility` and `maturity` must be set.
#[derive(Clone, Debug, Default)]
pub struct SimulationParamsBuilder {
    initial_rate: Option<f64>,
    volatility: Option<f64>,
    maturity: Option<f64>,
    num_simulations: Option<usize>,
    time_step: Option<f64>,
}

impl SimulationParamsBuilder {
    /// Sets the initial short rate.
    #[inline]
    pub fn initial_rate(mut self, initial_rate: f64) -> Self {
        self.initial_rate = Some(initial_rate);
        self
    }

    /// Sets the short-rate volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the maturity from a number of months.
    #[inline]
    pub fn maturity_months(self, months: f64) -> Self {
        self.maturity(months / 12.0)
    }

    /// Sets the number of simulations.
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the Euler-Maruyama time step in years.
    #[inline]
    pub fn time_step(mut self, time_step: f64) -> Self {
        self.time_step = Some(time_step);
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if a required field is
    /// missing or [`SimulationParams::validate`] fails.
    pub fn build(self) -> Result<SimulationParams> {
        let initial_rate = self
            .initial_rate
            .ok_or_else(|| PricingError::invalid_parameter("initial_rate", "must be specified"))?;
        let volatility = self
            .volatility
            .ok_or_else(|| PricingError::invalid_parameter("volatility", "must be specified"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| PricingError::invalid_parameter("maturity", "must be specified"))?;

        let params = SimulationParams {
            initial_rate,
            volatility,
            maturity,
            num_simulations: self.num_simulations.unwrap_or(DEFAULT_NUM_SIMULATIONS),
            time_step: self.time_step.unwrap_or(DEFAULT_TIME_STEP),
        };

        params.validate()?;
        Ok(params)
    }
}
