//! Short-rate path generation.
//!
//! Simulates the arithmetic Brownian motion
//!
//! ```text
//! dr = σ dW
//! r(t_{k+1}) = r0 + σ Σ_{j≤k} ΔW_j,   ΔW_j ~ N(0, Δt)
//! ```
//!
//! with antithetic variates: only `floor(n / 2)` rows of increments are
//! drawn, and the second half of the matrix reuses them negated.
//!
//! # Antithetic Layout
//!
//! Row `i` and row `i + half_simulations` form a pair for every
//! `i < half_simulations`. Both start at `r0`; their cumulative shocks are
//! exact negations, so the pair is mirrored around `r0`.

use tracing::{debug, warn};

use super::config::SimulationParams;
use super::grid::TimeGrid;
use super::matrix::PathMatrix;
use crate::rng::ShortRateRng;

/// Output of the path generator.
#[derive(Clone, Debug)]
pub struct ShortRatePaths {
    /// Rate Path Matrix, `(2 · half_simulations) × (num_steps + 1)`.
    pub rates: PathMatrix,
    /// Simulation time grid.
    pub time_grid: TimeGrid,
    /// Brownian increments drawn for the first half, `half_simulations × num_steps`.
    pub increments: PathMatrix,
}

impl ShortRatePaths {
    /// Number of antithetic pairs.
    #[inline]
    pub fn half_simulations(&self) -> usize {
        self.increments.n_rows()
    }

    /// Number of simulated rows.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.rates.n_rows()
    }

    /// Index of the antithetic partner of `row`.
    #[inline]
    pub fn antithetic_partner(&self, row: usize) -> usize {
        let half = self.half_simulations();
        if row < half {
            row + half
        } else {
            row - half
        }
    }
}

/// Generates the Rate Path Matrix and Time Grid.
///
/// # Algorithm
///
/// 1. `num_steps = round(T / Δt)`; grid of `num_steps + 1` points on `[0, T]`
/// 2. Draw `half × num_steps` normals with standard deviation `sqrt(Δt)`
/// 3. Row `i` accumulates `σ·ΔW`, row `i + half` accumulates `σ·(-ΔW)`
/// 4. Column 0 is `r0`; column `k` is `r0 + cumulative sum up to step k`
///
/// An odd `num_simulations` drops the unpaired simulation.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::mc::{simulate_short_rate, SimulationParams};
/// use shortrate_pricing::rng::ShortRateRng;
///
/// let params = SimulationParams::new(0.03, 0.01, 1.0, 100).unwrap();
/// let mut rng = ShortRateRng::from_seed(42);
///
/// let paths = simulate_short_rate(&params, &mut rng);
/// assert_eq!(paths.rates.shape(), (100, 101));
/// assert_eq!(paths.time_grid.len(), 101);
/// ```
pub fn simulate_short_rate(params: &SimulationParams, rng: &mut ShortRateRng) -> ShortRatePaths {
    let num_steps = params.num_steps();
    let half = params.half_simulations();
    let initial_rate = params.initial_rate();
    let volatility = params.volatility();

    if params.num_simulations() % 2 == 1 {
        warn!(
            requested = params.num_simulations(),
            effective = params.effective_simulations(),
            "odd simulation count, dropping the unpaired path"
        );
    }
    debug!(
        num_steps,
        half_simulations = half,
        seed = rng.seed(),
        "simulating short-rate paths"
    );

    let time_grid = TimeGrid::uniform(params.maturity(), num_steps);

    let mut draws = vec![0.0; half * num_steps];
    rng.fill_normal_scaled(&mut draws, params.time_step().sqrt());
    let increments = PathMatrix::from_parts(draws, half, num_steps);

    let mut rates = PathMatrix::filled(2 * half, num_steps + 1, initial_rate);
    for (i, shocks) in increments.rows().enumerate() {
        accumulate_path(rates.row_mut(i), shocks, 1.0, initial_rate, volatility);
        accumulate_path(rates.row_mut(i + half), shocks, -1.0, initial_rate, volatility);
    }

    ShortRatePaths {
        rates,
        time_grid,
        increments,
    }
}

/// Writes `r0 + cumsum(σ · sign · ΔW)` into `path[1..]`.
///
/// The running sum is kept separate from `r0` so that antithetic partners
/// carry exactly negated sums.
#[inline]
fn accumulate_path(path: &mut [f64], shocks: &[f64], sign: f64, initial_rate: f64, volatility: f64) {
    let mut running = 0.0;
    for (slot, &dw) in path[1..].iter_mut().zip(shocks) {
        running += volatility * (sign * dw);
        *slot = initial_rate + running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn simulate(initial_rate: f64, volatility: f64, maturity: f64, n: usize, seed: u64) -> ShortRatePaths {
        let params = SimulationParams::new(initial_rate, volatility, maturity, n).unwrap();
        simulate_short_rate(&params, &mut ShortRateRng::from_seed(seed))
    }

    #[test]
    fn test_shape() {
        let paths = simulate(0.05, 0.02, 0.5, 40, 42);

        assert_eq!(paths.rates.shape(), (40, 51));
        assert_eq!(paths.increments.shape(), (20, 50));
        assert_eq!(paths.time_grid.len(), 51);
    }

    #[test]
    fn test_first_column_is_initial_rate() {
        let paths = simulate(0.05, 0.02, 1.0, 10, 42);
        assert!(paths.rates.column(0).iter().all(|&r| r == 0.05));
    }

    #[test]
    fn test_antithetic_pairs_mirror_around_initial_rate() {
        let r0 = 0.04;
        let paths = simulate(r0, 0.03, 1.0, 20, 7);
        let half = paths.half_simulations();

        for i in 0..half {
            let up = paths.rates.row(i);
            let down = paths.rates.row(i + half);
            for k in 0..up.len() {
                assert_abs_diff_eq!(up[k] - r0, -(down[k] - r0), epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_paths_are_cumulative_shocks() {
        let (r0, sigma) = (0.02, 0.015);
        let paths = simulate(r0, sigma, 0.25, 4, 11);

        let shocks = paths.increments.row(0);
        let mut expected = r0;
        for (k, &dw) in shocks.iter().enumerate() {
            expected += sigma * dw;
            assert_abs_diff_eq!(paths.rates.get(0, k + 1), expected, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_increment_scale() {
        let paths = simulate(0.0, 1.0, 1.0, 20_000, 3);
        let shocks = paths.increments.as_slice();
        let n = shocks.len() as f64;

        let mean = shocks.iter().sum::<f64>() / n;
        let variance = shocks.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        // ΔW ~ N(0, 0.01)
        assert_abs_diff_eq!(variance, 0.01, epsilon = 2e-4);
    }

    #[test]
    fn test_zero_volatility_paths_are_constant() {
        let paths = simulate(0.03, 0.0, 1.0, 10, 42);
        assert!(paths.rates.as_slice().iter().all(|&r| r == 0.03));
    }

    #[test]
    fn test_odd_count_drops_one_path() {
        let paths = simulate(0.03, 0.01, 1.0, 11, 42);

        assert_eq!(paths.num_simulations(), 10);
        assert_eq!(paths.half_simulations(), 5);
    }

    #[test]
    fn test_antithetic_partner() {
        let paths = simulate(0.03, 0.01, 1.0, 6, 42);

        assert_eq!(paths.antithetic_partner(0), 3);
        assert_eq!(paths.antithetic_partner(5), 2);
    }

    #[test]
    fn test_reproducibility() {
        let a = simulate(0.03, 0.01, 1.0, 50, 123);
        let b = simulate(0.03, 0.01, 1.0, 50, 123);
        let c = simulate(0.03, 0.01, 1.0, 50, 124);

        assert_eq!(a.rates, b.rates);
        assert_ne!(a.rates, c.rates);
    }
}
