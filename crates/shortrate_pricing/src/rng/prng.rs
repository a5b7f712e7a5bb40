//! Seeded pseudo-random generator for Brownian increments.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Random number generator owned by a simulation.
///
/// Wraps [`StdRng`] and remembers the seed it was initialised with, so that
/// a run started from entropy can still be logged and replayed.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::rng::ShortRateRng;
///
/// let mut a = ShortRateRng::from_seed(7);
/// let mut b = ShortRateRng::from_seed(7);
/// assert_eq!(a.gen_normal(), b.gen_normal());
/// assert_eq!(a.seed(), 7);
/// ```
pub struct ShortRateRng {
    inner: StdRng,
    seed: u64,
}

impl ShortRateRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a freshly drawn operating-system seed.
    ///
    /// The drawn seed is kept and available through [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a generator from `seed` when given, otherwise from entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a single standard normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates, in order.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }

    /// Fills `buffer` with normal variates of mean 0 and deviation `std_dev`.
    ///
    /// With `std_dev = sqrt(dt)` these are Euler-Maruyama Brownian
    /// increments over a step of length `dt`.
    #[inline]
    pub fn fill_normal_scaled(&mut self, buffer: &mut [f64], std_dev: f64) {
        for value in buffer.iter_mut() {
            let z: f64 = StandardNormal.sample(&mut self.inner);
            *value = std_dev * z;
        }
    }
}

impl std::fmt::Debug for ShortRateRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortRateRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
