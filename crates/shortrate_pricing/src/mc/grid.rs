//! Uniform simulation time grid.

/// Ordered time points `0 = t₀ < t₁ < … < t_N = T`.
///
/// Points are spaced by `T / N`; the last point is pinned to `T` exactly so
/// that accumulated rounding never moves the horizon.
///
/// # Examples
///
/// ```rust
/// use shortrate_pricing::mc::TimeGrid;
///
/// let grid = TimeGrid::uniform(1.0, 4);
/// assert_eq!(grid.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.num_steps(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// Builds `num_steps + 1` evenly spaced points from 0 to `total_time`.
    ///
    /// With `num_steps = 0` the grid holds the single point 0.
    pub fn uniform(total_time: f64, num_steps: usize) -> Self {
        if num_steps == 0 {
            return Self { points: vec![0.0] };
        }

        let spacing = total_time / num_steps as f64;
        let mut points: Vec<f64> = (0..=num_steps).map(|i| i as f64 * spacing).collect();
        points[num_steps] = total_time;

        Self { points }
    }

    /// Time points, including 0 and the horizon.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points, `num_steps + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a grid holds at least the origin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of intervals.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Last time point.
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Interval widths `t[k+1] - t[k]`, one per step.
    pub fn increments(&self) -> Vec<f64> {
        self.points.windows(2).map(|w| w[1] - w[0]).collect()
    }
}
