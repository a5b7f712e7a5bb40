//! Row-major path storage.
//!
//! Both the rate paths and the discount-factor paths are held in a
//! [`PathMatrix`]: one row per simulation, one column per grid point.
//!
//! # Memory Layout
//!
//! `data[row * n_cols + col]`, with `col = 0` holding the value at time 0.

use super::error::{PricingError, Result};

/// Dense `n_rows × n_cols` matrix of `f64` in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl PathMatrix {
    /// Creates a matrix with every entry set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n_cols` is zero.
    pub fn filled(n_rows: usize, n_cols: usize, value: f64) -> Self {
        assert!(n_cols > 0, "a path matrix needs at least one column");
        Self {
            data: vec![value; n_rows * n_cols],
            n_rows,
            n_cols,
        }
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if `n_cols` is zero or
    /// `data.len() != n_rows * n_cols`.
    pub fn from_vec(data: Vec<f64>, n_rows: usize, n_cols: usize) -> Result<Self> {
        if n_cols == 0 {
            return Err(PricingError::invalid_parameter(
                "n_cols",
                "a path matrix needs at least one column",
            ));
        }
        if data.len() != n_rows * n_cols {
            return Err(PricingError::invalid_parameter(
                "data",
                format!(
                    "buffer of length {} does not hold {} x {} entries",
                    data.len(),
                    n_rows,
                    n_cols
                ),
            ));
        }
        Ok(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    /// Wraps a buffer whose dimensions the caller has already checked.
    #[inline]
    pub(crate) fn from_parts(data: Vec<f64>, n_rows: usize, n_cols: usize) -> Self {
        debug_assert!(n_cols > 0);
        debug_assert_eq!(data.len(), n_rows * n_cols);
        Self {
            data,
            n_rows,
            n_cols,
        }
    }

    /// Number of rows (simulations).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (grid points).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// `(n_rows, n_cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.n_cols, "column {} out of bounds", col);
        self.data[row * self.n_cols + col]
    }

    /// One simulation's trajectory.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let offset = row * self.n_cols;
        &self.data[offset..offset + self.n_cols]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let offset = row * self.n_cols;
        &mut self.data[offset..offset + self.n_cols]
    }

    /// Iterator over rows.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_cols)
    }

    /// Copies out one column, i.e. the cross-section at one time point.
    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.n_cols, "column {} out of bounds", col);
        self.rows().map(|row| row[col]).collect()
    }

    /// Copies out the terminal column.
    #[inline]
    pub fn last_column(&self) -> Vec<f64> {
        self.column(self.n_cols - 1)
    }

    /// Underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix and returns its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Memory held by the buffer, in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_shape() {
        let m = PathMatrix::filled(3, 4, 0.5);

        assert_eq!(m.shape(), (3, 4));
        assert!(m.as_slice().iter().all(|&v| v == 0.5));
    }

    #[test]
    fn test_row_major_layout() {
        let m = PathMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();

        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.column(1), vec![2.0, 5.0]);
        assert_eq!(m.last_column(), vec![3.0, 6.0]);
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn test_from_vec_rejects_bad_length() {
        let err = PathMatrix::from_vec(vec![1.0; 5], 2, 3).unwrap_err();
        assert_eq!(err.parameter(), "data");
    }

    #[test]
    fn test_from_vec_rejects_zero_columns() {
        let err = PathMatrix::from_vec(vec![], 0, 0).unwrap_err();
        assert_eq!(err.parameter(), "n_cols");
    }

    #[test]
    fn test_row_mut() {
        let mut m = PathMatrix::filled(2, 2, 0.0);
        m.row_mut(1)[1] = 7.0;
        assert_eq!(m.into_vec(), vec![0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn test_memory_usage() {
        let m = PathMatrix::filled(10, 10, 0.0);
        assert!(m.memory_usage() >= 100 * std::mem::size_of::<f64>());
    }
}
