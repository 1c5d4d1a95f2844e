use std::fmt;

use thiserror::Error;

use crate::interpreter::value::core::write_row;

/// Why a list of rows could not be turned into a [`Matrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowsError {
    /// No rows at all.
    #[error("a system needs at least one equation")]
    Empty,
    /// A row with no elements.
    #[error("equation {row} has no coefficients")]
    EmptyRow {
        /// 1-based index of the empty row.
        row: usize,
    },
    /// A row whose length differs from the first row.
    #[error("all equations must have the same number of elements, but equation {row} has {found} instead of {expected}")]
    Ragged {
        /// 1-based index of the offending row.
        row:      usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
    },
}

/// A dense, row-major, rectangular matrix of `f64`.
///
/// Every matrix has at least one row and one column; the constructors reject
/// anything else, so consumers never see a ragged or empty matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from rows, requiring them to be non-empty and of equal
    /// length.
    ///
    /// # Errors
    /// Returns a [`RowsError`] describing the first problem found.
    ///
    /// # Example
    /// ```
    /// use prosis::interpreter::value::matrix::{Matrix, RowsError};
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 2));
    ///
    /// let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
    /// assert_eq!(err,
    ///            RowsError::Ragged { row:      2,
    ///                                expected: 2,
    ///                                found:    3, });
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, RowsError> {
        let first = rows.first().ok_or(RowsError::Empty)?;
        let cols = first.len();

        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(RowsError::EmptyRow { row: index + 1 });
            }
            if row.len() != cols {
                return Err(RowsError::Ragged { row:      index + 1,
                                               expected: cols,
                                               found:    row.len(), });
            }
        }

        Ok(Self { rows: rows.len(),
                  cols,
                  data: rows.concat() })
    }

    /// Builds a `rows x cols` matrix whose entry `(i, j)` is `f(i, j)`.
    ///
    /// Both dimensions must be at least one.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        debug_assert!(rows > 0 && cols > 0);

        let data = (0..rows).flat_map(|i| (0..cols).map(move |j| (i, j)))
                            .map(|(i, j)| f(i, j))
                            .collect();

        Self { rows, cols, data }
    }

    /// The `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        self.data[i * self.cols + j]
    }

    /// Iterates over the rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols)
    }

    /// Largest absolute value of any entry.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, x| acc.max(x.abs()))
    }

    /// The transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self.get(j, i))
    }

    /// Splits an augmented matrix into its coefficient block `A` (all columns
    /// but the last) and its right-hand side `b` (the last column).
    ///
    /// Returns `None` when there are fewer than two columns, because `A` would
    /// be empty.
    ///
    /// # Example
    /// ```
    /// use prosis::interpreter::value::matrix::Matrix;
    ///
    /// let system = Matrix::from_rows(&[vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]).unwrap();
    /// let (a, b) = system.split_augmented().unwrap();
    ///
    /// assert_eq!(a, Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, -1.0]]).unwrap());
    /// assert_eq!(b, vec![5.0, 1.0]);
    /// ```
    #[must_use]
    pub fn split_augmented(&self) -> Option<(Self, Vec<f64>)> {
        if self.cols < 2 {
            return None;
        }

        let coefficients = Self::from_fn(self.rows, self.cols - 1, |i, j| self.get(i, j));
        let rhs = self.row_iter().map(|row| row[self.cols - 1]).collect();

        Some((coefficients, rhs))
    }

    /// A matrix of the same shape that keeps only the main diagonal.
    #[must_use]
    pub fn diagonal_matrix(&self) -> Self {
        Self::from_fn(self.rows, self.cols, |i, j| if i == j { self.get(i, j) } else { 0.0 })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (index, row) in self.row_iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write_row(f, row)?;
        }

        write!(f, "]")
    }
}
