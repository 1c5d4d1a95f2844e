use thiserror::Error;

use crate::interpreter::value::matrix::Matrix;

/// LU factorization with partial pivoting.
///
/// Implements the default [`LinearAlgebra`] service on dense matrices.
pub mod dense;

pub use dense::DenseLinearAlgebra;

/// Default pivot tolerance, relative to the largest entry of the matrix.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Failures reported by a linear-algebra service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The operation needs a square matrix.
    #[error("expected a square matrix, found {rows}x{cols}")]
    NotSquare {
        /// Rows of the operand.
        rows: usize,
        /// Columns of the operand.
        cols: usize,
    },
    /// The right-hand side does not match the matrix.
    #[error("expected a right-hand side of length {expected}, found {found}")]
    DimensionMismatch {
        /// Number of rows of the matrix.
        expected: usize,
        /// Length of the right-hand side.
        found:    usize,
    },
    /// The matrix is (numerically) singular.
    #[error("matrix is singular")]
    Singular,
}

pub type LinalgResult<T> = Result<T, LinalgError>;

/// The three factors of `A = P * L * U`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    /// Permutation matrix.
    pub p: Matrix,
    /// Unit lower-triangular matrix.
    pub l: Matrix,
    /// Upper-triangular matrix.
    pub u: Matrix,
}

/// The numeric operations the evaluator delegates to.
///
/// The evaluator never looks inside these routines; it only relies on the
/// results and on errors being reported through [`LinalgError`].
pub trait LinearAlgebra {
    /// Inverse of a square, non-singular matrix.
    ///
    /// # Errors
    /// `NotSquare` or `Singular`.
    fn inverse(&self, m: &Matrix) -> LinalgResult<Matrix>;

    /// Determinant of a square matrix. Singular matrices yield `0`.
    ///
    /// # Errors
    /// `NotSquare`.
    fn determinant(&self, m: &Matrix) -> LinalgResult<f64>;

    /// Transpose of any matrix.
    ///
    /// # Errors
    /// Never fails for the dense implementation.
    fn transpose(&self, m: &Matrix) -> LinalgResult<Matrix>;

    /// Solution `x` of `A * x = b`.
    ///
    /// # Errors
    /// `NotSquare`, `DimensionMismatch` or `Singular`.
    fn solve(&self, a: &Matrix, b: &[f64]) -> LinalgResult<Vec<f64>>;

    /// Factors a square matrix as `P * L * U`.
    ///
    /// # Errors
    /// `NotSquare`.
    fn lu_decompose(&self, m: &Matrix) -> LinalgResult<LuFactors>;
}
