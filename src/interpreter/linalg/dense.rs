use crate::interpreter::{
    linalg::{DEFAULT_TOLERANCE, LinalgError, LinalgResult, LinearAlgebra, LuFactors},
    value::matrix::Matrix,
};

/// Dense linear algebra based on LU factorization with partial pivoting.
///
/// A pivot whose magnitude is at or below `tolerance * max|a_ij|` marks the
/// matrix as singular. Singular matrices can still be factored and have a
/// determinant, but cannot be inverted or solved.
#[derive(Debug, Clone, Copy)]
pub struct DenseLinearAlgebra {
    tolerance: f64,
}

impl Default for DenseLinearAlgebra {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

/// Packed result of the elimination: `L` below the diagonal (unit diagonal
/// implied), `U` on and above it.
struct Factorization {
    lu:       Vec<Vec<f64>>,
    perm:     Vec<usize>,
    swaps:    usize,
    singular: bool,
}

impl DenseLinearAlgebra {
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    #[allow(clippy::float_cmp)]
    fn factorize(&self, m: &Matrix) -> LinalgResult<Factorization> {
        if !m.is_square() {
            return Err(LinalgError::NotSquare { rows: m.rows(),
                                                cols: m.cols(), });
        }

        let n = m.rows();
        let threshold = self.tolerance * m.max_abs();
        let mut lu: Vec<Vec<f64>> = m.row_iter().map(<[f64]>::to_vec).collect();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut swaps = 0;
        let mut singular = false;

        for k in 0..n {
            let pivot_row =
                (k..n).fold(k, |best, i| if lu[i][k].abs() > lu[best][k].abs() { i } else { best });
            let pivot = lu[pivot_row][k];

            if pivot.abs() <= threshold {
                singular = true;
            }
            // Column is already zero below the diagonal.
            if pivot == 0.0 {
                continue;
            }

            if pivot_row != k {
                lu.swap(pivot_row, k);
                perm.swap(pivot_row, k);
                swaps += 1;
            }

            for i in k + 1..n {
                let factor = lu[i][k] / lu[k][k];
                lu[i][k] = factor;
                for j in k + 1..n {
                    lu[i][j] -= factor * lu[k][j];
                }
            }
        }

        Ok(Factorization { lu,
                           perm,
                           swaps,
                           singular })
    }

    /// Forward and back substitution against an existing factorization.
    fn substitute(factorization: &Factorization, b: &[f64]) -> Vec<f64> {
        let Factorization { lu, perm, .. } = factorization;
        let n = lu.len();

        let mut y = vec![0.0; n];
        for i in 0..n {
            let sum: f64 = (0..i).map(|j| lu[i][j] * y[j]).sum();
            y[i] = b[perm[i]] - sum;
        }

        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let sum: f64 = (i + 1..n).map(|j| lu[i][j] * x[j]).sum();
            x[i] = (y[i] - sum) / lu[i][i];
        }

        x
    }
}

impl LinearAlgebra for DenseLinearAlgebra {
    fn inverse(&self, m: &Matrix) -> LinalgResult<Matrix> {
        let factorization = self.factorize(m)?;
        if factorization.singular {
            return Err(LinalgError::Singular);
        }

        let n = m.rows();
        let columns = (0..n).map(|j| {
                                let unit = (0..n).map(|i| if i == j { 1.0 } else { 0.0 })
                                                 .collect::<Vec<_>>();
                                Self::substitute(&factorization, &unit)
                            })
                            .collect::<Vec<_>>();

        Ok(Matrix::from_fn(n, n, |i, j| columns[j][i]))
    }

    fn determinant(&self, m: &Matrix) -> LinalgResult<f64> {
        let factorization = self.factorize(m)?;

        let sign = if factorization.swaps % 2 == 0 { 1.0 } else { -1.0 };
        let product: f64 = factorization.lu
                                        .iter()
                                        .enumerate()
                                        .map(|(i, row)| row[i])
                                        .product();

        // Adding zero turns a negative zero into a positive one.
        Ok(sign * product + 0.0)
    }

    fn transpose(&self, m: &Matrix) -> LinalgResult<Matrix> {
        Ok(m.transpose())
    }

    fn solve(&self, a: &Matrix, b: &[f64]) -> LinalgResult<Vec<f64>> {
        let factorization = self.factorize(a)?;
        if b.len() != a.rows() {
            return Err(LinalgError::DimensionMismatch { expected: a.rows(),
                                                        found:    b.len(), });
        }
        if factorization.singular {
            return Err(LinalgError::Singular);
        }

        Ok(Self::substitute(&factorization, b))
    }

    fn lu_decompose(&self, m: &Matrix) -> LinalgResult<LuFactors> {
        let Factorization { lu, perm, .. } = self.factorize(m)?;
        let n = m.rows();

        let p = Matrix::from_fn(n, n, |i, j| if perm[j] == i { 1.0 } else { 0.0 });
        let l = Matrix::from_fn(n, n, |i, j| match i.cmp(&j) {
                                    std::cmp::Ordering::Greater => lu[i][j],
                                    std::cmp::Ordering::Equal => 1.0,
                                    std::cmp::Ordering::Less => 0.0,
                                });
        let u = Matrix::from_fn(n, n, |i, j| if i <= j { lu[i][j] } else { 0.0 });

        Ok(LuFactors { p, l, u })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> Matrix {
        let rows = rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>();
        Matrix::from_rows(&rows).unwrap()
    }

    fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
        Matrix::from_fn(a.rows(), b.cols(), |i, j| {
            (0..a.cols()).map(|k| a.get(i, k) * b.get(k, j)).sum()
        })
    }

    fn assert_close(a: &Matrix, b: &Matrix) {
        assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                assert!((a.get(i, j) - b.get(i, j)).abs() < 1e-9,
                        "entry ({i}, {j}) differs: {} vs {}",
                        a.get(i, j),
                        b.get(i, j));
            }
        }
    }

    #[test]
    fn solves_two_by_two_system() {
        let a = matrix(&[&[2.0, 1.0], &[1.0, -1.0]]);
        let x = DenseLinearAlgebra::default().solve(&a, &[5.0, 1.0]).unwrap();

        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let a = matrix(&[&[4.0, 7.0, 2.0], &[3.0, 6.0, 1.0], &[2.0, 5.0, 3.0]]);
        let inverse = DenseLinearAlgebra::default().inverse(&a).unwrap();

        assert_close(&multiply(&a, &inverse), &Matrix::identity(3));
    }

    #[test]
    fn lu_factors_reconstruct_the_matrix() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 10.0]]);
        let LuFactors { p, l, u } = DenseLinearAlgebra::default().lu_decompose(&a).unwrap();

        assert_close(&multiply(&p, &multiply(&l, &u)), &a);
        for i in 0..3 {
            assert_eq!(l.get(i, i), 1.0);
            for j in i + 1..3 {
                assert_eq!(l.get(i, j), 0.0);
                assert_eq!(u.get(j, i), 0.0);
            }
        }
    }

    #[test]
    fn determinant_tracks_row_swaps() {
        let a = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_eq!(DenseLinearAlgebra::default().determinant(&a).unwrap(), -1.0);

        let b = matrix(&[&[2.0, 1.0], &[1.0, -1.0]]);
        assert!((DenseLinearAlgebra::default().determinant(&b).unwrap() + 3.0).abs() < 1e-12);
    }

    #[test]
    fn singular_matrix_has_zero_determinant_but_no_inverse() {
        let a = matrix(&[&[1.0, 2.0], &[2.0, 4.0]]);
        let linalg = DenseLinearAlgebra::default();

        assert_eq!(linalg.determinant(&a).unwrap(), 0.0);
        assert_eq!(linalg.inverse(&a), Err(LinalgError::Singular));
        assert_eq!(linalg.solve(&a, &[1.0, 2.0]), Err(LinalgError::Singular));
        assert!(linalg.lu_decompose(&a).is_ok());
    }

    #[test]
    fn zero_matrix_is_singular() {
        let a = matrix(&[&[0.0, 0.0], &[0.0, 0.0]]);

        assert_eq!(DenseLinearAlgebra::default().inverse(&a), Err(LinalgError::Singular));
    }

    #[test]
    fn non_square_input_is_rejected() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let linalg = DenseLinearAlgebra::default();

        assert_eq!(linalg.inverse(&a), Err(LinalgError::NotSquare { rows: 2, cols: 3 }));
        assert_eq!(linalg.determinant(&a), Err(LinalgError::NotSquare { rows: 2, cols: 3 }));
        assert_eq!(linalg.transpose(&a).unwrap(),
                   matrix(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
    }

    #[test]
    fn mismatched_right_hand_side_is_rejected() {
        let a = matrix(&[&[1.0, 0.0], &[0.0, 1.0]]);

        assert_eq!(DenseLinearAlgebra::default().solve(&a, &[1.0]),
                   Err(LinalgError::DimensionMismatch { expected: 2,
                                                        found:    1, }));
    }
}
