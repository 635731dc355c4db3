//! Banded LDLᵀ solver for symmetric positive definite pentadiagonal systems.

use super::penalty::PentadiagonalMatrix;
use crate::error::{Result, TransformError};

/// LDLᵀ factors of a pentadiagonal matrix.
///
/// `L` is unit lower triangular with two sub-diagonals, `D` is diagonal.
#[derive(Debug, Clone)]
pub struct BandedLdl {
    /// Pivots `D[r]`.
    d: Vec<f64>,
    /// `l1[r] = L[r+1][r]`
    l1: Vec<f64>,
    /// `l2[r] = L[r+2][r]`
    l2: Vec<f64>,
}

impl BandedLdl {
    /// Factor `a` in O(m).
    ///
    /// # Errors
    /// Returns [`TransformError::ComputationError`] if a pivot is not strictly
    /// positive, i.e. the matrix is not positive definite.
    pub fn factor(a: &PentadiagonalMatrix) -> Result<Self> {
        let m = a.dim();
        let (diag, upper1, upper2) = (a.diag(), a.upper1(), a.upper2());

        let mut d = vec![0.0; m];
        let mut l1 = vec![0.0; m];
        let mut l2 = vec![0.0; m];

        for r in 0..m {
            let mut pivot = diag[r];
            if r >= 1 {
                pivot -= l1[r - 1] * l1[r - 1] * d[r - 1];
            }
            if r >= 2 {
                pivot -= l2[r - 2] * l2[r - 2] * d[r - 2];
            }
            if pivot <= 0.0 || !pivot.is_finite() {
                return Err(TransformError::ComputationError(format!(
                    "matrix not positive definite: pivot {} at row {}",
                    pivot, r
                )));
            }
            d[r] = pivot;

            if r + 1 < m {
                let mut coupling = upper1[r];
                if r >= 1 {
                    coupling -= l2[r - 1] * d[r - 1] * l1[r - 1];
                }
                l1[r] = coupling / pivot;
            }
            if r + 2 < m {
                l2[r] = upper2[r] / pivot;
            }
        }

        Ok(Self { d, l1, l2 })
    }

    /// Dimension of the factored system.
    pub fn dim(&self) -> usize {
        self.d.len()
    }

    /// Solve `L·D·Lᵀ·x = rhs`.
    ///
    /// Every coefficient takes part in the sweeps, zero or not, so a NaN
    /// anywhere in `rhs` reaches every element of the solution.
    ///
    /// # Errors
    /// Returns [`TransformError::DimensionMismatch`] if `rhs` has the wrong length.
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        let m = self.dim();
        if rhs.len() != m {
            return Err(TransformError::DimensionMismatch {
                expected: m,
                got: rhs.len(),
            });
        }

        // Forward: L·z = rhs
        let mut x = rhs.to_vec();
        for r in 0..m {
            if r >= 1 {
                x[r] -= self.l1[r - 1] * x[r - 1];
            }
            if r >= 2 {
                x[r] -= self.l2[r - 2] * x[r - 2];
            }
        }

        for (xr, dr) in x.iter_mut().zip(self.d.iter()) {
            *xr /= dr;
        }

        // Backward: Lᵀ·x = z / D
        for r in (0..m).rev() {
            if r + 1 < m {
                x[r] -= self.l1[r] * x[r + 1];
            }
            if r + 2 < m {
                x[r] -= self.l2[r] * x[r + 2];
            }
        }

        Ok(x)
    }
}

/// Solve `a · x = rhs` for a symmetric positive definite pentadiagonal `a`.
pub fn solve_banded_spd(a: &PentadiagonalMatrix, rhs: &[f64]) -> Result<Vec<f64>> {
    BandedLdl::factor(a)?.solve(rhs)
}
