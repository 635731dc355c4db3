//! Pentadiagonal penalty matrix for the Hodrick-Prescott filter.
//!
//! The matrix `I + λ·DᵀD` (with `D` the second-difference operator) is stored
//! as five contiguous coefficient arrays, one per diagonal offset, each indexed
//! by row. Entries that would fall outside the matrix are kept as zero.

use crate::error::{Result, TransformError};

/// Minimum dimension for which the boundary and interior stencils are distinct.
pub const MIN_PENALTY_DIM: usize = 5;

/// Symmetric banded matrix with half-bandwidth 2.
#[derive(Debug, Clone, PartialEq)]
pub struct PentadiagonalMatrix {
    /// `lower2[r] = A[r][r-2]`
    lower2: Vec<f64>,
    /// `lower1[r] = A[r][r-1]`
    lower1: Vec<f64>,
    /// `diag[r] = A[r][r]`
    diag: Vec<f64>,
    /// `upper1[r] = A[r][r+1]`
    upper1: Vec<f64>,
    /// `upper2[r] = A[r][r+2]`
    upper2: Vec<f64>,
}

impl PentadiagonalMatrix {
    /// Build the HP penalty matrix of dimension `m` for smoothing parameter `lambda`.
    ///
    /// Interior rows carry the stencil `[λ, -4λ, 6λ+1, -4λ, λ]`. The first two
    /// and last two rows use the one-sided corrections
    /// `[1+λ, -2λ, λ]` and `[-2λ, 1+5λ, -4λ, λ]`, mirrored at the bottom.
    ///
    /// # Errors
    /// * [`TransformError::SeriesTooShort`] if `m < 5`.
    /// * [`TransformError::InvalidParameter`] if `lambda` is negative or not finite.
    pub fn hp_penalty(m: usize, lambda: f64) -> Result<Self> {
        if m < MIN_PENALTY_DIM {
            return Err(TransformError::SeriesTooShort {
                needed: MIN_PENALTY_DIM,
                got: m,
            });
        }
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(TransformError::InvalidParameter(format!(
                "lambda must be finite and non-negative, got {}",
                lambda
            )));
        }

        let mut lower2 = vec![0.0; m];
        let mut lower1 = vec![0.0; m];
        let mut diag = vec![0.0; m];
        let mut upper1 = vec![0.0; m];
        let mut upper2 = vec![0.0; m];

        for r in 2..m - 2 {
            lower2[r] = lambda;
            lower1[r] = -4.0 * lambda;
            diag[r] = 6.0 * lambda + 1.0;
            upper1[r] = -4.0 * lambda;
            upper2[r] = lambda;
        }

        // Top boundary rows.
        diag[0] = 1.0 + lambda;
        upper1[0] = -2.0 * lambda;
        upper2[0] = lambda;

        lower1[1] = -2.0 * lambda;
        diag[1] = 1.0 + 5.0 * lambda;
        upper1[1] = -4.0 * lambda;
        upper2[1] = lambda;

        // Bottom boundary rows, mirror of the top.
        lower2[m - 2] = lambda;
        lower1[m - 2] = -4.0 * lambda;
        diag[m - 2] = 1.0 + 5.0 * lambda;
        upper1[m - 2] = -2.0 * lambda;

        lower2[m - 1] = lambda;
        lower1[m - 1] = -2.0 * lambda;
        diag[m - 1] = 1.0 + lambda;

        Ok(Self {
            lower2,
            lower1,
            diag,
            upper1,
            upper2,
        })
    }

    /// Build `I + λ·D·Dᵀ`, the `(m-2)×(m-2)` companion of [`hp_penalty`](Self::hp_penalty).
    ///
    /// `D·Dᵀ` has full rank, so the pivots of this matrix stay bounded away
    /// from zero for any finite λ. Every row carries `[λ, -4λ, 6λ+1, -4λ, λ]`.
    ///
    /// # Errors
    /// Same as [`hp_penalty`](Self::hp_penalty); `m` is the length of the
    /// series, not the dimension of the result.
    pub fn hp_dual(m: usize, lambda: f64) -> Result<Self> {
        if m < MIN_PENALTY_DIM {
            return Err(TransformError::SeriesTooShort {
                needed: MIN_PENALTY_DIM,
                got: m,
            });
        }
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(TransformError::InvalidParameter(format!(
                "lambda must be finite and non-negative, got {}",
                lambda
            )));
        }

        let k = m - 2;
        let mut lower2 = vec![lambda; k];
        let mut lower1 = vec![-4.0 * lambda; k];
        let diag = vec![6.0 * lambda + 1.0; k];
        let mut upper1 = vec![-4.0 * lambda; k];
        let mut upper2 = vec![lambda; k];

        lower2[0] = 0.0;
        lower2[1] = 0.0;
        lower1[0] = 0.0;
        upper1[k - 1] = 0.0;
        upper2[k - 1] = 0.0;
        upper2[k - 2] = 0.0;

        Ok(Self {
            lower2,
            lower1,
            diag,
            upper1,
            upper2,
        })
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.diag.len()
    }

    /// Main diagonal.
    pub fn diag(&self) -> &[f64] {
        &self.diag
    }

    /// First super-diagonal, indexed by row (`A[r][r+1]`).
    pub fn upper1(&self) -> &[f64] {
        &self.upper1
    }

    /// Second super-diagonal, indexed by row (`A[r][r+2]`).
    pub fn upper2(&self) -> &[f64] {
        &self.upper2
    }

    /// Entry `A[i][j]`; zero outside the band or the matrix.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let m = self.dim();
        if i >= m || j >= m {
            return 0.0;
        }
        match j as isize - i as isize {
            -2 => self.lower2[i],
            -1 => self.lower1[i],
            0 => self.diag[i],
            1 => self.upper1[i],
            2 => self.upper2[i],
            _ => 0.0,
        }
    }

    /// Whether `A[i][j] == A[j][i]` for every band entry.
    pub fn is_symmetric(&self) -> bool {
        let m = self.dim();
        (0..m).all(|r| {
            (r + 1 >= m || self.upper1[r] == self.lower1[r + 1])
                && (r + 2 >= m || self.upper2[r] == self.lower2[r + 2])
        })
    }

    /// Dense matrix-vector product `A · x`.
    ///
    /// # Errors
    /// Returns [`TransformError::DimensionMismatch`] if `x.len() != dim()`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        let m = self.dim();
        if x.len() != m {
            return Err(TransformError::DimensionMismatch {
                expected: m,
                got: x.len(),
            });
        }

        let product = (0..m)
            .map(|r| {
                let mut acc = self.diag[r] * x[r];
                if r >= 1 {
                    acc += self.lower1[r] * x[r - 1];
                }
                if r >= 2 {
                    acc += self.lower2[r] * x[r - 2];
                }
                if r + 1 < m {
                    acc += self.upper1[r] * x[r + 1];
                }
                if r + 2 < m {
                    acc += self.upper2[r] * x[r + 2];
                }
                acc
            })
            .collect();
        Ok(product)
    }
}

/// Second differences `D·y`: `y[i] - 2·y[i+1] + y[i+2]`, length `n - 2`.
pub fn second_difference(y: &[f64]) -> Vec<f64> {
    y.windows(3).map(|w| w[0] - 2.0 * w[1] + w[2]).collect()
}

/// Adjoint of [`second_difference`]: `Dᵀ·z` of length `z.len() + 2`.
pub fn second_difference_adjoint(z: &[f64]) -> Vec<f64> {
    let k = z.len();
    (0..k + 2)
        .map(|j| {
            let mut acc = 0.0;
            if j < k {
                acc += z[j];
            }
            if (1..=k).contains(&j) {
                acc -= 2.0 * z[j - 1];
            }
            if j >= 2 {
                acc += z[j - 2];
            }
            acc
        })
        .collect()
}
