//! `Matrix<T, N>`: square N×N grid stored as N owned rows.
//!
//! Algorithms
//! - `determinant`: Laplace expansion along the first row with signs
//!   +1, -1, +1, ... over columns 0, 1, 2, ...; recursion bottoms out at a
//!   single entry. Minors are addressed by index lists, not copied.
//! - `adjoint`: cofactor `(-1)^(r+c) * det(minor(r, c))` at `[r][c]`, then the
//!   whole grid is transposed (classical adjugate).
//! - `try_inverse`: `adjoint / det`, refused with `SingularMatrix` when
//!   `det == 0` exactly.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Not, Sub};

use super::{LinalgError, Real, Vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const N: usize> {
    rows: [[T; N]; N],
}

/// Identity, matching the default constructor of the grid.
impl<T: Real, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real, const N: usize> Matrix<T, N> {
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        m.reset_identity();
        m
    }

    #[inline]
    pub fn zeros() -> Self {
        Self {
            rows: [[T::zero(); N]; N],
        }
    }

    #[inline]
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { rows }
    }

    /// Copy from runtime-sized rows; both the row count and every row length must equal `N`.
    pub fn from_row_slices(rows: &[&[T]]) -> Result<Self, LinalgError> {
        if rows.len() != N {
            return Err(LinalgError::DimensionMismatch {
                expected: N,
                found: rows.len(),
            });
        }
        let mut m = Self::zeros();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != N {
                return Err(LinalgError::DimensionMismatch {
                    expected: N,
                    found: row.len(),
                });
            }
            m.rows[r].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Reset to the identity in place.
    pub fn reset_identity(&mut self) {
        self.clear();
        for i in 0..N {
            self.rows[i][i] = T::one();
        }
    }

    /// Zero every entry in place.
    pub fn clear(&mut self) {
        self.rows = [[T::zero(); N]; N];
    }

    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<T> {
        self.rows.get(r).and_then(|row| row.get(c)).copied()
    }

    #[inline]
    pub fn row(&self, r: usize) -> Vector<T, N> {
        Vector::new(self.rows[r])
    }

    pub fn col(&self, c: usize) -> Vector<T, N> {
        let mut out = Vector::zeros();
        for r in 0..N {
            out[r] = self.rows[r][c];
        }
        out
    }

    #[inline]
    pub fn into_rows(self) -> [[T; N]; N] {
        self.rows
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros();
        for r in 0..N {
            for c in 0..N {
                out.rows[c][r] = self.rows[r][c];
            }
        }
        out
    }

    pub fn determinant(&self) -> T {
        let idx: Vec<usize> = (0..N).collect();
        expand(&self.rows, &idx, &idx)
    }

    /// Determinant of the submatrix with row `r` and column `c` deleted.
    pub fn minor_determinant(&self, r: usize, c: usize) -> T {
        assert!(r < N && c < N, "minor ({r}, {c}) out of range for {N}x{N}");
        let rows: Vec<usize> = (0..N).filter(|&i| i != r).collect();
        let cols: Vec<usize> = (0..N).filter(|&j| j != c).collect();
        expand(&self.rows, &rows, &cols)
    }

    /// Signed minor: `+` when `r + c` is even.
    pub fn cofactor(&self, r: usize, c: usize) -> T {
        let m = self.minor_determinant(r, c);
        if (r + c) % 2 == 0 {
            m
        } else {
            -m
        }
    }

    /// Classical adjugate; a 1×1 matrix is its own adjoint.
    pub fn adjoint(&self) -> Self {
        if N == 1 {
            return *self;
        }
        let mut cof = Self::zeros();
        for r in 0..N {
            for c in 0..N {
                cof.rows[r][c] = self.cofactor(r, c);
            }
        }
        cof.transpose()
    }

    pub fn try_inverse(&self) -> Result<Self, LinalgError> {
        let det = self.determinant();
        if det == T::zero() {
            tracing::debug!(dim = N, "inverse refused: zero determinant");
            return Err(LinalgError::SingularMatrix);
        }
        Ok(self.adjoint() * (T::one() / det))
    }

    /// Entry-wise comparison with absolute tolerance.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        (0..N).all(|r| self.row(r).approx_eq(&other.row(r), eps))
    }
}

/// Laplace expansion along the first listed row of the submatrix selected by
/// `rows` × `cols` (equal lengths).
fn expand<T: Real, const N: usize>(m: &[[T; N]; N], rows: &[usize], cols: &[usize]) -> T {
    debug_assert_eq!(rows.len(), cols.len());
    match cols.len() {
        0 => T::one(),
        1 => m[rows[0]][cols[0]],
        k => {
            let top = rows[0];
            let below = &rows[1..];
            let mut det = T::zero();
            let mut sign = -T::one();
            let mut rest = Vec::with_capacity(k - 1);
            for (skip, &c) in cols.iter().enumerate() {
                sign = -sign;
                rest.clear();
                rest.extend(
                    cols.iter()
                        .enumerate()
                        .filter(|&(j, _)| j != skip)
                        .map(|(_, &cc)| cc),
                );
                det += sign * m[top][c] * expand(m, below, &rest);
            }
            det
        }
    }
}

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = [T; N];
    #[inline]
    fn index(&self, r: usize) -> &[T; N] {
        &self.rows[r]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, r: usize) -> &mut [T; N] {
        &mut self.rows[r]
    }
}

impl<T: Real, const N: usize> Add for Matrix<T, N> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        for r in 0..N {
            for c in 0..N {
                self.rows[r][c] += rhs.rows[r][c];
            }
        }
        self
    }
}

impl<T: Real, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        for r in 0..N {
            for c in 0..N {
                self.rows[r][c] -= rhs.rows[r][c];
            }
        }
        self
    }
}

impl<T: Real, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;
    fn neg(mut self) -> Self {
        for row in &mut self.rows {
            for x in row.iter_mut() {
                *x = -*x;
            }
        }
        self
    }
}

impl<T: Real, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        for r in 0..N {
            for c in 0..N {
                let mut sum = T::zero();
                for k in 0..N {
                    sum += self.rows[r][k] * rhs.rows[k][c];
                }
                out.rows[r][c] = sum;
            }
        }
        out
    }
}

impl<T: Real, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;
    fn mul(mut self, alpha: T) -> Self {
        for row in &mut self.rows {
            for x in row.iter_mut() {
                *x *= alpha;
            }
        }
        self
    }
}

/// Column-vector product `M v`.
impl<T: Real, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, v: Vector<T, N>) -> Vector<T, N> {
        let mut out = Vector::zeros();
        for r in 0..N {
            let mut sum = T::zero();
            for c in 0..N {
                sum += self.rows[r][c] * v[c];
            }
            out[r] = sum;
        }
        out
    }
}

/// Row-vector product `v M`.
impl<T: Real, const N: usize> Mul<Matrix<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, m: Matrix<T, N>) -> Vector<T, N> {
        let mut out = Vector::zeros();
        for c in 0..N {
            let mut sum = T::zero();
            for r in 0..N {
                sum += self[r] * m.rows[r][c];
            }
            out[c] = sum;
        }
        out
    }
}

/// `!m` is the inverse, or `SingularMatrix`.
impl<T: Real, const N: usize> Not for Matrix<T, N> {
    type Output = Result<Self, LinalgError>;
    fn not(self) -> Self::Output {
        self.try_inverse()
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;
            #[inline]
            fn mul(self, rhs: Matrix<$t, N>) -> Matrix<$t, N> {
                rhs * self
            }
        }
    )*};
}

scalar_lhs_mul!(f32, f64);
