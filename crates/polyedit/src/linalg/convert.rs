//! Conversions to and from nalgebra's statically sized types.

use nalgebra::{SMatrix, SVector};

use super::{Matrix, Real, Vector};

impl<T: Real, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        SVector::from_column_slice(v.as_slice())
    }
}

impl<T: Real, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        let mut out = Vector::zeros();
        for i in 0..N {
            out[i] = v[i];
        }
        out
    }
}

impl<T: Real, const N: usize> From<Matrix<T, N>> for SMatrix<T, N, N> {
    fn from(m: Matrix<T, N>) -> Self {
        SMatrix::from_fn(|r, c| m[r][c])
    }
}

impl<T: Real, const N: usize> From<SMatrix<T, N, N>> for Matrix<T, N> {
    fn from(m: SMatrix<T, N, N>) -> Self {
        let mut out = Matrix::zeros();
        for r in 0..N {
            for c in 0..N {
                out[r][c] = m[(r, c)];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{matrix, vector, Matrix3, Vector3};

    #[test]
    fn vector_round_trip_keeps_layout() {
        let v = Vector::<f64, 3>::xyz(1.0, -2.0, 3.5);
        let nv: Vector3<f64> = v.into();
        assert_eq!(nv, vector![1.0, -2.0, 3.5]);
        assert_eq!(Vector::from(nv), v);
    }

    #[test]
    fn matrix_rows_map_to_rows() {
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        let nm: Matrix3<f64> = m.into();
        assert_eq!(nm, matrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0; 7.0, 8.0, 10.0]);
        assert_eq!(Matrix::from(nm), m);
    }
}
