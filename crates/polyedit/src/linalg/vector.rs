//! `Vector<T, N>`: fixed-length numeric tuple.
//!
//! - Element-wise `+`, `-`, unary `-`, scalar `*` in both operand orders.
//! - `Vector * Vector` is the dot product (a scalar).
//! - The `xy` / `xyz` / `xyzw` constructors write a homogeneous 1 into the
//!   first unused slot, so `Vector::<f64, 3>::xy(x, y)` is the point `(x, y, 1)`.

use std::ops::{Add, AddAssign, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{LinalgError, Real};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T: Real, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    #[inline]
    pub fn new(data: [T; N]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    /// Copy from a runtime-sized slice; the length must equal `N`.
    pub fn from_slice(values: &[T]) -> Result<Self, LinalgError> {
        if values.len() != N {
            return Err(LinalgError::DimensionMismatch {
                expected: N,
                found: values.len(),
            });
        }
        let mut out = Self::zeros();
        out.data.copy_from_slice(values);
        Ok(out)
    }

    /// Two leading values; slot 2 (if present) becomes 1. Panics if `N < 2`.
    pub fn xy(a: T, b: T) -> Self {
        assert!(N >= 2, "xy needs at least 2 slots, have {N}");
        Self::with_leading(&[a, b])
    }

    /// Three leading values; slot 3 (if present) becomes 1. Panics if `N < 3`.
    pub fn xyz(a: T, b: T, c: T) -> Self {
        assert!(N >= 3, "xyz needs at least 3 slots, have {N}");
        Self::with_leading(&[a, b, c])
    }

    /// Four leading values; slot 4 (if present) becomes 1. Panics if `N < 4`.
    pub fn xyzw(a: T, b: T, c: T, d: T) -> Self {
        assert!(N >= 4, "xyzw needs at least 4 slots, have {N}");
        Self::with_leading(&[a, b, c, d])
    }

    fn with_leading(lead: &[T]) -> Self {
        let mut out = Self::zeros();
        out.data[..lead.len()].copy_from_slice(lead);
        if N > lead.len() {
            out.data[lead.len()] = T::one();
        }
        out
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Zero every element in place.
    pub fn set_zero(&mut self) {
        self.data = [T::zero(); N];
    }

    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum += self.data[i] * other.data[i];
        }
        sum
    }

    /// Euclidean length `sqrt(v · v)`.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Divide by the magnitude in place. A zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let m = self.magnitude();
        if m != T::zero() {
            *self /= m;
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// 3D cross product on slots 0..3; trailing slots are zero. Panics if `N < 3`.
    pub fn cross(&self, other: &Self) -> Self {
        assert!(N >= 3, "cross needs at least 3 slots, have {N}");
        let (u, v) = (&self.data, &other.data);
        let mut out = Self::zeros();
        out.data[0] = u[1] * v[2] - u[2] * v[1];
        out.data[1] = u[2] * v[0] - u[0] * v[2];
        out.data[2] = u[0] * v[1] - u[1] * v[0];
        out
    }

    /// Element-wise comparison with absolute tolerance.
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        self.data.iter().zip(other.data.iter()).all(|(&a, &b)| {
            let d = a - b;
            d <= eps && d >= -eps
        })
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Real, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Real, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Real, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(mut self) -> Self {
        for x in &mut self.data {
            *x = -*x;
        }
        self
    }
}

impl<T: Real, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, alpha: T) -> Self {
        self *= alpha;
        self
    }
}

/// Dot product.
impl<T: Real, const N: usize> Mul for Vector<T, N> {
    type Output = T;
    #[inline]
    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

impl<T: Real, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] += rhs.data[i];
        }
    }
}

impl<T: Real, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] -= rhs.data[i];
        }
    }
}

impl<T: Real, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, alpha: T) {
        for x in &mut self.data {
            *x *= alpha;
        }
    }
}

impl<T: Real, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, alpha: T) {
        for x in &mut self.data {
            *x /= alpha;
        }
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    type V3 = Vector<f64, 3>;

    #[test]
    fn homogeneous_constructors_fill_w() {
        let p = V3::xy(2.0, -1.0);
        assert_eq!(p.into_array(), [2.0, -1.0, 1.0]);
        let v = V3::xyz(2.0, -1.0, 0.0);
        assert_eq!(v.into_array(), [2.0, -1.0, 0.0]);
        let q = Vector::<f64, 5>::xyzw(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.into_array(), [1.0, 2.0, 3.0, 4.0, 1.0]);
        let exact = Vector::<f64, 2>::xy(3.0, 4.0);
        assert_eq!(exact.into_array(), [3.0, 4.0]);
    }

    #[test]
    #[should_panic]
    fn xyz_on_two_slots_panics() {
        let _ = Vector::<f64, 2>::xyz(1.0, 2.0, 3.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let v = V3::zeros();
        let _ = v[3];
    }

    #[test]
    fn from_slice_checks_length() {
        assert_eq!(
            V3::from_slice(&[1.0, 2.0]),
            Err(LinalgError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        let v = V3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v[2], 3.0);
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn arithmetic_and_dot() {
        let a = V3::xyz(1.0, 2.0, 3.0);
        let b = V3::xyz(4.0, -5.0, 6.0);
        assert_eq!((a + b).into_array(), [5.0, -3.0, 9.0]);
        assert_eq!((a - b).into_array(), [-3.0, 7.0, -3.0]);
        assert_eq!((-a).into_array(), [-1.0, -2.0, -3.0]);
        assert_eq!((2.0 * a).into_array(), (a * 2.0).into_array());
        assert_eq!(a * b, 4.0 - 10.0 + 18.0);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c.into_array(), [2.0, -2.5, 3.0]);
    }

    #[test]
    fn magnitude_and_normalize() {
        let mut v = V3::xyz(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
        assert!(v.approx_eq(&V3::xyz(0.6, 0.8, 0.0), 1e-12));

        // zero vector is a no-op, never NaN
        let mut z = V3::zeros();
        z.normalize();
        assert_eq!(z, V3::zeros());
    }

    #[test]
    fn cross_of_axes() {
        let x = V3::xyz(1.0, 0.0, 0.0);
        let y = V3::xyz(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y).into_array(), [0.0, 0.0, 1.0]);
        assert_eq!(y.cross(&x).into_array(), [0.0, 0.0, -1.0]);
        let wide = Vector::<f32, 4>::new([0.0, 1.0, 0.0, 9.0]);
        let wide_x = Vector::<f32, 4>::new([1.0, 0.0, 0.0, 9.0]);
        assert_eq!(wide.cross(&wide_x).into_array(), [0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn set_zero_clears() {
        let mut v = V3::xy(7.0, 8.0);
        v.set_zero();
        assert_eq!(v, V3::default());
    }
}
