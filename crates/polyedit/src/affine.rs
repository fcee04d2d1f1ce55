//! 2D affine transforms as composed 3×3 homogeneous matrices.
//!
//! Convention
//! - Row vectors: a point `p = (x, y, 1)` maps to `p * M`. The translation lives
//!   in row 2.
//! - Every `compose_*` left-multiplies: `M ← Op * M`. With row vectors this means
//!   the newest operation acts on the point first.
//! - Every `set_*` is `reset to identity` followed by the matching `compose_*`.
//!   Fallible operations build their matrix before touching `self`, so a
//!   failure leaves the transform unchanged.
//!
//! Code cross-refs: `linalg::Matrix::try_inverse`, `shapes::Polygon`

use std::fmt;

use crate::linalg::{LinalgError, Mat3, IDENTITY_EPS};
use crate::shapes::{Point2, Polygon, ShapeKind, Vec2};

/// Failures of the transform builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// A change-of-basis or point matrix had no inverse.
    Linalg(LinalgError),
    /// Three-point mapping needs triangle-kind polygons.
    NotATriangle { kind: ShapeKind },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Linalg(e) => write!(f, "transform: {e}"),
            TransformError::NotATriangle { kind } => {
                write!(f, "three-point transform needs triangles, got {kind}")
            }
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Linalg(e) => Some(e),
            TransformError::NotATriangle { .. } => None,
        }
    }
}

impl From<LinalgError> for TransformError {
    fn from(e: LinalgError) -> Self {
        TransformError::Linalg(e)
    }
}

/// Composed affine map; starts (and is always) a valid 3×3 matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AffineTransform {
    mat: Mat3,
}

impl AffineTransform {
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_matrix(mat: Mat3) -> Self {
        Self { mat }
    }

    #[inline]
    pub fn matrix(&self) -> &Mat3 {
        &self.mat
    }

    pub fn translation(v: Vec2) -> Self {
        let mut t = Self::identity();
        t.compose_translate(v);
        t
    }

    pub fn rotation(degrees: f64, pivot: Point2) -> Self {
        let mut t = Self::identity();
        t.compose_rotate(degrees, pivot);
        t
    }

    pub fn scaling(s: f64, pivot: Point2) -> Self {
        let mut t = Self::identity();
        t.compose_scale(s, pivot);
        t
    }

    pub fn set_identity(&mut self) {
        self.mat.reset_identity();
    }

    pub fn set_translate(&mut self, v: Vec2) {
        self.set_identity();
        self.compose_translate(v);
    }

    pub fn set_rotate(&mut self, degrees: f64, pivot: Point2) {
        self.set_identity();
        self.compose_rotate(degrees, pivot);
    }

    pub fn set_scale(&mut self, s: f64, pivot: Point2) {
        self.set_identity();
        self.compose_scale(s, pivot);
    }

    pub fn set_nu_scale(&mut self, axis: Vec2, pivot: Point2) -> Result<(), TransformError> {
        let op = nu_scale_matrix(axis, pivot)?;
        self.mat = op;
        Ok(())
    }

    pub fn set_three_point(
        &mut self,
        src: &[Point2; 3],
        dst: &[Point2; 3],
    ) -> Result<(), TransformError> {
        let op = three_point_matrix(src, dst)?;
        self.mat = op;
        Ok(())
    }

    /// Shift by `(v.x, v.y)`.
    pub fn compose_translate(&mut self, v: Vec2) {
        let mut op = Mat3::identity();
        op[2][0] = v[0];
        op[2][1] = v[1];
        self.prepend(op);
    }

    /// Counter-clockwise rotation by `degrees` about `pivot`.
    pub fn compose_rotate(&mut self, degrees: f64, pivot: Point2) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (qx, qy) = (pivot[0], pivot[1]);
        let mut op = Mat3::identity();
        op[0][0] = cos;
        op[0][1] = sin;
        op[1][0] = -sin;
        op[1][1] = cos;
        op[2][0] = qx * (1.0 - cos) + qy * sin;
        op[2][1] = -qx * sin + qy * (1.0 - cos);
        self.prepend(op);
    }

    /// Uniform scale by `s` about `pivot`.
    pub fn compose_scale(&mut self, s: f64, pivot: Point2) {
        let mut op = Mat3::identity();
        op[0][0] = s;
        op[1][1] = s;
        op[2][0] = (1.0 - s) * pivot[0];
        op[2][1] = (1.0 - s) * pivot[1];
        self.prepend(op);
    }

    /// Scale by `|axis|` along the direction of `axis` (unit factor across it),
    /// about `pivot`.
    pub fn compose_nu_scale(&mut self, axis: Vec2, pivot: Point2) -> Result<(), TransformError> {
        let op = nu_scale_matrix(axis, pivot)?;
        self.prepend(op);
        Ok(())
    }

    /// Unique affine map taking `src[i]` to `dst[i]`. Fails for a collinear `src`.
    pub fn compose_three_point(
        &mut self,
        src: &[Point2; 3],
        dst: &[Point2; 3],
    ) -> Result<(), TransformError> {
        let op = three_point_matrix(src, dst)?;
        self.prepend(op);
        Ok(())
    }

    /// `compose_three_point` over the corners of two triangle polygons.
    pub fn compose_three_point_polygons(
        &mut self,
        src: &Polygon,
        dst: &Polygon,
    ) -> Result<(), TransformError> {
        let src = triangle_corners(src)?;
        let dst = triangle_corners(dst)?;
        self.compose_three_point(&src, &dst)
    }

    /// Compose an arbitrary transform: `M ← other * M`.
    pub fn then(&mut self, other: &AffineTransform) {
        self.prepend(other.mat);
    }

    pub fn inverse(&self) -> Result<Self, TransformError> {
        Ok(Self {
            mat: self.mat.try_inverse()?,
        })
    }

    #[inline]
    pub fn apply_point(&self, p: Point2) -> Point2 {
        p * self.mat
    }

    pub fn apply_polygon(&self, poly: &mut Polygon) {
        for p in poly.points_mut() {
            *p = *p * self.mat;
        }
    }

    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::identity(), IDENTITY_EPS)
    }

    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.mat.approx_eq(&other.mat, eps)
    }

    #[inline]
    fn prepend(&mut self, op: Mat3) {
        self.mat = op * self.mat;
    }
}

/// `M1⁻¹ · M2` where `M1` is the frame aligned with the unit axis at `pivot` and
/// `M2` the same frame with the first basis row stretched to `axis`.
fn nu_scale_matrix(axis: Vec2, pivot: Point2) -> Result<Mat3, TransformError> {
    let mut s = (axis[0] * axis[0] + axis[1] * axis[1]).sqrt();
    if s == 0.0 {
        tracing::warn!("non-uniform scale with a zero axis");
        return Err(LinalgError::SingularMatrix.into());
    }
    // A negative component flips the reference direction.
    if axis[0] < 0.0 || axis[1] < 0.0 {
        s = -s;
    }
    let (wx, wy) = (axis[0] / s, axis[1] / s);
    let (qx, qy) = (pivot[0], pivot[1]);
    let frame = Mat3::from_rows([[wx, wy, 0.0], [-wy, wx, 0.0], [qx, qy, 1.0]]);
    let stretched = Mat3::from_rows([[axis[0], axis[1], 0.0], [-wy, wx, 0.0], [qx, qy, 1.0]]);
    Ok(frame.try_inverse()? * stretched)
}

/// Solve `M1 · T = M2` for `T`, rows of `M1`/`M2` being homogeneous points.
fn three_point_matrix(src: &[Point2; 3], dst: &[Point2; 3]) -> Result<Mat3, TransformError> {
    let rows = |pts: &[Point2; 3]| {
        Mat3::from_rows(pts.map(|p| [p[0], p[1], 1.0]))
    };
    let m1 = rows(src);
    let m2 = rows(dst);
    let inv = m1.try_inverse().map_err(|e| {
        tracing::warn!("three-point transform from a degenerate triangle");
        e
    })?;
    Ok(inv * m2)
}

fn triangle_corners(poly: &Polygon) -> Result<[Point2; 3], TransformError> {
    match poly.points() {
        [a, b, c] if poly.kind() == ShapeKind::Triangle => Ok([*a, *b, *c]),
        _ => Err(TransformError::NotATriangle { kind: poly.kind() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{pt2, vec2};
    use proptest::prelude::*;

    #[test]
    fn translate_then_back_is_identity() {
        let mut t = AffineTransform::identity();
        let v = vec2(12.5, -3.0);
        t.compose_translate(v);
        assert_eq!(t.apply_point(pt2(1.0, 1.0)), pt2(13.5, -2.0));
        t.compose_translate(-v);
        assert!(t.is_identity());
    }

    #[test]
    fn rotate_quarter_turn_about_pivot() {
        let t = AffineTransform::rotation(90.0, pt2(1.0, 0.0));
        let p = t.apply_point(pt2(2.0, 0.0));
        assert!(p.approx_eq(&pt2(1.0, 1.0), 1e-12));
        // the pivot is fixed
        assert!(t.apply_point(pt2(1.0, 0.0)).approx_eq(&pt2(1.0, 0.0), 1e-12));
    }

    #[test]
    fn full_turn_and_unit_scale_are_identity() {
        for pivot in [pt2(0.0, 0.0), pt2(100.0, -50.0), pt2(-3.5, 7.25)] {
            assert!(AffineTransform::rotation(360.0, pivot).is_identity());
            assert!(AffineTransform::scaling(1.0, pivot).is_identity());
        }
    }

    #[test]
    fn scale_about_pivot() {
        let mut t = AffineTransform::identity();
        t.set_scale(2.0, pt2(1.0, 1.0));
        assert_eq!(t.apply_point(pt2(2.0, 3.0)), pt2(3.0, 5.0));
        assert_eq!(t.apply_point(pt2(1.0, 1.0)), pt2(1.0, 1.0));
    }

    #[test]
    fn nu_scale_stretches_along_axis_only() {
        let mut t = AffineTransform::identity();
        t.set_nu_scale(vec2(3.0, 0.0), pt2(1.0, 1.0)).unwrap();
        assert!(t.apply_point(pt2(2.0, 1.0)).approx_eq(&pt2(4.0, 1.0), 1e-12));
        assert!(t.apply_point(pt2(1.0, 2.0)).approx_eq(&pt2(1.0, 2.0), 1e-12));

        // unit axis: no stretch at all
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let mut u = AffineTransform::identity();
        u.compose_nu_scale(vec2(h, h), pt2(4.0, -2.0)).unwrap();
        assert!(u.is_identity());
    }

    #[test]
    fn nu_scale_diagonal_axis() {
        // axis (1,1): factor sqrt(2) along the diagonal, 1 across it
        let t = {
            let mut t = AffineTransform::identity();
            t.compose_nu_scale(vec2(1.0, 1.0), pt2(0.0, 0.0)).unwrap();
            t
        };
        let r2 = 2f64.sqrt();
        assert!(t.apply_point(pt2(1.0, 1.0)).approx_eq(&pt2(r2, r2), 1e-12));
        assert!(t.apply_point(pt2(1.0, -1.0)).approx_eq(&pt2(1.0, -1.0), 1e-12));
    }

    #[test]
    fn nu_scale_negative_component_reflects() {
        // axis (-2,1): the reference direction flips to (2,-1)/sqrt(5), so
        // points along it land on the far side of the pivot
        let mut t = AffineTransform::identity();
        t.compose_nu_scale(vec2(-2.0, 1.0), pt2(0.0, 0.0)).unwrap();
        let r5 = 5f64.sqrt();
        assert!(t
            .apply_point(pt2(2.0, -1.0))
            .approx_eq(&pt2(-2.0 * r5, r5), 1e-12));
        assert!(t.apply_point(pt2(1.0, 2.0)).approx_eq(&pt2(1.0, 2.0), 1e-12));
        assert!((t.matrix().determinant() + r5).abs() < 1e-12);
    }

    #[test]
    fn nu_scale_zero_axis_is_singular_and_leaves_state() {
        let mut t = AffineTransform::translation(vec2(1.0, 2.0));
        let before = t;
        assert_eq!(
            t.compose_nu_scale(vec2(0.0, 0.0), pt2(0.0, 0.0)),
            Err(TransformError::Linalg(LinalgError::SingularMatrix))
        );
        assert_eq!(t, before);
    }

    #[test]
    fn three_point_to_itself_is_identity() {
        let tri = [pt2(0.0, 0.0), pt2(4.0, 1.0), pt2(-1.0, 3.0)];
        let mut t = AffineTransform::identity();
        t.set_three_point(&tri, &tri).unwrap();
        assert!(t.is_identity());
    }

    #[test]
    fn three_point_maps_corners() {
        let src = [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(0.0, 1.0)];
        let dst = [pt2(2.0, 3.0), pt2(4.0, 3.0), pt2(2.0, 5.0)];
        let mut t = AffineTransform::identity();
        t.compose_three_point(&src, &dst).unwrap();
        for (s, d) in src.iter().zip(dst.iter()) {
            assert!(t.apply_point(*s).approx_eq(d, 1e-12));
        }
        assert!(t.apply_point(pt2(1.0, 1.0)).approx_eq(&pt2(4.0, 5.0), 1e-12));
    }

    #[test]
    fn three_point_collinear_source_fails() {
        let src = [pt2(0.0, 0.0), pt2(1.0, 1.0), pt2(2.0, 2.0)];
        let dst = [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(0.0, 1.0)];
        let mut t = AffineTransform::identity();
        assert_eq!(
            t.compose_three_point(&src, &dst),
            Err(TransformError::Linalg(LinalgError::SingularMatrix))
        );
        assert!(t.is_identity());
    }

    #[test]
    fn three_point_polygons_require_triangles() {
        let tri = Polygon::new(ShapeKind::Triangle);
        let quad = Polygon::new(ShapeKind::Quad);
        let mut t = AffineTransform::identity();
        assert_eq!(
            t.compose_three_point_polygons(&tri, &quad),
            Err(TransformError::NotATriangle {
                kind: ShapeKind::Quad
            })
        );
        let mut moved = tri.clone();
        moved.translate(vec2(5.0, 5.0));
        t.compose_three_point_polygons(&tri, &moved).unwrap();
        let expected = AffineTransform::translation(vec2(5.0, 5.0));
        assert!(t.approx_eq(&expected, 1e-9));
    }

    #[test]
    fn newest_operation_acts_first() {
        // M = R * T: p is rotated, then translated.
        let mut t = AffineTransform::translation(vec2(10.0, 0.0));
        t.compose_rotate(90.0, pt2(0.0, 0.0));
        let p = t.apply_point(pt2(1.0, 0.0));
        assert!(p.approx_eq(&pt2(10.0, 1.0), 1e-12));
    }

    #[test]
    fn inverse_and_polygon_application() {
        let mut t = AffineTransform::rotation(30.0, pt2(2.0, 2.0));
        t.compose_scale(1.5, pt2(-1.0, 0.0));
        let inv = t.inverse().unwrap();
        let mut poly = Polygon::new(ShapeKind::Pentagon);
        let original = poly.clone();
        t.apply_polygon(&mut poly);
        inv.apply_polygon(&mut poly);
        for (a, b) in poly.points().iter().zip(original.points()) {
            assert!(a.approx_eq(b, 1e-9));
        }
        let mut both = t;
        both.then(&inv);
        assert!(both.is_identity());
        assert!(AffineTransform::scaling(0.0, pt2(0.0, 0.0)).inverse().is_err());
    }

    proptest! {
        #[test]
        fn rotation_preserves_distance_to_pivot(
            deg in -720.0f64..720.0,
            qx in -100.0f64..100.0,
            qy in -100.0f64..100.0,
            px in -100.0f64..100.0,
            py in -100.0f64..100.0,
        ) {
            let q = pt2(qx, qy);
            let p = pt2(px, py);
            let t = AffineTransform::rotation(deg, q);
            let img = t.apply_point(p);
            let d0 = crate::shapes::utils::dist2d(&p, &q);
            let d1 = crate::shapes::utils::dist2d(&img, &q);
            prop_assert!((d0 - d1).abs() < 1e-9);
            prop_assert!((img[2] - 1.0).abs() < 1e-12);
        }
    }
}
