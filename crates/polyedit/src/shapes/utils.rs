//! Free geometry helpers over point sequences.
//!
//! Degenerate input (fewer than 3 points) is not an error: the predicates
//! return `false`.

use super::{pt2, Point2, Vec2};

/// Scalar 2D cross `v.x * w.y - v.y * w.x`.
#[inline]
pub fn cross2d(v: &Vec2, w: &Vec2) -> f64 {
    v[0] * w[1] - v[1] * w[0]
}

/// Euclidean distance in the plane (ignores `w`).
#[inline]
pub fn dist2d(a: &Point2, b: &Point2) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

/// Same-winding test: `p` is interior iff the cross products of consecutive
/// vertex offsets from `p` all share a sign. Zero counts as positive.
///
/// Only meaningful for convex polygons.
pub fn is_pt_interior(pts: &[Point2], p: Point2) -> bool {
    let n = pts.len();
    if n < 3 {
        return false;
    }
    let sign_at = |j: usize| {
        let v1 = pts[j] - p;
        let v2 = pts[(j + 1) % n] - p;
        cross2d(&v1, &v2) < 0.0
    };
    let negative = sign_at(0);
    (1..n).all(|j| sign_at(j) == negative)
}

/// Convex iff `cross(next - cur, prev - cur) >= 0` at every vertex, i.e. a
/// counter-clockwise boundary with no reflex corner.
pub fn is_convex(pts: &[Point2]) -> bool {
    let n = pts.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|b| {
        let a = (b + n - 1) % n;
        let c = (b + 1) % n;
        let cb = pts[c] - pts[b];
        let ab = pts[a] - pts[b];
        cross2d(&cb, &ab) >= 0.0
    })
}

/// Arithmetic mean of the vertices; the origin for an empty slice.
pub fn centroid(pts: &[Point2]) -> Point2 {
    if pts.is_empty() {
        return pt2(0.0, 0.0);
    }
    let (sx, sy) = pts
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    let n = pts.len() as f64;
    pt2(sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::vec2;

    #[test]
    fn cross2d_axes() {
        assert_eq!(cross2d(&vec2(1.0, 0.0), &vec2(0.0, 1.0)), 1.0);
        assert_eq!(cross2d(&vec2(1.0, 0.0), &vec2(1.0, 0.0)), 0.0);
        assert_eq!(cross2d(&vec2(0.0, 1.0), &vec2(1.0, 0.0)), -1.0);
    }

    #[test]
    fn dist2d_ignores_w() {
        let a = pt2(0.0, 0.0);
        let mut b = pt2(3.0, 4.0);
        b[2] = 7.0;
        assert_eq!(dist2d(&a, &b), 5.0);
    }

    #[test]
    fn degenerate_inputs_are_false() {
        let two = [pt2(0.0, 0.0), pt2(1.0, 0.0)];
        assert!(!is_convex(&two));
        assert!(!is_pt_interior(&two, pt2(0.5, 0.0)));
        assert!(!is_convex(&[]));
        assert_eq!(centroid(&[]), pt2(0.0, 0.0));
    }

    #[test]
    fn square_centroid() {
        let sq = [pt2(0.0, 0.0), pt2(2.0, 0.0), pt2(2.0, 2.0), pt2(0.0, 2.0)];
        assert_eq!(centroid(&sq), pt2(1.0, 1.0));
        assert!(is_convex(&sq));
        assert!(is_pt_interior(&sq, pt2(1.0, 1.0)));
        assert!(!is_pt_interior(&sq, pt2(3.0, 1.0)));
    }

    #[test]
    fn clockwise_square_is_not_convex_but_has_interior() {
        // Convexity requires counter-clockwise order; interior only same sign.
        let cw = [pt2(0.0, 0.0), pt2(0.0, 2.0), pt2(2.0, 2.0), pt2(2.0, 0.0)];
        assert!(!is_convex(&cw));
        assert!(is_pt_interior(&cw, pt2(1.0, 1.0)));
    }
}
