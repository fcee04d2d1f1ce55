//! Per-kind vertex drag behaviour.
//!
//! - `Parallelogram` (quad): move the corner, then re-project both neighbours
//!   onto their old edge directions so opposite sides stay parallel.
//! - `RadialScale` (hexagon, octagon, circle): centre is the midpoint of
//!   point 0 and point `n/2`; every point is scaled about it so the cursor
//!   sits on the new circumradius.
//! - `PentagonScale`: same, with the centre recovered from edge 0-1 and the
//!   opposite point 3.
//! - `ConvexFree` (triangle): move the point, undo the move if the polygon
//!   stops being convex.
//!
//! Degenerate configurations leave the polygon untouched: zero-length edges
//! or radius before the drag, and any drag that would shrink the radius or a
//! quad side below `MIN_EXTENT` (or turn the quad inside out).

use crate::shapes::utils::is_convex;
use crate::shapes::{Point2, Polygon, ShapeKind, Vec2};

/// Smallest radius or quad side (world units) a drag may leave behind.
pub const MIN_EXTENT: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragRule {
    Parallelogram,
    RadialScale,
    PentagonScale,
    ConvexFree,
}

impl DragRule {
    pub const fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Quad => DragRule::Parallelogram,
            ShapeKind::Hexagon | ShapeKind::Octagon | ShapeKind::Circle { .. } => {
                DragRule::RadialScale
            }
            ShapeKind::Pentagon => DragRule::PentagonScale,
            ShapeKind::Triangle => DragRule::ConvexFree,
        }
    }

    /// Apply the rule for a drag of point `index` from `prev` to `cursor`.
    pub fn apply(self, poly: &mut Polygon, index: usize, prev: Point2, cursor: Point2) {
        match self {
            DragRule::Parallelogram => drag_parallelogram(poly, index, cursor - prev),
            DragRule::RadialScale => {
                if let Some((center, r)) = radial_center(poly) {
                    scale_to_cursor(poly, center, r, cursor);
                }
            }
            DragRule::PentagonScale => {
                if let Some((center, r)) = pentagon_center(poly) {
                    scale_to_cursor(poly, center, r, cursor);
                }
            }
            DragRule::ConvexFree => {
                let v = cursor - prev;
                poly[index] += v;
                if !is_convex(poly.points()) {
                    poly[index] -= v;
                }
            }
        }
    }
}

fn drag_parallelogram(poly: &mut Polygon, a: usize, v: Vec2) {
    let n = poly.len();
    if n < 4 {
        poly[a] += v;
        return;
    }
    let (b, c, d) = ((a + 1) % n, (a + 2) % n, (a + 3) % n);
    let mut new_a = poly[a];
    new_a[0] += v[0];
    new_a[1] += v[1];

    let ba = poly[b] - poly[a];
    let dc = poly[d] - poly[c];
    let (ba_len, dc_len) = (ba.magnitude(), dc.magnitude());
    if ba_len == 0.0 || dc_len == 0.0 {
        return;
    }
    let len0 = ((poly[c] - new_a) * ba) / ba_len;
    let len1 = ((new_a - poly[c]) * dc) / dc_len;
    if len0 < MIN_EXTENT || len1 < MIN_EXTENT {
        return;
    }
    poly[a] = new_a;
    poly[d] = poly[c] + dc.normalized() * len1;
    poly[b] = new_a + ba.normalized() * len0;
}

fn radial_center(poly: &Polygon) -> Option<(Point2, f64)> {
    let n = poly.len();
    if n < 2 {
        return None;
    }
    let half = (poly[n / 2] - poly[0]) * 0.5;
    let r = half.magnitude();
    (r > 0.0).then(|| (poly[0] + half, r))
}

fn pentagon_center(poly: &Polygon) -> Option<(Point2, f64)> {
    if poly.len() < 5 {
        return None;
    }
    let edge = poly[1] - poly[0];
    // chord of 72° on the circumcircle
    let r = edge.magnitude() / (2.0 * (1.0 - 72f64.to_radians().cos())).sqrt();
    let mid = poly[0] + edge * 0.5;
    let to_mid = mid - poly[3];
    let to_mid_len = to_mid.magnitude();
    if r == 0.0 || to_mid_len == 0.0 {
        return None;
    }
    Some((poly[3] + to_mid * (r / to_mid_len), r))
}

fn scale_to_cursor(poly: &mut Polygon, center: Point2, r: f64, cursor: Point2) {
    let new_r = (cursor - center).magnitude();
    if new_r < MIN_EXTENT {
        return;
    }
    let s = new_r / r;
    for p in poly.points_mut() {
        *p = center + (*p - center) * s;
    }
}
