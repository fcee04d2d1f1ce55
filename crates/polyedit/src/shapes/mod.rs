//! Homogeneous 2D points and fixed-size polygons.
//!
//! - `Point2` / `Vec2`: 3-slot vectors `(x, y, w)`. Points carry `w = 1`,
//!   free vectors `w = 0`; the type does not enforce it.
//! - `Polygon`: shape kind tag plus an ordered point sequence whose length is
//!   fixed by the kind. Points are editable in place; their count never changes.
//! - `utils`: winding-sign predicates (interior, convexity) and centroid.
//!
//! Code cross-refs: `linalg::Vector`, `affine::AffineTransform`, `editor::Scene`

mod polygon;
pub mod utils;

use std::fmt;

use crate::linalg::Vector;

pub use polygon::{Polygon, ShapeKind, DEFAULT_CIRCLE_SEGMENTS, DEFAULT_RADIUS};

/// Homogeneous 2D point `(x, y, 1)`.
pub type Point2 = Vector<f64, 3>;
/// Homogeneous 2D displacement `(x, y, 0)`.
pub type Vec2 = Vector<f64, 3>;

/// Point `(x, y, 1)`.
#[inline]
pub fn pt2(x: f64, y: f64) -> Point2 {
    Point2::xy(x, y)
}

/// Free vector `(x, y, 0)`.
#[inline]
pub fn vec2(x: f64, y: f64) -> Vec2 {
    Vec2::xyz(x, y, 0.0)
}

/// Shape construction failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    PointCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
    UnknownKind(String),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::PointCount {
                kind,
                expected,
                found,
            } => write!(f, "{kind} needs {expected} points, got {found}"),
            ShapeError::UnknownKind(name) => write!(f, "unknown shape kind {name:?}"),
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests;
