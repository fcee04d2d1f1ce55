//! Tagged polygon with radial constructors.
//!
//! Each kind places its points at a fixed angle table around a centre, in
//! counter-clockwise order. The angle tables are the construction contract;
//! the editor's drag rules assume them (e.g. point `n/2` is opposite point 0).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, PI, TAU};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::{pt2, utils, vec2, Point2, ShapeError, Vec2};
use crate::affine::AffineTransform;

/// Radius used by the no-argument constructors.
pub const DEFAULT_RADIUS: f64 = 50.0;
/// Point count of `ShapeKind::circle()`.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Quad,
    Pentagon,
    Hexagon,
    Octagon,
    /// Regular N-gon approximating a circle.
    Circle { segments: usize },
}

impl ShapeKind {
    #[inline]
    pub const fn circle() -> Self {
        ShapeKind::Circle {
            segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }

    pub const fn point_count(self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Quad => 4,
            ShapeKind::Pentagon => 5,
            ShapeKind::Hexagon => 6,
            ShapeKind::Octagon => 8,
            ShapeKind::Circle { segments } => segments,
        }
    }

    /// Vertex angles (radians) of the radial constructor.
    pub fn angles(self) -> Vec<f64> {
        match self {
            ShapeKind::Triangle => vec![-FRAC_PI_6, FRAC_PI_2, 7.0 * FRAC_PI_6],
            ShapeKind::Quad => vec![-FRAC_PI_4, FRAC_PI_4, 3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4],
            ShapeKind::Pentagon => {
                let step = 2.0 * PI / 5.0;
                vec![
                    FRAC_PI_2 - 2.0 * step,
                    FRAC_PI_2 - step,
                    FRAC_PI_2,
                    FRAC_PI_2 + step,
                    FRAC_PI_2 + 2.0 * step,
                ]
            }
            ShapeKind::Hexagon => vec![
                0.0,
                FRAC_PI_3,
                2.0 * FRAC_PI_3,
                PI,
                -2.0 * FRAC_PI_3,
                -FRAC_PI_3,
            ],
            ShapeKind::Octagon => vec![
                -FRAC_PI_8,
                FRAC_PI_8,
                3.0 * FRAC_PI_8,
                5.0 * FRAC_PI_8,
                7.0 * FRAC_PI_8,
                -7.0 * FRAC_PI_8,
                -5.0 * FRAC_PI_8,
                -3.0 * FRAC_PI_8,
            ],
            ShapeKind::Circle { segments } => (0..segments)
                .map(|j| TAU / segments as f64 * j as f64)
                .collect(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Quad => "quad",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Circle { .. } => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle { segments } => write!(f, "circle:{segments}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Accepts `triangle`, `quad`, `pentagon`, `hexagon`, `octagon`, `circle` and
/// `circle:<segments>` (case-insensitive).
impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let kind = match lower.as_str() {
            "triangle" | "tri" => ShapeKind::Triangle,
            "quad" | "square" => ShapeKind::Quad,
            "pentagon" | "pent" => ShapeKind::Pentagon,
            "hexagon" | "hex" => ShapeKind::Hexagon,
            "octagon" | "oct" => ShapeKind::Octagon,
            "circle" | "circ" => ShapeKind::circle(),
            other => {
                let segments = other
                    .strip_prefix("circle:")
                    .and_then(|n| n.parse::<usize>().ok())
                    .ok_or_else(|| ShapeError::UnknownKind(s.to_string()))?;
                ShapeKind::Circle { segments }
            }
        };
        Ok(kind)
    }
}

/// Ordered, fixed-length point sequence tagged with its shape kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    kind: ShapeKind,
    pts: Vec<Point2>,
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new(ShapeKind::Triangle)
    }
}

impl Polygon {
    /// Shape of the given kind centred at the origin with `DEFAULT_RADIUS`.
    pub fn new(kind: ShapeKind) -> Self {
        Self::regular(kind, pt2(0.0, 0.0), DEFAULT_RADIUS)
    }

    /// Points at the kind's angle table, `radius` away from `center`.
    pub fn regular(kind: ShapeKind, center: Point2, radius: f64) -> Self {
        let pts = kind
            .angles()
            .into_iter()
            .map(|a| center + vec2(a.cos() * radius, a.sin() * radius))
            .collect();
        Self { kind, pts }
    }

    /// Triangle from three explicit corners.
    pub fn triangle(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            kind: ShapeKind::Triangle,
            pts: vec![a, b, c],
        }
    }

    pub fn from_points(kind: ShapeKind, pts: Vec<Point2>) -> Result<Self, ShapeError> {
        if pts.len() != kind.point_count() {
            return Err(ShapeError::PointCount {
                kind,
                expected: kind.point_count(),
                found: pts.len(),
            });
        }
        Ok(Self { kind, pts })
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Point2> {
        self.pts.get(i)
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Point2> {
        self.pts.get_mut(i)
    }

    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.pts
    }

    /// Mutable view; a slice, so the point count cannot change.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point2] {
        &mut self.pts
    }

    /// Shift every point by `(v.x, v.y)`; `w` slots are untouched.
    pub fn translate(&mut self, v: Vec2) {
        for p in &mut self.pts {
            p[0] += v[0];
            p[1] += v[1];
        }
    }

    /// Map every point through `t` in place.
    pub fn transform(&mut self, t: &AffineTransform) {
        t.apply_polygon(self);
    }

    #[inline]
    pub fn centroid(&self) -> Point2 {
        utils::centroid(&self.pts)
    }

    #[inline]
    pub fn is_convex(&self) -> bool {
        utils::is_convex(&self.pts)
    }

    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        utils::is_pt_interior(&self.pts, p)
    }
}

impl Index<usize> for Polygon {
    type Output = Point2;
    #[inline]
    fn index(&self, i: usize) -> &Point2 {
        &self.pts[i]
    }
}

impl IndexMut<usize> for Polygon {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Point2 {
        &mut self.pts[i]
    }
}
