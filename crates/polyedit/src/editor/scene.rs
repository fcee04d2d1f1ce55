//! Ordered shape list with stable handles.

use std::fmt;

use rand::Rng;

use super::drag::DragRule;
use crate::shapes::utils::{dist2d, is_pt_interior};
use crate::shapes::{pt2, Point2, Polygon, ShapeKind, Vec2};

/// Stable shape handle; never reused within a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

/// One vertex of one shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub shape: ShapeId,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneError {
    UnknownShape(ShapeId),
    PointOutOfRange(PointRef),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnknownShape(id) => write!(f, "no shape with id {}", id.0),
            SceneError::PointOutOfRange(r) => {
                write!(f, "shape {} has no point {}", r.shape.0, r.index)
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Fill colour, channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Random colour, each channel `min(1, u + 0.2)` for uniform `u`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut channel = || (rng.gen::<f64>() + 0.2).min(1.0);
        Self {
            r: channel(),
            g: channel(),
            b: channel(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: ShapeId,
    poly: Polygon,
    color: Color,
}

/// Shapes in draw order (last is topmost).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Entry>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, poly: Polygon) -> ShapeId {
        self.add_colored(poly, Color::default())
    }

    pub fn add_colored(&mut self, poly: Polygon, color: Color) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Entry { id, poly, color });
        id
    }

    /// Add a radial shape centred uniformly within `extent` (full width, height)
    /// around the origin, with a random colour from the same `rng`.
    pub fn spawn_random<R: Rng>(
        &mut self,
        kind: ShapeKind,
        radius: f64,
        extent: (f64, f64),
        rng: &mut R,
    ) -> ShapeId {
        let mut coord = |e: f64| {
            if e > 0.0 {
                rng.gen_range(-e / 2.0..e / 2.0)
            } else {
                0.0
            }
        };
        let center = pt2(coord(extent.0), coord(extent.1));
        let color = Color::random(rng);
        self.add_colored(Polygon::regular(kind, center, radius), color)
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Polygon> {
        let pos = self.shapes.iter().position(|e| e.id == id)?;
        Some(self.shapes.remove(pos).poly)
    }

    /// Keep only shapes for which `keep` returns true; returns how many were dropped.
    pub fn retain<F: FnMut(ShapeId, &Polygon) -> bool>(&mut self, mut keep: F) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|e| keep(e.id, &e.poly));
        before - self.shapes.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Polygon> {
        self.entry(id).map(|e| &e.poly)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Polygon> {
        self.shapes
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.poly)
    }

    pub fn color(&self, id: ShapeId) -> Option<Color> {
        self.entry(id).map(|e| e.color)
    }

    fn entry(&self, id: ShapeId) -> Option<&Entry> {
        self.shapes.iter().find(|e| e.id == id)
    }

    pub fn point(&self, r: PointRef) -> Option<&Point2> {
        self.get(r.shape)?.get(r.index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Polygon)> + '_ {
        self.shapes.iter().map(|e| (e.id, &e.poly))
    }

    /// Topmost shape whose interior contains `p`.
    pub fn shape_at(&self, p: Point2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|e| is_pt_interior(e.poly.points(), p))
            .map(|e| e.id)
    }

    /// Closest vertex strictly within `max_dist` of `p`.
    pub fn nearest_point(&self, p: Point2, max_dist: f64) -> Option<PointRef> {
        let mut best: Option<(PointRef, f64)> = None;
        for (id, poly) in self.iter() {
            for (index, q) in poly.points().iter().enumerate() {
                let d = dist2d(q, &p);
                if best.as_ref().map_or(true, |(_, bd)| d < *bd) {
                    best = Some((PointRef { shape: id, index }, d));
                }
            }
        }
        best.filter(|(_, d)| *d < max_dist).map(|(r, _)| r)
    }

    pub fn translate_shape(&mut self, id: ShapeId, v: Vec2) -> Result<(), SceneError> {
        let poly = self.get_mut(id).ok_or(SceneError::UnknownShape(id))?;
        poly.translate(v);
        Ok(())
    }

    /// Drag one vertex from `prev` to `cursor` using its shape's drag rule.
    pub fn drag_point(
        &mut self,
        r: PointRef,
        prev: Point2,
        cursor: Point2,
    ) -> Result<(), SceneError> {
        let poly = self
            .get_mut(r.shape)
            .ok_or(SceneError::UnknownShape(r.shape))?;
        if r.index >= poly.len() {
            return Err(SceneError::PointOutOfRange(r));
        }
        DragRule::for_kind(poly.kind()).apply(poly, r.index, prev, cursor);
        Ok(())
    }
}
