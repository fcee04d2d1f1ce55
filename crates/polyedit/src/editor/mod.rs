//! Headless interaction layer for the shape editor.
//!
//! Purpose
//! - Hold everything the viewer mutates in response to input: the scene of
//!   shapes, hover/selection state, the pan/zoom viewport and undo history.
//! - Stay free of windowing and drawing; callers feed pointer events in window
//!   pixels and read the scene back for rendering.
//!
//! Design
//! - Shapes are addressed by `ShapeId`, points by `PointRef { shape, index }`;
//!   handles stay valid while the scene grows, shrinks or is restored from a
//!   snapshot.
//! - Per-kind drag behaviour is a dispatch table (`DragRule::for_kind`).
//!
//! Code cross-refs: `shapes::{Polygon, utils}`, `affine::AffineTransform`

mod drag;
mod history;
mod scene;
mod session;
mod viewport;

pub use drag::DragRule;
pub use history::History;
pub use scene::{Color, PointRef, Scene, SceneError, ShapeId};
pub use session::{Button, Editor};
pub use viewport::Viewport;

use crate::shapes::{DEFAULT_CIRCLE_SEGMENTS, DEFAULT_RADIUS};

/// Editor configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorCfg {
    /// Radius of newly added shapes (world units).
    pub default_radius: f64,
    /// Point count for newly added circles.
    pub circle_segments: usize,
    /// Point pick radius in pixels, measured against `pick_ref_diag`.
    pub pick_px: f64,
    /// Viewport diagonal (world units) at which `pick_px` is exact.
    pub pick_ref_diag: f64,
    /// Vertical pixels of right-drag for a full zoom step.
    pub zoom_rate: f64,
    /// Fraction of the window new shapes are centred within.
    pub spawn_frac: f64,
    /// Max undo snapshots kept; 0 keeps all.
    pub history_limit: usize,
}

impl Default for EditorCfg {
    fn default() -> Self {
        Self {
            default_radius: DEFAULT_RADIUS,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            pick_px: 5.0,
            pick_ref_diag: 600.0,
            zoom_rate: 500.0,
            spawn_frac: 0.7,
            history_limit: 64,
        }
    }
}
