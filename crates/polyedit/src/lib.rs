//! Fixed-size linear algebra, polygon geometry and affine transforms for a 2D
//! shape editor.
//!
//! Layers (leaf-first)
//! - `linalg`: `Vector<T, N>` and `Matrix<T, N>` with cofactor determinant,
//!   adjugate and inverse.
//! - `shapes`: homogeneous 2D points, tagged polygons with radial
//!   constructors, and the winding-sign predicates in `shapes::utils`.
//! - `affine`: `AffineTransform`, a composed 3×3 homogeneous map.
//! - `editor`: headless interaction layer (scene, hit-testing, drag rules,
//!   viewport, undo history). Nothing below `editor` holds viewer state.
//!
//! Conventions
//! - Row-vector homogeneous coordinates: a point maps as `p * M`.
//! - Composition prepends: composing `Op` onto `M` stores `Op * M`.

pub mod affine;
pub mod editor;
pub mod linalg;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use affine::{AffineTransform, TransformError};
pub use linalg::{LinalgError, Mat3, Matrix, Vector};
pub use shapes::{Point2, Polygon, ShapeError, ShapeKind, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::{AffineTransform, TransformError};
    pub use crate::editor::{
        Button, Color, DragRule, Editor, EditorCfg, History, PointRef, Scene, SceneError,
        ShapeId, Viewport,
    };
    pub use crate::linalg::{LinalgError, Mat3, Matrix, Vector};
    pub use crate::shapes::utils::{centroid, cross2d, dist2d, is_convex, is_pt_interior};
    pub use crate::shapes::{Point2, Polygon, ShapeError, ShapeKind, Vec2};
}
