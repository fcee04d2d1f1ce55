//! Fixed-dimension vectors and square matrices.
//!
//! Purpose
//! - Provide small, copyable `Vector<T, N>` and `Matrix<T, N>` value types with
//!   the operator surface used by the geometry and transform layers.
//! - Keep the algorithms explicit: determinant by cofactor (Laplace) expansion
//!   along the first row, adjugate as the transposed cofactor matrix, inverse as
//!   adjugate / determinant.
//!
//! Conventions
//! - Sizes are const generics, so mixing dimensions is a compile error. Runtime
//!   sized input goes through `from_slice` / `from_row_slices`, which report
//!   `LinalgError::DimensionMismatch`.
//! - Out-of-range indexing panics.
//! - `Vector * Matrix` treats the vector as a row; `Matrix * Vector` as a column.
//! - Code cross-refs: `shapes::Point2`, `affine::AffineTransform`

mod cfg;
mod convert;
mod error;
mod matrix;
mod vector;

pub(crate) use cfg::IDENTITY_EPS;
pub use error::LinalgError;
pub use matrix::Matrix;
pub use vector::Vector;

use nalgebra::RealField;

/// Scalar bound shared by vectors and matrices (`f32`, `f64`).
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

/// Homogeneous 2D transform matrix.
pub type Mat3 = Matrix<f64, 3>;
