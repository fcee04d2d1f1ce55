//! Tolerance defaults for the linear-algebra layer (internal).
//!
//! Policy
//! - Exact comparisons are the default (`try_inverse` rejects only det == 0).
//!   Tolerances here are used for identity checks on composed transforms.

/// Max-abs distance under which a composed 3×3 map counts as the identity.
pub(crate) const IDENTITY_EPS: f64 = 1e-9;
