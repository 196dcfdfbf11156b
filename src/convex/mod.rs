//! Convexity analysis and the convex meet.
//!
//! This module provides:
//! - Curvature classification (convex, concave, affine)
//! - The convex meet: the greatest convex minorant of two convex functions

pub mod curvature;
pub mod meet;

pub use curvature::{curvature, is_concave, is_convex, Curvature};
pub use meet::convex_meet;
