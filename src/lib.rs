//! # pwlinear
//!
//! Exact algebra on continuous piecewise-linear functions of one real variable.
//!
//! A [`PiecewiseLinearFunction`] is described by a strictly increasing list of
//! breakpoints and the slopes of the two rays extending past the first and
//! last breakpoint, so it is defined on the whole real line. The operations
//! below stay closed within that representation, up to floating-point
//! rounding.
//!
//! ## Quick Start
//!
//! ```
//! use pwlinear::prelude::*;
//!
//! let f = PiecewiseLinearFunction::new(vec![0.0_f64, 1.0, 2.0], vec![0.0, 2.0, 1.0], -1.0, 0.5)?;
//! let g = PiecewiseLinearFunction::new(vec![0.0_f64, 1.5, 2.1], vec![1.0, 3.0, 0.5], 1.0, 3.0)?;
//!
//! assert_eq!(f.evaluate(0.5), 1.0);
//!
//! let h = 2.0 * &f - 3.0;
//! assert_eq!(h.evaluate(1.0), 1.0);
//!
//! let lower = f.min(&g);
//! assert_eq!(lower.evaluate(1.0), f.evaluate(1.0).min(g.evaluate(1.0)));
//!
//! let fg = f.compose(&g);
//! assert!((fg.evaluate(0.3) - f.evaluate(g.evaluate(0.3))).abs() < 1e-12);
//! # Ok::<(), pwlinear::PwlError>(())
//! ```
//!
//! ## Operations
//!
//! - Arithmetic: `+`, `-`, unary `-`, `*` and `/` by a scalar, `+`/`-` a constant
//! - Order: `min`, `max`, `minimum`, `maximum`
//! - Composition: `compose` (`f ∘ g`)
//! - Convexity: `is_convex`, `is_concave`, `curvature`
//! - Convex meet: `convex_meet`, the greatest convex minorant of two convex functions
//! - Canonicalization: `remove_redundant_breakpoints`
//!
//! ## Architecture
//!
//! - **Immutable values**: every operation returns a new function
//! - **Merge engine** combining two breakpoint grids under a binary operator
//! - **Tolerances** gathered in [`Settings`], with a documented default

pub mod canon;
pub mod convex;
pub mod error;
pub mod function;
pub mod ops;
pub mod settings;

/// Prelude module for convenient imports.
///
/// ```
/// use pwlinear::prelude::*;
/// ```
pub mod prelude {
    // Function type
    pub use crate::function::{PiecewiseLinearFunction, Real, SegmentCursor};

    // Operations
    pub use crate::ops::{
        add, combine, compose, max, maximum, min, minimum, negate, scale, shift, sub, BinaryOp,
    };

    // Convexity
    pub use crate::convex::{convex_meet, curvature, is_concave, is_convex, Curvature};

    // Canonicalization
    pub use crate::canon::remove_redundant_breakpoints;

    // Settings
    pub use crate::settings::{Settings, DEFAULT_ATOL};

    // Errors
    pub use crate::error::{PwlError, Result};
}

// Re-export main types at crate root
pub use error::{PwlError, Result};
pub use function::PiecewiseLinearFunction;
pub use settings::Settings;
