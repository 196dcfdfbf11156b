//! Piecewise-linear function type and evaluation.
//!
//! This module provides the core value type of the crate:
//! - `PiecewiseLinearFunction` - breakpoints plus two extrapolation rays
//! - `SegmentCursor` - amortized O(1) evaluation for monotone query sequences
//! - `Real` - the floating-point capability the type is generic over

pub mod cursor;
pub mod pwl;
pub mod real;

pub use cursor::SegmentCursor;
pub use pwl::PiecewiseLinearFunction;
pub use real::Real;
