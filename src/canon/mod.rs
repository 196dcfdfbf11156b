//! Canonicalization of piecewise-linear functions.
//!
//! A function is in canonical form when no breakpoint is collinear with its
//! neighbours (or with the adjacent extrapolation ray).

pub mod redundant;

pub use redundant::remove_redundant_breakpoints;
