//! Operations producing new functions from existing ones.
//!
//! This module provides:
//! - The merge engine combining two functions over their common grid
//! - Linear arithmetic (sum, difference, scaling, shifting) and operators
//! - Pointwise minimum and maximum
//! - Functional composition

pub mod arithmetic;
pub mod compose;
pub mod merge;

pub use arithmetic::{add, negate, scale, shift, sub};
pub use compose::compose;
pub use merge::{combine, max, maximum, min, minimum, BinaryOp};
