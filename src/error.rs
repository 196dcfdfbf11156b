//! Error types for pwlinear.

use thiserror::Error;

/// Error type for pwlinear operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PwlError {
    /// Breakpoints violate the representation invariants.
    #[error("Invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    /// An operand of a convex-only operation is not convex.
    #[error("Input is not convex: {0}")]
    NotConvexInput(String),

    /// The convex envelope of the operands is unbounded below.
    #[error("Convex meet is unbounded below: left slope {left} exceeds right slope {right}")]
    UnboundedMeet { left: f64, right: f64 },
}

/// Result type for pwlinear operations.
pub type Result<T> = std::result::Result<T, PwlError>;
