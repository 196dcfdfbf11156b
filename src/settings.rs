//! Tunable tolerances shared by the operations.

use crate::function::Real;

/// Default absolute slope tolerance.
///
/// Calibrated for inputs whose slopes are of order one. Scale it with the
/// magnitude of the slopes you work with.
pub const DEFAULT_ATOL: f64 = 1e-9;

/// Settings for tolerance-dependent operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings<T: Real> {
    /// Absolute tolerance used when comparing slopes.
    pub atol: T,
    /// Canonicalize the output of composition.
    pub postprocess_breakpoints: bool,
}

impl<T: Real> Default for Settings<T> {
    fn default() -> Self {
        Settings {
            atol: nalgebra::convert(DEFAULT_ATOL),
            postprocess_breakpoints: true,
        }
    }
}

impl<T: Real> Settings<T> {
    /// Replace the slope tolerance.
    pub fn with_atol(mut self, atol: T) -> Self {
        self.atol = atol;
        self
    }

    /// Enable or disable canonicalization after composition.
    pub fn with_postprocess_breakpoints(mut self, enabled: bool) -> Self {
        self.postprocess_breakpoints = enabled;
        self
    }
}
