//! Forward-only evaluation over a monotone sequence of points.

use super::pwl::PiecewiseLinearFunction;
use super::real::Real;

/// Evaluates a function at non-decreasing query points.
///
/// The cursor remembers the active segment, so a sweep over `m` increasing
/// points costs O(n + m) instead of O(m log n).
#[derive(Debug, Clone)]
pub struct SegmentCursor<'a, T: Real> {
    function: &'a PiecewiseLinearFunction<T>,
    index: usize,
}

impl<'a, T: Real> SegmentCursor<'a, T> {
    /// Create a cursor positioned at the leftmost segment.
    pub fn new(function: &'a PiecewiseLinearFunction<T>) -> Self {
        SegmentCursor { function, index: 0 }
    }

    /// Evaluate at `t`. Queries must not decrease between calls.
    pub fn evaluate(&mut self, t: T) -> T {
        let x = self.function.x();
        debug_assert!(self.index == 0 || x[self.index] <= t, "cursor moved backwards");
        while self.index + 1 < x.len() && x[self.index + 1] <= t {
            self.index += 1;
        }
        self.function.value_on_segment(self.index, t)
    }

    /// Index of the breakpoint starting the active segment.
    pub fn index(&self) -> usize {
        self.index
    }
}
