//! Functional composition `f ∘ g`.
//!
//! Composition is the one operation that creates abscissas present in
//! neither input. Between two breakpoints of `g`, `g` is affine but `f ∘ g`
//! still bends wherever `g(t)` passes over a breakpoint of `f`. Each such
//! crossing is found by inverting the affine piece of `g`.

use std::ops::Range;

use crate::canon::remove_redundant_breakpoints;
use crate::function::{PiecewiseLinearFunction, Real, SegmentCursor};
use crate::settings::Settings;

/// Abscissas of the composed function, collected left to right.
///
/// Breakpoints of the inner function are fixed once pushed. Synthesized
/// preimages stay provisional until the next inner breakpoint arrives.
struct Abscissas<T: Real> {
    ts: Vec<T>,
    fixed: usize,
}

impl<T: Real> Abscissas<T> {
    fn with_capacity(capacity: usize) -> Self {
        Abscissas {
            ts: Vec::with_capacity(capacity),
            fixed: 0,
        }
    }

    /// Append a synthesized abscissa, skipping it if it does not advance.
    fn push_preimage(&mut self, t: T) {
        match self.ts.last() {
            Some(&last) if t <= last => {}
            _ => self.ts.push(t),
        }
    }

    /// Append a breakpoint of `g`, displacing preimages that rounding put at
    /// or past it.
    fn push_breakpoint(&mut self, t: T) {
        while self.ts.len() > self.fixed && self.ts[self.ts.len() - 1] >= t {
            self.ts.pop();
        }
        self.ts.push(t);
        self.fixed = self.ts.len();
    }

    /// Append the preimages of `f_x[range]` under the affine piece through
    /// `(anchor_x, anchor_y)` with non-zero `slope`, in increasing order.
    fn push_preimages(
        &mut self,
        f_x: &[T],
        range: Range<usize>,
        anchor_x: T,
        anchor_y: T,
        slope: T,
    ) {
        let preimage = |xf: T| anchor_x + (xf - anchor_y) / slope;
        if slope > T::zero() {
            for &xf in &f_x[range] {
                self.push_preimage(preimage(xf));
            }
        } else {
            for &xf in f_x[range].iter().rev() {
                self.push_preimage(preimage(xf));
            }
        }
    }
}

/// Indices of the breakpoints of `f_x` strictly between `lo` and `hi`.
fn strictly_between<T: Real>(f_x: &[T], lo: T, hi: T) -> Range<usize> {
    let start = f_x.partition_point(|&v| v <= lo);
    let end = f_x.partition_point(|&v| v < hi).max(start);
    start..end
}

/// Slope of `f ∘ g` on a ray of `g` with slope `g_slope`.
///
/// `outward_positive` is true for the right ray, where increasing `g_slope`
/// sends `g(t)` to `+∞`.
fn ray_slope<T: Real>(f: &PiecewiseLinearFunction<T>, g_slope: T, outward_positive: bool) -> T {
    let zero = T::zero();
    if g_slope == zero {
        zero
    } else if (g_slope > zero) == outward_positive {
        g_slope * f.right_slope()
    } else {
        g_slope * f.left_slope()
    }
}

/// Compute `t ↦ f(g(t))`.
///
/// When `settings.postprocess_breakpoints` is set, redundant breakpoints are
/// removed from the result using `settings.atol`.
pub fn compose<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
    settings: &Settings<T>,
) -> PiecewiseLinearFunction<T> {
    let (f_x, g_x, g_y) = (f.x(), g.x(), g.y());
    let n = g_x.len();
    let zero = T::zero();
    let mut ts = Abscissas::with_capacity(n + 2 * f_x.len());

    // Left ray: t < g_x[0].
    let left = g.left_slope();
    if left > zero {
        let range = 0..f_x.partition_point(|&v| v < g_y[0]);
        ts.push_preimages(f_x, range, g_x[0], g_y[0], left);
    } else if left < zero {
        let range = f_x.partition_point(|&v| v <= g_y[0])..f_x.len();
        ts.push_preimages(f_x, range, g_x[0], g_y[0], left);
    }

    for i in 0..n {
        ts.push_breakpoint(g_x[i]);
        if i + 1 < n {
            let slope = g.segment_slope(i);
            if slope != zero {
                let range = strictly_between(f_x, g_y[i].min(g_y[i + 1]), g_y[i].max(g_y[i + 1]));
                ts.push_preimages(f_x, range, g_x[i], g_y[i], slope);
            }
        }
    }

    // Right ray: t > g_x[n - 1].
    let right = g.right_slope();
    if right > zero {
        let range = f_x.partition_point(|&v| v <= g_y[n - 1])..f_x.len();
        ts.push_preimages(f_x, range, g_x[n - 1], g_y[n - 1], right);
    } else if right < zero {
        let range = 0..f_x.partition_point(|&v| v < g_y[n - 1]);
        ts.push_preimages(f_x, range, g_x[n - 1], g_y[n - 1], right);
    }

    let ts = ts.ts;
    let mut g_cursor = SegmentCursor::new(g);
    let values = ts.iter().map(|&t| f.evaluate(g_cursor.evaluate(t))).collect();

    tracing::debug!(
        breakpoints = ts.len(),
        from_inner = n,
        "composed piecewise-linear functions"
    );

    let composed = PiecewiseLinearFunction::from_parts(
        ts,
        values,
        ray_slope(f, left, false),
        ray_slope(f, right, true),
    );
    if settings.postprocess_breakpoints {
        remove_redundant_breakpoints(&composed, settings.atol)
    } else {
        composed
    }
}

impl<T: Real> PiecewiseLinearFunction<T> {
    /// Compose with an inner function: `t ↦ self(inner(t))`.
    ///
    /// Redundant breakpoints are removed with the default tolerance.
    pub fn compose(&self, inner: &Self) -> Self {
        compose(self, inner, &Settings::default())
    }

    /// Compose with an inner function using explicit settings.
    pub fn compose_with(&self, inner: &Self, settings: &Settings<T>) -> Self {
        compose(self, inner, settings)
    }
}
