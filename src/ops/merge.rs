//! Binary merge of two functions over their common breakpoint grid.
//!
//! Both operands are affine between consecutive points of the merged grid,
//! so any operator that maps a pair of affine pieces to a piecewise-affine
//! result can be applied grid point by grid point. Order operators (`Min`,
//! `Max`) additionally need the points where the operands cross.

use std::cmp::Ordering;

use crate::error::{PwlError, Result};
use crate::function::real::same_abscissa;
use crate::function::{PiecewiseLinearFunction, Real, SegmentCursor};

/// Pointwise operator combining two function values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp<T: Real> {
    /// `lhs·a + rhs·b`.
    Linear { lhs: T, rhs: T },
    /// `min(a, b)`.
    Min,
    /// `max(a, b)`.
    Max,
}

impl<T: Real> BinaryOp<T> {
    /// Addition.
    pub fn sum() -> Self {
        BinaryOp::Linear {
            lhs: T::one(),
            rhs: T::one(),
        }
    }

    /// Subtraction.
    pub fn difference() -> Self {
        BinaryOp::Linear {
            lhs: T::one(),
            rhs: -T::one(),
        }
    }

    /// Apply the operator to two values.
    pub fn apply(&self, a: T, b: T) -> T {
        match *self {
            BinaryOp::Linear { lhs, rhs } => lhs * a + rhs * b,
            BinaryOp::Min => a.min(b),
            BinaryOp::Max => a.max(b),
        }
    }

    /// Pick a ray slope given which operand dominates in the limit.
    ///
    /// `order` compares the left operand against the right one as `t` tends
    /// to the relevant infinity.
    fn ray_slope(&self, order: Ordering, a: T, b: T) -> T {
        match (*self, order) {
            (BinaryOp::Linear { .. }, _) => self.apply(a, b),
            (BinaryOp::Min, Ordering::Greater) | (BinaryOp::Max, Ordering::Less) => b,
            (BinaryOp::Min, _) | (BinaryOp::Max, _) => a,
        }
    }
}

/// Merge two sequences sorted by `abscissa` into one strictly increasing one.
///
/// A value is folded into the previous merged point with `join` only when
/// the two coincide and come from different operands. Each operand's own
/// points are strictly increasing already and are always kept.
pub(crate) fn merge_sorted<T, P, K, J>(a: &[P], b: &[P], abscissa: K, mut join: J) -> Vec<P>
where
    T: Real,
    P: Copy,
    K: Fn(&P) -> T,
    J: FnMut(&mut P, P),
{
    let mut merged: Vec<P> = Vec::with_capacity(a.len() + b.len());
    // Operands contributing to the last merged point, as (a, b).
    let mut last_from = (false, false);
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let from_a = j >= b.len() || (i < a.len() && abscissa(&a[i]) <= abscissa(&b[j]));
        let next = if from_a {
            i += 1;
            a[i - 1]
        } else {
            j += 1;
            b[j - 1]
        };
        let joinable = if from_a { !last_from.0 } else { !last_from.1 };
        match merged.last_mut() {
            Some(last) if joinable && same_abscissa(abscissa(&*last), abscissa(&next)) => {
                join(last, next);
                if from_a {
                    last_from.0 = true;
                } else {
                    last_from.1 = true;
                }
            }
            _ => {
                merged.push(next);
                last_from = (from_a, !from_a);
            }
        }
    }
    merged
}

/// Merge two sorted abscissa sequences, folding values shared by both.
pub(crate) fn merge_grid<T: Real>(a: &[T], b: &[T]) -> Vec<T> {
    merge_sorted(a, b, |&t| t, |_, _| {})
}

/// Sign of `f - g` as `t → -∞`, given their left slopes and their gap at the
/// first grid point.
fn left_limit_order<T: Real>(fl: T, gl: T, gap: T) -> Ordering {
    match gl.partial_cmp(&fl) {
        Some(Ordering::Equal) | None => gap.partial_cmp(&T::zero()).unwrap_or(Ordering::Equal),
        Some(order) => order,
    }
}

/// Sign of `f - g` as `t → +∞`, given their right slopes and their gap at the
/// last grid point.
fn right_limit_order<T: Real>(fr: T, gr: T, gap: T) -> Ordering {
    match fr.partial_cmp(&gr) {
        Some(Ordering::Equal) | None => gap.partial_cmp(&T::zero()).unwrap_or(Ordering::Equal),
        Some(order) => order,
    }
}

/// Abscissa where two rays anchored at `anchor` with value gap `gap` and
/// slope gap `slope_gap` meet, if they are not parallel.
fn ray_crossing<T: Real>(anchor: T, gap: T, slope_gap: T) -> Option<T> {
    if slope_gap == T::zero() || gap == T::zero() {
        None
    } else {
        Some(anchor - gap / slope_gap)
    }
}

fn changes_sign<T: Real>(a: T, b: T) -> bool {
    let zero = T::zero();
    (a < zero && b > zero) || (a > zero && b < zero)
}

/// Combine `f` and `g` pointwise: `t ↦ op(f(t), g(t))`.
///
/// The result is defined on the merged breakpoint grid of both operands,
/// plus crossing points for order operators. It is not canonicalized.
pub fn combine<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
    op: BinaryOp<T>,
) -> PiecewiseLinearFunction<T> {
    let grid = merge_grid(f.x(), g.x());
    let mut f_cursor = SegmentCursor::new(f);
    let mut g_cursor = SegmentCursor::new(g);
    let (fv, gv): (Vec<T>, Vec<T>) = grid
        .iter()
        .map(|&t| (f_cursor.evaluate(t), g_cursor.evaluate(t)))
        .unzip();

    match op {
        BinaryOp::Linear { .. } => {
            let y = fv.iter().zip(&gv).map(|(&a, &b)| op.apply(a, b)).collect();
            tracing::trace!(grid = grid.len(), "merged breakpoint grids");
            PiecewiseLinearFunction::from_parts(
                grid,
                y,
                op.apply(f.left_slope(), g.left_slope()),
                op.apply(f.right_slope(), g.right_slope()),
            )
        }
        BinaryOp::Min | BinaryOp::Max => combine_order(f, g, op, grid, fv, gv),
    }
}

fn combine_order<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
    op: BinaryOp<T>,
    grid: Vec<T>,
    fv: Vec<T>,
    gv: Vec<T>,
) -> PiecewiseLinearFunction<T> {
    let n = grid.len();
    let (fl, gl) = (f.left_slope(), g.left_slope());
    let (fr, gr) = (f.right_slope(), g.right_slope());
    let first_gap = fv[0] - gv[0];
    let last_gap = fv[n - 1] - gv[n - 1];

    let mut x = Vec::with_capacity(2 * n + 1);
    let mut y = Vec::with_capacity(2 * n + 1);

    if let Some(t) = ray_crossing(grid[0], first_gap, fl - gl) {
        if t < grid[0] && !same_abscissa(t, grid[0]) {
            x.push(t);
            y.push(fv[0] + fl * (t - grid[0]));
        }
    }

    for i in 0..n {
        x.push(grid[i]);
        y.push(op.apply(fv[i], gv[i]));

        if i + 1 < n {
            let (d0, d1) = (fv[i] - gv[i], fv[i + 1] - gv[i + 1]);
            if changes_sign(d0, d1) {
                let w = d0 / (d0 - d1);
                let t = grid[i] + (grid[i + 1] - grid[i]) * w;
                if t > grid[i]
                    && t < grid[i + 1]
                    && !same_abscissa(t, grid[i])
                    && !same_abscissa(t, grid[i + 1])
                {
                    x.push(t);
                    y.push(fv[i] + (fv[i + 1] - fv[i]) * w);
                }
            }
        }
    }

    if let Some(t) = ray_crossing(grid[n - 1], last_gap, fr - gr) {
        if t > grid[n - 1] && !same_abscissa(t, grid[n - 1]) {
            x.push(t);
            y.push(fv[n - 1] + fr * (t - grid[n - 1]));
        }
    }

    let left_slope = op.ray_slope(left_limit_order(fl, gl, first_gap), fl, gl);
    let right_slope = op.ray_slope(right_limit_order(fr, gr, last_gap), fr, gr);

    tracing::trace!(
        grid = n,
        crossings = x.len() - n,
        "merged breakpoint grids with crossings"
    );
    PiecewiseLinearFunction::from_parts(x, y, left_slope, right_slope)
}

/// Pointwise minimum of two functions.
pub fn min<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
) -> PiecewiseLinearFunction<T> {
    combine(f, g, BinaryOp::Min)
}

/// Pointwise maximum of two functions.
pub fn max<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
) -> PiecewiseLinearFunction<T> {
    combine(f, g, BinaryOp::Max)
}

fn fold<T: Real>(
    functions: &[PiecewiseLinearFunction<T>],
    op: BinaryOp<T>,
) -> Result<PiecewiseLinearFunction<T>> {
    let (first, rest) = functions.split_first().ok_or_else(|| {
        PwlError::InvalidBreakpoints("cannot reduce an empty list of functions".to_string())
    })?;
    Ok(rest
        .iter()
        .fold(first.clone(), |acc, h| combine(&acc, h, op)))
}

/// Pointwise minimum of a non-empty list of functions.
pub fn minimum<T: Real>(functions: &[PiecewiseLinearFunction<T>]) -> Result<PiecewiseLinearFunction<T>> {
    fold(functions, BinaryOp::Min)
}

/// Pointwise maximum of a non-empty list of functions.
pub fn maximum<T: Real>(functions: &[PiecewiseLinearFunction<T>]) -> Result<PiecewiseLinearFunction<T>> {
    fold(functions, BinaryOp::Max)
}

impl<T: Real> PiecewiseLinearFunction<T> {
    /// Pointwise minimum with `other`.
    pub fn min(&self, other: &Self) -> Self {
        min(self, other)
    }

    /// Pointwise maximum with `other`.
    pub fn max(&self, other: &Self) -> Self {
        max(self, other)
    }
}
