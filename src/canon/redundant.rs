//! Removal of redundant (collinear) breakpoints.

use crate::function::{PiecewiseLinearFunction, Real};
use crate::settings::Settings;

fn slope<T: Real>(x0: T, y0: T, x1: T, y1: T) -> T {
    (y1 - y0) / (x1 - x0)
}

/// Remove breakpoints at which the slope does not change by more than `atol`.
///
/// Interior breakpoints are dropped when the slopes on both sides agree.
/// The first and last breakpoints are absorbed into the extrapolation rays
/// when the adjacent segment continues the ray. At least one breakpoint is
/// always kept, and applying the function twice yields the same result as
/// applying it once.
pub fn remove_redundant_breakpoints<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    atol: T,
) -> PiecewiseLinearFunction<T> {
    let (left, right) = (f.left_slope(), f.right_slope());
    let mut xs: Vec<T> = Vec::with_capacity(f.len());
    let mut ys: Vec<T> = Vec::with_capacity(f.len());

    for (x, y) in f.breakpoints() {
        loop {
            let k = xs.len();
            let redundant = if k >= 2 {
                let before = slope(xs[k - 2], ys[k - 2], xs[k - 1], ys[k - 1]);
                let after = slope(xs[k - 1], ys[k - 1], x, y);
                (before - after).abs() <= atol
            } else if k == 1 {
                (left - slope(xs[0], ys[0], x, y)).abs() <= atol
            } else {
                false
            };
            if !redundant {
                break;
            }
            xs.pop();
            ys.pop();
        }
        xs.push(x);
        ys.push(y);
    }

    while xs.len() >= 2 {
        let k = xs.len();
        if (slope(xs[k - 2], ys[k - 2], xs[k - 1], ys[k - 1]) - right).abs() > atol {
            break;
        }
        xs.pop();
        ys.pop();
    }

    tracing::trace!(
        before = f.len(),
        after = xs.len(),
        "removed redundant breakpoints"
    );
    PiecewiseLinearFunction::from_parts(xs, ys, left, right)
}

impl<T: Real> PiecewiseLinearFunction<T> {
    /// Remove redundant breakpoints using the default tolerance.
    pub fn canonicalize(&self) -> Self {
        remove_redundant_breakpoints(self, Settings::default().atol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOL: f64 = 1e-9;

    #[test]
    fn test_removes_interior_collinear_point() {
        let f = PiecewiseLinearFunction::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 0.0], 0.0, 0.0)
            .unwrap();
        let h = remove_redundant_breakpoints(&f, ATOL);
        assert_eq!(h.x(), &[0.0, 2.0, 3.0]);
        assert_eq!(h.y(), &[0.0, 2.0, 0.0]);
    }

    #[test]
    fn test_absorbs_boundary_points_into_rays() {
        let f = PiecewiseLinearFunction::new(
            vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0, 2.0],
            -1.0,
            1.0,
        )
        .unwrap();
        let h = remove_redundant_breakpoints(&f, ATOL);
        assert_eq!(h.x(), &[0.0]);
        assert_eq!(h.y(), &[0.0]);
        assert_eq!(h.left_slope(), -1.0);
        assert_eq!(h.right_slope(), 1.0);
    }

    #[test]
    fn test_affine_keeps_one_point() {
        let f = PiecewiseLinearFunction::new(vec![0.0_f64, 1.0, 2.0], vec![1.0, 3.0, 5.0], 2.0, 2.0)
            .unwrap();
        let h = f.canonicalize();
        assert_eq!(h.len(), 1);
        for t in [-4.0, 0.5, 7.0] {
            assert!((h.evaluate(t) - f.evaluate(t)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_keeps_real_kinks() {
        let f = PiecewiseLinearFunction::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 1.0], -1.0, 0.5)
            .unwrap();
        assert_eq!(f.canonicalize(), f);
    }

    #[test]
    fn test_tolerance_controls_removal() {
        let f = PiecewiseLinearFunction::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.001], 0.0, 0.0)
            .unwrap();
        assert_eq!(remove_redundant_breakpoints(&f, ATOL).len(), 3);
        assert_eq!(remove_redundant_breakpoints(&f, 1e-2).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let f = PiecewiseLinearFunction::new(
            vec![0.0, 0.5, 1.0, 1.5, 2.0, 3.0],
            vec![0.0, 0.5, 1.0, 0.0, -1.0, -1.0],
            1.0,
            0.0,
        )
        .unwrap();
        let once = remove_redundant_breakpoints(&f, ATOL);
        let twice = remove_redundant_breakpoints(&once, ATOL);
        assert_eq!(once, twice);
        assert_eq!(once.x(), &[1.0, 2.0]);
    }
}
