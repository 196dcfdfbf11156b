//! Convex meet: the greatest convex function below two convex functions.
//!
//! The meet is the lower convex envelope of `min(f, g)`. Both operands are
//! convex, so the envelope is determined by their breakpoints and their
//! rays alone:
//! - the left ray has slope `max(f.left_slope, g.left_slope)`, the right ray
//!   `min(f.right_slope, g.right_slope)`;
//! - the finite part is the lower hull of both breakpoint sets, walked in
//!   order of increasing slope and trimmed where the rays take over.

use crate::error::{PwlError, Result};
use crate::function::real::to_f64;
use crate::function::{PiecewiseLinearFunction, Real};
use crate::ops::merge::merge_sorted;
use crate::settings::Settings;

use super::curvature::is_convex;

/// Breakpoints of both operands ordered by abscissa. Where both have a
/// breakpoint at the same abscissa, only the lower one is kept.
fn merged_candidates<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
) -> Vec<(T, T)> {
    let fp: Vec<(T, T)> = f.breakpoints().collect();
    let gp: Vec<(T, T)> = g.breakpoints().collect();
    merge_sorted(&fp, &gp, |p| p.0, |last, next| {
        if next.1 < last.1 {
            last.1 = next.1;
        }
    })
}

/// True if `c` lies strictly above the line through `a` and `b`.
fn turns_up<T: Real>(a: (T, T), b: (T, T), c: (T, T)) -> bool {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0) > T::zero()
}

fn slope<T: Real>(a: (T, T), b: (T, T)) -> T {
    (b.1 - a.1) / (b.0 - a.0)
}

/// Compute the convex meet of two convex functions.
///
/// The result is convex, lies at or below both `f` and `g`, and coincides
/// with `min(f, g)` at each of its breakpoints.
///
/// Fails with [`PwlError::NotConvexInput`] if either operand is not convex
/// within `settings.atol`, and with [`PwlError::UnboundedMeet`] if the
/// envelope is unbounded below.
pub fn convex_meet<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
    settings: &Settings<T>,
) -> Result<PiecewiseLinearFunction<T>> {
    let atol = settings.atol;
    if !is_convex(f, atol) {
        return Err(PwlError::NotConvexInput(
            "left operand of the convex meet has decreasing slopes".to_string(),
        ));
    }
    if !is_convex(g, atol) {
        return Err(PwlError::NotConvexInput(
            "right operand of the convex meet has decreasing slopes".to_string(),
        ));
    }

    let left_slope = f.left_slope().max(g.left_slope());
    let mut right_slope = f.right_slope().min(g.right_slope());
    if left_slope > right_slope {
        if left_slope - right_slope > atol {
            return Err(PwlError::UnboundedMeet {
                left: to_f64(left_slope),
                right: to_f64(right_slope),
            });
        }
        right_slope = left_slope;
    }

    let candidates = merged_candidates(f, g);
    let mut hull: Vec<(T, T)> = Vec::with_capacity(candidates.len());
    for p in candidates {
        while hull.len() >= 2 && !turns_up(hull[hull.len() - 2], hull[hull.len() - 1], p) {
            hull.pop();
        }
        hull.push(p);
    }

    let mut start = 0;
    while hull.len() - start >= 2 && slope(hull[start], hull[start + 1]) <= left_slope {
        start += 1;
    }
    let mut end = hull.len();
    while end - start >= 2 && slope(hull[end - 2], hull[end - 1]) >= right_slope {
        end -= 1;
    }

    tracing::debug!(
        breakpoints = end - start,
        hull = hull.len(),
        "computed convex meet"
    );

    let (x, y) = hull[start..end].iter().copied().unzip();
    Ok(PiecewiseLinearFunction::from_parts(x, y, left_slope, right_slope))
}

impl<T: Real> PiecewiseLinearFunction<T> {
    /// Convex meet with `other`, using the default tolerance.
    pub fn convex_meet(&self, other: &Self) -> Result<Self> {
        convex_meet(self, other, &Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwl(x: Vec<f64>, y: Vec<f64>, l: f64, r: f64) -> PiecewiseLinearFunction<f64> {
        PiecewiseLinearFunction::new(x, y, l, r).unwrap()
    }

    #[test]
    fn test_meet_documentation_example() {
        let f = pwl(vec![-0.5, 0.0, 0.5], vec![0.5, 0.25, 0.5], -1.0, 1.0);
        let g = pwl(vec![0.0, 0.5, 1.0], vec![0.5, 0.4, 0.5], -0.5, 2.0);
        let h = f.convex_meet(&g).unwrap();
        assert_eq!(h.x(), &[0.0, 1.0]);
        assert_eq!(h.y(), &[0.25, 0.5]);
        assert_eq!(h.left_slope(), -0.5);
        assert_eq!(h.right_slope(), 1.0);
        assert!(h.is_convex());
    }

    #[test]
    fn test_meet_bridges_two_valleys() {
        let f = pwl(vec![0.0], vec![0.0], -1.0, 1.0);
        let g = pwl(vec![2.0], vec![0.0], -1.0, 1.0);
        let h = convex_meet(&f, &g, &Settings::default()).unwrap();
        assert_eq!(h.x(), &[0.0, 2.0]);
        assert_eq!(h.y(), &[0.0, 0.0]);
        assert_eq!(h.evaluate(1.0), 0.0);
        assert_eq!(h.evaluate(-1.0), 1.0);
        assert_eq!(h.evaluate(3.0), 1.0);
    }

    #[test]
    fn test_meet_with_dominated_operand() {
        let f = pwl(vec![0.0], vec![0.0], -1.0, 1.0);
        let g = f.shift(1.0);
        let h = f.convex_meet(&g).unwrap();
        assert_eq!(h, f);
    }

    #[test]
    fn test_meet_parallel_lines() {
        let f = PiecewiseLinearFunction::affine(1.0, 0.0);
        let g = PiecewiseLinearFunction::affine(1.0, -2.0);
        let h = f.convex_meet(&g).unwrap();
        assert_eq!(h.evaluate(0.0), -2.0);
        assert_eq!(h.evaluate(4.0), 2.0);
    }

    #[test]
    fn test_meet_rejects_non_convex() {
        let concave = pwl(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0], 1.0, -1.0);
        let convex = pwl(vec![0.0], vec![0.0], -1.0, 1.0);
        assert!(matches!(
            concave.convex_meet(&convex),
            Err(PwlError::NotConvexInput(_))
        ));
        assert!(matches!(
            convex.convex_meet(&concave),
            Err(PwlError::NotConvexInput(_))
        ));
    }

    #[test]
    fn test_meet_unbounded_below() {
        let f = PiecewiseLinearFunction::affine(1.0, 0.0);
        let g = PiecewiseLinearFunction::affine(2.0, 0.0);
        assert_eq!(
            f.convex_meet(&g),
            Err(PwlError::UnboundedMeet {
                left: 2.0,
                right: 1.0
            })
        );
    }
}
