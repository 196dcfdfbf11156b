//! The piecewise-linear function value type.
//!
//! A `PiecewiseLinearFunction` is a continuous function on the whole real
//! line, described by a strictly increasing list of breakpoints and the
//! slopes of the two rays extending past the first and last breakpoint.
//! Instances are immutable: every operation returns a new function.

use crate::error::{PwlError, Result};

use super::real::{to_f64, Real};

/// A continuous piecewise-linear function of one real variable.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinearFunction<T: Real> {
    x: Vec<T>,
    y: Vec<T>,
    left_slope: T,
    right_slope: T,
}

impl<T: Real> PiecewiseLinearFunction<T> {
    /// Create a function from its breakpoints and extrapolation slopes.
    ///
    /// Fails with [`PwlError::InvalidBreakpoints`] if `x` and `y` differ in
    /// length, are empty, or `x` is not strictly increasing.
    pub fn new(x: Vec<T>, y: Vec<T>, left_slope: T, right_slope: T) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PwlError::InvalidBreakpoints(format!(
                "x and y must have the same length, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(PwlError::InvalidBreakpoints(
                "at least one breakpoint is required".to_string(),
            ));
        }
        if let Some(i) = x.windows(2).position(|w| !(w[0] < w[1])) {
            return Err(PwlError::InvalidBreakpoints(format!(
                "x must be strictly increasing, but x[{}] = {} is followed by x[{}] = {}",
                i,
                to_f64(x[i]),
                i + 1,
                to_f64(x[i + 1])
            )));
        }
        Ok(PiecewiseLinearFunction {
            x,
            y,
            left_slope,
            right_slope,
        })
    }

    /// Create a function from `(x, y)` pairs.
    pub fn from_points<I>(points: I, left_slope: T, right_slope: T) -> Result<Self>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let (x, y) = points.into_iter().unzip();
        Self::new(x, y, left_slope, right_slope)
    }

    /// The constant function `t ↦ value`.
    pub fn constant(value: T) -> Self {
        Self::from_parts(vec![T::zero()], vec![value], T::zero(), T::zero())
    }

    /// The affine function `t ↦ slope·t + intercept`.
    pub fn affine(slope: T, intercept: T) -> Self {
        Self::from_parts(vec![T::zero()], vec![intercept], slope, slope)
    }

    /// Assemble a function whose invariants the caller already guarantees.
    pub(crate) fn from_parts(x: Vec<T>, y: Vec<T>, left_slope: T, right_slope: T) -> Self {
        debug_assert_eq!(x.len(), y.len());
        debug_assert!(!x.is_empty());
        debug_assert!(x.windows(2).all(|w| w[0] < w[1]));
        PiecewiseLinearFunction {
            x,
            y,
            left_slope,
            right_slope,
        }
    }

    /// Breakpoint abscissas.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Breakpoint ordinates.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Slope of the ray left of the first breakpoint.
    pub fn left_slope(&self) -> T {
        self.left_slope
    }

    /// Slope of the ray right of the last breakpoint.
    pub fn right_slope(&self) -> T {
        self.right_slope
    }

    /// Number of breakpoints (always at least one).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the `(x, y)` breakpoints from left to right.
    pub fn breakpoints(&self) -> impl ExactSizeIterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Decompose into `(x, y, left_slope, right_slope)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, T, T) {
        (self.x, self.y, self.left_slope, self.right_slope)
    }

    /// Evaluate the function at `t`.
    ///
    /// Exact at breakpoints: `f.evaluate(f.x()[i]) == f.y()[i]`.
    pub fn evaluate(&self, t: T) -> T {
        self.value_on_segment(self.segment_index(t), t)
    }

    /// Borrow the function as a closure.
    pub fn as_fn(&self) -> impl Fn(T) -> T + '_ {
        move |t| self.evaluate(t)
    }

    /// Slopes of the n - 1 interior segments, from left to right.
    pub fn slopes(&self) -> Vec<T> {
        (0..self.x.len() - 1).map(|i| self.segment_slope(i)).collect()
    }

    /// Interior slopes bracketed by the left and right ray slopes (n + 1 values).
    pub fn extended_slopes(&self) -> Vec<T> {
        let mut slopes = Vec::with_capacity(self.x.len() + 1);
        slopes.push(self.left_slope);
        slopes.extend((0..self.x.len() - 1).map(|i| self.segment_slope(i)));
        slopes.push(self.right_slope);
        slopes
    }

    /// Slope of the segment between breakpoints `i` and `i + 1`.
    pub(crate) fn segment_slope(&self, i: usize) -> T {
        (self.y[i + 1] - self.y[i]) / (self.x[i + 1] - self.x[i])
    }

    /// Index of the last breakpoint not greater than `t`, or 0 left of the domain.
    pub(crate) fn segment_index(&self, t: T) -> usize {
        self.x.partition_point(|&xi| xi <= t).saturating_sub(1)
    }

    /// Value at `t`, given that `t` lies on the segment starting at breakpoint `k`
    /// (or on a ray when `k` is the first/last index).
    pub(crate) fn value_on_segment(&self, k: usize, t: T) -> T {
        let last = self.x.len() - 1;
        if k == 0 && t < self.x[0] {
            self.y[0] + self.left_slope * (t - self.x[0])
        } else if k >= last {
            self.y[last] + self.right_slope * (t - self.x[last])
        } else if t == self.x[k] {
            self.y[k]
        } else {
            self.y[k] + self.segment_slope(k) * (t - self.x[k])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> PiecewiseLinearFunction<f64> {
        PiecewiseLinearFunction::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 1.0], -1.0, 0.5).unwrap()
    }

    #[test]
    fn test_new_rejects_decreasing_x() {
        let err = PiecewiseLinearFunction::new(vec![1.0, 0.5], vec![0.0, 0.0], 0.0, 0.0);
        assert!(matches!(err, Err(PwlError::InvalidBreakpoints(_))));
    }

    #[test]
    fn test_new_rejects_duplicate_x() {
        let err = PiecewiseLinearFunction::new(vec![0.0, 1.0, 1.0], vec![0.0; 3], 0.0, 0.0);
        assert!(matches!(err, Err(PwlError::InvalidBreakpoints(_))));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = PiecewiseLinearFunction::new(vec![0.0, 1.0], vec![0.0], 0.0, 0.0);
        assert!(matches!(err, Err(PwlError::InvalidBreakpoints(_))));
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = PiecewiseLinearFunction::<f64>::new(vec![], vec![], 0.0, 0.0);
        assert!(matches!(err, Err(PwlError::InvalidBreakpoints(_))));
    }

    #[test]
    fn test_new_rejects_nan_abscissa() {
        let err = PiecewiseLinearFunction::new(vec![0.0, f64::NAN], vec![0.0, 0.0], 0.0, 0.0);
        assert!(err.is_err());
    }

    #[test]
    fn test_evaluate_interior_and_rays() {
        let f = example();
        assert_eq!(f.evaluate(0.5), 1.0);
        assert_eq!(f.evaluate(1.5), 1.5);
        assert_eq!(f.evaluate(-1.0), 1.0);
        assert_eq!(f.evaluate(3.0), 1.5);
    }

    #[test]
    fn test_evaluate_exact_at_breakpoints() {
        let f = PiecewiseLinearFunction::new(
            vec![0.1, 0.7, 1.3, 2.9],
            vec![0.3, -1.1, 2.7, 0.2],
            0.4,
            -3.0,
        )
        .unwrap();
        for (xi, yi) in f.breakpoints() {
            assert_eq!(f.evaluate(xi), yi);
        }
    }

    #[test]
    fn test_single_breakpoint() {
        let f = PiecewiseLinearFunction::new(vec![1.0], vec![2.0], -1.0, 3.0).unwrap();
        assert_eq!(f.evaluate(1.0), 2.0);
        assert_eq!(f.evaluate(0.0), 3.0);
        assert_eq!(f.evaluate(2.0), 5.0);
        assert!(f.slopes().is_empty());
        assert_eq!(f.extended_slopes(), vec![-1.0, 3.0]);
    }

    #[test]
    fn test_slopes() {
        let f = example();
        assert_eq!(f.slopes(), vec![2.0, -1.0]);
        assert_eq!(f.extended_slopes(), vec![-1.0, 2.0, -1.0, 0.5]);
    }

    #[test]
    fn test_constant_and_affine() {
        let c = PiecewiseLinearFunction::constant(4.0_f32);
        assert_eq!(c.evaluate(-100.0), 4.0);
        assert_eq!(c.evaluate(100.0), 4.0);

        let a = PiecewiseLinearFunction::affine(2.0, -1.0);
        assert_eq!(a.evaluate(3.0), 5.0);
        assert_eq!(a.evaluate(-3.0), -7.0);
    }

    #[test]
    fn test_from_points() {
        let f = PiecewiseLinearFunction::from_points([(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)], -1.0, 0.5)
            .unwrap();
        assert_eq!(f, example());
    }

    #[test]
    fn test_as_fn() {
        let f = example();
        let call = f.as_fn();
        assert_eq!(call(0.5), 1.0);
    }
}
