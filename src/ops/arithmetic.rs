//! Linear arithmetic and operator overloading.
//!
//! Sums and differences go through the merge engine. Scaling and shifting by
//! a constant only touch the breakpoint values and ray slopes.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::function::{PiecewiseLinearFunction, Real};

use super::merge::{combine, BinaryOp};

/// `t ↦ f(t) + g(t)`.
pub fn add<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
) -> PiecewiseLinearFunction<T> {
    combine(f, g, BinaryOp::sum())
}

/// `t ↦ f(t) - g(t)`.
pub fn sub<T: Real>(
    f: &PiecewiseLinearFunction<T>,
    g: &PiecewiseLinearFunction<T>,
) -> PiecewiseLinearFunction<T> {
    combine(f, g, BinaryOp::difference())
}

/// `t ↦ c·f(t)`.
pub fn scale<T: Real>(f: &PiecewiseLinearFunction<T>, c: T) -> PiecewiseLinearFunction<T> {
    PiecewiseLinearFunction::from_parts(
        f.x().to_vec(),
        f.y().iter().map(|&v| c * v).collect(),
        c * f.left_slope(),
        c * f.right_slope(),
    )
}

/// `t ↦ -f(t)`.
pub fn negate<T: Real>(f: &PiecewiseLinearFunction<T>) -> PiecewiseLinearFunction<T> {
    scale(f, -T::one())
}

/// `t ↦ f(t) + c`.
pub fn shift<T: Real>(f: &PiecewiseLinearFunction<T>, c: T) -> PiecewiseLinearFunction<T> {
    PiecewiseLinearFunction::from_parts(
        f.x().to_vec(),
        f.y().iter().map(|&v| v + c).collect(),
        f.left_slope(),
        f.right_slope(),
    )
}

impl<T: Real> PiecewiseLinearFunction<T> {
    /// Multiply every value by `c`.
    pub fn scale(&self, c: T) -> Self {
        scale(self, c)
    }

    /// Reflect the function about the t-axis.
    pub fn negate(&self) -> Self {
        negate(self)
    }

    /// Add the constant `c` to every value.
    pub fn shift(&self, c: T) -> Self {
        shift(self, c)
    }
}

// ============================================================================
// Operator overloading for PiecewiseLinearFunction
// ============================================================================

impl<T: Real> Neg for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn neg(self) -> Self::Output {
        negate(&self)
    }
}

impl<T: Real> Neg for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn neg(self) -> Self::Output {
        negate(self)
    }
}

impl<T: Real> Add for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn add(self, rhs: PiecewiseLinearFunction<T>) -> Self::Output {
        add(&self, &rhs)
    }
}

impl<T: Real> Add for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn add(self, rhs: &PiecewiseLinearFunction<T>) -> Self::Output {
        add(self, rhs)
    }
}

impl<T: Real> Add<&PiecewiseLinearFunction<T>> for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn add(self, rhs: &PiecewiseLinearFunction<T>) -> Self::Output {
        add(&self, rhs)
    }
}

impl<T: Real> Add<PiecewiseLinearFunction<T>> for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn add(self, rhs: PiecewiseLinearFunction<T>) -> Self::Output {
        add(self, &rhs)
    }
}

impl<T: Real> Sub for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn sub(self, rhs: PiecewiseLinearFunction<T>) -> Self::Output {
        sub(&self, &rhs)
    }
}

impl<T: Real> Sub for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn sub(self, rhs: &PiecewiseLinearFunction<T>) -> Self::Output {
        sub(self, rhs)
    }
}

impl<T: Real> Sub<&PiecewiseLinearFunction<T>> for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn sub(self, rhs: &PiecewiseLinearFunction<T>) -> Self::Output {
        sub(&self, rhs)
    }
}

impl<T: Real> Sub<PiecewiseLinearFunction<T>> for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn sub(self, rhs: PiecewiseLinearFunction<T>) -> Self::Output {
        sub(self, &rhs)
    }
}

// Scalar multiplication
impl<T: Real> Mul<T> for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn mul(self, rhs: T) -> Self::Output {
        scale(&self, rhs)
    }
}

impl<T: Real> Mul<T> for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn mul(self, rhs: T) -> Self::Output {
        scale(self, rhs)
    }
}

// Division by scalar
impl<T: Real> Div<T> for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn div(self, rhs: T) -> Self::Output {
        scale(&self, T::one() / rhs)
    }
}

impl<T: Real> Div<T> for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn div(self, rhs: T) -> Self::Output {
        scale(self, T::one() / rhs)
    }
}

// Constant offsets
impl<T: Real> Add<T> for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn add(self, rhs: T) -> Self::Output {
        shift(&self, rhs)
    }
}

impl<T: Real> Add<T> for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn add(self, rhs: T) -> Self::Output {
        shift(self, rhs)
    }
}

impl<T: Real> Sub<T> for PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn sub(self, rhs: T) -> Self::Output {
        shift(&self, -rhs)
    }
}

impl<T: Real> Sub<T> for &PiecewiseLinearFunction<T> {
    type Output = PiecewiseLinearFunction<T>;

    fn sub(self, rhs: T) -> Self::Output {
        shift(self, -rhs)
    }
}

// Scalars on the left-hand side, for the concrete float types.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<PiecewiseLinearFunction<$t>> for $t {
            type Output = PiecewiseLinearFunction<$t>;

            fn mul(self, rhs: PiecewiseLinearFunction<$t>) -> Self::Output {
                scale(&rhs, self)
            }
        }

        impl Mul<&PiecewiseLinearFunction<$t>> for $t {
            type Output = PiecewiseLinearFunction<$t>;

            fn mul(self, rhs: &PiecewiseLinearFunction<$t>) -> Self::Output {
                scale(rhs, self)
            }
        }

        impl Add<PiecewiseLinearFunction<$t>> for $t {
            type Output = PiecewiseLinearFunction<$t>;

            fn add(self, rhs: PiecewiseLinearFunction<$t>) -> Self::Output {
                shift(&rhs, self)
            }
        }

        impl Add<&PiecewiseLinearFunction<$t>> for $t {
            type Output = PiecewiseLinearFunction<$t>;

            fn add(self, rhs: &PiecewiseLinearFunction<$t>) -> Self::Output {
                shift(rhs, self)
            }
        }

        impl Sub<PiecewiseLinearFunction<$t>> for $t {
            type Output = PiecewiseLinearFunction<$t>;

            fn sub(self, rhs: PiecewiseLinearFunction<$t>) -> Self::Output {
                shift(&negate(&rhs), self)
            }
        }

        impl Sub<&PiecewiseLinearFunction<$t>> for $t {
            type Output = PiecewiseLinearFunction<$t>;

            fn sub(self, rhs: &PiecewiseLinearFunction<$t>) -> Self::Output {
                shift(&negate(rhs), self)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
