//! Floating-point capability for breakpoint coordinates.

use nalgebra::RealField;

/// Scalar type usable as a breakpoint coordinate.
///
/// Blanket-implemented for every `Copy` type implementing [`RealField`]
/// that widens losslessly to `f64`, which means `f32` and `f64`.
pub trait Real: RealField + Copy + Into<f64> {}

impl<T: RealField + Copy + Into<f64>> Real for T {}

/// Widen to `f64`, for error messages.
pub(crate) fn to_f64<T: Real>(value: T) -> f64 {
    Into::<f64>::into(value)
}

/// Whether two abscissas coincide up to machine precision.
pub(crate) fn same_abscissa<T: Real>(a: T, b: T) -> bool {
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= T::default_epsilon() * scale
}
