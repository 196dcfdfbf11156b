//! Curvature of piecewise-linear functions.
//!
//! A piecewise-linear function is convex exactly when its extended slope
//! sequence (left ray, segments, right ray) is non-decreasing.

use crate::function::{PiecewiseLinearFunction, Real};
use crate::settings::Settings;

/// Curvature of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curvature {
    /// Affine function (both convex and concave).
    Affine,
    /// Convex function.
    Convex,
    /// Concave function.
    Concave,
    /// Neither convex nor concave.
    Unknown,
}

impl Curvature {
    /// Check if the curvature is convex (affine or convex).
    pub fn is_convex(self) -> bool {
        matches!(self, Curvature::Affine | Curvature::Convex)
    }

    /// Check if the curvature is concave (affine or concave).
    pub fn is_concave(self) -> bool {
        matches!(self, Curvature::Affine | Curvature::Concave)
    }

    /// Check if the curvature is affine.
    pub fn is_affine(self) -> bool {
        matches!(self, Curvature::Affine)
    }
}

/// Check if `f` is convex: slopes never decrease by more than `atol`.
pub fn is_convex<T: Real>(f: &PiecewiseLinearFunction<T>, atol: T) -> bool {
    f.extended_slopes().windows(2).all(|w| w[1] >= w[0] - atol)
}

/// Check if `f` is concave: slopes never increase by more than `atol`.
pub fn is_concave<T: Real>(f: &PiecewiseLinearFunction<T>, atol: T) -> bool {
    f.extended_slopes().windows(2).all(|w| w[1] <= w[0] + atol)
}

/// Classify the curvature of `f`.
pub fn curvature<T: Real>(f: &PiecewiseLinearFunction<T>, atol: T) -> Curvature {
    match (is_convex(f, atol), is_concave(f, atol)) {
        (true, true) => Curvature::Affine,
        (true, false) => Curvature::Convex,
        (false, true) => Curvature::Concave,
        (false, false) => Curvature::Unknown,
    }
}

impl<T: Real> PiecewiseLinearFunction<T> {
    /// Check convexity with the default tolerance.
    pub fn is_convex(&self) -> bool {
        is_convex(self, Settings::default().atol)
    }

    /// Check concavity with the default tolerance.
    pub fn is_concave(&self) -> bool {
        is_concave(self, Settings::default().atol)
    }

    /// Classify the curvature with the default tolerance.
    pub fn curvature(&self) -> Curvature {
        curvature(self, Settings::default().atol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwl(y: Vec<f64>, l: f64, r: f64) -> PiecewiseLinearFunction<f64> {
        PiecewiseLinearFunction::new(vec![0.0, 1.0, 2.0], y, l, r).unwrap()
    }

    #[test]
    fn test_curvature_basics() {
        assert!(Curvature::Affine.is_convex());
        assert!(Curvature::Affine.is_concave());
        assert!(Curvature::Affine.is_affine());

        assert!(Curvature::Convex.is_convex());
        assert!(!Curvature::Convex.is_concave());
        assert!(!Curvature::Convex.is_affine());

        assert!(!Curvature::Concave.is_convex());
        assert!(Curvature::Concave.is_concave());

        assert!(!Curvature::Unknown.is_convex());
        assert!(!Curvature::Unknown.is_concave());
    }

    #[test]
    fn test_is_convex_interior_slopes() {
        // Slopes 1, -1: decreasing.
        assert!(!pwl(vec![0.0, 1.0, 0.0], 1.0, -1.0).is_convex());
        // Slopes -1, 1: non-decreasing.
        assert!(pwl(vec![1.0, 0.0, 1.0], -1.0, 1.0).is_convex());
    }

    #[test]
    fn test_is_convex_checks_rays() {
        assert!(!pwl(vec![1.0, 0.0, 1.0], 0.0, 1.0).is_convex());
        assert!(!pwl(vec![1.0, 0.0, 1.0], -1.0, 0.5).is_convex());
        assert!(pwl(vec![1.0, 0.0, 1.0], -5.0, 5.0).is_convex());
    }

    #[test]
    fn test_is_convex_tolerance() {
        let f = pwl(vec![0.0, 1.0, 2.0 - 1e-12], 1.0, 1.0);
        assert!(f.is_convex());
        assert!(!is_convex(&f, 0.0));
    }

    #[test]
    fn test_curvature_classification() {
        assert_eq!(pwl(vec![0.0, 1.0, 2.0], 1.0, 1.0).curvature(), Curvature::Affine);
        assert_eq!(pwl(vec![1.0, 0.0, 1.0], -1.0, 1.0).curvature(), Curvature::Convex);
        assert_eq!(pwl(vec![0.0, 1.0, 0.0], 1.0, -1.0).curvature(), Curvature::Concave);
        assert_eq!(pwl(vec![0.0, 1.0, 0.0], -1.0, -1.0).curvature(), Curvature::Unknown);
    }

    #[test]
    fn test_neg_flips_curvature() {
        let f = pwl(vec![1.0, 0.0, 1.0], -1.0, 1.0);
        assert_eq!(f.curvature(), Curvature::Convex);
        assert_eq!((-&f).curvature(), Curvature::Concave);

        let g = pwl(vec![0.0, 1.0, 0.0], -1.0, -1.0);
        assert_eq!((-&g).curvature(), Curvature::Unknown);
        let line = pwl(vec![0.0, 1.0, 2.0], 1.0, 1.0);
        assert_eq!((-&line).curvature(), Curvature::Affine);
    }
}
