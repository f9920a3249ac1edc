use std::fmt::{Debug, Display};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;

/// Floating-point coordinate type for every value in the toolkit.
///
/// Implemented for `f32` and `f64`. Each implementation fixes the absolute
/// tolerance used by near-zero tests and default approximate comparisons;
/// single precision gets a looser tolerance than double.
pub trait Scalar: Float + AbsDiffEq<Epsilon = Self> + RelativeEq + Debug + Display {
    /// Absolute tolerance for near-zero tests and approximate comparisons.
    const EPS: Self;

    /// Returns `true` when `self` lies within [`Self::EPS`] of zero.
    #[must_use]
    fn near_zero(self) -> bool {
        self.abs() < Self::EPS
    }
}

impl Scalar for f32 {
    const EPS: Self = 1e-5;
}

impl Scalar for f64 {
    const EPS: Self = 1e-10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_respects_precision() {
        assert!(1e-12_f64.near_zero());
        assert!(!1e-8_f64.near_zero());
        assert!(1e-7_f32.near_zero());
        assert!(!1e-3_f32.near_zero());
    }

    #[test]
    fn negative_values_use_magnitude() {
        assert!((-1e-12_f64).near_zero());
        assert!(!(-0.5_f64).near_zero());
    }
}
