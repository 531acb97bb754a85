//! Pixel value types that interpolators can blend.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};
use nalgebra::SVector;

/// A real-valued pixel that can be linearly blended.
///
/// Implemented for scalar images (`f64`) and for images of fixed-length
/// vectors (`SVector<f64, C>`), e.g. displacement fields.
pub trait RealPixel:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + 'static
{
    /// Additive identity.
    fn zero() -> Self;
}

impl RealPixel for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl<const C: usize> RealPixel for SVector<f64, C> {
    #[inline]
    fn zero() -> Self {
        SVector::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blend<V: RealPixel>(a: V, b: V, t: f64) -> V {
        a + (b - a) * t
    }

    #[test]
    fn test_scalar_and_vector_blend() {
        assert_eq!(blend(2.0, 4.0, 0.25), 2.5);

        let a = SVector::<f64, 2>::new(0.0, 10.0);
        let b = SVector::<f64, 2>::new(4.0, 20.0);
        assert_eq!(blend(a, b, 0.5), SVector::<f64, 2>::new(2.0, 15.0));
        assert_eq!(<SVector<f64, 2> as RealPixel>::zero(), SVector::<f64, 2>::zeros());
    }
}
