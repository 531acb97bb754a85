//! Covariant gradient of an interpolated image.

use crate::image::RealPixel;
use crate::spatial::Vector;

/// Spatial derivative of an interpolated pixel, one component per axis.
///
/// For scalar images each component is an `f64` and the gradient converts
/// into a [`Vector`]. For vector images each component is the partial
/// derivative of the whole pixel vector along that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient<V, const D: usize>(pub [V; D]);

impl<V: RealPixel, const D: usize> Gradient<V, D> {
    /// Gradient with every component zero.
    pub fn zeros() -> Self {
        Self([V::zero(); D])
    }

    /// Partial derivative along `axis`.
    pub fn component(&self, axis: usize) -> V {
        self.0[axis]
    }

    /// Build a gradient from the first `D` partial derivatives in `parts`.
    ///
    /// # Panics
    /// Panics if `parts` is shorter than `D`.
    pub(crate) fn from_parts(parts: &[V]) -> Self {
        Self(std::array::from_fn(|axis| parts[axis]))
    }
}

impl<V, const D: usize> std::ops::Index<usize> for Gradient<V, D> {
    type Output = V;

    fn index(&self, axis: usize) -> &V {
        &self.0[axis]
    }
}

impl<const D: usize> From<Gradient<f64, D>> for Vector<D> {
    fn from(gradient: Gradient<f64, D>) -> Self {
        Vector::new(gradient.0)
    }
}
