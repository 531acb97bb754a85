//! Interpolator traits for sampling values at continuous indices.

use crate::error::Result;
use crate::spatial::ContinuousIndex;
use super::gradient::Gradient;

/// Value-only interpolation at a continuous index.
///
/// # Type Parameters
/// * `D` - The image dimensionality
pub trait Interpolator<const D: usize> {
    /// Interpolated output type.
    type Output;

    /// Interpolate the image value at `x`.
    fn evaluate_at_continuous_index(&self, x: &ContinuousIndex<D>) -> Self::Output;
}

/// Interpolation that also yields the spatial derivative.
///
/// Derivatives are per physical unit along each index axis. Both methods are
/// pure: repeated calls with the same `x` give the same result or the same
/// error.
pub trait DerivativeInterpolator<const D: usize>: Interpolator<D> {
    /// Spatial derivative of the interpolant at `x`.
    fn evaluate_derivative_at_continuous_index(
        &self,
        x: &ContinuousIndex<D>,
    ) -> Result<Gradient<Self::Output, D>>;

    /// Value and spatial derivative at `x`, sharing one neighbor fetch.
    fn evaluate_value_and_derivative_at_continuous_index(
        &self,
        x: &ContinuousIndex<D>,
    ) -> Result<(Self::Output, Gradient<Self::Output, D>)>;
}
