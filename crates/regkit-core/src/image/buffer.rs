//! Host-side pixel storage and the grid accessor used by interpolators.

use crate::error::{CoreError, Result};
use crate::spatial::Spacing;
use super::pixel::RealPixel;

/// Read-only access to an N-dimensional pixel grid.
///
/// Interpolators only need the grid extent, its physical spacing, and a
/// pixel fetch at an integral index. Boundary policy is the caller's concern:
/// `pixel` is only ever called with indices inside `[0, size - 1]`.
pub trait ImageGrid<const D: usize> {
    /// Pixel value type.
    type Pixel: RealPixel;

    /// Number of pixels along each axis, in index order (x first).
    fn size(&self) -> [usize; D];

    /// Physical distance between adjacent pixels along each axis.
    fn spacing(&self) -> &Spacing<D>;

    /// Pixel value at an in-bounds index.
    fn pixel(&self, index: [usize; D]) -> Self::Pixel;
}

/// Contiguous pixel buffer, x varying fastest.
///
/// This matches the flattening of a `[.., Z, Y, X]` tensor, so tensor images
/// read back into a buffer without reordering.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<V, const D: usize> {
    size: [usize; D],
    strides: [usize; D],
    spacing: Spacing<D>,
    pixels: Vec<V>,
}

impl<V: RealPixel, const D: usize> PixelBuffer<V, D> {
    /// Create a buffer from pixels laid out x-fastest.
    ///
    /// # Errors
    /// * `InvalidConfiguration` if `D == 0`, an axis is empty, or a spacing
    ///   component is not strictly positive.
    /// * `ShapeMismatch` if `pixels.len()` is not the product of `size`.
    pub fn new(size: [usize; D], spacing: Spacing<D>, pixels: Vec<V>) -> Result<Self> {
        let strides = Self::validate(size, &spacing)?;
        let expected: usize = size.iter().product();
        if pixels.len() != expected {
            return Err(CoreError::ShapeMismatch {
                expected: vec![expected],
                actual: vec![pixels.len()],
            });
        }
        Ok(Self { size, strides, spacing, pixels })
    }

    /// Create a buffer by evaluating `f` at every index.
    pub fn from_fn<F>(size: [usize; D], spacing: Spacing<D>, mut f: F) -> Result<Self>
    where
        F: FnMut([usize; D]) -> V,
    {
        let strides = Self::validate(size, &spacing)?;
        let count: usize = size.iter().product();
        let pixels = (0..count)
            .map(|linear| f(std::array::from_fn(|axis| (linear / strides[axis]) % size[axis])))
            .collect();
        Ok(Self { size, strides, spacing, pixels })
    }

    fn validate(size: [usize; D], spacing: &Spacing<D>) -> Result<[usize; D]> {
        if D == 0 {
            return Err(CoreError::invalid_configuration("pixel buffer needs at least one axis"));
        }
        if let Some(axis) = size.iter().position(|&n| n == 0) {
            return Err(CoreError::invalid_configuration(format!("axis {axis} has no pixels")));
        }
        if !spacing.is_positive() {
            return Err(CoreError::invalid_configuration(format!(
                "spacing must be positive, got {:?}",
                spacing.to_vec()
            )));
        }
        let mut strides = [1usize; D];
        for axis in 1..D {
            strides[axis] = strides[axis - 1] * size[axis - 1];
        }
        Ok(strides)
    }

    /// Linear offset of an index into the pixel storage.
    #[inline]
    pub fn offset(&self, index: [usize; D]) -> usize {
        index.iter().zip(self.strides.iter()).map(|(i, s)| i * s).sum()
    }

    /// All pixels, x-fastest.
    pub fn pixels(&self) -> &[V] {
        &self.pixels
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl<V: RealPixel, const D: usize> ImageGrid<D> for PixelBuffer<V, D> {
    type Pixel = V;

    fn size(&self) -> [usize; D] {
        self.size
    }

    fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    #[inline]
    fn pixel(&self, index: [usize; D]) -> V {
        self.pixels[self.offset(index)]
    }
}
