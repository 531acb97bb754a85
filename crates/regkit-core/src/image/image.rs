//! Tensor-backed image with physical metadata.
//!
//! The Image struct pairs a burn tensor with origin, spacing and direction,
//! and can be read back into a host [`PixelBuffer`] for per-sample
//! interpolation.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use crate::error::{CoreError, Result};
use crate::spatial::{ContinuousIndex, Direction, Point, Spacing, Vector};
use super::buffer::PixelBuffer;

/// Image with physical metadata.
///
/// # Type Parameters
/// * `B` - The backend (CPU or GPU) holding the pixel tensor
/// * `D` - The dimensionality of the image
///
/// # Layout
/// The tensor is stored `[.., Z, Y, X]`, so index axis 0 (x) is the last
/// tensor dimension. Spacing, origin and direction are given in index order.
///
/// # Examples
/// ```rust
/// use regkit_core::Image;
/// use regkit_core::spatial::{Direction2, Point2, Spacing2};
/// use burn::tensor::Tensor;
/// use burn_ndarray::NdArray;
///
/// type Backend = NdArray<f32>;
///
/// let device = Default::default();
/// let data = Tensor::<Backend, 2>::zeros([4, 8], &device);
/// let image = Image::new(data, Point2::origin(), Spacing2::uniform(1.0), Direction2::identity());
/// assert_eq!(image.size(), [8, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Image<B: Backend, const D: usize> {
    data: Tensor<B, D>,
    origin: Point<D>,
    spacing: Spacing<D>,
    direction: Direction<D>,
}

impl<B: Backend, const D: usize> Image<B, D> {
    /// Create a new image with the given data and metadata.
    pub fn new(
        data: Tensor<B, D>,
        origin: Point<D>,
        spacing: Spacing<D>,
        direction: Direction<D>,
    ) -> Self {
        Self {
            data,
            origin,
            spacing,
            direction,
        }
    }

    /// Get the image data tensor.
    pub fn data(&self) -> &Tensor<B, D> {
        &self.data
    }

    /// Get the origin (physical coordinate of first pixel).
    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Get the spacing (physical distance between pixels).
    pub fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    /// Get the direction (orientation matrix).
    pub fn direction(&self) -> &Direction<D> {
        &self.direction
    }

    /// Tensor shape, `[.., Z, Y, X]`.
    pub fn shape(&self) -> [usize; D] {
        self.data.dims()
    }

    /// Number of pixels along each index axis (x first).
    pub fn size(&self) -> [usize; D] {
        let dims = self.data.dims();
        std::array::from_fn(|axis| dims[D - 1 - axis])
    }

    /// Convert a physical point to a continuous index.
    ///
    /// `index = (Direction^-1 * (point - origin)) / spacing`
    ///
    /// # Errors
    /// `InvalidConfiguration` if the direction matrix is singular.
    pub fn transform_physical_point_to_continuous_index(
        &self,
        point: &Point<D>,
    ) -> Result<ContinuousIndex<D>> {
        let inv_dir = self.direction.try_inverse().ok_or_else(|| {
            CoreError::invalid_configuration("direction matrix must be invertible")
        })?;
        let rotated = inv_dir * (*point - self.origin);

        let mut index = ContinuousIndex::<D>::origin();
        for axis in 0..D {
            index[axis] = rotated[axis] / self.spacing[axis];
        }
        Ok(index)
    }

    /// Convert a continuous index to a physical point.
    ///
    /// `point = origin + Direction * (index * spacing)`
    pub fn transform_continuous_index_to_physical_point(&self, index: &ContinuousIndex<D>) -> Point<D> {
        let mut scaled = Vector::<D>::zeros();
        for axis in 0..D {
            scaled[axis] = index[axis] * self.spacing[axis];
        }
        self.origin + self.direction * scaled
    }

    /// Read the tensor back to the host as a scalar pixel buffer.
    ///
    /// The buffer keeps this image's spacing, so derivatives computed from it
    /// are per physical unit along each index axis.
    pub fn to_pixel_buffer(&self) -> Result<PixelBuffer<f64, D>> {
        let pixels: Vec<f64> = self.data.clone().into_data().iter::<f64>().collect();
        PixelBuffer::new(self.size(), self.spacing, pixels)
    }
}
