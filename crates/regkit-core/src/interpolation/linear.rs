//! Linear interpolation implementation.
//!
//! Value-only multilinear interpolation for any dimensionality, with a
//! constant (clamp-to-edge) boundary condition.

use crate::image::{ImageGrid, RealPixel};
use crate::spatial::ContinuousIndex;
use super::trait_::Interpolator;

/// Linear Interpolator.
///
/// Blends the 2^D corners of the cell enclosing the query position. Neighbor
/// indices past an edge are clamped onto that edge, so positions outside the
/// buffer take the nearest edge value.
///
/// Holds a borrowed view of the image; the image must outlive the
/// interpolator and is never mutated through it.
#[derive(Debug, Clone)]
pub struct LinearInterpolator<'a, G, const D: usize> {
    image: &'a G,
}

impl<'a, G: ImageGrid<D>, const D: usize> LinearInterpolator<'a, G, D> {
    /// Create a new linear interpolator over `image`.
    pub fn new(image: &'a G) -> Self {
        Self { image }
    }

    /// The image being interpolated.
    pub fn image(&self) -> &'a G {
        self.image
    }

    /// True when `x` lies within half a pixel of the buffer on every axis.
    pub fn is_inside_buffer(&self, x: &ContinuousIndex<D>) -> bool {
        let size = self.image.size();
        (0..D).all(|axis| x[axis] >= -0.5 && x[axis] <= size[axis] as f64 - 0.5)
    }
}

impl<G: ImageGrid<D>, const D: usize> Interpolator<D> for LinearInterpolator<'_, G, D> {
    type Output = G::Pixel;

    fn evaluate_at_continuous_index(&self, x: &ContinuousIndex<D>) -> G::Pixel {
        let size = self.image.size();
        let mut lower = [0usize; D];
        let mut upper = [0usize; D];
        let mut distance = [0.0f64; D];

        for axis in 0..D {
            let last = size[axis] - 1;
            let base = x[axis].floor();
            distance[axis] = x[axis] - base;
            lower[axis] = clamp_index(base, last);
            upper[axis] = clamp_index(base + 1.0, last);
        }

        let mut value = G::Pixel::zero();
        for corner in 0..(1usize << D) {
            let mut weight = 1.0;
            let mut index = lower;
            for axis in 0..D {
                if corner & (1 << axis) != 0 {
                    index[axis] = upper[axis];
                    weight *= distance[axis];
                } else {
                    weight *= 1.0 - distance[axis];
                }
            }
            if weight != 0.0 {
                value = value + self.image.pixel(index) * weight;
            }
        }
        value
    }
}

#[inline]
fn clamp_index(i: f64, last: usize) -> usize {
    if i <= 0.0 {
        0
    } else if i >= last as f64 {
        last
    } else {
        i as usize
    }
}
