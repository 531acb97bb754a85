//! Linear interpolation with derivatives under a mirrored boundary.
//!
//! Value-only calls delegate to [`LinearInterpolator`] and its clamped
//! boundary. Combined value and derivative calls reflect the query position
//! back into the buffer on every axis and evaluate a closed-form bilinear or
//! trilinear expression over the enclosing cell. No closed form exists for
//! other dimensionalities and those calls fail with
//! [`CoreError::UnsupportedDimensionality`].

use crate::error::{CoreError, Result};
use crate::image::{ImageGrid, RealPixel};
use crate::spatial::ContinuousIndex;
use super::gradient::Gradient;
use super::linear::LinearInterpolator;
use super::trait_::{DerivativeInterpolator, Interpolator};

const VALUE_AND_DERIVATIVE: &str = "EvaluateValueAndDerivativeAtContinuousIndex";

/// Enclosing cell along one axis after mirroring.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisSample {
    lower: usize,
    upper: usize,
    /// Offset from `lower`, in `[0, 1]`.
    distance: f64,
    /// `±1 / spacing`; negative when the position was reflected an odd
    /// number of times, zero on a single-pixel axis.
    scale: f64,
}

impl AxisSample {
    /// Reflect `x` about index 0 and index `size - 1` until it lies inside
    /// the buffer, then locate its cell.
    ///
    /// The reflection is whole-sample: -1 reads index 1 and `size` reads
    /// index `size - 2`. A half-sample mapping of neighbor indices
    /// (`-1 → 0`, `size → size - 1`) would make a probe just outside the
    /// grid read the same edge pixel as clamping, so it is not used.
    fn mirrored(x: f64, size: usize, spacing: f64) -> Self {
        let last = size - 1;
        if last == 0 {
            return Self { lower: 0, upper: 0, distance: 0.0, scale: 0.0 };
        }

        let end = last as f64;
        let (xm, sign) = if (0.0..=end).contains(&x) {
            (x, 1.0)
        } else {
            let period = 2.0 * end;
            let folded = x.rem_euclid(period);
            if folded > end {
                (period - folded, -1.0)
            } else {
                (folded, 1.0)
            }
        };

        // Keep `lower + 1` in range so a position on the last index uses the
        // last full cell.
        let base = xm.floor().min(end - 1.0).max(0.0);
        let lower = base as usize;
        Self {
            lower,
            upper: lower + 1,
            distance: xm - base,
            scale: sign / spacing,
        }
    }
}

#[inline]
fn lerp<V: RealPixel>(a: V, b: V, t: f64) -> V {
    a + (b - a) * t
}

/// Linear interpolator with mirrored-boundary derivatives.
///
/// # Type Parameters
/// * `G` - The image grid being sampled
/// * `D` - The image dimensionality; derivatives are available for 2 and 3
///
/// # Examples
/// ```rust
/// use regkit_core::image::PixelBuffer;
/// use regkit_core::interpolation::{AdvancedLinearInterpolator, DerivativeInterpolator};
/// use regkit_core::spatial::{Point2, Spacing2};
///
/// // f(x, y) = 2x + 3y
/// let image = PixelBuffer::from_fn([4, 4], Spacing2::uniform(1.0), |[x, y]| {
///     2.0 * x as f64 + 3.0 * y as f64
/// })
/// .unwrap();
/// let interpolator = AdvancedLinearInterpolator::new(&image);
///
/// let (value, gradient) = interpolator
///     .evaluate_value_and_derivative_at_continuous_index(&Point2::new([1.5, 0.5]))
///     .unwrap();
/// assert!((value - 4.5).abs() < 1e-12);
/// assert!((gradient[0] - 2.0).abs() < 1e-12);
/// assert!((gradient[1] - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct AdvancedLinearInterpolator<'a, G, const D: usize> {
    base: LinearInterpolator<'a, G, D>,
}

impl<'a, G: ImageGrid<D>, const D: usize> AdvancedLinearInterpolator<'a, G, D> {
    /// Create a new interpolator over `image`.
    pub fn new(image: &'a G) -> Self {
        if !matches!(D, 2 | 3) {
            tracing::warn!(
                dimension = D,
                "value and derivative interpolation is only implemented for 2D and 3D images"
            );
        }
        Self { base: LinearInterpolator::new(image) }
    }

    /// The image being interpolated.
    pub fn image(&self) -> &'a G {
        self.base.image()
    }

    /// The value-only interpolator this one delegates to.
    pub fn base(&self) -> &LinearInterpolator<'a, G, D> {
        &self.base
    }

    fn mirrored_axes(&self, x: &ContinuousIndex<D>) -> [AxisSample; D] {
        let image = self.base.image();
        let size = image.size();
        let spacing = image.spacing();
        std::array::from_fn(|axis| AxisSample::mirrored(x[axis], size[axis], spacing[axis]))
    }

    /// Pixel at the cell corner selecting `upper` on every axis whose bit is
    /// set in `mask` (bit 0 is x).
    #[inline]
    fn corner(&self, axes: &[AxisSample], mask: usize) -> G::Pixel {
        let index = std::array::from_fn(|axis| {
            if mask & (1 << axis) != 0 {
                axes[axis].upper
            } else {
                axes[axis].lower
            }
        });
        self.base.image().pixel(index)
    }

    fn value_and_derivative_2d(
        &self,
        axes: &[AxisSample],
        ax: &AxisSample,
        ay: &AxisSample,
    ) -> (G::Pixel, [G::Pixel; 2]) {
        let v00 = self.corner(axes, 0b00);
        let v10 = self.corner(axes, 0b01);
        let v01 = self.corner(axes, 0b10);
        let v11 = self.corner(axes, 0b11);

        let (d0, d1) = (ax.distance, ay.distance);
        let cross = v11 - v01 - v10 + v00;

        let value = v00 + (v10 - v00) * d0 + (v01 - v00) * d1 + cross * (d0 * d1);
        let dx = (v10 - v00 + cross * d1) * ax.scale;
        let dy = (v01 - v00 + cross * d0) * ay.scale;
        (value, [dx, dy])
    }

    fn value_and_derivative_3d(
        &self,
        axes: &[AxisSample],
        ax: &AxisSample,
        ay: &AxisSample,
        az: &AxisSample,
    ) -> (G::Pixel, [G::Pixel; 3]) {
        let v000 = self.corner(axes, 0b000);
        let v100 = self.corner(axes, 0b001);
        let v010 = self.corner(axes, 0b010);
        let v110 = self.corner(axes, 0b011);
        let v001 = self.corner(axes, 0b100);
        let v101 = self.corner(axes, 0b101);
        let v011 = self.corner(axes, 0b110);
        let v111 = self.corner(axes, 0b111);

        let (d0, d1, d2) = (ax.distance, ay.distance, az.distance);

        // Edges along x, named by their (y, z) corner.
        let c00 = lerp(v000, v100, d0);
        let c10 = lerp(v010, v110, d0);
        let c01 = lerp(v001, v101, d0);
        let c11 = lerp(v011, v111, d0);

        // Faces at z0 and z1.
        let c0 = lerp(c00, c10, d1);
        let c1 = lerp(c01, c11, d1);

        let value = lerp(c0, c1, d2);

        let dx = lerp(
            lerp(v100 - v000, v110 - v010, d1),
            lerp(v101 - v001, v111 - v011, d1),
            d2,
        ) * ax.scale;
        let dy = lerp(c10 - c00, c11 - c01, d2) * ay.scale;
        let dz = (c1 - c0) * az.scale;
        (value, [dx, dy, dz])
    }
}

impl<G: ImageGrid<D>, const D: usize> Interpolator<D> for AdvancedLinearInterpolator<'_, G, D> {
    type Output = G::Pixel;

    fn evaluate_at_continuous_index(&self, x: &ContinuousIndex<D>) -> G::Pixel {
        self.base.evaluate_at_continuous_index(x)
    }
}

impl<G: ImageGrid<D>, const D: usize> DerivativeInterpolator<D> for AdvancedLinearInterpolator<'_, G, D> {
    fn evaluate_derivative_at_continuous_index(
        &self,
        x: &ContinuousIndex<D>,
    ) -> Result<Gradient<G::Pixel, D>> {
        self.evaluate_value_and_derivative_at_continuous_index(x)
            .map(|(_, gradient)| gradient)
    }

    fn evaluate_value_and_derivative_at_continuous_index(
        &self,
        x: &ContinuousIndex<D>,
    ) -> Result<(G::Pixel, Gradient<G::Pixel, D>)> {
        let axes = self.mirrored_axes(x);
        match axes.as_slice() {
            [ax, ay] => {
                let (value, parts) = self.value_and_derivative_2d(&axes, ax, ay);
                Ok((value, Gradient::from_parts(&parts)))
            }
            [ax, ay, az] => {
                let (value, parts) = self.value_and_derivative_3d(&axes, ax, ay, az);
                Ok((value, Gradient::from_parts(&parts)))
            }
            _ => Err(CoreError::unsupported_dimensionality(VALUE_AND_DERIVATIVE, D)),
        }
    }
}
