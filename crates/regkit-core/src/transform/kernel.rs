//! Radial spline kernels for landmark-driven transforms.
//!
//! A kernel maps the displacement between a query point and one landmark to
//! a D×D matrix (the G matrix) that scales that landmark's weight vector.

use nalgebra::SMatrix;
use crate::spatial::{Point, Vector};
use super::landmarks::LandmarkSet;

/// Per-landmark kernel matrix.
pub type GMatrix<const D: usize> = SMatrix<f64, D, D>;

/// Displacement norms below this are treated as zero by
/// [`ThinPlateR2LogR`], where `r² log r` has already vanished to within
/// rounding.
pub const KERNEL_EPSILON: f64 = 1e-8;

/// Kernel evaluation strategy for a kernel transform.
pub trait SplineKernel<const D: usize> {
    /// Kernel matrix for the displacement `x` = query point minus landmark.
    fn compute_g(&self, x: &Vector<D>) -> GMatrix<D>;

    /// Sum of `G(point - source_i) * weight_i` over every landmark.
    ///
    /// The default evaluates the full matrix per landmark. Kernels whose G is
    /// a scalar multiple of the identity should override this with a scalar
    /// loop. An empty landmark set gives the zero vector.
    fn compute_deformation_contribution(&self, point: &Point<D>, landmarks: &LandmarkSet<D>) -> Vector<D> {
        let mut result = Vector::zeros();
        for (source, weight) in landmarks.iter() {
            let g = self.compute_g(&(*point - *source));
            result.0 += g * weight.0;
        }
        result
    }
}

/// Thin plate spline kernel `G(x) = r² log(r) · I` with `r = ‖x‖`.
///
/// At `r = 0` the kernel takes its limit value, the exact zero matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThinPlateR2LogR;

impl ThinPlateR2LogR {
    /// Scalar kernel `r² log r`, zero for `r < KERNEL_EPSILON`.
    #[inline]
    pub fn kernel(r: f64) -> f64 {
        Self::kernel_from_squared(r * r)
    }

    /// Scalar kernel from the squared norm, `½ r² log r²`.
    #[inline]
    pub fn kernel_from_squared(r2: f64) -> f64 {
        if r2 < KERNEL_EPSILON * KERNEL_EPSILON {
            0.0
        } else {
            0.5 * r2 * r2.ln()
        }
    }
}

impl<const D: usize> SplineKernel<D> for ThinPlateR2LogR {
    fn compute_g(&self, x: &Vector<D>) -> GMatrix<D> {
        let r2 = x.norm_squared();
        if r2 < KERNEL_EPSILON * KERNEL_EPSILON {
            return GMatrix::zeros();
        }
        GMatrix::identity() * Self::kernel_from_squared(r2)
    }

    /// G is diagonal, so each landmark contributes `k(r) * weight`.
    #[inline]
    fn compute_deformation_contribution(&self, point: &Point<D>, landmarks: &LandmarkSet<D>) -> Vector<D> {
        let mut result = Vector::zeros();
        for (source, weight) in landmarks.iter() {
            let k = Self::kernel_from_squared((*point - *source).norm_squared());
            result.0 += weight.0 * k;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Kernel with the same G as ThinPlateR2LogR but the general
    /// matrix-times-weight accumulation.
    struct MatrixPath;

    impl<const D: usize> SplineKernel<D> for MatrixPath {
        fn compute_g(&self, x: &Vector<D>) -> GMatrix<D> {
            ThinPlateR2LogR.compute_g(x)
        }
    }

    #[test]
    fn test_kernel_values() {
        assert_eq!(ThinPlateR2LogR::kernel(0.0), 0.0);
        assert_eq!(ThinPlateR2LogR::kernel(1.0), 0.0);
        let e = std::f64::consts::E;
        assert!((ThinPlateR2LogR::kernel(e) - e * e).abs() < 1e-12);
        assert!(ThinPlateR2LogR::kernel(0.5) < 0.0);
    }

    #[test]
    fn test_kernel_from_squared_matches_radius_form() {
        for r in [1e-4, 0.3, 1.0, 2.5, 17.0, 1e3] {
            let direct = r * r * f64::ln(r);
            let k = ThinPlateR2LogR::kernel_from_squared(r * r);
            assert!((k - direct).abs() <= 1e-12 * direct.abs().max(1.0), "r = {}: {} vs {}", r, k, direct);
        }
        assert_eq!(ThinPlateR2LogR::kernel_from_squared(1e-17), 0.0);
        assert_eq!(ThinPlateR2LogR::kernel_from_squared(0.0), 0.0);
    }

    #[test]
    fn test_compute_g_zero_displacement_is_exact_zero() {
        let g2: GMatrix<2> = ThinPlateR2LogR.compute_g(&Vector::zeros());
        assert_eq!(g2, GMatrix::<2>::zeros());
        let g3: GMatrix<3> = ThinPlateR2LogR.compute_g(&Vector::new([1e-12, 0.0, -1e-12]));
        assert_eq!(g3, GMatrix::<3>::zeros());
    }

    #[test]
    fn test_compute_g_is_scaled_identity() {
        let g: GMatrix<3> = ThinPlateR2LogR.compute_g(&Vector::new([0.0, 3.0, 4.0]));
        let k = 25.0 * 5.0f64.ln();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { k } else { 0.0 };
                assert!((g[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_fast_path_matches_matrix_path() {
        let landmarks = LandmarkSet::new(
            vec![Point::new([0.0, 0.0]), Point::new([2.0, 1.0]), Point::new([-1.0, 3.0])],
            vec![Point::new([0.0, 0.0]); 3],
        )
        .unwrap()
        .with_weights(vec![
            Vector::new([0.5, -0.25]),
            Vector::new([-1.0, 2.0]),
            Vector::new([0.125, 0.75]),
        ])
        .unwrap();

        for query in [Point::new([0.3, 0.4]), Point::new([2.0, 1.0]), Point::new([-5.0, 7.5])] {
            let fast = ThinPlateR2LogR.compute_deformation_contribution(&query, &landmarks);
            let general = MatrixPath.compute_deformation_contribution(&query, &landmarks);
            assert!((fast - general).norm() < 1e-12);
        }
    }

    #[test]
    fn test_empty_landmarks_give_zero() {
        let landmarks = LandmarkSet::<3>::empty();
        let c = ThinPlateR2LogR.compute_deformation_contribution(&Point::new([1.0, 2.0, 3.0]), &landmarks);
        assert_eq!(c, Vector::zeros());
        let c = MatrixPath.compute_deformation_contribution(&Point::new([1.0, 2.0, 3.0]), &landmarks);
        assert_eq!(c, Vector::zeros());
    }
}
