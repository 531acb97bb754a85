//! Landmark-driven kernel spline transform.

use crate::spatial::{Point, Vector};
use super::affine::AffinePart;
use super::kernel::{GMatrix, SplineKernel, ThinPlateR2LogR};
use super::landmarks::LandmarkSet;
use super::trait_::PointTransform;

/// Kernel spline transform.
///
/// Maps a point through an affine part plus the superposition of per-landmark
/// kernel contributions:
///
/// `T(p) = A(p) + Σ_i G(p - s_i) w_i`
///
/// where `s_i` are the landmark source points and `w_i` their solved weights.
/// The landmark set is borrowed and must outlive the transform. Evaluation
/// never allocates and never mutates shared state.
///
/// # Type Parameters
/// * `K` - The kernel strategy
/// * `D` - The spatial dimensionality
#[derive(Debug, Clone)]
pub struct KernelTransform<'a, K, const D: usize> {
    kernel: K,
    landmarks: &'a LandmarkSet<D>,
    affine: AffinePart<D>,
}

/// Thin plate spline transform with the `r² log r` kernel.
pub type ThinPlateSplineTransform<'a, const D: usize> = KernelTransform<'a, ThinPlateR2LogR, D>;

impl<'a, K: SplineKernel<D>, const D: usize> KernelTransform<'a, K, D> {
    /// Create a kernel transform with an identity affine part.
    pub fn new(kernel: K, landmarks: &'a LandmarkSet<D>) -> Self {
        tracing::debug!(
            landmarks = landmarks.len(),
            dimension = D,
            "kernel transform assembled"
        );
        Self {
            kernel,
            landmarks,
            affine: AffinePart::identity(),
        }
    }

    /// Set the affine part added to the landmark deformation.
    pub fn with_affine(mut self, affine: AffinePart<D>) -> Self {
        self.affine = affine;
        self
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn landmarks(&self) -> &'a LandmarkSet<D> {
        self.landmarks
    }

    pub fn affine(&self) -> &AffinePart<D> {
        &self.affine
    }

    pub fn number_of_landmarks(&self) -> usize {
        self.landmarks.len()
    }

    /// Kernel matrix for a displacement from one landmark.
    pub fn compute_g(&self, displacement: &Vector<D>) -> GMatrix<D> {
        self.kernel.compute_g(displacement)
    }

    /// Landmark deformation at `point`, without the affine part.
    pub fn compute_deformation_contribution(&self, point: &Point<D>) -> Vector<D> {
        self.kernel.compute_deformation_contribution(point, self.landmarks)
    }
}

impl<'a, const D: usize> ThinPlateSplineTransform<'a, D> {
    /// Thin plate spline transform over `landmarks`.
    pub fn thin_plate(landmarks: &'a LandmarkSet<D>) -> Self {
        Self::new(ThinPlateR2LogR, landmarks)
    }
}

impl<K: SplineKernel<D>, const D: usize> PointTransform<D> for KernelTransform<'_, K, D> {
    fn transform_point(&self, point: &Point<D>) -> Point<D> {
        self.affine.transform_point(point) + self.compute_deformation_contribution(point)
    }
}
