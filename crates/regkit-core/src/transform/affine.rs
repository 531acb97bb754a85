//! Affine part of a kernel transform.

use nalgebra::SMatrix;
use crate::spatial::{Point, Vector};
use super::trait_::PointTransform;

/// Affine map `T(p) = M p + t`.
///
/// Kernel transforms add this term to their landmark deformation. The matrix
/// and translation come from whoever solved the landmark system; this type
/// only evaluates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffinePart<const D: usize> {
    matrix: SMatrix<f64, D, D>, // [D, D] linear part
    translation: Vector<D>,
}

impl<const D: usize> AffinePart<D> {
    /// Create an affine part from its linear matrix and translation.
    pub fn new(matrix: SMatrix<f64, D, D>, translation: Vector<D>) -> Self {
        Self { matrix, translation }
    }

    /// The identity map.
    pub fn identity() -> Self {
        Self::new(SMatrix::identity(), Vector::zeros())
    }

    /// A pure translation.
    pub fn from_translation(translation: Vector<D>) -> Self {
        Self::new(SMatrix::identity(), translation)
    }

    /// Get the linear part.
    pub fn matrix(&self) -> &SMatrix<f64, D, D> {
        &self.matrix
    }

    /// Get the translation vector.
    pub fn translation(&self) -> &Vector<D> {
        &self.translation
    }
}

impl<const D: usize> Default for AffinePart<D> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const D: usize> PointTransform<D> for AffinePart<D> {
    fn transform_point(&self, point: &Point<D>) -> Point<D> {
        Point((self.matrix * point.0.coords + self.translation.0).into())
    }
}
