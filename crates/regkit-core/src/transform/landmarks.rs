//! Landmark correspondences and their solved weights.

use crate::error::{CoreError, Result};
use crate::spatial::{Point, Vector};

/// Ordered source/target landmark pairs with one weight vector per landmark.
///
/// The weights are produced elsewhere, by solving the kernel system over all
/// pairs, and are read-only here. Until weights are supplied every weight is
/// zero, so the landmark deformation is the identity. Duplicate source points
/// are accepted; they only affect the conditioning of that external solve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkSet<const D: usize> {
    sources: Vec<Point<D>>,
    targets: Vec<Point<D>>,
    weights: Vec<Vector<D>>,
}

impl<const D: usize> LandmarkSet<D> {
    /// Create a landmark set from paired source and target points.
    ///
    /// # Errors
    /// `DimensionMismatch` if the two lists differ in length.
    pub fn new(sources: Vec<Point<D>>, targets: Vec<Point<D>>) -> Result<Self> {
        if sources.len() != targets.len() {
            return Err(CoreError::dimension_mismatch(format!(
                "{} source landmarks but {} target landmarks",
                sources.len(),
                targets.len()
            )));
        }
        let weights = vec![Vector::zeros(); sources.len()];
        Ok(Self { sources, targets, weights })
    }

    /// A set with no landmarks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach solved weight vectors, one per landmark in order.
    ///
    /// # Errors
    /// `DimensionMismatch` if the weight count differs from the landmark count.
    pub fn with_weights(mut self, weights: Vec<Vector<D>>) -> Result<Self> {
        if weights.len() != self.sources.len() {
            return Err(CoreError::dimension_mismatch(format!(
                "{} weights for {} landmarks",
                weights.len(),
                self.sources.len()
            )));
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn sources(&self) -> &[Point<D>] {
        &self.sources
    }

    pub fn targets(&self) -> &[Point<D>] {
        &self.targets
    }

    pub fn weights(&self) -> &[Vector<D>] {
        &self.weights
    }

    /// Number of landmark pairs.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source points paired with their weights, in landmark order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point<D>, &Vector<D>)> + '_ {
        self.sources.iter().zip(self.weights.iter())
    }

    /// Target minus source for every landmark.
    pub fn displacements(&self) -> impl Iterator<Item = Vector<D>> + '_ {
        self.sources.iter().zip(self.targets.iter()).map(|(s, t)| *t - *s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> LandmarkSet<2> {
        LandmarkSet::new(
            vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])],
            vec![Point::new([2.0, 3.0]), Point::new([3.0, 3.0])],
        )
        .unwrap()
    }

    #[test]
    fn test_new_defaults_to_zero_weights() {
        let set = pairs();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(set.weights().iter().all(|w| *w == Vector::zeros()));
        let d: Vec<_> = set.displacements().collect();
        assert_eq!(d, vec![Vector::new([2.0, 3.0]); 2]);
    }

    #[test]
    fn test_length_mismatch() {
        let err = LandmarkSet::new(vec![Point::new([0.0, 0.0])], vec![]).unwrap_err();
        assert!(matches!(err, CoreError::DimensionMismatch(_)));

        let err = pairs().with_weights(vec![Vector::zeros()]).unwrap_err();
        assert_eq!(err.to_string(), "Dimension mismatch: 1 weights for 2 landmarks");
    }

    #[test]
    fn test_iter_pairs_sources_with_weights() {
        let set = pairs()
            .with_weights(vec![Vector::new([1.0, 0.0]), Vector::new([0.0, 1.0])])
            .unwrap();
        let collected: Vec<_> = set.iter().map(|(s, w)| (s[0], w[1])).collect();
        assert_eq!(collected, vec![(0.0, 0.0), (1.0, 1.0)]);
        assert!(LandmarkSet::<3>::empty().is_empty());
    }
}
