//! Transform traits for spatial coordinate transformations.
//!
//! [`PointTransform`] maps one physical point at a time on the host.
//! [`Transform`] is the batched tensor contract used by resamplers. Every
//! point transform gets the batched form for free.

use burn::tensor::backend::Backend;
use burn::tensor::{Shape, Tensor, TensorData};
use crate::spatial::Point;

/// Maps single points from one physical space to another.
///
/// Implementations are pure and hold only immutable state, so one instance
/// can serve many threads evaluating disjoint points.
pub trait PointTransform<const D: usize> {
    /// Transform one point.
    fn transform_point(&self, point: &Point<D>) -> Point<D>;
}

/// Transform trait for batches of points stored in tensors.
///
/// # Type Parameters
/// * `B` - The Burn backend
/// * `D` - The spatial dimensionality
pub trait Transform<B: Backend, const D: usize> {
    /// Apply transform to a batch of points.
    ///
    /// # Arguments
    /// * `points` - Tensor of shape `[Batch, D]` containing the input points
    ///
    /// # Returns
    /// Tensor of shape `[Batch, D]` containing the transformed points
    fn transform_points(&self, points: Tensor<B, 2>) -> Tensor<B, 2>;
}

impl<B: Backend, T: PointTransform<D>, const D: usize> Transform<B, D> for T {
    /// Reads the batch back to the host and maps each row with
    /// [`PointTransform::transform_point`].
    ///
    /// # Panics
    /// Panics if the second tensor dimension is not `D`.
    fn transform_points(&self, points: Tensor<B, 2>) -> Tensor<B, 2> {
        let device = points.device();
        let [batch, rank] = points.dims();
        assert_eq!(rank, D, "points tensor must have shape [Batch, {}]", D);

        let coords: Vec<f64> = points.into_data().iter::<f64>().collect();
        let mut mapped = Vec::with_capacity(coords.len());
        for row in coords.chunks_exact(D) {
            let point = self.transform_point(&Point::from_slice(row));
            mapped.extend_from_slice(point.0.coords.as_slice());
        }

        let data = TensorData::new(mapped, Shape::new([batch, D])).convert::<B::FloatElem>();
        Tensor::from_data(data, &device)
    }
}
