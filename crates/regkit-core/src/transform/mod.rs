//! Transform types and operations.
//!
//! This module provides the landmark-driven kernel spline transform, its
//! kernel strategies, and the affine part it is combined with.

pub mod trait_;
pub mod affine;
pub mod landmarks;
pub mod kernel;
pub mod kernel_transform;

pub use trait_::{PointTransform, Transform};
pub use affine::AffinePart;
pub use landmarks::LandmarkSet;
pub use kernel::{GMatrix, SplineKernel, ThinPlateR2LogR, KERNEL_EPSILON};
pub use kernel_transform::{KernelTransform, ThinPlateSplineTransform};
