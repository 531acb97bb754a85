//! Interpolation types and operations.
//!
//! [`LinearInterpolator`] gives value-only sampling in any dimension.
//! [`AdvancedLinearInterpolator`] adds derivatives under a mirrored boundary
//! for 2D and 3D images.

pub mod trait_;
pub mod gradient;
pub mod linear;
pub mod advanced_linear;

pub use trait_::{DerivativeInterpolator, Interpolator};
pub use gradient::Gradient;
pub use linear::LinearInterpolator;
pub use advanced_linear::AdvancedLinearInterpolator;
