//! Image types and operations.
//!
//! [`ImageGrid`] is the accessor interpolators sample through. [`PixelBuffer`]
//! is the host-side implementation, and [`Image`] is the tensor-backed image
//! with physical metadata that reads back into one.

pub mod image;
pub mod buffer;
pub mod pixel;

pub use image::Image;
pub use buffer::{ImageGrid, PixelBuffer};
pub use pixel::RealPixel;
