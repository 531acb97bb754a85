pub mod error;
pub mod image;
pub mod spatial;
pub mod transform;
pub mod interpolation;

pub use error::{CoreError, Result};
pub use image::{Image, ImageGrid, PixelBuffer};
pub use spatial::{ContinuousIndex, Direction, Point, Spacing, Vector};
