#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod codec;
pub mod config;
pub mod error;
pub mod image;
pub mod kernels;
pub mod parallel;
pub mod report;

// --- High-level re-exports -------------------------------------------------

// Main entry points: codec + image + driver.
pub use crate::codec::{decode_bmp, encode_bmp, load_bmp, save_bmp};
pub use crate::error::BmpError;
pub use crate::image::BmpImage;
pub use crate::kernels::Transform;
pub use crate::parallel::{apply_transform, ParallelOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use bmpfx::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), bmpfx::BmpError> {
/// let mut image = load_bmp(Path::new("original.bmp"))?;
/// apply_transform(&mut image, Transform::Grayscale, ParallelOptions::default())?;
/// save_bmp(&image, Path::new("GrayScale.bmp"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::codec::{load_bmp, save_bmp};
    pub use crate::image::BmpImage;
    pub use crate::kernels::Transform;
    pub use crate::parallel::{apply_transform, ParallelOptions};
}
