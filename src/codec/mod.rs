//! BMP codec for the 24-bit uncompressed single-plane subset.
//!
//! - [`decode_bmp`] / [`encode_bmp`]: slice-level codec, no file handles.
//! - [`load_bmp`] / [`save_bmp`]: file-level wrappers; the handle is scoped
//!   to the call and released on every exit path.

mod decode;
mod encode;
pub mod header;

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use log::debug;

pub use decode::decode_bmp;
pub use encode::encode_bmp;
pub use header::{BmpHeader, HEADER_LEN, MAGIC};

use crate::error::BmpError;
use crate::image::BmpImage;

/// Load a BMP image from disk.
///
/// A missing or unopenable file fails with [`BmpError::FileNotFound`]; the
/// byte stream is then handed to [`decode_bmp`] for validation. No image is
/// returned on any failure path.
pub fn load_bmp(path: &Path) -> Result<BmpImage, BmpError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => {
            BmpError::FileNotFound(path.to_path_buf())
        }
        _ => BmpError::Io(e),
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    decode_bmp(&data)
}

/// Save an image to disk, creating or truncating `path`.
///
/// Writes the 54-byte header followed by the pixel payload; a short write
/// surfaces as [`BmpError::Io`].
pub fn save_bmp(image: &BmpImage, path: &Path) -> Result<(), BmpError> {
    let mut file = File::create(path)?;
    file.write_all(&image.header().to_bytes())?;
    file.write_all(image.pixels())?;
    file.flush()?;
    debug!(
        "saved {}x{} bmp to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
