//! In-memory BMP encoding.

use super::header::HEADER_LEN;
use crate::error::BmpError;
use crate::image::BmpImage;

/// Serialize an image back to its BMP wire form: the 54-byte header carried
/// verbatim from load, followed by the pixel payload.
///
/// A `decode -> encode` round trip of a valid input is byte-identical.
pub fn encode_bmp(image: &BmpImage) -> Result<Vec<u8>, BmpError> {
    let total = HEADER_LEN + image.pixel_size();
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| BmpError::AllocationFailure(total))?;
    out.extend_from_slice(&image.header().to_bytes());
    out.extend_from_slice(image.pixels());
    Ok(out)
}
