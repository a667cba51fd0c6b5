//! In-memory BMP decoding for the 24-bit uncompressed subset.

use log::debug;

use super::header::{BmpHeader, HEADER_LEN};
use crate::error::BmpError;
use crate::image::{row_stride, BmpImage};

/// Decode a complete BMP byte stream into an owned [`BmpImage`].
///
/// The load contract:
/// - the leading 54 bytes must parse and pass the header validation checks,
///   otherwise [`BmpError::UnsupportedFormat`];
/// - the pixel payload is `header.file_size - 54` bytes; fewer available
///   bytes fail with [`BmpError::TruncatedPayload`], extra bytes with
///   [`BmpError::TrailingGarbage`];
/// - the declared payload must cover `height x row_stride` bytes so that
///   every row can be indexed.
///
/// Nothing is allocated until the header has been accepted, so rejected
/// inputs never materialize a pixel buffer.
pub fn decode_bmp(data: &[u8]) -> Result<BmpImage, BmpError> {
    let header = BmpHeader::parse(data)?;
    header.validate()?;

    let pixel_size = (header.file_size as usize).checked_sub(HEADER_LEN).ok_or_else(|| {
        BmpError::UnsupportedFormat(format!(
            "declared file size {} is smaller than the {HEADER_LEN}-byte header",
            header.file_size
        ))
    })?;

    // checked_mul: width and height are attacker controlled, and a wrapped
    // product here would defer the failure to row indexing in a transform.
    let stride = row_stride(header.width as usize);
    let covered = (header.height as usize)
        .checked_mul(stride)
        .is_some_and(|needed| needed <= pixel_size);
    if !covered {
        return Err(BmpError::UnsupportedFormat(format!(
            "declared pixel payload ({pixel_size} bytes) does not cover \
             {} rows of {stride} bytes",
            header.height
        )));
    }

    let available = data.len() - HEADER_LEN;
    if available < pixel_size {
        return Err(BmpError::TruncatedPayload {
            declared: pixel_size,
            actual: available,
        });
    }
    if available > pixel_size {
        return Err(BmpError::TrailingGarbage(available - pixel_size));
    }

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(pixel_size)
        .map_err(|_| BmpError::AllocationFailure(pixel_size))?;
    pixels.extend_from_slice(&data[HEADER_LEN..HEADER_LEN + pixel_size]);

    debug!(
        "decoded {}x{} bmp, stride {} bytes, payload {} bytes",
        header.width, header.height, stride, pixel_size
    );
    Ok(BmpImage::from_parts(header, pixels))
}
