//! Owned 24-bit BMP image: header, derived geometry, and the contiguous
//! interleaved B, G, R pixel buffer.
//!
//! The buffer is exclusively owned; it is released when the image is
//! dropped, on every path including load failures before construction.
//! No resizing, reshaping, or header surgery is exposed.

use crate::codec::header::BmpHeader;

use super::view::Bgr8View;

const BITS_PER_BYTE: usize = 8;

/// Bytes from the start of one image row to the next. BMP pads each row of
/// `width * 3` pixel bytes up to a 4-byte boundary.
#[inline]
pub fn row_stride(width: usize) -> usize {
    (width * 3 + 3) / 4 * 4
}

/// An in-memory 24-bit BMP image.
#[derive(Clone, Debug)]
pub struct BmpImage {
    header: BmpHeader,
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
    row_stride: usize,
    pixels: Vec<u8>,
}

impl BmpImage {
    /// Assemble an image from a validated header and its pixel payload.
    ///
    /// The decoder guarantees `pixels.len() >= height * row_stride`.
    pub(crate) fn from_parts(header: BmpHeader, pixels: Vec<u8>) -> Self {
        let width = header.width as usize;
        Self {
            width,
            height: header.height as usize,
            bytes_per_pixel: usize::from(header.bits) / BITS_PER_BYTE,
            row_stride: row_stride(width),
            header,
            pixels,
        }
    }

    /// The header record carried verbatim from load.
    #[inline]
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per pixel (3 for the supported subset).
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Bytes from one row to the next, padding included.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Total pixel payload size in bytes, padding included.
    #[inline]
    pub fn pixel_size(&self) -> usize {
        self.pixels.len()
    }

    /// The whole pixel payload, row padding included.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable view of the whole pixel payload.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The pixel bytes of row `y` (bottom-up order), padding excluded.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.row_stride;
        &self.pixels[start..start + self.width * 3]
    }

    /// Mutable pixel bytes of row `y`, padding excluded.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.row_stride;
        &mut self.pixels[start..start + self.width * 3]
    }

    /// The addressable row region, `height * row_stride` bytes. Payload
    /// bytes beyond it (a file may declare more) are carried untouched.
    #[inline]
    pub fn pixel_area_mut(&mut self) -> &mut [u8] {
        let len = self.height * self.row_stride;
        &mut self.pixels[..len]
    }

    /// The `[B, G, R]` triple at pixel `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.row_stride + x * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Borrow as a read-only stride-aware view.
    #[inline]
    pub fn as_view(&self) -> Bgr8View<'_> {
        Bgr8View {
            w: self.width,
            h: self.height,
            stride: self.row_stride,
            data: &self.pixels,
        }
    }
}
