//! The fixed-layout 54-byte BMP file header.
//!
//! The record is serialized and deserialized field by field in little-endian
//! order; it is never transmuted from a packed struct, so the layout is
//! portable regardless of native alignment rules.

use crate::error::BmpError;

/// Combined size of the BMP file header and the BITMAPINFOHEADER, in bytes.
pub const HEADER_LEN: usize = 54;

/// BMP magic signature, the ASCII pair `BM`.
pub const MAGIC: [u8; 2] = *b"BM";

const SUPPORTED_BITS: u16 = 24;
const SUPPORTED_PLANES: u16 = 1;
const UNCOMPRESSED: u32 = 0;

/// Parsed BMP header, carried verbatim through a load/save round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    /// Magic signature; must equal `BM`.
    pub magic: [u8; 2],
    /// Total file size in bytes, header included.
    pub file_size: u32,
    /// Reserved words, ignored on read and zero on write.
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel data.
    pub data_offset: u32,
    /// DIB header size (40 for BITMAPINFOHEADER).
    pub dib_size: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels; positive means bottom-up row order.
    pub height: u32,
    /// Number of color planes; must equal 1.
    pub planes: u16,
    /// Bits per pixel; must equal 24.
    pub bits: u16,
    /// Compression code; must equal 0 (uncompressed).
    pub compression: u32,
    /// Raw pixel-data size in bytes (may legally be 0 for uncompressed files).
    pub image_size: u32,
    /// Horizontal resolution in pixels per metre.
    pub x_resolution: u32,
    /// Vertical resolution in pixels per metre.
    pub y_resolution: u32,
    /// Palette entry count.
    pub colors_used: u32,
    /// Important-color count.
    pub colors_important: u32,
}

impl BmpHeader {
    /// Parse the leading 54 bytes of `data` into a header record.
    ///
    /// Fails with [`BmpError::TruncatedPayload`] when `data` is shorter than
    /// the header itself. No field validation happens here; see
    /// [`BmpHeader::validate`].
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        if data.len() < HEADER_LEN {
            return Err(BmpError::TruncatedPayload {
                declared: HEADER_LEN,
                actual: data.len(),
            });
        }
        let mut r = Reader { buf: data, pos: 0 };
        Ok(Self {
            magic: [r.u8(), r.u8()],
            file_size: r.u32(),
            reserved1: r.u16(),
            reserved2: r.u16(),
            data_offset: r.u32(),
            dib_size: r.u32(),
            width: r.u32(),
            height: r.u32(),
            planes: r.u16(),
            bits: r.u16(),
            compression: r.u32(),
            image_size: r.u32(),
            x_resolution: r.u32(),
            y_resolution: r.u32(),
            colors_used: r.u32(),
            colors_important: r.u32(),
        })
    }

    /// The four-check validation contract for the supported BMP subset:
    /// magic `BM`, 24 bits per pixel, one plane, no compression. Zero
    /// dimensions are rejected as well since no row indexing is possible.
    pub fn validate(&self) -> Result<(), BmpError> {
        if self.magic != MAGIC {
            return Err(BmpError::UnsupportedFormat(format!(
                "magic bytes {:?} are not \"BM\"",
                self.magic
            )));
        }
        if self.bits != SUPPORTED_BITS {
            return Err(BmpError::UnsupportedFormat(format!(
                "bit depth is {}, expected {SUPPORTED_BITS}",
                self.bits
            )));
        }
        if self.planes != SUPPORTED_PLANES {
            return Err(BmpError::UnsupportedFormat(format!(
                "planes field is {}, expected {SUPPORTED_PLANES}",
                self.planes
            )));
        }
        if self.compression != UNCOMPRESSED {
            return Err(BmpError::UnsupportedFormat(format!(
                "compression code is {}, expected {UNCOMPRESSED}",
                self.compression
            )));
        }
        if self.width == 0 {
            return Err(BmpError::UnsupportedFormat("width is zero".into()));
        }
        if self.height == 0 {
            return Err(BmpError::UnsupportedFormat("height is zero".into()));
        }
        Ok(())
    }

    /// Serialize the record back to its 54-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let mut w = Writer {
            buf: &mut out,
            pos: 0,
        };
        w.bytes(&self.magic);
        w.u32(self.file_size);
        w.u16(self.reserved1);
        w.u16(self.reserved2);
        w.u32(self.data_offset);
        w.u32(self.dib_size);
        w.u32(self.width);
        w.u32(self.height);
        w.u16(self.planes);
        w.u16(self.bits);
        w.u32(self.compression);
        w.u32(self.image_size);
        w.u32(self.x_resolution);
        w.u32(self.y_resolution);
        w.u32(self.colors_used);
        w.u32(self.colors_important);
        out
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn u8(&mut self) -> u8 {
        let v = self.buf[self.pos];
        self.pos += 1;
        v
    }

    fn u16(&mut self) -> u16 {
        let v = u16::from_le_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        v
    }

    fn u32(&mut self) -> u32 {
        let v = u32::from_le_bytes([
            self.buf[self.pos],
            self.buf[self.pos + 1],
            self.buf[self.pos + 2],
            self.buf[self.pos + 3],
        ]);
        self.pos += 4;
        v
    }
}

struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Writer<'_> {
    fn bytes(&mut self, v: &[u8]) {
        self.buf[self.pos..self.pos + v.len()].copy_from_slice(v);
        self.pos += v.len();
    }

    fn u16(&mut self, v: u16) {
        self.bytes(&v.to_le_bytes());
    }

    fn u32(&mut self, v: u32) {
        self.bytes(&v.to_le_bytes());
    }
}
