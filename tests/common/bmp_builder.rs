use bmpfx::image::row_stride;

/// Build an in-memory 24-bit uncompressed BMP with correct 4-byte row
/// padding. `pixel(x, y)` returns the `[B, G, R]` triple for buffer row `y`
/// (BMP bottom-up order); padding bytes are zero.
pub fn build_bmp(width: usize, height: usize, pixel: impl Fn(usize, usize) -> [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let stride = row_stride(width);
    let pixel_size = stride * height;
    let file_size = (54 + pixel_size) as u32;

    let mut out = Vec::with_capacity(54 + pixel_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved1
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved2
    out.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
    out.extend_from_slice(&40u32.to_le_bytes()); // BITMAPINFOHEADER size
    out.extend_from_slice(&(width as u32).to_le_bytes());
    out.extend_from_slice(&(height as u32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // x resolution
    out.extend_from_slice(&2835u32.to_le_bytes()); // y resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // colors important

    for y in 0..height {
        for x in 0..width {
            out.extend_from_slice(&pixel(x, y));
        }
        out.resize(54 + (y + 1) * stride, 0);
    }
    out
}

/// A BMP filled with one constant `[B, G, R]` value.
#[allow(dead_code)] // not every test binary uses every fixture
pub fn solid_bmp(width: usize, height: usize, bgr: [u8; 3]) -> Vec<u8> {
    build_bmp(width, height, |_, _| bgr)
}

/// A deterministic multi-tone gradient useful for byte-exact comparisons.
pub fn gradient_bmp(width: usize, height: usize) -> Vec<u8> {
    build_bmp(width, height, |x, y| {
        [
            (x * 37 + y * 11) as u8,
            (x * 5 + y * 73) as u8,
            (x * 97 + y * 29) as u8,
        ]
    })
}
