//! Luminance conversion to grayscale.
//!
//! Each `(B, G, R)` triple is replaced by its luminance
//! `Y = round(0.1140*B + 0.5870*G + 0.2989*R)`, clamped to `[0, 255]`.
//! The transform is in place and touches exactly one pixel per iteration,
//! so any row or chunk partition of the buffer is race free.

const WEIGHT_BLUE: f64 = 0.1140;
const WEIGHT_GREEN: f64 = 0.5870;
const WEIGHT_RED: f64 = 0.2989;

/// Luminance of a single pixel, given its channels in BMP byte order.
#[inline]
pub fn luminance(blue: u8, green: u8, red: u8) -> u8 {
    let y = WEIGHT_BLUE * f64::from(blue)
        + WEIGHT_GREEN * f64::from(green)
        + WEIGHT_RED * f64::from(red);
    y.round().clamp(0.0, 255.0) as u8
}

/// Replace every `B, G, R` triple of `row` with its luminance.
///
/// `row` is a row's pixel bytes without padding; a trailing partial triple
/// (there is none in a well-formed row) would be left untouched.
pub fn grayscale_row(row: &mut [u8]) {
    for px in row.chunks_exact_mut(3) {
        let y = luminance(px[0], px[1], px[2]);
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
}
