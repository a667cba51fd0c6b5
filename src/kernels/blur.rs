//! Box-blur convolution with a variable odd kernel size.
//!
//! - The N x N weight matrix holds `1/N^2` in every cell and is created per
//!   blur invocation.
//! - Channels are independent: a channel's neighborhood is strided by 3
//!   bytes horizontally and by the row stride vertically.
//! - Accumulation is in `f32`, clamped to `[0, 255]`, then truncated.
//! - Border pixels (within `M = (N-1)/2` of any edge) keep their input
//!   values; the driver starts the output from a copy of the input.

use crate::error::BmpError;
use crate::image::Bgr8View;

/// Uniform N x N convolution kernel, weights summing to 1.
#[derive(Clone, Debug)]
pub struct BoxKernel {
    size: usize,
    weights: Vec<f32>,
}

impl BoxKernel {
    /// Build the weight matrix for an odd `size >= 3`.
    pub fn new(size: usize) -> Result<Self, BmpError> {
        assert!(
            size >= 3 && size % 2 == 1,
            "box kernel size must be an odd integer >= 3, got {size}"
        );
        let cells = size * size;
        let mut weights = Vec::new();
        weights
            .try_reserve_exact(cells)
            .map_err(|_| BmpError::AllocationFailure(cells * std::mem::size_of::<f32>()))?;
        weights.resize(cells, 1.0 / cells as f32);
        Ok(Self { size, weights })
    }

    /// Kernel side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-width M = (N - 1) / 2.
    #[inline]
    pub fn radius(&self) -> usize {
        (self.size - 1) / 2
    }

    #[cfg(test)]
    pub(crate) fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Convolve one interior output row.
    ///
    /// `src` is the untouched input; `out_row` is the pixel bytes of output
    /// row `y` (padding excluded). The caller guarantees
    /// `radius <= y < src.h - radius`. Interior columns are recomputed;
    /// border columns keep whatever `out_row` already holds.
    pub fn blur_row(&self, src: &Bgr8View<'_>, y: usize, out_row: &mut [u8]) {
        let m = self.radius();
        debug_assert!(y >= m && y + m < src.h);
        debug_assert_eq!(out_row.len(), src.w * 3);

        for x in m..src.w - m {
            for c in 0..3 {
                let mut sum = 0.0f32;
                let mut k = 0;
                for dy in 0..self.size {
                    let row = src.row(y + dy - m);
                    for dx in 0..self.size {
                        let sx = x + dx - m;
                        sum += self.weights[k] * f32::from(row[sx * 3 + c]);
                        k += 1;
                    }
                }
                out_row[x * 3 + c] = sum.clamp(0.0, 255.0) as u8;
            }
        }
    }
}
