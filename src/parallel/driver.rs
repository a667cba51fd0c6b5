//! Maps a transform kernel over the pixel buffer across worker threads.
//!
//! Partitioning per kernel access pattern:
//! - **Grayscale** mutates disjoint row slices of the single pixel buffer;
//!   a static row partition is race free.
//! - **Blur** reads the untouched input through a shared view and writes
//!   disjoint rows of a separately allocated output buffer, so concurrent
//!   reads never race with writes. Rows are handed out at single-row
//!   granularity so work stealing balances large kernels.
//!
//! The driver is synchronous: it returns only after every worker finished.

use log::debug;

use super::options::ParallelOptions;
use crate::error::BmpError;
use crate::image::BmpImage;
use crate::kernels::{grayscale_row, BoxKernel, Transform};

/// Apply `transform` to `image` in place using the configured worker pool.
pub fn apply_transform(
    image: &mut BmpImage,
    transform: Transform,
    options: ParallelOptions,
) -> Result<(), BmpError> {
    match transform {
        Transform::Grayscale => apply_grayscale(image, options),
        Transform::BoxBlur { size } => apply_box_blur(image, size, options),
    }
}

fn apply_grayscale(image: &mut BmpImage, options: ParallelOptions) -> Result<(), BmpError> {
    let height = image.height();
    debug!(
        "grayscale {}x{} workers={}",
        image.width(),
        height,
        options.workers()
    );

    if options.should_parallelize(height) {
        #[cfg(feature = "parallel")]
        {
            return grayscale_parallel(image, options);
        }
    }

    for y in 0..height {
        grayscale_row(image.row_mut(y));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn grayscale_parallel(image: &mut BmpImage, options: ParallelOptions) -> Result<(), BmpError> {
    use rayon::prelude::*;

    let pool = build_pool(options.workers())?;
    let pixel_bytes = image.width() * 3;
    let stride = image.row_stride();
    let area = image.pixel_area_mut();
    pool.install(|| {
        area.par_chunks_mut(stride)
            .for_each(|row| grayscale_row(&mut row[..pixel_bytes]));
    });
    Ok(())
}

fn apply_box_blur(
    image: &mut BmpImage,
    size: usize,
    options: ParallelOptions,
) -> Result<(), BmpError> {
    let kernel = BoxKernel::new(size)?;
    let m = kernel.radius();
    let (width, height) = (image.width(), image.height());
    debug!(
        "box blur N={size} {}x{} workers={}",
        width,
        height,
        options.workers()
    );

    // Output starts as a copy of the input, so border pixels (within M of
    // any edge) and row padding are preserved by construction.
    let mut out = Vec::new();
    out.try_reserve_exact(image.pixel_size())
        .map_err(|_| BmpError::AllocationFailure(image.pixel_size()))?;
    out.extend_from_slice(image.pixels());

    // Kernel larger than the image: no interior pixels, output == input.
    if width > 2 * m && height > 2 * m {
        let stride = image.row_stride();
        let pixel_bytes = width * 3;
        let src = image.as_view();
        let interior = &mut out[m * stride..(height - m) * stride];

        if options.should_parallelize(height - 2 * m) {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;

                let pool = build_pool(options.workers())?;
                pool.install(|| {
                    interior
                        .par_chunks_mut(stride)
                        .with_min_len(1)
                        .enumerate()
                        .for_each(|(i, row)| {
                            kernel.blur_row(&src, m + i, &mut row[..pixel_bytes]);
                        });
                });
                image.pixels_mut().copy_from_slice(&out);
                return Ok(());
            }
        }

        for (i, row) in interior.chunks_mut(stride).enumerate() {
            kernel.blur_row(&src, m + i, &mut row[..pixel_bytes]);
        }
    }

    image.pixels_mut().copy_from_slice(&out);
    Ok(())
}

#[cfg(feature = "parallel")]
fn build_pool(workers: usize) -> Result<rayon::ThreadPool, BmpError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| BmpError::WorkerPool(e.to_string()))
}
