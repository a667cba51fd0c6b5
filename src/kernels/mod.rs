//! Pure per-pixel transform kernels and their selector.

pub mod blur;
pub mod grayscale;

use std::path::Path;

pub use blur::BoxKernel;
pub use grayscale::{grayscale_row, luminance};

/// The two supported pixel transforms.
///
/// A tagged variant rather than a trait object: the kernels differ in access
/// pattern (one pixel vs. an N x N neighborhood), not in extensibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Replace each pixel with its luminance, in place.
    Grayscale,
    /// Box blur with an odd kernel size `>= 3`, via a scratch output buffer.
    BoxBlur { size: usize },
}

impl Transform {
    /// Output file name for this transform applied to `input`.
    ///
    /// Grayscale always produces `GrayScale.bmp`. Blur produces
    /// `RblurNNX.bmp` when the input file is `HorizontalRot.bmp` and
    /// `BlurNN.bmp` otherwise, with `NN` the two-digit kernel size.
    pub fn output_name(&self, input: &Path) -> String {
        match self {
            Transform::Grayscale => "GrayScale.bmp".to_string(),
            Transform::BoxBlur { size } => {
                let rotated = input
                    .file_name()
                    .is_some_and(|name| name == "HorizontalRot.bmp");
                if rotated {
                    format!("Rblur{size:02}X.bmp")
                } else {
                    format!("Blur{size:02}.bmp")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn grayscale_output_name_is_fixed() {
        let input = PathBuf::from("photos/whatever.bmp");
        assert_eq!(Transform::Grayscale.output_name(&input), "GrayScale.bmp");
    }

    #[test]
    fn blur_output_name_encodes_kernel_size() {
        let input = PathBuf::from("original.bmp");
        assert_eq!(
            Transform::BoxBlur { size: 3 }.output_name(&input),
            "Blur03.bmp"
        );
        assert_eq!(
            Transform::BoxBlur { size: 81 }.output_name(&input),
            "Blur81.bmp"
        );
    }

    #[test]
    fn rotated_input_gets_the_r_prefix() {
        let input = PathBuf::from("data/HorizontalRot.bmp");
        assert_eq!(
            Transform::BoxBlur { size: 7 }.output_name(&input),
            "Rblur07X.bmp"
        );
    }
}
