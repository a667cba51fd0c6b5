pub mod owned;
pub mod view;

pub use self::owned::{row_stride, BmpImage};
pub use self::view::Bgr8View;
