//! Parallel driver: "apply kernel K over pixel domain D using W workers".

mod driver;
mod options;

pub use driver::apply_transform;
pub use options::{ParallelOptions, DEFAULT_WORKERS};
