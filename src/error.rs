use std::path::PathBuf;

/// Errors surfaced by the BMP codec and the transform driver.
///
/// Codec errors are advisory: the caller decides whether to continue with
/// other inputs. Partial work is released before the error is returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported BMP format: {0}")]
    UnsupportedFormat(String),

    #[error("truncated pixel payload: header declares {declared} bytes, got {actual}")]
    TruncatedPayload { declared: usize, actual: usize },

    #[error("{0} trailing bytes beyond the declared pixel payload")]
    TrailingGarbage(usize),

    #[error("failed to allocate {0} bytes")]
    AllocationFailure(usize),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}
