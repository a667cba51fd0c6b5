/// Default worker count for the process-wide pool.
pub const DEFAULT_WORKERS: usize = 15;

/// Controls whether transforms run sequentially or on a Rayon worker pool.
#[derive(Clone, Copy, Debug)]
pub struct ParallelOptions {
    enabled: bool,
    workers: usize,
    min_rows_for_parallel: usize,
}

impl ParallelOptions {
    /// Construct options for a pool of `workers` threads (clamped to >= 1).
    pub fn new(workers: usize) -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            workers: workers.max(1),
            min_rows_for_parallel: 32,
        }
    }

    /// Force the sequential path regardless of image size.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            workers: 1,
            min_rows_for_parallel: usize::MAX,
        }
    }

    /// Worker count for the pool.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Update the minimum row count below which transforms stay sequential.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows_for_parallel = min_rows.max(1);
        self
    }

    /// Returns true when a transform over `rows` rows should use the pool.
    pub fn should_parallelize(&self, rows: usize) -> bool {
        self.enabled && rows >= self.min_rows_for_parallel
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}
