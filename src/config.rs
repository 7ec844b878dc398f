//! Tuning knobs for the counting pass.

/// Below this many bytes the counter stays on the calling thread (2 MiB).
/// At memchr speeds a range this size is scanned in a few hundred microseconds,
/// so rayon scheduling would dominate.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2 * 1024 * 1024;

/// Smallest range handed to a single counting worker (1 MiB).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 1024 * 1024;

/// Controls how the line counter splits work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Allow the counting pass to fan out across the rayon pool.
    /// Has no effect when the crate is built without the `parallel` feature.
    pub parallel: bool,
    /// Buffers shorter than this are always counted sequentially.
    pub parallel_threshold: usize,
    /// Lower bound on the byte range given to one worker.
    pub min_chunk_size: usize,
}

impl IndexerConfig {
    pub fn new() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::new()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_parallel_threshold(mut self, bytes: usize) -> Self {
        self.parallel_threshold = bytes;
        self
    }

    /// Sets the minimum worker range. Zero is bumped to one byte.
    pub fn with_min_chunk_size(mut self, bytes: usize) -> Self {
        self.min_chunk_size = bytes.max(1);
        self
    }

    /// Whether a buffer of `len` bytes should be counted in parallel.
    #[inline]
    pub fn use_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && len >= self.parallel_threshold
    }

    /// Per-worker range size for a buffer of `len` bytes split over `workers` threads.
    #[inline]
    pub fn chunk_size(&self, len: usize, workers: usize) -> usize {
        (len / workers.max(1)).max(self.min_chunk_size).max(1)
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self::new()
    }
}
