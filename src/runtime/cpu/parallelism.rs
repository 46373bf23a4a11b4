//! CPU parallelism settings

/// Thread and chunking configuration for CPU kernels
///
/// `None` fields fall back to the defaults: the global rayon pool and
/// [`DEFAULT_CHUNK_SIZE`](Self::DEFAULT_CHUNK_SIZE) elements per chunk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    max_threads: Option<usize>,
    chunk_size: Option<usize>,
}

impl ParallelismConfig {
    /// Elements per parallel chunk when none is configured
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;

    /// Create a config
    ///
    /// A thread count or chunk size of zero is treated as one.
    pub fn new(max_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        Self {
            max_threads: max_threads.map(|n| n.max(1)),
            chunk_size: chunk_size.map(|n| n.max(1)),
        }
    }

    /// Dedicated thread count, if any
    pub fn max_threads(&self) -> Option<usize> {
        self.max_threads
    }

    /// Elements per parallel chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(Self::DEFAULT_CHUNK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParallelismConfig::default();
        assert_eq!(config.max_threads(), None);
        assert_eq!(config.chunk_size(), 4096);
    }

    #[test]
    fn test_zero_is_clamped() {
        let config = ParallelismConfig::new(Some(0), Some(0));
        assert_eq!(config.max_threads(), Some(1));
        assert_eq!(config.chunk_size(), 1);
    }
}
