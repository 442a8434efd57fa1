use crate::error::{QuadtreeError, QuadtreeResult};

#[derive(Debug, Clone)]
pub struct Config {
    /// A leaf holding more values than this is split.
    pub max_bucket_size: usize,
    /// Number of node slots reserved up front.
    pub pool_size: usize,
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.max_bucket_size == 0 {
            return Err(QuadtreeError::InvalidBucketSize {
                max_bucket_size: self.max_bucket_size,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_bucket_size: 32,
            pool_size: 256,
        }
    }
}
