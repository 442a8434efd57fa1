use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadtreeError {
    InvalidBucketSize { max_bucket_size: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBucketSize { max_bucket_size } => {
                write!(
                    f,
                    "max bucket size must be at least 1 (max_bucket_size: {})",
                    max_bucket_size
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
