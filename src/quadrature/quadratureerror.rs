use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("bounds must be finite numbers, got [{lower}, {upper}]")]
    NonFiniteBounds { lower: f64, upper: f64 },

    #[error("lower bound {lower} must be less than upper bound {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("partition count must be at least 1, got {0}")]
    InvalidPartitionCount(usize),

    #[error("partition count must be at most {max}, got {partition_count}")]
    PartitionCountTooLarge { partition_count: usize, max: usize },

    #[error("romberg level count must be between 1 and {max}, got {levels}")]
    InvalidLevelCount { levels: usize, max: usize }
}
