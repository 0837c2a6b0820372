use thiserror::Error;

use crate::configuration::ConfigurationError;
use crate::evaluator::expression::ExpressionError;
use crate::quadrature::bounds::MAX_PARTITION_COUNT;
use crate::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("expression must not be empty")]
    EmptyExpression,

    #[error("{name} bound must be a number, got {value}")]
    NonNumericBound { name: &'static str, value: f64 },

    #[error("lower bound {lower} must be less than upper bound {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("partition count must be an integer between 1 and {max}, got {0}", max = MAX_PARTITION_COUNT)]
    InvalidPartitionCount(i64),

    #[error("romberg level count must be between 1 and {max}, got {levels}")]
    InvalidLevelCount { levels: usize, max: usize },

    #[error("at least one method must be selected")]
    NoMethodsSelected,

    #[error(transparent)]
    ExpressionCompile(#[from] ExpressionError),

    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError)
}

impl IntegrationError {
    /// Input rejected before any rule ran, including expressions the
    /// evaluator could not compile.
    pub fn is_validation(&self) -> bool {
        !matches!(self, IntegrationError::Configuration(_))
    }
}
