use serde::{
    Deserialize,
    Serialize
};

use crate::quadrature::bounds::Bounds;
use crate::quadrature::quadraturemethod::QuadratureMethod;
use crate::quadrature::bounds::MAX_PARTITION_COUNT;
use crate::quadrature::romberg::MAX_ROMBERG_LEVELS;

use super::integrationerror::IntegrationError;

/// Caller input for one computation.
///
/// ```json
/// {
///     "expression": "x^2",
///     "lower": 0.0,
///     "upper": 1.0,
///     "partitions": 4,
///     "manual_exact_value": null,
///     "methods": ["trapezoidal", "simpson13"],
///     "romberg_levels": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationRequest {
    expression: String,
    lower: f64,
    upper: f64,
    partitions: i64,
    #[serde(default)]
    manual_exact_value: Option<f64>,
    #[serde(default)]
    methods: Option<Vec<QuadratureMethod>>,
    #[serde(default)]
    romberg_levels: Option<usize>
}

/// Request fields that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    bounds: Bounds,
    partition_count: usize
}

impl ValidatedInput {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn partition_count(&self) -> usize {
        self.partition_count
    }
}

impl IntegrationRequest {
    pub fn new(expression: impl Into<String>, lower: f64, upper: f64, partitions: i64) -> IntegrationRequest {
        IntegrationRequest {
            expression: expression.into(),
            lower,
            upper,
            partitions,
            manual_exact_value: None,
            methods: None,
            romberg_levels: None
        }
    }

    pub fn with_manual_exact_value(mut self, manual_exact_value: f64) -> IntegrationRequest {
        self.manual_exact_value = Some(manual_exact_value);
        self
    }

    pub fn with_methods(mut self, methods: Vec<QuadratureMethod>) -> IntegrationRequest {
        self.methods = Some(methods);
        self
    }

    pub fn with_romberg_levels(mut self, romberg_levels: usize) -> IntegrationRequest {
        self.romberg_levels = Some(romberg_levels);
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn partitions(&self) -> i64 {
        self.partitions
    }

    pub fn manual_exact_value(&self) -> Option<f64> {
        self.manual_exact_value
    }

    /// `None` means the configured default set.
    pub fn methods(&self) -> Option<&[QuadratureMethod]> {
        self.methods.as_deref()
    }

    pub fn romberg_levels(&self) -> Option<usize> {
        self.romberg_levels
    }

    /// Checks everything that does not need the expression compiled, in
    /// order: expression, bounds, partition count, level count, method set.
    pub fn validate(&self) -> Result<ValidatedInput, IntegrationError> {
        if self.expression.trim().is_empty() {
            return Err(IntegrationError::EmptyExpression);
        }
        if !self.lower.is_finite() {
            return Err(IntegrationError::NonNumericBound { name: "lower", value: self.lower });
        }
        if !self.upper.is_finite() {
            return Err(IntegrationError::NonNumericBound { name: "upper", value: self.upper });
        }
        if self.lower >= self.upper {
            return Err(IntegrationError::InvalidBounds { lower: self.lower, upper: self.upper });
        }
        let partition_count = usize::try_from(self.partitions)
            .ok()
            .filter(|&count| (1..=MAX_PARTITION_COUNT).contains(&count))
            .ok_or(IntegrationError::InvalidPartitionCount(self.partitions))?;
        if let Some(levels) = self.romberg_levels {
            if levels < 1 || levels > MAX_ROMBERG_LEVELS {
                return Err(IntegrationError::InvalidLevelCount { levels, max: MAX_ROMBERG_LEVELS });
            }
        }
        if self.methods.as_ref().is_some_and(|methods| methods.is_empty()) {
            return Err(IntegrationError::NoMethodsSelected);
        }
        let bounds = Bounds::new(self.lower, self.upper)?;
        Ok(ValidatedInput { bounds, partition_count })
    }
}
