use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::comparison::comparator::Comparator;
use crate::exact::exactvalueresolver::{
    ExactValueResolver,
    DEFAULT_ESTIMATE_PARTITION_COUNT
};
use crate::quadrature::bounds::MAX_PARTITION_COUNT;
use crate::quadrature::quadraturemethod::QuadratureMethod;
use crate::quadrature::romberg::{
    DEFAULT_ROMBERG_LEVELS,
    MAX_ROMBERG_LEVELS
};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String)
}

/// Engine defaults. Every field is optional in JSON; missing fields take
/// the built-in default.
///
/// ```json
/// {
///     "estimate_partition_count": 10000,
///     "romberg_levels": 4,
///     "default_methods": ["trapezoidal", "simpson13", "simpson38"],
///     "reference_method": "simpson13"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    estimate_partition_count: usize,
    romberg_levels: usize,
    default_methods: Vec<QuadratureMethod>,
    reference_method: QuadratureMethod
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            estimate_partition_count: DEFAULT_ESTIMATE_PARTITION_COUNT,
            romberg_levels: DEFAULT_ROMBERG_LEVELS,
            default_methods: QuadratureMethod::DEFAULT_COMPARISON.to_vec(),
            reference_method: QuadratureMethod::Simpson13
        }
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let configuration: Configuration = serde_json::from_str(json)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.estimate_partition_count < 1 || self.estimate_partition_count > MAX_PARTITION_COUNT {
            return Err(ConfigurationError::Invalid(
                format!("estimate_partition_count must be between 1 and {}, got {}", MAX_PARTITION_COUNT, self.estimate_partition_count)));
        }
        if self.romberg_levels < 1 || self.romberg_levels > MAX_ROMBERG_LEVELS {
            return Err(ConfigurationError::Invalid(
                format!("romberg_levels must be between 1 and {}, got {}", MAX_ROMBERG_LEVELS, self.romberg_levels)));
        }
        if self.default_methods.is_empty() {
            return Err(ConfigurationError::Invalid("default_methods must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn estimate_partition_count(&self) -> usize {
        self.estimate_partition_count
    }

    pub fn romberg_levels(&self) -> usize {
        self.romberg_levels
    }

    pub fn default_methods(&self) -> &[QuadratureMethod] {
        &self.default_methods
    }

    pub fn reference_method(&self) -> QuadratureMethod {
        self.reference_method
    }

    pub fn with_estimate_partition_count(mut self, estimate_partition_count: usize) -> Configuration {
        self.estimate_partition_count = estimate_partition_count;
        self
    }

    pub fn with_romberg_levels(mut self, romberg_levels: usize) -> Configuration {
        self.romberg_levels = romberg_levels;
        self
    }

    pub fn with_default_methods(mut self, default_methods: Vec<QuadratureMethod>) -> Configuration {
        self.default_methods = default_methods;
        self
    }

    pub fn with_reference_method(mut self, reference_method: QuadratureMethod) -> Configuration {
        self.reference_method = reference_method;
        self
    }

    pub fn resolver(&self) -> ExactValueResolver {
        ExactValueResolver::new(self.estimate_partition_count)
    }

    pub fn comparator(&self, methods: &[QuadratureMethod], romberg_levels: usize) -> Comparator {
        Comparator::new(methods)
            .with_reference_method(self.reference_method)
            .with_romberg_levels(romberg_levels)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let configuration = Configuration::from_json_str(r#"{ "romberg_levels": 6 }"#).unwrap();
        assert_eq!(configuration.romberg_levels(), 6);
        assert_eq!(configuration.estimate_partition_count(), DEFAULT_ESTIMATE_PARTITION_COUNT);
        assert_eq!(configuration.default_methods(), &QuadratureMethod::DEFAULT_COMPARISON);
        assert_eq!(configuration.reference_method(), QuadratureMethod::Simpson13);
    }

    #[test]
    fn parses_method_lists() {
        let configuration = Configuration::from_json_str(
            r#"{ "default_methods": ["riemann_left", "romberg"], "reference_method": "romberg" }"#).unwrap();
        assert_eq!(configuration.default_methods(), &[QuadratureMethod::RiemannLeft, QuadratureMethod::Romberg]);
        assert_eq!(configuration.comparator(configuration.default_methods(), 3).reference_method(), QuadratureMethod::Romberg);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(Configuration::from_json_str(r#"{ "romberg_levels": 0 }"#), Err(ConfigurationError::Invalid(_))));
        assert!(matches!(Configuration::from_json_str(r#"{ "estimate_partition_count": 0 }"#), Err(ConfigurationError::Invalid(_))));
        assert!(matches!(Configuration::from_json_str(r#"{ "estimate_partition_count": 1000000000000000000 }"#),
                         Err(ConfigurationError::Invalid(_))));
        assert!(matches!(Configuration::from_json_str(r#"{ "romberg_levels": 30 }"#), Err(ConfigurationError::Invalid(_))));
        assert!(matches!(Configuration::from_json_str(r#"{ "default_methods": [] }"#), Err(ConfigurationError::Invalid(_))));
        assert!(matches!(Configuration::from_json_str(r#"{ "default_methods": ["gauss"] }"#), Err(ConfigurationError::JsonParseError(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(Configuration::from_reader("/nonexistent/numintegral.json"), Err(ConfigurationError::IOError(_))));
    }
}
