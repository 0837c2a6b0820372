use serde::Serialize;

use super::knownintegral::KnownIntegral;

/// Where a reference value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExactValueSource {
    Manual,
    ClosedForm { integrand: KnownIntegral },
    Estimated { partition_count: usize }
}

/// Reference value used for error computation. An estimated reference is
/// a high-resolution numerical approximation and must never be presented
/// as ground truth; check [`ExactValue::is_estimate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExactValue {
    value: f64,
    source: ExactValueSource,
    is_estimate: bool
}

impl ExactValue {
    pub fn new(value: f64, source: ExactValueSource) -> ExactValue {
        let is_estimate = matches!(source, ExactValueSource::Estimated { .. });
        ExactValue { value, source, is_estimate }
    }

    pub fn manual(value: f64) -> ExactValue {
        ExactValue::new(value, ExactValueSource::Manual)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn source(&self) -> ExactValueSource {
        self.source
    }

    pub fn is_estimate(&self) -> bool {
        self.is_estimate
    }
}
