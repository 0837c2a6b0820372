use std::fmt;

use serde::Serialize;

use crate::exact::exactvalue::ExactValue;

/// Relative error, explicitly undefined against a zero reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum RelativeError {
    Defined(f64),
    Undefined
}

impl RelativeError {
    pub fn value(&self) -> Option<f64> {
        match self {
            RelativeError::Defined(value) => Some(*value),
            RelativeError::Undefined => None
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, RelativeError::Defined(_))
    }

    fn scaled(&self, factor: f64) -> RelativeError {
        match self {
            RelativeError::Defined(value) => RelativeError::Defined(value * factor),
            RelativeError::Undefined => RelativeError::Undefined
        }
    }
}

impl fmt::Display for RelativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeError::Defined(value) => write!(f, "{}", value),
            RelativeError::Undefined => write!(f, "undefined")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorReport {
    exact: f64,
    approximation: f64,
    absolute_error: f64,
    relative_error: RelativeError,
    relative_error_percent: RelativeError,
    exact_is_estimate: bool
}

impl ErrorReport {
    /// Errors of `approximation` against a reference taken as ground truth.
    pub fn compute(exact: f64, approximation: f64) -> ErrorReport {
        let absolute_error = (exact - approximation).abs();
        let relative_error = if exact == 0.0 {
            RelativeError::Undefined
        } else {
            RelativeError::Defined(absolute_error / exact.abs())
        };
        ErrorReport {
            exact,
            approximation,
            absolute_error,
            relative_error,
            relative_error_percent: relative_error.scaled(100.0),
            exact_is_estimate: false
        }
    }

    /// Same as [`ErrorReport::compute`], carrying over whether the
    /// reference is only an estimate.
    pub fn against(exact: &ExactValue, approximation: f64) -> ErrorReport {
        ErrorReport {
            exact_is_estimate: exact.is_estimate(),
            ..ErrorReport::compute(exact.value(), approximation)
        }
    }

    pub fn exact(&self) -> f64 {
        self.exact
    }

    pub fn approximation(&self) -> f64 {
        self.approximation
    }

    pub fn absolute_error(&self) -> f64 {
        self.absolute_error
    }

    pub fn relative_error(&self) -> RelativeError {
        self.relative_error
    }

    pub fn relative_error_percent(&self) -> RelativeError {
        self.relative_error_percent
    }

    pub fn exact_is_estimate(&self) -> bool {
        self.exact_is_estimate
    }
}
