use log::{
    info,
    warn
};

use crate::quadrature::simpson::simpson13;

use super::exactvalue::{
    ExactValue,
    ExactValueSource
};
use super::knownintegral::KnownIntegral;

pub const DEFAULT_ESTIMATE_PARTITION_COUNT: usize = 10_000;

/// Resolves the reference value for an integral. First match wins:
///
///   1. a finite manual override, verbatim
///   2. the closed-form table, `F(b) - F(a)`
///   3. Simpson 1/3 with `estimate_partition_count` panels, flagged as
///      an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactValueResolver {
    estimate_partition_count: usize
}

impl ExactValueResolver {
    pub fn new(estimate_partition_count: usize) -> ExactValueResolver {
        ExactValueResolver { estimate_partition_count }
    }

    pub fn estimate_partition_count(&self) -> usize {
        self.estimate_partition_count
    }

    /// `None` only when there is no usable override, no table entry, and
    /// the estimate is not finite.
    pub fn resolve<F>(&self,
                      expression: &str,
                      f: &F,
                      a: f64,
                      b: f64,
                      manual_override: Option<f64>) -> Option<ExactValue>
        where F: Fn(f64) -> f64 + ?Sized {
        match manual_override {
            Some(value) if value.is_finite() => return Some(ExactValue::manual(value)),
            Some(value) => warn!("ignoring non-numeric manual exact value {}", value),
            None => ()
        }
        ExactValueResolver::closed_form(expression, a, b)
            .or_else(|| self.estimate(expression, f, a, b))
    }

    pub fn closed_form(expression: &str, a: f64, b: f64) -> Option<ExactValue> {
        let integrand = KnownIntegral::lookup(expression)?;
        let value = integrand.definite(a, b)?;
        Some(ExactValue::new(value, ExactValueSource::ClosedForm { integrand }))
    }

    pub fn estimate<F>(&self, expression: &str, f: &F, a: f64, b: f64) -> Option<ExactValue>
        where F: Fn(f64) -> f64 + ?Sized {
        let estimate = match simpson13(f, a, b, self.estimate_partition_count) {
            Ok(estimate) => estimate,
            Err(error) => {
                warn!("cannot estimate the exact value of '{}': {}", expression, error);
                return None;
            }
        };
        let value = estimate.value();
        if !value.is_finite() {
            warn!("estimated exact value of '{}' on [{}, {}] is not finite", expression, a, b);
            return None;
        }
        let partition_count = estimate.partition_count();
        info!("no closed form for '{}', using a simpson 1/3 estimate with n = {}", expression, partition_count);
        Some(ExactValue::new(value, ExactValueSource::Estimated { partition_count }))
    }
}

impl Default for ExactValueResolver {
    fn default() -> ExactValueResolver {
        ExactValueResolver::new(DEFAULT_ESTIMATE_PARTITION_COUNT)
    }
}
