use serde::Serialize;

use crate::accuracy::errorreport::ErrorReport;
use crate::quadrature::quadraturemethod::QuadratureMethod;
use crate::quadrature::quadratureresult::QuadratureResult;
use crate::quadrature::romberg::RombergTable;

/// Raw-value difference from the reference rule. Informational only: it
/// says nothing about which rule is closer to the true integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceDivergence {
    reference: QuadratureMethod,
    reference_value: f64,
    difference: f64
}

impl ReferenceDivergence {
    pub fn new(reference: QuadratureMethod, reference_value: f64, value: f64) -> ReferenceDivergence {
        ReferenceDivergence { reference, reference_value, difference: value - reference_value }
    }

    pub fn reference(&self) -> QuadratureMethod {
        self.reference
    }

    pub fn reference_value(&self) -> f64 {
        self.reference_value
    }

    /// `value - reference_value`.
    pub fn difference(&self) -> f64 {
        self.difference
    }

    pub fn absolute_difference(&self) -> f64 {
        self.difference.abs()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonEntry {
    method: QuadratureMethod,
    method_name: &'static str,
    result: QuadratureResult,
    romberg_table: Option<RombergTable>,
    error: Option<ErrorReport>,
    divergence: Option<ReferenceDivergence>
}

impl ComparisonEntry {
    pub(crate) fn new(method: QuadratureMethod,
                      result: QuadratureResult,
                      romberg_table: Option<RombergTable>,
                      error: Option<ErrorReport>,
                      divergence: Option<ReferenceDivergence>) -> ComparisonEntry {
        ComparisonEntry { method, method_name: method.name(), result, romberg_table, error, divergence }
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn method_name(&self) -> &'static str {
        self.method_name
    }

    pub fn result(&self) -> &QuadratureResult {
        &self.result
    }

    pub fn value(&self) -> f64 {
        self.result.value()
    }

    pub fn adjusted_partition_count(&self) -> Option<usize> {
        self.result.adjusted_partition_count()
    }

    pub fn romberg_table(&self) -> Option<&RombergTable> {
        self.romberg_table.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorReport> {
        self.error.as_ref()
    }

    pub fn divergence(&self) -> Option<&ReferenceDivergence> {
        self.divergence.as_ref()
    }
}
