use serde::Serialize;
use uuid::Uuid;

use crate::accuracy::errorreport::ErrorReport;
use crate::comparison::comparator::Comparison;
use crate::exact::exactvalue::ExactValue;
use crate::objectwithuuid::ObjectWithUUID;
use crate::quadrature::bounds::Bounds;
use crate::quadrature::quadraturemethod::QuadratureMethod;
use crate::quadrature::quadratureresult::QuadratureResult;
use crate::quadrature::romberg::RombergTable;

/// Single-method run.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrationReport {
    uuid: Uuid,
    expression: String,
    bounds: Bounds,
    requested_partitions: usize,
    method: QuadratureMethod,
    result: QuadratureResult,
    romberg_table: Option<RombergTable>,
    exact: Option<ExactValue>,
    error: Option<ErrorReport>
}

impl IntegrationReport {
    pub(crate) fn new(expression: String,
                      bounds: Bounds,
                      requested_partitions: usize,
                      method: QuadratureMethod,
                      result: QuadratureResult,
                      romberg_table: Option<RombergTable>,
                      exact: Option<ExactValue>) -> IntegrationReport {
        let error = exact.as_ref().map(|exact| ErrorReport::against(exact, result.value()));
        IntegrationReport {
            uuid: Uuid::new_v4(),
            expression,
            bounds,
            requested_partitions,
            method,
            result,
            romberg_table,
            exact,
            error
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn requested_partitions(&self) -> usize {
        self.requested_partitions
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn result(&self) -> &QuadratureResult {
        &self.result
    }

    pub fn romberg_table(&self) -> Option<&RombergTable> {
        self.romberg_table.as_ref()
    }

    pub fn exact(&self) -> Option<&ExactValue> {
        self.exact.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorReport> {
        self.error.as_ref()
    }
}

impl ObjectWithUUID for IntegrationReport {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

/// Multi-method run.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    uuid: Uuid,
    expression: String,
    bounds: Bounds,
    requested_partitions: usize,
    comparison: Comparison
}

impl ComparisonReport {
    pub(crate) fn new(expression: String,
                      bounds: Bounds,
                      requested_partitions: usize,
                      comparison: Comparison) -> ComparisonReport {
        ComparisonReport { uuid: Uuid::new_v4(), expression, bounds, requested_partitions, comparison }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn requested_partitions(&self) -> usize {
        self.requested_partitions
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }
}

impl ObjectWithUUID for ComparisonReport {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrationOutcome {
    Single(IntegrationReport),
    Comparison(ComparisonReport)
}
