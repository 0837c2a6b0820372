use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use super::partition::Admissibility;
use super::quadratureerror::QuadratureError;
use super::quadratureresult::QuadratureResult;
use super::riemann::{
    riemann,
    RiemannVariant
};
use super::romberg::{
    romberg,
    RombergTable
};
use super::simpson::{
    simpson13,
    simpson38
};
use super::trapezoidal::trapezoidal;

/// Identifier of a quadrature rule. The declaration order is the
/// enumeration order used for tie-breaks when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadratureMethod {
    Trapezoidal,
    Simpson13,
    Simpson38,
    RiemannMidpoint,
    RiemannLeft,
    RiemannRight,
    Romberg
}

impl QuadratureMethod {
    pub const ALL: [QuadratureMethod; 7] = [
        QuadratureMethod::Trapezoidal,
        QuadratureMethod::Simpson13,
        QuadratureMethod::Simpson38,
        QuadratureMethod::RiemannMidpoint,
        QuadratureMethod::RiemannLeft,
        QuadratureMethod::RiemannRight,
        QuadratureMethod::Romberg
    ];

    pub const DEFAULT_COMPARISON: [QuadratureMethod; 3] = [
        QuadratureMethod::Trapezoidal,
        QuadratureMethod::Simpson13,
        QuadratureMethod::Simpson38
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureMethod::Trapezoidal => "Trapezoidal Rule",
            QuadratureMethod::Simpson13 => "Simpson 1/3",
            QuadratureMethod::Simpson38 => "Simpson 3/8",
            QuadratureMethod::RiemannMidpoint => "Riemann Midpoint",
            QuadratureMethod::RiemannLeft => "Riemann Left",
            QuadratureMethod::RiemannRight => "Riemann Right",
            QuadratureMethod::Romberg => "Romberg"
        }
    }

    pub fn admissibility(&self) -> Admissibility {
        match self {
            QuadratureMethod::Simpson13 => Admissibility::Even,
            QuadratureMethod::Simpson38 => Admissibility::MultipleOfThree,
            _ => Admissibility::Any
        }
    }

    /// Romberg ignores the partition count and runs `romberg_levels` rows.
    pub fn apply<F>(&self,
                    f: &F,
                    a: f64,
                    b: f64,
                    n: usize,
                    romberg_levels: usize) -> Result<MethodOutcome, QuadratureError>
        where F: Fn(f64) -> f64 + ?Sized {
        let result = match self {
            QuadratureMethod::Trapezoidal => trapezoidal(f, a, b, n)?,
            QuadratureMethod::Simpson13 => simpson13(f, a, b, n)?,
            QuadratureMethod::Simpson38 => simpson38(f, a, b, n)?,
            QuadratureMethod::RiemannMidpoint => riemann(f, a, b, n, RiemannVariant::Midpoint)?,
            QuadratureMethod::RiemannLeft => riemann(f, a, b, n, RiemannVariant::Left)?,
            QuadratureMethod::RiemannRight => riemann(f, a, b, n, RiemannVariant::Right)?,
            QuadratureMethod::Romberg => {
                let (result, table) = romberg(f, a, b, romberg_levels)?.into_parts();
                return Ok(MethodOutcome { method: *self, result, romberg_table: Some(table) });
            }
        };
        Ok(MethodOutcome { method: *self, result, romberg_table: None })
    }
}

impl fmt::Display for QuadratureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodOutcome {
    method: QuadratureMethod,
    result: QuadratureResult,
    romberg_table: Option<RombergTable>
}

impl MethodOutcome {
    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn result(&self) -> &QuadratureResult {
        &self.result
    }

    pub fn romberg_table(&self) -> Option<&RombergTable> {
        self.romberg_table.as_ref()
    }

    pub fn into_parts(self) -> (QuadratureResult, Option<RombergTable>) {
        (self.result, self.romberg_table)
    }
}
