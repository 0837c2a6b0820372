use log::{
    debug,
    warn
};
use nalgebra::DMatrix;
use serde::{
    Serialize,
    Serializer
};

use super::bounds::{
    Bounds,
    MAX_PARTITION_COUNT
};
use super::quadratureerror::QuadratureError;
use super::quadratureresult::QuadratureResult;
use super::steprecord::{
    format_value,
    StepTrace
};
use super::trapezoidal::trapezoidal;

pub const ROMBERG_FORMULA: &str = "R[k][j] = (4^j × R[k][j-1] - R[k-1][j-1]) / (4^j - 1)";

pub const DEFAULT_ROMBERG_LEVELS: usize = 4;

/// Hard ceiling: the last row runs the trapezoidal rule with `2^(levels-1)`
/// partitions, which must stay within [`MAX_PARTITION_COUNT`].
pub const MAX_ROMBERG_LEVELS: usize = MAX_PARTITION_COUNT.trailing_zeros() as usize + 1;

/// Level count above which a run logs a cost warning.
pub const ROMBERG_COST_WARNING_LEVELS: usize = 16;

// ─────────────────────────────────────────────────────────────────────────────
// RombergTable
// ─────────────────────────────────────────────────────────────────────────────
//
//   R[k][0] = T(2^k)                                   trapezoid, 2^k panels
//   R[k][j] = (4^j·R[k][j-1] - R[k-1][j-1]) / (4^j - 1),  1 ≤ j ≤ k
//
// Lower triangular; entries above the diagonal are never written and are
// not readable through the API.

#[derive(Debug, Clone, PartialEq)]
pub struct RombergTable {
    entries: DMatrix<f64>
}

impl RombergTable {
    fn new(levels: usize) -> RombergTable {
        RombergTable { entries: DMatrix::zeros(levels, levels) }
    }

    fn set(&mut self, k: usize, j: usize, value: f64) {
        self.entries[(k, j)] = value;
    }

    pub fn levels(&self) -> usize {
        self.entries.nrows()
    }

    pub fn get(&self, k: usize, j: usize) -> Option<f64> {
        if k < self.levels() && j <= k {
            Some(self.entries[(k, j)])
        } else {
            None
        }
    }

    /// Row `k` holds `k + 1` entries.
    pub fn row(&self, k: usize) -> Vec<f64> {
        (0..=k).filter_map(|j| self.get(k, j)).collect()
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.levels()).map(|k| self.row(k)).collect()
    }

    /// Trapezoidal estimates `R[k][0]`.
    pub fn first_column(&self) -> Vec<f64> {
        (0..self.levels()).map(|k| self.entries[(k, 0)]).collect()
    }

    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.levels()).map(|k| self.entries[(k, k)]).collect()
    }

    pub fn best(&self) -> f64 {
        let last = self.levels() - 1;
        self.entries[(last, last)]
    }
}

impl Serialize for RombergTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.collect_seq(self.rows())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RombergResult {
    result: QuadratureResult,
    table: RombergTable
}

impl RombergResult {
    pub fn value(&self) -> f64 {
        self.result.value()
    }

    pub fn result(&self) -> &QuadratureResult {
        &self.result
    }

    pub fn table(&self) -> &RombergTable {
        &self.table
    }

    pub fn into_parts(self) -> (QuadratureResult, RombergTable) {
        (self.result, self.table)
    }
}

/// Function evaluations a run with `levels` rows performs: every row
/// re-runs the trapezoidal rule, `2^k + 1` samples for row `k`.
pub fn romberg_evaluation_count(levels: usize) -> usize {
    (0..levels).map(|k| (1usize << k) + 1).sum()
}

pub(crate) fn check_level_count(levels: usize) -> Result<(), QuadratureError> {
    if levels < 1 || levels > MAX_ROMBERG_LEVELS {
        return Err(QuadratureError::InvalidLevelCount { levels, max: MAX_ROMBERG_LEVELS });
    }
    Ok(())
}

/// Romberg integration with `max_levels` rows.
///
/// Cost grows with the level count, not with a partition count: the last
/// row alone evaluates `f` at `2^(max_levels-1) + 1` points (see
/// [`romberg_evaluation_count`]). The sample points reported are those of
/// the finest trapezoidal row.
pub fn romberg<F>(f: &F, a: f64, b: f64, max_levels: usize) -> Result<RombergResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    Bounds::new(a, b)?;
    check_level_count(max_levels)?;
    if max_levels > ROMBERG_COST_WARNING_LEVELS {
        warn!("romberg with {} levels evaluates f {} times", max_levels, romberg_evaluation_count(max_levels));
    }

    let mut table = RombergTable::new(max_levels);
    let mut trace = StepTrace::new();
    trace.push("Romberg integration", "Richardson extrapolation on the trapezoidal rule");

    let mut finest = None;
    for k in 0..max_levels {
        let n = 1usize << k;
        let trapezoid = trapezoidal(f, a, b, n)?;
        table.set(k, 0, trapezoid.value());
        trace.push(format!("R[{}][0] with n = {}", k, n), format!("T_{} = {}", n, format_value(trapezoid.value())));
        finest = Some(trapezoid);
    }

    for j in 1..max_levels {
        let factor = 4f64.powi(j as i32);
        for k in j..max_levels {
            let (refined, coarse) = (table.entries[(k, j - 1)], table.entries[(k - 1, j - 1)]);
            let value = (factor * refined - coarse) / (factor - 1.0);
            table.set(k, j, value);
            trace.push(format!("R[{}][{}] (extrapolation)", k, j),
                       format!("R[{}][{}] = (4^{} × R[{}][{}] - R[{}][{}]) / (4^{} - 1) = {}",
                               k, j, j, k, j - 1, k - 1, j - 1, j, format_value(value)));
        }
    }

    let value = table.best();
    let last = max_levels - 1;
    trace.push("Final result (best approximation)", format!("I ≈ R[{}][{}] = {}", last, last, format_value(value)));
    debug!("romberg on [{}, {}] with {} levels: {}", a, b, max_levels, value);

    let (points, step_width, partition_count) = match finest {
        Some(finest) => (finest.points().to_vec(), finest.step_width(), finest.partition_count()),
        None => (Vec::new(), b - a, 1)
    };
    let result = QuadratureResult::new(value, trace.into_steps(), points, step_width, partition_count, None, ROMBERG_FORMULA);
    Ok(RombergResult { result, table })
}
