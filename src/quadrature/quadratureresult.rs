use serde::Serialize;

use super::partition::PartitionAdjustment;
use super::samplepoint::SamplePoint;
use super::steprecord::StepRecord;

/// Outcome of one rule over one interval. Built once by the rule and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct QuadratureResult {
    value: f64,
    steps: Vec<StepRecord>,
    points: Vec<SamplePoint>,
    step_width: f64,
    partition_count: usize,
    adjustment: Option<PartitionAdjustment>,
    formula: &'static str
}

impl QuadratureResult {
    pub(crate) fn new(value: f64,
                      steps: Vec<StepRecord>,
                      points: Vec<SamplePoint>,
                      step_width: f64,
                      partition_count: usize,
                      adjustment: Option<PartitionAdjustment>,
                      formula: &'static str) -> QuadratureResult {
        QuadratureResult { value, steps, points, step_width, partition_count, adjustment, formula }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn step_width(&self) -> f64 {
        self.step_width
    }

    /// Partition count the rule actually ran with.
    pub fn partition_count(&self) -> usize {
        self.partition_count
    }

    /// `Some(n')` when the rule had to change the requested count.
    pub fn adjusted_partition_count(&self) -> Option<usize> {
        self.adjustment.map(|adjustment| adjustment.adjusted())
    }

    pub fn adjustment(&self) -> Option<&PartitionAdjustment> {
        self.adjustment.as_ref()
    }

    pub fn formula(&self) -> &'static str {
        self.formula
    }
}
