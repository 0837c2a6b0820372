use std::fmt;

use log::info;
use serde::Serialize;

/// Constraint a rule places on its partition count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Admissibility {
    Any,
    Even,
    MultipleOfThree
}

impl Admissibility {
    pub fn is_admissible(&self, partition_count: usize) -> bool {
        match self {
            Admissibility::Any => true,
            Admissibility::Even => partition_count % 2 == 0,
            Admissibility::MultipleOfThree => partition_count % 3 == 0
        }
    }

    /// Smallest admissible count not below `partition_count`.
    pub fn snap(&self, partition_count: usize) -> usize {
        match self {
            Admissibility::Any => partition_count,
            Admissibility::Even => partition_count + partition_count % 2,
            Admissibility::MultipleOfThree => partition_count.div_ceil(3) * 3
        }
    }

    /// Returns the count the rule runs with and the notice to hand back to
    /// the caller when it differs from the requested one.
    pub fn normalize(&self, partition_count: usize) -> (usize, Option<PartitionAdjustment>) {
        let adjusted = self.snap(partition_count);
        if adjusted == partition_count {
            (partition_count, None)
        } else {
            let adjustment = PartitionAdjustment { requested: partition_count, adjusted, constraint: *self };
            info!("{}", adjustment);
            (adjusted, Some(adjustment))
        }
    }

    fn requirement(&self) -> &'static str {
        match self {
            Admissibility::Any => "n may be any positive integer",
            Admissibility::Even => "n must be even",
            Admissibility::MultipleOfThree => "n must be a multiple of 3"
        }
    }
}

/// Notice that a rule changed the partition count to satisfy its
/// admissibility constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionAdjustment {
    requested: usize,
    adjusted: usize,
    constraint: Admissibility
}

impl PartitionAdjustment {
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn adjusted(&self) -> usize {
        self.adjusted
    }

    pub fn constraint(&self) -> Admissibility {
        self.constraint
    }
}

impl fmt::Display for PartitionAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: adjusted {} -> {}", self.constraint.requirement(), self.requested, self.adjusted)
    }
}
