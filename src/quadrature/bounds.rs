use serde::Serialize;

use super::quadratureerror::QuadratureError;

/// Upper limit on partition counts. Every rule keeps one sample point per
/// node, so this also caps the memory a single run holds.
pub const MAX_PARTITION_COUNT: usize = 1 << 20;

/// Integration interval `[lower, upper]` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    lower: f64,
    upper: f64
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Result<Bounds, QuadratureError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(QuadratureError::NonFiniteBounds { lower, upper });
        }
        if lower >= upper {
            return Err(QuadratureError::InvalidBounds { lower, upper });
        }
        Ok(Bounds { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn step_width(&self, partition_count: usize) -> f64 {
        self.width() / partition_count as f64
    }

    /// `x_i = lower + i·h`.
    pub fn node(&self, index: usize, step_width: f64) -> f64 {
        self.lower + index as f64 * step_width
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

pub(crate) fn check_partition_count(partition_count: usize) -> Result<(), QuadratureError> {
    if partition_count < 1 {
        return Err(QuadratureError::InvalidPartitionCount(partition_count));
    }
    if partition_count > MAX_PARTITION_COUNT {
        return Err(QuadratureError::PartitionCountTooLarge { partition_count, max: MAX_PARTITION_COUNT });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reversed_and_empty_intervals() {
        assert_eq!(Bounds::new(1.0, 0.0), Err(QuadratureError::InvalidBounds { lower: 1.0, upper: 0.0 }));
        assert!(Bounds::new(2.0, 2.0).is_err());
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(Bounds::new(f64::NAN, 1.0), Err(QuadratureError::NonFiniteBounds { .. })));
        assert!(matches!(Bounds::new(0.0, f64::INFINITY), Err(QuadratureError::NonFiniteBounds { .. })));
    }

    #[test]
    fn partition_counts_are_bounded_on_both_sides() {
        assert_eq!(check_partition_count(0), Err(QuadratureError::InvalidPartitionCount(0)));
        assert_eq!(check_partition_count(MAX_PARTITION_COUNT), Ok(()));
        assert_eq!(check_partition_count(MAX_PARTITION_COUNT + 1),
                   Err(QuadratureError::PartitionCountTooLarge { partition_count: MAX_PARTITION_COUNT + 1, max: MAX_PARTITION_COUNT }));
    }

    #[test]
    fn step_width_divides_interval() {
        let bounds = Bounds::new(-1.0, 3.0).unwrap();
        assert_eq!(bounds.step_width(8), 0.5);
        assert_eq!(bounds.node(3, 0.5), 0.5);
    }
}
