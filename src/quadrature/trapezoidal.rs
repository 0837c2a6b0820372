use log::debug;

use super::bounds::{
    check_partition_count,
    Bounds
};
use super::quadratureerror::QuadratureError;
use super::quadratureresult::QuadratureResult;
use super::samplepoint::{
    SampleCollector,
    SampleRole
};
use super::steprecord::{
    format_value,
    sample_detail,
    step_width_detail,
    StepTrace
};

pub const TRAPEZOIDAL_FORMULA: &str = "I ≈ (h/2) × [f(x₀) + 2Σf(xᵢ) + f(xₙ)]";

/// Composite trapezoidal rule
///
///   I ≈ (h/2)·[f(a) + 2·Σ_{i=1}^{n-1} f(a + i·h) + f(b)]
///
/// Both endpoints are always sampled, so `n = 1` is the plain two-point
/// trapezoid.
pub fn trapezoidal<F>(f: &F, a: f64, b: f64, n: usize) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    let bounds = Bounds::new(a, b)?;
    check_partition_count(n)?;
    let h = bounds.step_width(n);

    let mut trace = StepTrace::new();
    trace.push("Compute the partition width h", step_width_detail(a, b, n, h));

    let fa = f(a);
    let fb = f(b);
    trace.push("Values at the bounds",
               format!("f(a) = f({}) = {}, f(b) = f({}) = {}", a, format_value(fa), b, format_value(fb)));

    let mut samples = SampleCollector::with_capacity(n + 1);
    samples.push(a, fa, SampleRole::Endpoint);

    let interior_count = n - 1;
    let mut interior_sum = 0.0;
    for i in 1..n {
        let x = bounds.node(i, h);
        let y = f(x);
        interior_sum += y;
        samples.push(x, y, SampleRole::Interior);
        trace.sample(i - 1, interior_count, y, || {
            (format!("Interior point {}", i), sample_detail(&format!("x_{}", i), x, y))
        });
    }
    samples.push(b, fb, SampleRole::Endpoint);

    let value = (h / 2.0) * (fa + 2.0 * interior_sum + fb);
    trace.push("Final result",
               format!("I = (h/2) × [f(a) + 2 × {} + f(b)] = {}", format_value(interior_sum), format_value(value)));
    debug!("trapezoidal on [{}, {}] with n = {}: {}", a, b, n, value);
    Ok(QuadratureResult::new(value, trace.into_steps(), samples.into_points(), h, n, None, TRAPEZOIDAL_FORMULA))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn square_on_unit_interval_with_four_partitions() {
        let result = trapezoidal(&|x: f64| x * x, 0.0, 1.0, 4).unwrap();
        assert_relative_eq!(result.value(), 0.34375, epsilon = 1e-12);
        assert_eq!(result.step_width(), 0.25);
        assert_eq!(result.partition_count(), 4);
    }

    #[test]
    fn oversized_partition_count_is_an_error() {
        let result = trapezoidal(&|x: f64| x, 0.0, 1.0, usize::MAX / 4);
        assert!(matches!(result, Err(QuadratureError::PartitionCountTooLarge { .. })));
    }

    #[test]
    fn single_partition_is_the_two_point_trapezoid() {
        let result = trapezoidal(&|x: f64| x.exp(), 0.0, 2.0, 1).unwrap();
        assert_relative_eq!(result.value(), 1.0 + 2f64.exp(), epsilon = 1e-12);
        let roles: Vec<SampleRole> = result.points().iter().map(|point| point.role()).collect();
        assert_eq!(roles, vec![SampleRole::Endpoint, SampleRole::Endpoint]);
    }

    #[test]
    fn points_run_from_lower_to_upper_bound() {
        let result = trapezoidal(&|x: f64| x, 1.0, 3.0, 4).unwrap();
        let xs: Vec<f64> = result.points().iter().map(|point| point.x()).collect();
        assert_eq!(xs, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_relative_eq!(result.value(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn trace_starts_with_width_and_ends_with_result() {
        let result = trapezoidal(&|x: f64| x, 0.0, 1.0, 20).unwrap();
        let steps = result.steps();
        assert_eq!(steps[0].description(), "Compute the partition width h");
        assert_eq!(steps[1].description(), "Values at the bounds");
        assert!(steps.iter().filter(|step| step.is_ellipsis()).count() == 1);
        assert_eq!(steps.last().map(|step| step.description()), Some("Final result"));
    }
}
