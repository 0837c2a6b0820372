use log::debug;

use super::bounds::{
    check_partition_count,
    Bounds
};
use super::partition::Admissibility;
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

pub const SIMPSON_13_FORMULA: &str = "I ≈ (h/3) × [f(x₀) + 4Σf(x_odd) + 2Σf(x_even) + f(xₙ)]";
pub const SIMPSON_38_FORMULA: &str = "I ≈ (3h/8) × [f(x₀) + 3Σf(xᵢ) + 2Σf(x₃ₖ) + f(xₙ)]";

// ─────────────────────────────────────────────────────────────────────────────
// Closed Newton-Cotes composites
// ─────────────────────────────────────────────────────────────────────────────
//
//   I ≈ c·h·[f(x₀) + Σ w_i·f(x_i) + f(xₙ)]
//
//   Simpson 1/3: c = 1/3, w_i = 4 (i odd), 2 (i even), n even
//   Simpson 3/8: c = 3/8, w_i = 2 (3 | i), 3 otherwise, 3 | n

fn simpson13_weight(i: usize) -> f64 {
    if i % 2 == 1 { 4.0 } else { 2.0 }
}

fn simpson38_weight(i: usize) -> f64 {
    if i % 3 == 0 { 2.0 } else { 3.0 }
}

struct CompositeRule {
    name: &'static str,
    admissibility: Admissibility,
    scale: f64,
    interior_weight: fn(usize) -> f64,
    formula: &'static str
}

const SIMPSON_13: CompositeRule = CompositeRule {
    name: "simpson 1/3",
    admissibility: Admissibility::Even,
    scale: 1.0 / 3.0,
    interior_weight: simpson13_weight,
    formula: SIMPSON_13_FORMULA
};

const SIMPSON_38: CompositeRule = CompositeRule {
    name: "simpson 3/8",
    admissibility: Admissibility::MultipleOfThree,
    scale: 3.0 / 8.0,
    interior_weight: simpson38_weight,
    formula: SIMPSON_38_FORMULA
};

fn composite<F>(f: &F, a: f64, b: f64, n: usize, rule: &CompositeRule) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    let bounds = Bounds::new(a, b)?;
    check_partition_count(n)?;
    let (n, adjustment) = rule.admissibility.normalize(n);
    let h = bounds.step_width(n);

    let mut trace = StepTrace::new();
    if let Some(adjustment) = &adjustment {
        trace.push("Adjust the partition count", adjustment.to_string());
    }
    trace.push("Compute the partition width h", step_width_detail(a, b, n, h));

    let fa = f(a);
    let fb = f(b);
    trace.push("Values at the bounds",
               format!("f(a) = f({}) = {}, f(b) = f({}) = {}", a, format_value(fa), b, format_value(fb)));

    let mut samples = SampleCollector::with_capacity(n + 1);
    samples.push(a, fa, SampleRole::Endpoint);

    let interior_count = n - 1;
    let mut weighted_sum = fa + fb;
    for i in 1..n {
        let x = bounds.node(i, h);
        let y = f(x);
        let weight = (rule.interior_weight)(i);
        weighted_sum += weight * y;
        samples.push(x, y, SampleRole::Interior);
        trace.sample(i - 1, interior_count, y, || {
            (format!("Point x_{} (weight {})", i, weight), sample_detail(&format!("x_{}", i), x, y))
        });
    }
    samples.push(b, fb, SampleRole::Endpoint);

    let value = rule.scale * h * weighted_sum;
    trace.push("Final result", format!("{} = {}", rule.formula, format_value(value)));
    debug!("{} on [{}, {}] with n = {}: {}", rule.name, a, b, n, value);
    Ok(QuadratureResult::new(value, trace.into_steps(), samples.into_points(), h, n, adjustment, rule.formula))
}

/// Composite Simpson 1/3 rule. An odd `n` runs as `n + 1`; the change
/// is reported through [`QuadratureResult::adjustment`].
pub fn simpson13<F>(f: &F, a: f64, b: f64, n: usize) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    composite(f, a, b, n, &SIMPSON_13)
}

/// Composite Simpson 3/8 rule. `n` runs as `ceil(n/3)·3`; the change is
/// reported through [`QuadratureResult::adjustment`].
pub fn simpson38<F>(f: &F, a: f64, b: f64, n: usize) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    composite(f, a, b, n, &SIMPSON_38)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn simpson13_is_exact_for_square_on_unit_interval() {
        let result = simpson13(&|x: f64| x * x, 0.0, 1.0, 4).unwrap();
        assert_relative_eq!(result.value(), 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(result.adjusted_partition_count(), None);
    }

    #[test]
    fn simpson13_adjusts_odd_counts() {
        let cube = |x: f64| x * x * x - x;
        let adjusted = simpson13(&cube, -1.0, 2.0, 5).unwrap();
        let direct = simpson13(&cube, -1.0, 2.0, 6).unwrap();
        assert_eq!(adjusted.value(), direct.value());
        assert_eq!(adjusted.adjusted_partition_count(), Some(6));
        assert_eq!(adjusted.partition_count(), 6);
        assert_eq!(adjusted.steps()[0].description(), "Adjust the partition count");
        assert_eq!(adjusted.steps()[0].detail(), "n must be even: adjusted 5 -> 6");
    }

    #[test]
    fn simpson38_adjusts_to_next_multiple_of_three() {
        let f = |x: f64| x.sin();
        let adjusted = simpson38(&f, 0.0, 1.0, 4).unwrap();
        let direct = simpson38(&f, 0.0, 1.0, 6).unwrap();
        assert_eq!(adjusted.value(), direct.value());
        assert_eq!(adjusted.adjusted_partition_count(), Some(6));
    }

    #[test]
    fn simpson13_weights_alternate() {
        assert_eq!((1..5).map(simpson13_weight).collect::<Vec<f64>>(), vec![4.0, 2.0, 4.0, 2.0]);
    }

    #[test]
    fn simpson38_is_exact_for_cubics() {
        let result = simpson38(&|x: f64| x * x * x, 0.0, 2.0, 3).unwrap();
        assert_relative_eq!(result.value(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson38_weights_follow_the_three_pattern() {
        assert_eq!((1..6).map(simpson38_weight).collect::<Vec<f64>>(), vec![3.0, 3.0, 2.0, 3.0, 3.0]);
        let result = simpson38(&|x: f64| x, 0.0, 6.0, 6).unwrap();
        assert_relative_eq!(result.value(), 18.0, epsilon = 1e-12);
        assert_eq!(result.points().len(), 7);
    }

    #[test]
    fn simpson_beats_trapezoid_on_sine() {
        let f = |x: f64| x.sin();
        let pi = std::f64::consts::PI;
        let simpson = simpson13(&f, 0.0, pi, 10).unwrap();
        let trapezoid = super::super::trapezoidal::trapezoidal(&f, 0.0, pi, 10).unwrap();
        assert!((simpson.value() - 2.0).abs() < (trapezoid.value() - 2.0).abs());
    }
}
