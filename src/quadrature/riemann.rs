use log::debug;
use serde::{
    Deserialize,
    Serialize
};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiemannVariant {
    Left,
    Right,
    Midpoint
}

impl RiemannVariant {
    /// Abscissa of the `i`-th sample, `i = 0..n-1`.
    fn abscissa(&self, bounds: &Bounds, i: usize, step_width: f64) -> f64 {
        match self {
            RiemannVariant::Left => bounds.node(i, step_width),
            RiemannVariant::Right => bounds.node(i + 1, step_width),
            RiemannVariant::Midpoint => bounds.lower() + (i as f64 + 0.5) * step_width
        }
    }

    fn role(&self) -> SampleRole {
        match self {
            RiemannVariant::Left => SampleRole::Left,
            RiemannVariant::Right => SampleRole::Right,
            RiemannVariant::Midpoint => SampleRole::Mid
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            RiemannVariant::Left => "I ≈ h × Σ_{i=0}^{n-1} f(xᵢ)",
            RiemannVariant::Right => "I ≈ h × Σ_{i=1}^{n} f(xᵢ)",
            RiemannVariant::Midpoint => "I ≈ h × Σ_{i=0}^{n-1} f(x̄ᵢ)"
        }
    }

    fn describe(&self, i: usize, x: f64, y: f64) -> (String, String) {
        match self {
            RiemannVariant::Left => (format!("Partition {}", i + 1), sample_detail(&format!("x_{}", i), x, y)),
            RiemannVariant::Right => (format!("Partition {}", i + 1), sample_detail(&format!("x_{}", i + 1), x, y)),
            RiemannVariant::Midpoint => (format!("Partition {} (midpoint)", i + 1), sample_detail(&format!("x̄_{}", i), x, y))
        }
    }
}

/// Riemann sum with `n` equal partitions, sampled at the left edge,
/// right edge or midpoint of each partition.
pub fn riemann<F>(f: &F, a: f64, b: f64, n: usize, variant: RiemannVariant) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    let bounds = Bounds::new(a, b)?;
    check_partition_count(n)?;
    let h = bounds.step_width(n);

    let mut trace = StepTrace::new();
    trace.push("Compute the partition width h", step_width_detail(a, b, n, h));

    let mut samples = SampleCollector::with_capacity(n);
    let mut sum = 0.0;
    for i in 0..n {
        let x = variant.abscissa(&bounds, i, h);
        let y = f(x);
        sum += y;
        samples.push(x, y, variant.role());
        trace.sample(i, n, y, || variant.describe(i, x, y));
    }

    let value = h * sum;
    trace.push("Final result",
               format!("I = h × Σf(xᵢ) = {} × {} = {}", format_value(h), format_value(sum), format_value(value)));
    debug!("riemann {:?} on [{}, {}] with n = {}: {}", variant, a, b, n, value);
    Ok(QuadratureResult::new(value, trace.into_steps(), samples.into_points(), h, n, None, variant.formula()))
}

pub fn riemann_left<F>(f: &F, a: f64, b: f64, n: usize) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    riemann(f, a, b, n, RiemannVariant::Left)
}

pub fn riemann_right<F>(f: &F, a: f64, b: f64, n: usize) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    riemann(f, a, b, n, RiemannVariant::Right)
}

pub fn riemann_midpoint<F>(f: &F, a: f64, b: f64, n: usize) -> Result<QuadratureResult, QuadratureError>
    where F: Fn(f64) -> f64 + ?Sized {
    riemann(f, a, b, n, RiemannVariant::Midpoint)
}
