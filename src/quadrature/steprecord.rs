use serde::Serialize;

/// Number of leading samples a rule writes into its trace before the
/// remainder collapses into a single ellipsis entry. The last sample is
/// always written.
pub const TRACED_LEADING_SAMPLES: usize = 5;

const ELLIPSIS: &str = "...";

pub(crate) fn format_value(value: f64) -> String {
    format!("{:.6}", value)
}

pub(crate) fn format_abscissa(x: f64) -> String {
    format!("{:.4}", x)
}

pub(crate) fn step_width_detail(lower: f64, upper: f64, partition_count: usize, step_width: f64) -> String {
    format!("h = (b - a) / n = ({} - {}) / {} = {}", upper, lower, partition_count, format_value(step_width))
}

pub(crate) fn sample_detail(symbol: &str, x: f64, y: f64) -> String {
    format!("f({}) = f({}) = {}", symbol, format_abscissa(x), format_value(y))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    description: String,
    detail: String
}

impl StepRecord {
    pub fn new(description: String, detail: String) -> StepRecord {
        StepRecord { description, detail }
    }

    pub fn ellipsis() -> StepRecord {
        StepRecord::new(ELLIPSIS.to_owned(), String::new())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_ellipsis(&self) -> bool {
        self.description == ELLIPSIS && self.detail.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleTracing {
    Record,
    Ellipsis,
    Skip
}

fn sample_tracing(position: usize, total: usize) -> SampleTracing {
    if position < TRACED_LEADING_SAMPLES || position + 1 == total {
        SampleTracing::Record
    } else if position == TRACED_LEADING_SAMPLES {
        SampleTracing::Ellipsis
    } else {
        SampleTracing::Skip
    }
}

/// Ordered trace builder shared by the rules.
pub(crate) struct StepTrace {
    steps: Vec<StepRecord>
}

impl StepTrace {
    pub fn new() -> StepTrace {
        StepTrace { steps: Vec::new() }
    }

    pub fn push(&mut self, description: impl Into<String>, detail: impl Into<String>) {
        self.steps.push(StepRecord::new(description.into(), detail.into()));
    }

    /// Records the sample at `position` out of `total` per the
    /// leading-samples-plus-last policy. Non-finite samples are left out
    /// of the trace; the ellipsis marker is still placed.
    pub fn sample(&mut self,
                  position: usize,
                  total: usize,
                  y: f64,
                  describe: impl FnOnce() -> (String, String)) {
        match sample_tracing(position, total) {
            SampleTracing::Record if y.is_finite() => {
                let (description, detail) = describe();
                self.push(description, detail);
            },
            SampleTracing::Ellipsis => self.steps.push(StepRecord::ellipsis()),
            _ => ()
        }
    }

    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }
}
