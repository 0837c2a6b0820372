use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleRole {
    Left,
    Right,
    Mid,
    Endpoint,
    Interior
}

/// A sampled `(x, f(x))` pair kept for plotting. Rules only emit points
/// whose `y` is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    x: f64,
    y: f64,
    role: SampleRole
}

impl SamplePoint {
    pub fn new(x: f64, y: f64, role: SampleRole) -> SamplePoint {
        SamplePoint { x, y, role }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn role(&self) -> SampleRole {
        self.role
    }
}

/// Collects plot points, dropping non-finite samples.
pub(crate) struct SampleCollector {
    points: Vec<SamplePoint>
}

impl SampleCollector {
    pub fn with_capacity(capacity: usize) -> SampleCollector {
        SampleCollector { points: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, x: f64, y: f64, role: SampleRole) {
        if y.is_finite() {
            self.points.push(SamplePoint::new(x, y, role));
        }
    }

    pub fn into_points(self) -> Vec<SamplePoint> {
        self.points
    }
}
