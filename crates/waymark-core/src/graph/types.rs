use serde::Serialize;

/// Accumulated distance along a path, in edge-weight units.
///
/// Weights are non-negative; `Weight::INFINITY` is the "not yet reached"
/// sentinel used in distance tables and queue priorities.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(weight as f64)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

/// Shortest route between two vertices.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    /// Vertex ids in order, source first, destination last.
    pub path: Vec<String>,
    /// Summed edge weight along `path`.
    pub total_weight: f64,
    pub hops: usize,
}
