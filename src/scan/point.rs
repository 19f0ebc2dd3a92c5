//! Planar point value type.

use serde::{Deserialize, Serialize};

/// A target position in the two-axis workspace. Pure value; two points with
/// equal coordinates are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-axis coordinate.
    pub x: f64,
    /// Y-axis coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
