//! Straight-line geometry on the simulation plane.
//!
//! Coordinates are in arbitrary "meters"; one meter of flight takes one
//! simulated minute.

use serde::{Deserialize, Serialize};

/// A point on the simulation plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        distance(*self, other)
    }
}

/// Euclidean distance between two points.
///
/// Non-finite coordinates yield `NaN`; callers validate their input first.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Flight time in whole minutes between two points.
///
/// The rounded value doubles as the energy distance of the trip.
pub fn trip_minutes(from: Point, to: Point) -> f64 {
    distance(from, to).round()
}
