use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer grid coordinates inside a building.
///
/// `y` is the vertical axis and doubles as the floor index for nodes, so two
/// points are on the same floor exactly when their `y` values match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Floor index encoded by this point.
    pub fn floor(&self) -> i32 {
        self.y
    }

    /// Calculate the Euclidean distance to another point over all three axes.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Euclidean distance across the floor plane (x/z), ignoring the floor index.
    pub fn planar_distance_to(&self, other: &Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dz = f64::from(self.z) - f64::from(other.z);
        (dx * dx + dz * dz).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_covers_all_axes() {
        let a = Point::new(0, 0, 0);
        let b = Point::new(2, 3, 6);
        assert!((a.distance_to(&b) - 7.0).abs() < f64::EPSILON);
        assert!((b.distance_to(&a) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn planar_distance_ignores_floor() {
        let a = Point::new(0, 1, 0);
        let b = Point::new(3, 4, 4);
        assert!((a.planar_distance_to(&b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(b.floor(), 4);
    }
}
