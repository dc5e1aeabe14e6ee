//! Approximate indoor positioning from short-range beacon readings.
//!
//! Up to three readings are combined by repeated weighted midpoints: the first
//! two beacons are merged into a combined point carrying a surrogate signal
//! level, which is then merged with the third. All arithmetic stays on the
//! integer grid; the floor (y) of the estimate always comes from the first
//! usable beacon, and beacons are assumed to share that floor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Point;

/// A beacon reading: where the beacon is mounted and how strongly it was heard.
///
/// A level of zero means the beacon was not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beacon {
    pub location: Point,
    pub level: u32,
}

impl Beacon {
    pub fn new(location: Point, level: u32) -> Self {
        Self { location, level }
    }

    pub fn is_detected(&self) -> bool {
        self.level > 0
    }
}

impl fmt::Display for Beacon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}@{}",
            self.location.x, self.location.y, self.location.z, self.level
        )
    }
}

impl FromStr for Beacon {
    type Err = Error;

    /// Parse `x,y,z@level`, e.g. `12,2,40@35`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed =
            || Error::invalid_argument(format!("beacon '{s}' must look like x,y,z@level"));

        let (coordinates, level) = s.trim().split_once('@').ok_or_else(malformed)?;
        let axes = coordinates
            .split(',')
            .map(|axis| axis.trim().parse::<i32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;
        let &[x, y, z] = axes.as_slice() else {
            return Err(malformed());
        };
        let level = level.trim().parse::<u32>().map_err(|_| malformed())?;

        Ok(Beacon::new(Point::new(x, y, z), level))
    }
}

/// Estimate the user's position from up to three beacon readings.
///
/// Missing readings are skipped, so `estimate_position(None, Some(b), None)`
/// behaves like a single-beacon call. Fails with [`Error::InvalidArgument`]
/// when no reading is present, or when the first two readings both have a
/// zero signal level.
pub fn estimate_position(
    first: Option<Beacon>,
    second: Option<Beacon>,
    third: Option<Beacon>,
) -> Result<Point> {
    let beacons: Vec<Beacon> = [first, second, third].into_iter().flatten().collect();
    triangulate(&beacons)
}

/// Slice form of [`estimate_position`]; only the first three beacons are used.
pub fn triangulate(beacons: &[Beacon]) -> Result<Point> {
    let (b1, b2) = match beacons {
        [] => return Err(Error::invalid_argument("no beacon readings supplied")),
        [only] => return Ok(only.location),
        [b1, b2, ..] => (b1, b2),
    };

    let floor = b1.location.y;
    match (b1.level, b2.level) {
        (0, 0) => return Err(Error::invalid_argument("beacons not detected")),
        (0, _) => return Ok(Point::new(b2.location.x, floor, b2.location.z)),
        (_, 0) => return Ok(Point::new(b1.location.x, floor, b1.location.z)),
        _ => {}
    }

    let combined = weighted_midpoint(&b1.location, &b2.location, b1.level, b2.level);
    let estimate = Point::new(combined.point.x, floor, combined.point.z);

    let Some(b3) = beacons.get(2) else {
        return Ok(estimate);
    };
    if !b3.is_detected() {
        return Ok(estimate);
    }

    let refined = weighted_midpoint(&estimate, &b3.location, combined.level, b3.level);
    Ok(Point::new(refined.point.x, floor, refined.point.z))
}

/// Result of merging two readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Midpoint {
    point: Point,
    /// Surrogate signal level used when merging with a further beacon.
    level: u32,
}

/// Weighted midpoint of `p1` and `p2` on the x/z plane.
///
/// `s1` must be non-zero. The offset on each axis is measured from the
/// smaller coordinate; the returned point keeps the y of `p1`.
fn weighted_midpoint(p1: &Point, p2: &Point, s1: u32, s2: u32) -> Midpoint {
    let dx = (i64::from(p2.x) - i64::from(p1.x)).abs();
    let dz = (i64::from(p2.z) - i64::from(p1.z)).abs();
    let divisor = f64::from(s2) / f64::from(s1) + 1.0;

    let offset_x = (dx as f64 / divisor).round() as i64;
    let offset_z = (dz as f64 / divisor).round() as i64;
    let x = i64::from(p1.x.min(p2.x)) + offset_x;
    let z = i64::from(p1.z.min(p2.z)) + offset_z;

    // Whole-unit separation, truncated before weighting.
    let separation = p1.planar_distance_to(p2).trunc();
    let level_offset = (separation / divisor).round() as u32;

    Midpoint {
        point: Point::new(x as i32, p1.y, z as i32),
        level: s1.min(s2).saturating_add(level_offset),
    }
}
