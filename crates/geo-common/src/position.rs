//! Horizontal positions tagged with their reference system.

use crate::CrsCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D position in a horizontal coordinate reference system.
///
/// `x` is longitude/easting and `y` is latitude/northing, in the units of
/// the tagged CRS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    pub x: f64,
    pub y: f64,
    pub crs: CrsCode,
}

impl HorizontalPosition {
    /// Create a new position in the given reference system.
    pub fn new(x: f64, y: f64, crs: CrsCode) -> Self {
        Self { x, y, crs }
    }

    /// Create a WGS84 longitude/latitude position.
    pub fn lon_lat(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, CrsCode::Epsg4326)
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.crs)
    }
}
