//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

/// A bounding box in x/y axis order.
///
/// For geographic CRS (EPSG:4326), coordinates are in degrees with x as
/// longitude. For projected CRS, coordinates are in the projection's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Check if this bbox intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

/// A geographic bounding box in longitude/latitude degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicBoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeographicBoundingBox {
    /// Create a new geographic bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// The whole-earth bounding box.
    pub fn global() -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0)
    }

    /// Check if a longitude/latitude point is contained within this box.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Check if this box intersects another.
    pub fn intersects(&self, other: &GeographicBoundingBox) -> bool {
        self.min_lon < other.max_lon
            && self.max_lon > other.min_lon
            && self.min_lat < other.max_lat
            && self.max_lat > other.min_lat
    }

    /// Grow this box just enough to include the given point.
    pub fn expand_to_include(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
    }
}

impl From<GeographicBoundingBox> for BoundingBox {
    fn from(geo: GeographicBoundingBox) -> Self {
        BoundingBox::new(geo.min_lon, geo.min_lat, geo.max_lon, geo.max_lat)
    }
}

impl From<BoundingBox> for GeographicBoundingBox {
    fn from(bbox: BoundingBox) -> Self {
        GeographicBoundingBox::new(bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_height() {
        let bbox = BoundingBox::new(-125.0, 24.0, -66.0, 50.0);
        assert_eq!(bbox.width(), 59.0);
        assert_eq!(bbox.height(), 26.0);
    }

    #[test]
    fn test_contains_point() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 5.0);
        assert!(bbox.contains_point(5.0, 2.5));
        assert!(bbox.contains_point(0.0, 0.0));
        assert!(bbox.contains_point(10.0, 5.0));
        assert!(!bbox.contains_point(10.1, 2.5));
        assert!(!bbox.contains_point(5.0, -0.1));
    }

    #[test]
    fn test_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let c = BoundingBox::new(20.0, 20.0, 30.0, 30.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_geographic_expand() {
        let mut geo = GeographicBoundingBox::new(0.0, 0.0, 0.0, 0.0);
        geo.expand_to_include(-10.0, 5.0);
        geo.expand_to_include(20.0, -3.0);

        assert_eq!(geo.min_lon, -10.0);
        assert_eq!(geo.max_lon, 20.0);
        assert_eq!(geo.min_lat, -3.0);
        assert_eq!(geo.max_lat, 5.0);
    }

    #[test]
    fn test_geographic_roundtrip() {
        let geo = GeographicBoundingBox::new(-125.0, 24.0, -66.0, 50.0);
        let bbox: BoundingBox = geo.into();
        let back: GeographicBoundingBox = bbox.into();
        assert_eq!(geo, back);
    }

    #[test]
    fn test_serde_roundtrip() {
        let geo = GeographicBoundingBox::new(-125.0, 24.0, -66.0, 50.0);
        let json = serde_json::to_string(&geo).unwrap();
        let back: GeographicBoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(geo, back);
    }
}
