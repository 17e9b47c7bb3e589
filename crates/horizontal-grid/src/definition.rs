//! Grid definition inputs.

use geo_common::GeographicBoundingBox;
use serde::{Deserialize, Serialize};

/// Raw description of a projected grid: the coordinate arrays for both
/// axes and an optional precomputed geographic bounding box.
///
/// This is the constructor input for a projected grid. Axis values are
/// validated when the grid is built, not here, so definitions can be
/// freely deserialized and assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDefinition {
    /// X axis coordinate values in projected units
    pub x_coords: Vec<f64>,
    /// Y axis coordinate values in projected units
    pub y_coords: Vec<f64>,
    /// Precomputed geographic bounding box, if the source provides one
    pub geographic_bbox: Option<GeographicBoundingBox>,
}

impl GridDefinition {
    /// Create a definition from explicit coordinate arrays.
    pub fn new(x_coords: Vec<f64>, y_coords: Vec<f64>) -> Self {
        Self {
            x_coords,
            y_coords,
            geographic_bbox: None,
        }
    }

    /// Create a regularly spaced definition from start/step/count per axis.
    pub fn regular(
        x_start: f64,
        x_step: f64,
        nx: usize,
        y_start: f64,
        y_step: f64,
        ny: usize,
    ) -> Self {
        Self::new(
            (0..nx).map(|i| x_start + x_step * i as f64).collect(),
            (0..ny).map(|j| y_start + y_step * j as f64).collect(),
        )
    }

    /// Attach a precomputed geographic bounding box from the source,
    /// sparing the grid its own derivation pass.
    pub fn with_geographic_bbox(mut self, bbox: GeographicBoundingBox) -> Self {
        self.geographic_bbox = Some(bbox);
        self
    }
}

/// Definitions of well-known model grids.
pub mod presets {
    use super::GridDefinition;

    /// COSMO-EU 7km rotated-pole grid: 665 x 657 points at 0.0625 degree
    /// spacing, origin at rotated (-18, -20).
    ///
    /// Pair with a rotated-pole projection whose pole sits at true
    /// (-170, 40).
    pub fn cosmo_eu() -> GridDefinition {
        GridDefinition::regular(-18.0, 0.0625, 665, -20.0, 0.0625, 657)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_definition() {
        let def = GridDefinition::regular(0.0, 10.0, 3, 0.0, 5.0, 2);
        assert_eq!(def.x_coords, vec![0.0, 10.0, 20.0]);
        assert_eq!(def.y_coords, vec![0.0, 5.0]);
        assert!(def.geographic_bbox.is_none());
    }

    #[test]
    fn test_with_geographic_bbox() {
        let bbox = GeographicBoundingBox::new(-10.0, 40.0, 30.0, 60.0);
        let def = GridDefinition::regular(0.0, 1.0, 10, 0.0, 1.0, 10).with_geographic_bbox(bbox);
        assert_eq!(def.geographic_bbox, Some(bbox));
    }

    #[test]
    fn test_cosmo_eu_preset() {
        let def = presets::cosmo_eu();
        assert_eq!(def.x_coords.len(), 665);
        assert_eq!(def.y_coords.len(), 657);
        assert_eq!(def.x_coords[0], -18.0);
        assert_eq!(def.y_coords[0], -20.0);
        assert!((def.x_coords[1] - -17.9375).abs() < 1e-12);
    }

    #[test]
    fn test_serde_roundtrip() {
        let def = GridDefinition::regular(0.0, 10.0, 3, 0.0, 5.0, 2)
            .with_geographic_bbox(GeographicBoundingBox::new(-5.0, -2.5, 25.0, 7.5));
        let json = serde_json::to_string(&def).unwrap();
        let back: GridDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }
}
