//! Plate carrée (equirectangular) projection.
//!
//! Grid coordinates are already longitude/latitude degrees, so both
//! transforms are the identity.

use crate::Projection;

/// Identity projection for grids whose axes are plain lon/lat degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlateCarree;

impl PlateCarree {
    pub fn new() -> Self {
        Self
    }
}

impl Projection for PlateCarree {
    fn name(&self) -> &'static str {
        "plate_carree"
    }

    fn proj_to_lon_lat(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn lon_lat_to_proj(&self, lon: f64, lat: f64) -> (f64, f64) {
        (lon, lat)
    }
}
