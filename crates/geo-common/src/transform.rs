//! Position transforms between the supported reference systems.

use crate::{CrsCode, HorizontalPosition};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Earth radius used by the spherical Web Mercator formulas (meters).
const WEB_MERCATOR_RADIUS: f64 = 6_378_137.0;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("No transform available from {from} to {to}")]
    Unsupported { from: CrsCode, to: CrsCode },
}

/// Re-express a position in the target reference system.
///
/// NAD83 and WGS84 geographic coordinates are treated as equivalent at the
/// accuracy required for grid indexing. Web Mercator uses the spherical
/// formulas. Transforms involving any other projected CRS return
/// [`TransformError::Unsupported`].
pub fn transform_position(
    pos: &HorizontalPosition,
    target: CrsCode,
) -> Result<HorizontalPosition, TransformError> {
    if pos.crs == target {
        return Ok(*pos);
    }

    match (pos.crs, target) {
        (CrsCode::Epsg4326, CrsCode::Epsg4269) | (CrsCode::Epsg4269, CrsCode::Epsg4326) => {
            Ok(HorizontalPosition::new(pos.x, pos.y, target))
        }
        (CrsCode::Epsg3857, CrsCode::Epsg4326) | (CrsCode::Epsg3857, CrsCode::Epsg4269) => {
            let (lon, lat) = mercator_to_lon_lat(pos.x, pos.y);
            Ok(HorizontalPosition::new(lon, lat, target))
        }
        (CrsCode::Epsg4326, CrsCode::Epsg3857) | (CrsCode::Epsg4269, CrsCode::Epsg3857) => {
            let (x, y) = lon_lat_to_mercator(pos.x, pos.y);
            Ok(HorizontalPosition::new(x, y, target))
        }
        (from, to) => Err(TransformError::Unsupported { from, to }),
    }
}

fn mercator_to_lon_lat(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / WEB_MERCATOR_RADIUS).to_degrees();
    let lat = (2.0 * (y / WEB_MERCATOR_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
    (lon, lat)
}

fn lon_lat_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let x = WEB_MERCATOR_RADIUS * lon.to_radians();
    let y = WEB_MERCATOR_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}
