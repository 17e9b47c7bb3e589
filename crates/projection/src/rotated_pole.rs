//! Rotated-pole projection.
//!
//! Used by limited-area models (COSMO, HIRLAM, RACMO) that move the
//! coordinate pole so their domain sits near the rotated equator, keeping
//! cells close to square. Grid coordinates are rotated longitude/latitude
//! in degrees; the transform to true lon/lat is a composition of three
//! axis rotations on the unit sphere.
//!
//! The projection parameters are the true longitude and latitude of the
//! rotated north pole.

use std::f64::consts::PI;

use nalgebra::{Rotation3, Vector3};

use crate::{AxisRole, Projection};

/// Rotated-pole projection defined by the true position of the rotated
/// north pole.
#[derive(Debug, Clone)]
pub struct RotatedPole {
    /// True longitude of the rotated pole in degrees
    pub pole_lon: f64,
    /// True latitude of the rotated pole in degrees
    pub pole_lat: f64,
    /// Rotated coordinates to true coordinates
    rotation: Rotation3<f64>,
    /// True coordinates to rotated coordinates
    inverse: Rotation3<f64>,
}

impl RotatedPole {
    /// Create a rotated-pole projection from the true position of the
    /// rotated north pole, in degrees.
    pub fn new(pole_lon: f64, pole_lat: f64) -> Self {
        // Rotated -> true: undo the pole shift by rotating about the y
        // axis through the pole's colatitude, then about the z axis to
        // the pole's meridian. The leading half-turn puts the rotated
        // origin on the far side of the pole, matching the convention
        // where the grid origin maps to (pole_lon + 180, 90 - pole_lat).
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), pole_lon.to_radians())
            * Rotation3::from_axis_angle(&Vector3::y_axis(), (90.0 - pole_lat).to_radians())
            * Rotation3::from_axis_angle(&Vector3::z_axis(), PI);
        let inverse = rotation.inverse();

        Self {
            pole_lon,
            pole_lat,
            rotation,
            inverse,
        }
    }

    fn to_unit_vector(lon_deg: f64, lat_deg: f64) -> Vector3<f64> {
        let lon = lon_deg.to_radians();
        let lat = lat_deg.to_radians();
        Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    fn to_lon_lat(v: &Vector3<f64>) -> (f64, f64) {
        let lat = v.z.clamp(-1.0, 1.0).asin().to_degrees();
        let lon = v.y.atan2(v.x).to_degrees();
        (lon, lat)
    }
}

impl Projection for RotatedPole {
    fn name(&self) -> &'static str {
        "rotated_pole"
    }

    fn proj_to_lon_lat(&self, x: f64, y: f64) -> (f64, f64) {
        let v = self.rotation * Self::to_unit_vector(x, y);
        Self::to_lon_lat(&v)
    }

    fn lon_lat_to_proj(&self, lon: f64, lat: f64) -> (f64, f64) {
        let v = self.inverse * Self::to_unit_vector(lon, lat);
        Self::to_lon_lat(&v)
    }

    /// The x axis of a rotated-pole grid is a longitude axis and wraps at
    /// 0/360 degrees.
    fn is_longitude_axis(&self, role: AxisRole) -> bool {
        role == AxisRole::X
    }
}
