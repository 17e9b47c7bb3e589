//! Lambert Conformal Conic projection.
//!
//! Maps a cone tangent or secant to the Earth's surface onto a flat plane.
//! Common for mid-latitude limited-area grids. Projected coordinates are
//! meters from the projection origin.
//!
//! The projection parameters are:
//! - Reference longitude (lon0): the central meridian
//! - Reference latitude (lat0): the latitude of the origin
//! - Standard parallel(s): latin1 and latin2 (can be equal for a tangent cone)

use std::f64::consts::PI;

use crate::Projection;

/// Earth radius for the spherical Lambert formulas (meters).
const EARTH_RADIUS: f64 = 6_371_229.0;

/// Lambert Conformal Conic point transform.
///
/// Converts between projected (x, y) meters relative to the origin at
/// (lon0, lat0) and geographic lon/lat degrees.
#[derive(Debug, Clone)]
pub struct LambertConformal {
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of the origin in radians
    pub lat0: f64,
    /// First standard parallel in radians
    pub latin1: f64,
    /// Second standard parallel in radians
    pub latin2: f64,
    /// Cone constant
    n: f64,
    /// Scale constant
    f: f64,
    /// Rho at the origin latitude
    rho0: f64,
}

impl LambertConformal {
    /// Create a new Lambert Conformal projection.
    ///
    /// # Arguments
    /// * `lon0_deg` - Central meridian (degrees)
    /// * `lat0_deg` - Latitude of the origin (degrees)
    /// * `latin1_deg` - First standard parallel (degrees)
    /// * `latin2_deg` - Second standard parallel (degrees)
    pub fn new(lon0_deg: f64, lat0_deg: f64, latin1_deg: f64, latin2_deg: f64) -> Self {
        let lon0 = lon0_deg.to_radians();
        let lat0 = lat0_deg.to_radians();
        let latin1 = latin1_deg.to_radians();
        let latin2 = latin2_deg.to_radians();

        // Cone constant
        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((PI / 4.0 + latin2 / 2.0).tan() / (PI / 4.0 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };

        // Scale constant
        let f = (latin1.cos() * (PI / 4.0 + latin1 / 2.0).tan().powf(n)) / n;

        // Compute rho at the origin latitude
        let rho0 = EARTH_RADIUS * f / (PI / 4.0 + lat0 / 2.0).tan().powf(n);

        Self {
            lon0,
            lat0,
            latin1,
            latin2,
            n,
            f,
            rho0,
        }
    }

    /// CONUS-style projection with a tangent cone at 38.5N and central
    /// meridian 97.5W, the parameters used by 3km CONUS model grids.
    pub fn conus() -> Self {
        Self::new(-97.5, 38.5, 38.5, 38.5)
    }
}

impl Projection for LambertConformal {
    fn name(&self) -> &'static str {
        "lambert_conformal"
    }

    fn proj_to_lon_lat(&self, x: f64, y: f64) -> (f64, f64) {
        // Polar coordinates relative to the cone apex
        let rho = (x * x + (self.rho0 - y) * (self.rho0 - y)).sqrt();
        let rho = if self.n < 0.0 { -rho } else { rho };

        let theta = x.atan2(self.rho0 - y);

        let lat = 2.0 * ((EARTH_RADIUS * self.f / rho).powf(1.0 / self.n)).atan() - PI / 2.0;
        let lon = self.lon0 + theta / self.n;

        (lon.to_degrees(), lat.to_degrees())
    }

    fn lon_lat_to_proj(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lat_r = lat.to_radians();
        let lon_r = lon.to_radians();

        // Normalize longitude difference to [-pi, pi]
        let mut dlon = lon_r - self.lon0;
        while dlon > PI {
            dlon -= 2.0 * PI;
        }
        while dlon < -PI {
            dlon += 2.0 * PI;
        }

        // Radial distance for this latitude
        let rho = EARTH_RADIUS * self.f / (PI / 4.0 + lat_r / 2.0).tan().powf(self.n);

        // Angle from the central meridian
        let theta = self.n * dlon;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_coords_approx_eq;

    #[test]
    fn test_origin_maps_to_zero() {
        let proj = LambertConformal::conus();

        let (x, y) = proj.lon_lat_to_proj(-97.5, 38.5);
        assert!(x.abs() < 1e-6, "x should be ~0, got {}", x);
        assert!(y.abs() < 1e-6, "y should be ~0, got {}", y);

        let (lon, lat) = proj.proj_to_lon_lat(0.0, 0.0);
        assert_coords_approx_eq!((lon, lat), (-97.5, 38.5), 1e-9);
    }

    #[test]
    fn test_roundtrip() {
        let proj = LambertConformal::conus();

        for (x, y) in [
            (0.0, 0.0),
            (500_000.0, 250_000.0),
            (-1_200_000.0, 800_000.0),
            (300_000.0, -600_000.0),
        ] {
            let (lon, lat) = proj.proj_to_lon_lat(x, y);
            let (bx, by) = proj.lon_lat_to_proj(lon, lat);
            assert_coords_approx_eq!((bx, by), (x, y), 1e-4);
        }
    }

    #[test]
    fn test_axis_directions() {
        let proj = LambertConformal::conus();

        // North of the origin: positive y, x stays on the meridian
        let (x, y) = proj.lon_lat_to_proj(-97.5, 43.5);
        assert!(x.abs() < 1e-6, "x should be ~0, got {}", x);
        assert!(y > 100_000.0, "y should be well north, got {}", y);

        // East of the origin: positive x
        let (x, _y) = proj.lon_lat_to_proj(-90.0, 38.5);
        assert!(x > 100_000.0, "x should be well east, got {}", x);
    }

    #[test]
    fn test_secant_cone() {
        // Two distinct standard parallels (GFS-style CONUS subset)
        let proj = LambertConformal::new(-95.0, 25.0, 25.0, 45.0);

        let (x, y) = proj.lon_lat_to_proj(-95.0, 25.0);
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);

        let (lon, lat) = proj.proj_to_lon_lat(250_000.0, 1_500_000.0);
        let (bx, by) = proj.lon_lat_to_proj(lon, lat);
        assert_coords_approx_eq!((bx, by), (250_000.0, 1_500_000.0), 1e-4);
    }
}
