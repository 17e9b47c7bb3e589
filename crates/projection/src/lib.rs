//! Map projections from projected grid coordinates to geographic lon/lat.
//!
//! Grids are defined on axes in a projected coordinate system; the
//! [`Projection`] trait supplies the forward transform to geographic
//! coordinates and flags axes that carry longitude values (rotated-pole
//! grids alias their x axis to longitude, so that axis wraps at 360
//! degrees).

pub mod lambert;
pub mod plate_carree;
pub mod rotated_pole;

pub use lambert::LambertConformal;
pub use plate_carree::PlateCarree;
pub use rotated_pole::RotatedPole;

/// Identifies which grid axis a query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    X,
    Y,
}

/// A point transform between a projected coordinate system and geographic
/// longitude/latitude in degrees.
pub trait Projection: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Transform a point in projected coordinates to (longitude, latitude)
    /// in degrees.
    fn proj_to_lon_lat(&self, x: f64, y: f64) -> (f64, f64);

    /// Transform (longitude, latitude) in degrees to projected coordinates.
    fn lon_lat_to_proj(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Whether the given axis carries longitude values and therefore wraps
    /// at 360 degrees.
    fn is_longitude_axis(&self, _role: AxisRole) -> bool {
        false
    }
}
