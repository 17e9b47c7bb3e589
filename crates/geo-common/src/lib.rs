//! Common geospatial types shared across the horizon-grid crates.

pub mod bbox;
pub mod crs;
pub mod position;
pub mod transform;

pub use bbox::{BoundingBox, GeographicBoundingBox};
pub use crs::{CrsCode, CrsParseError};
pub use position::HorizontalPosition;
pub use transform::{transform_position, TransformError};
