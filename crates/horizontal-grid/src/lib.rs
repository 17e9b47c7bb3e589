//! Horizontal grid domain for projected datasets.
//!
//! A [`ProjectedGrid`] pairs two [`ReferenceableAxis`] instances (one per
//! grid dimension, in projected coordinates) with a projection that maps
//! projected x/y to geographic lon/lat. Queries run the other way:
//!
//! ```text
//! position (any CRS) -> WGS84 -> per-axis lookup -> (x, y) coordinates
//! ```
//!
//! - [`axis`]: one-dimensional monotonic coordinate axes with cell bounds,
//!   extents and binary-search lookup, including longitude wraparound
//! - [`definition`]: plain serializable grid descriptions used to build
//!   grids, plus presets for common model domains
//! - [`grid`]: the grid itself, with containment and index queries and a
//!   lazily built table of per-cell geometry
//! - [`cell`]: grid cells, their centers and four-corner footprints
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizontal_grid::{GridCoordinates2D, GridDefinition, HorizontalPosition, ProjectedGrid};
//! use projection::PlateCarree;
//!
//! let definition = GridDefinition::regular(0.0, 10.0, 3, 0.0, 5.0, 2);
//! let grid = ProjectedGrid::new(definition, Arc::new(PlateCarree::new()))?;
//!
//! let hit = grid.find_index_of(&HorizontalPosition::lon_lat(10.0, 0.0))?;
//! assert_eq!(hit, Some(GridCoordinates2D::new(1, 0)));
//!
//! let cell = grid.cell_at(0, 1)?;
//! assert_eq!(cell.center.x, 10.0);
//! # Ok::<(), horizontal_grid::GridError>(())
//! ```

pub mod axis;
pub mod cell;
pub mod definition;
pub mod error;
pub mod grid;

pub use axis::ReferenceableAxis;
pub use cell::{CellFootprint, GridCell, GridCoordinates2D};
pub use definition::GridDefinition;
pub use error::{GridError, Result};
pub use grid::ProjectedGrid;

// Re-exported so downstream users rarely need geo-common directly.
pub use geo_common::{CrsCode, GeographicBoundingBox, HorizontalPosition};
