//! Projected horizontal grids.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use geo_common::{
    transform_position, BoundingBox, CrsCode, GeographicBoundingBox, HorizontalPosition,
};
use projection::{AxisRole, Projection};

use crate::axis::ReferenceableAxis;
use crate::cell::{CellFootprint, GridCell, GridCoordinates2D};
use crate::definition::GridDefinition;
use crate::error::{GridError, Result};

/// Subdivisions per grid edge when deriving the geographic bounding box
/// by sampling.
const EDGE_SAMPLES: usize = 10;

/// A two-dimensional horizontal grid defined on projected axes, with a
/// projection to geographic lon/lat.
///
/// Queries accept positions in any supported reference system; they are
/// first re-expressed in the grid's query system (WGS84) and then tested
/// against the axis extents. The per-cell table of centers and footprints
/// is built lazily on first access and cached for the life of the grid.
/// The grid is immutable apart from that one-time build, so it can be
/// shared freely across threads.
pub struct ProjectedGrid {
    projection: Arc<dyn Projection>,
    x_axis: ReferenceableAxis,
    y_axis: ReferenceableAxis,
    bbox: GeographicBoundingBox,
    cells: OnceCell<Vec<GridCell>>,
}

impl ProjectedGrid {
    /// Build a grid from a definition and a projection.
    ///
    /// Axis values are validated here, so malformed definitions fail at
    /// construction rather than at query time. The x axis wraps at 360
    /// degrees when the projection flags it as a longitude axis. The
    /// geographic bounding box is taken from the definition when present,
    /// otherwise derived once by sampling the grid outline through the
    /// projection.
    pub fn new(definition: GridDefinition, projection: Arc<dyn Projection>) -> Result<Self> {
        let x_axis = ReferenceableAxis::new(
            definition.x_coords,
            projection.is_longitude_axis(AxisRole::X),
        )?;
        let y_axis = ReferenceableAxis::new(
            definition.y_coords,
            projection.is_longitude_axis(AxisRole::Y),
        )?;

        let bbox = match definition.geographic_bbox {
            Some(bbox) => bbox,
            None => derive_geographic_bbox(projection.as_ref(), &x_axis, &y_axis),
        };

        debug!(
            projection = projection.name(),
            x_size = x_axis.size(),
            y_size = y_axis.size(),
            "constructed projected grid"
        );

        Ok(Self {
            projection,
            x_axis,
            y_axis,
            bbox,
            cells: OnceCell::new(),
        })
    }

    /// The reference system grid queries are expressed in. Always WGS84;
    /// the axes themselves live in the projected system.
    pub fn query_crs(&self) -> CrsCode {
        CrsCode::Epsg4326
    }

    /// The grid's x (column) axis.
    pub fn x_axis(&self) -> &ReferenceableAxis {
        &self.x_axis
    }

    /// The grid's y (row) axis.
    pub fn y_axis(&self) -> &ReferenceableAxis {
        &self.y_axis
    }

    /// Number of columns.
    pub fn x_size(&self) -> usize {
        self.x_axis.size()
    }

    /// Number of rows.
    pub fn y_size(&self) -> usize {
        self.y_axis.size()
    }

    /// Total number of cells.
    pub fn size(&self) -> u64 {
        self.x_axis.size() as u64 * self.y_axis.size() as u64
    }

    /// The grid's geographic bounding box, computed once at construction.
    pub fn geographic_bounding_box(&self) -> GeographicBoundingBox {
        self.bbox
    }

    /// The same box in x/y form (x longitude, y latitude).
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox.into()
    }

    /// Check whether a position falls within the grid's coverage.
    ///
    /// Both axes must contain the (possibly transformed) coordinate.
    /// Fails only when the position's reference system cannot be
    /// transformed to the query system.
    pub fn contains(&self, position: &HorizontalPosition) -> Result<bool> {
        let pos = self.normalize_to_query_crs(position)?;
        Ok(self.x_axis.contains(pos.x) && self.y_axis.contains(pos.y))
    }

    /// Find the cell whose bounds contain the given position.
    ///
    /// Returns `Ok(None)` when the position lies outside the grid's
    /// coverage on either axis.
    pub fn find_index_of(&self, position: &HorizontalPosition) -> Result<Option<GridCoordinates2D>> {
        let pos = self.normalize_to_query_crs(position)?;
        let x = self.x_axis.find_index_of(pos.x);
        let y = self.y_axis.find_index_of(pos.y);
        Ok(match (x, y) {
            (Some(x), Some(y)) => Some(GridCoordinates2D::new(x, y)),
            _ => None,
        })
    }

    /// The cell at row `y`, column `x`.
    ///
    /// The full cell table is built on first access; subsequent calls
    /// return cached values.
    pub fn cell_at(&self, y: usize, x: usize) -> Result<&GridCell> {
        if y >= self.y_size() {
            return Err(GridError::IndexOutOfRange {
                index: y,
                size: self.y_size(),
            });
        }
        if x >= self.x_size() {
            return Err(GridError::IndexOutOfRange {
                index: x,
                size: self.x_size(),
            });
        }
        Ok(&self.cell_table()[y * self.x_size() + x])
    }

    /// Iterate all cells in row-major order, x varying fastest, matching
    /// a flattened `y_size x x_size` array.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.cell_table().iter()
    }

    /// Re-express a query position in the grid's query system.
    ///
    /// Applied before any axis lookup so `contains` and `find_index_of`
    /// treat positions identically.
    fn normalize_to_query_crs(&self, position: &HorizontalPosition) -> Result<HorizontalPosition> {
        if position.crs == self.query_crs() {
            Ok(*position)
        } else {
            Ok(transform_position(position, self.query_crs())?)
        }
    }

    /// The dense cell table, building it on first access.
    ///
    /// At most one thread performs the build; concurrent callers block
    /// until the completed table is published, and no caller ever
    /// observes a partially filled table.
    fn cell_table(&self) -> &[GridCell] {
        self.cells.get_or_init(|| {
            debug!(
                x_size = self.x_axis.size(),
                y_size = self.y_axis.size(),
                "building grid cell table"
            );
            let mut cells = Vec::with_capacity(self.x_size() * self.y_size());
            for y in 0..self.y_size() {
                for x in 0..self.x_size() {
                    cells.push(self.build_cell(x, y));
                }
            }
            cells
        })
    }

    /// Compute one cell. The center and each footprint corner are
    /// transformed through the projection independently.
    fn build_cell(&self, x: usize, y: usize) -> GridCell {
        let (lon, lat) = self
            .projection
            .proj_to_lon_lat(self.x_axis.values()[x], self.y_axis.values()[y]);
        let center = HorizontalPosition::lon_lat(lon, lat);

        let (x_low, x_high) = self.x_axis.bounds_unchecked(x);
        let (y_low, y_high) = self.y_axis.bounds_unchecked(y);
        let vertices = [
            (x_low, y_low),
            (x_high, y_low),
            (x_high, y_high),
            (x_low, y_high),
        ]
        .map(|(px, py)| {
            let (lon, lat) = self.projection.proj_to_lon_lat(px, py);
            HorizontalPosition::lon_lat(lon, lat)
        });

        GridCell {
            coords: GridCoordinates2D::new(x, y),
            center,
            footprint: CellFootprint::new(vertices),
        }
    }
}

impl fmt::Debug for ProjectedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectedGrid")
            .field("projection", &self.projection.name())
            .field("x_size", &self.x_axis.size())
            .field("y_size", &self.y_axis.size())
            .field("bbox", &self.bbox)
            .field("materialized", &self.cells.get().is_some())
            .finish()
    }
}

/// Derive the geographic bounding box by sampling the grid outline
/// through the projection.
///
/// Corners alone are not enough: straight edges in projected space curve
/// in lon/lat, so each edge is sampled at fixed subdivisions as well.
fn derive_geographic_bbox(
    projection: &dyn Projection,
    x_axis: &ReferenceableAxis,
    y_axis: &ReferenceableAxis,
) -> GeographicBoundingBox {
    let (x_min, x_max) = x_axis.extent();
    let (y_min, y_max) = y_axis.extent();

    let (lon, lat) = projection.proj_to_lon_lat(x_min, y_min);
    let mut bbox = GeographicBoundingBox::new(lon, lat, lon, lat);

    for t in 0..=EDGE_SAMPLES {
        let frac = t as f64 / EDGE_SAMPLES as f64;
        let x = x_min + frac * (x_max - x_min);
        let y = y_min + frac * (y_max - y_min);

        // Bottom, top, left, right edges
        for (sx, sy) in [(x, y_min), (x, y_max), (x_min, y), (x_max, y)] {
            let (lon, lat) = projection.proj_to_lon_lat(sx, sy);
            bbox.expand_to_include(lon, lat);
        }
    }

    bbox
}
