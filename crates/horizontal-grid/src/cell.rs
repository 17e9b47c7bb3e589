//! Grid cells and their geographic footprints.

use std::fmt;

use geo_common::HorizontalPosition;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::ProjectedGrid;

/// Integer grid coordinates. `x` is the column index along the x axis,
/// `y` the row index along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinates2D {
    pub x: usize,
    pub y: usize,
}

impl GridCoordinates2D {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoordinates2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The quadrilateral ground polygon approximating one cell's coverage.
///
/// Vertices are geographic positions in winding order: low-x/low-y,
/// high-x/low-y, high-x/high-y, low-x/high-y, where low/high refer to the
/// cell's bounds in projected space. Each corner is transformed through
/// the projection independently, so for non-linear projections the
/// polygon is an approximation of the true curved cell outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellFootprint {
    vertices: [HorizontalPosition; 4],
}

impl CellFootprint {
    pub(crate) fn new(vertices: [HorizontalPosition; 4]) -> Self {
        Self { vertices }
    }

    /// The four corners in winding order.
    pub fn vertices(&self) -> &[HorizontalPosition; 4] {
        &self.vertices
    }
}

/// One cell of a projected grid: its integer coordinates, geographic
/// center point and footprint polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub coords: GridCoordinates2D,
    pub center: HorizontalPosition,
    pub footprint: CellFootprint,
}

impl GridCell {
    /// Check whether a position falls inside this cell's footprint.
    ///
    /// Membership is defined by index equality: the position is inside
    /// iff the owning grid's nearest-index lookup returns this cell's own
    /// coordinates. This keeps cell membership and `find_index_of`
    /// consistent even where a non-linear projection bends cell edges
    /// away from the stored vertices. Fails only when the position's CRS
    /// cannot be transformed to the grid's query system.
    pub fn footprint_contains(
        &self,
        grid: &ProjectedGrid,
        position: &HorizontalPosition,
    ) -> Result<bool> {
        Ok(grid.find_index_of(position)? == Some(self.coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_display() {
        let coords = GridCoordinates2D::new(3, 7);
        assert_eq!(coords.to_string(), "(3, 7)");
    }

    #[test]
    fn test_footprint_vertices_order() {
        let vertices = [
            HorizontalPosition::lon_lat(-5.0, -2.5),
            HorizontalPosition::lon_lat(5.0, -2.5),
            HorizontalPosition::lon_lat(5.0, 2.5),
            HorizontalPosition::lon_lat(-5.0, 2.5),
        ];
        let footprint = CellFootprint::new(vertices);
        assert_eq!(footprint.vertices(), &vertices);
    }

    #[test]
    fn test_cell_serde_roundtrip() {
        let cell = GridCell {
            coords: GridCoordinates2D::new(1, 0),
            center: HorizontalPosition::lon_lat(10.0, 0.0),
            footprint: CellFootprint::new([
                HorizontalPosition::lon_lat(5.0, -2.5),
                HorizontalPosition::lon_lat(15.0, -2.5),
                HorizontalPosition::lon_lat(15.0, 2.5),
                HorizontalPosition::lon_lat(5.0, 2.5),
            ]),
        };
        let json = serde_json::to_string(&cell).unwrap();
        let back: GridCell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
