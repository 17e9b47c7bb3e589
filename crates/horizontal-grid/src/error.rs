//! Error types for grid construction and queries.

use thiserror::Error;

pub use geo_common::TransformError;

/// Errors that can occur while building or querying a projected grid.
///
/// Positions outside the grid's coverage are not errors; those queries
/// return `Ok(None)` or `Ok(false)`.
#[derive(Error, Debug)]
pub enum GridError {
    /// Axis or cell access with an index outside `[0, size)`.
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Malformed axis data, rejected at construction time.
    #[error("invalid axis: {0}")]
    InvalidAxis(String),

    /// A query position could not be re-expressed in the grid's query
    /// reference system.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
