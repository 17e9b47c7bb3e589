//! One-dimensional referenceable coordinate axes.
//!
//! An axis is an ordered list of coordinate values in a projected
//! coordinate system. Each index owns the interval reaching halfway to its
//! neighbors, so index lookup is a piecewise-constant nearest-neighbor
//! search over the midpoint boundaries rather than interpolation.

use crate::error::{GridError, Result};

/// Wrap period for longitude axes, in degrees.
const LONGITUDE_PERIOD: f64 = 360.0;

/// A 1D ordered coordinate axis of a projected grid.
///
/// Values are strictly monotonic, ascending or descending, fixed at
/// construction. Longitude axes wrap: query values are normalized into a
/// single 360-degree window starting at the extent minimum before any
/// comparison, so a query at 181 degrees can land on a cell whose center
/// is -179.
#[derive(Debug, Clone)]
pub struct ReferenceableAxis {
    values: Vec<f64>,
    is_longitude: bool,
    ascending: bool,
}

impl ReferenceableAxis {
    /// Create an axis from explicit coordinate values.
    ///
    /// Values must be finite and strictly monotonic (ascending or
    /// descending). `is_longitude` enables 360-degree wraparound on
    /// queries.
    pub fn new(values: Vec<f64>, is_longitude: bool) -> Result<Self> {
        if values.is_empty() {
            return Err(GridError::InvalidAxis(
                "axis must contain at least one value".to_string(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GridError::InvalidAxis(
                "axis values must be finite".to_string(),
            ));
        }

        let ascending = values.len() == 1 || values[1] > values[0];
        let monotonic = values.windows(2).all(|w| {
            if ascending {
                w[1] > w[0]
            } else {
                w[1] < w[0]
            }
        });
        if !monotonic {
            return Err(GridError::InvalidAxis(
                "axis values must be strictly monotonic".to_string(),
            ));
        }

        Ok(Self {
            values,
            is_longitude,
            ascending,
        })
    }

    /// Create a regularly spaced axis from a start value, step and count.
    ///
    /// A negative step produces a descending axis.
    pub fn regular(start: f64, step: f64, n: usize, is_longitude: bool) -> Result<Self> {
        if step == 0.0 {
            return Err(GridError::InvalidAxis(
                "axis step must be non-zero".to_string(),
            ));
        }
        let values = (0..n).map(|i| start + step * i as f64).collect();
        Self::new(values, is_longitude)
    }

    /// Number of coordinate values.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Whether queries wrap at 360 degrees.
    pub fn is_longitude(&self) -> bool {
        self.is_longitude
    }

    /// Whether values increase with index.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The raw coordinate values in index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Coordinate value at the given index.
    pub fn value_at(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .copied()
            .ok_or(GridError::IndexOutOfRange {
                index,
                size: self.values.len(),
            })
    }

    /// Coordinate bounds of the cell at the given index, as (low, high)
    /// with low <= high regardless of axis direction.
    ///
    /// Interior boundaries are midpoints between neighboring centers; the
    /// outermost bounds extrapolate symmetrically using the adjacent
    /// spacing. A single-point axis has zero-width bounds.
    pub fn bounds_at(&self, index: usize) -> Result<(f64, f64)> {
        if index >= self.values.len() {
            return Err(GridError::IndexOutOfRange {
                index,
                size: self.values.len(),
            });
        }
        Ok(self.bounds_unchecked(index))
    }

    /// Bounds of a cell known to be in range.
    pub(crate) fn bounds_unchecked(&self, index: usize) -> (f64, f64) {
        let n = self.values.len();
        let v = self.values[index];
        if n == 1 {
            return (v, v);
        }

        let before = if index == 0 {
            v - (self.values[1] - v) / 2.0
        } else {
            (self.values[index - 1] + v) / 2.0
        };
        let after = if index == n - 1 {
            v + (v - self.values[n - 2]) / 2.0
        } else {
            (v + self.values[index + 1]) / 2.0
        };

        if self.ascending {
            (before, after)
        } else {
            (after, before)
        }
    }

    /// Overall coordinate coverage, as (min, max).
    ///
    /// Runs from the first cell's outer bound to the last cell's outer
    /// bound, normalized so min <= max for descending axes.
    pub fn extent(&self) -> (f64, f64) {
        let first = self.bounds_unchecked(0);
        let last = self.bounds_unchecked(self.values.len() - 1);
        (first.0.min(last.0), first.1.max(last.1))
    }

    /// Check whether a coordinate value lies within the axis extent.
    ///
    /// Longitude axes normalize the value into the wrap window first. The
    /// extent's maximum edge is exclusive, so a 3-point axis [0, 10, 20]
    /// covers [-5, 25) and a query at exactly 25 misses.
    pub fn contains(&self, value: f64) -> bool {
        self.extent_contains(self.normalize(value))
    }

    /// Find the index whose cell bounds contain the given value.
    ///
    /// Binary search over the midpoint boundaries, O(log N); a value on an
    /// interior boundary belongs to the higher-index cell. Longitude axes
    /// normalize the value first. Returns `None` when the value falls
    /// outside the axis extent.
    pub fn find_index_of(&self, value: f64) -> Option<usize> {
        let v = self.normalize(value);
        if !self.extent_contains(v) {
            return None;
        }

        let n = self.values.len();
        let mut lo = 0usize;
        let mut hi = n - 1;
        while lo < hi {
            let mid = (lo + hi) / 2;
            let boundary = (self.values[mid] + self.values[mid + 1]) / 2.0;
            let in_lower_cells = if self.ascending {
                v < boundary
            } else {
                v > boundary
            };
            if in_lower_cells {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Some(lo)
    }

    /// Map a query value onto a longitude axis's wrap window.
    ///
    /// The window starts at the extent minimum and spans one period, so
    /// every query value has exactly one representative. Non-longitude
    /// axes return the value unchanged.
    fn normalize(&self, value: f64) -> f64 {
        if !self.is_longitude {
            return value;
        }
        let (min, _) = self.extent();
        value - LONGITUDE_PERIOD * ((value - min) / LONGITUDE_PERIOD).floor()
    }

    fn extent_contains(&self, value: f64) -> bool {
        let (min, max) = self.extent();
        if min == max {
            return value == min;
        }
        value >= min && value < max
    }
}
