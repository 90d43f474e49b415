//! Row-major multi-dimensional indexing into flat storage.
//!
//! For dimensions `d0..dn-1` the element at `(i0, .., in-1)` lives at
//! `Σ i_k * Π_{j>k} d_j`: the last axis varies fastest.
//!
//! ```
//! use seqview::grid::GridIndexer;
//!
//! let cells: Vec<u32> = (0..24).collect();
//! let grid = GridIndexer::new(&cells, &[2, 3, 4]).unwrap();
//! assert_eq!(grid.at(&[1, 2, 3]), Ok(&23));
//! assert!(grid.at(&[0, 3, 0]).is_err());
//! ```

mod indexer;

pub use indexer::GridIndexer;

use thiserror::Error;

/// Errors raised by grid construction and access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Number of coordinates differs from the number of dimensions.
    #[error("expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Configured number of dimensions.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },

    /// Coordinate on `axis` is not below the axis extent.
    #[error("index {index} out of range for axis {axis} of extent {extent}")]
    OutOfRange {
        /// Offending axis.
        axis: usize,
        /// Supplied index.
        index: usize,
        /// Size of that axis.
        extent: usize,
    },

    /// Flat index falls past the end of the backing slice.
    #[error("flat index {flat_index} exceeds backing length {len}")]
    BackingTooShort {
        /// Computed flat index.
        flat_index: usize,
        /// Length of the backing slice.
        len: usize,
    },

    /// Product of the dimensions does not fit in `usize`.
    #[error("dimension product overflows: {0:?}")]
    ShapeOverflow(Vec<usize>),
}

/// Row-major strides for `dims`: the last axis has stride 1.
///
/// Saturates rather than overflowing; callers that need an exact volume
/// check it separately.
pub fn row_major_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = vec![1usize; dims.len()];
    for axis in (0..dims.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1].saturating_mul(dims[axis + 1]);
    }
    strides
}
