//! # Zero-copy traversal over borrowed sequences
//!
//! This library provides three families of read-only primitives that work
//! directly on caller-owned slices without copying them:
//!
//! 1. **Scanning** ([`scan`]): lazy iterators yielding the ascending positions
//!    of a target value or any of a set of candidates, plus a splitting adapter
//!    built on top of them
//! 2. **Segmented views** ([`segmented`]): several slices addressed as one
//!    logical sequence, with positions mapped to `(segment, offset)` coordinates
//! 3. **Grid indexing** ([`grid`]): row-major multi-dimensional access into a
//!    flat slice with per-axis bounds checks
//!
//! None of these types own their data or allocate per element; their
//! lifetimes are tied to the slices they borrow.
//!
//! ## Usage Example
//!
//! ```
//! use seqview::{scan::scan, segmented::SegmentedView, grid::GridIndexer};
//!
//! let line = b"a-b--c";
//! assert_eq!(scan(line, &b'-').collect::<Vec<_>>(), vec![1, 3, 4]);
//!
//! let left: &[u8] = b"ab";
//! let right: &[u8] = b"cd";
//! let view = SegmentedView::from_slices(&[left, right])?;
//! assert_eq!(view.get(2), Some(&b'c'));
//!
//! let cells = [0u8, 1, 2, 3, 4, 5];
//! let grid = GridIndexer::new(&cells, &[2, 3])?;
//! assert_eq!(grid.at(&[1, 0])?, &3);
//! # Ok::<(), seqview::ViewError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod grid;      // Row-major flat indexing
pub mod scan;      // Delimiter scanning iterators
pub mod segmented; // Multi-segment logical views

// Re-exports for convenience
pub use grid::{GridError, GridIndexer};
pub use scan::{scan, scan_any, split_on, IndexOf, IndexOfAny, SplitOn};
pub use segmented::{Position, SegmentCoord, SegmentError, SegmentedView};

use thiserror::Error;

/// Any error produced by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Failure resolving a position in a segmented view.
    #[error(transparent)]
    Segment(#[from] SegmentError),

    /// Failure constructing or reading a grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl ViewError {
    /// Returns `true` for out-of-range positions or indices, whichever
    /// component raised them.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            ViewError::Segment(SegmentError::OutOfRange { .. })
                | ViewError::Grid(GridError::OutOfRange { .. })
                | ViewError::Grid(GridError::BackingTooShort { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_errors_convert() {
        let view: SegmentedView<'_, u8> = SegmentedView::from_slices(&[]).unwrap();
        let err: ViewError = view.coord_at(0).unwrap_err().into();
        assert!(err.is_out_of_range());

        let cells = [1, 2];
        let grid = GridIndexer::new(&cells, &[2]).unwrap();
        let err: ViewError = grid.at(&[0, 0]).unwrap_err().into();
        assert!(!err.is_out_of_range());
        assert_eq!(err.to_string(), "expected 1 coordinates, got 2");
    }
}
