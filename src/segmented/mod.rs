//! Segmented views: several independently-owned slices read as one sequence.
//!
//! A [`SegmentedView`] maps logical positions (from the front, or counted
//! back from the end via [`Position::FromEnd`]) to a [`SegmentCoord`] naming
//! the segment and the offset inside it.
//!
//! ```
//! use seqview::segmented::{Position, SegmentCoord, SegmentedView};
//!
//! let head: &[u8] = b"abc";
//! let tail: &[u8] = b"yolo";
//! let view = SegmentedView::new(&[Some(head), None, Some(tail)])?;
//!
//! assert_eq!(view.coord_at(Position::FromEnd(5))?, SegmentCoord::new(0, 2));
//! assert_eq!(view.end(), SegmentCoord::new(2, 3));
//! # Ok::<(), seqview::SegmentError>(())
//! ```

mod coordinate;
mod position;
mod view;

pub use coordinate::SegmentCoord;
pub use position::{ParsePositionError, Position};
pub use view::SegmentedView;

use thiserror::Error;

/// Errors raised while resolving positions in a segmented view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Position does not name an element of the view.
    #[error("position {position} out of range for length {len}")]
    OutOfRange {
        /// Position as supplied by the caller.
        position: Position,
        /// Total length of the view.
        len: usize,
    },

    /// Combined segment lengths do not fit in `usize`.
    #[error("total length overflows at segment {segment}")]
    LengthOverflow {
        /// Index of the segment whose length pushed the total past `usize::MAX`.
        segment: usize,
    },
}
