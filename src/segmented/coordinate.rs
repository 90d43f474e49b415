use std::fmt;

/// Location of an element inside a [`SegmentedView`](super::SegmentedView).
///
/// `Unset` is the only "no position" value; `Set { segment: 0, offset: 0 }`
/// is an ordinary coordinate naming the first element of segment 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentCoord {
    /// No element exists (e.g. every segment is empty).
    #[default]
    Unset,
    /// Element `offset` within segment `segment`.
    Set {
        /// Index of the segment in the view.
        segment: usize,
        /// Offset within that segment.
        offset: usize,
    },
}

impl SegmentCoord {
    /// Coordinate of `offset` within `segment`.
    #[inline]
    pub const fn new(segment: usize, offset: usize) -> Self {
        SegmentCoord::Set { segment, offset }
    }

    /// Returns `true` unless this is [`SegmentCoord::Unset`].
    #[inline]
    pub const fn is_set(&self) -> bool {
        matches!(self, SegmentCoord::Set { .. })
    }

    /// Segment index, if set.
    pub const fn segment(&self) -> Option<usize> {
        match self {
            SegmentCoord::Set { segment, .. } => Some(*segment),
            SegmentCoord::Unset => None,
        }
    }

    /// Offset within the segment, if set.
    pub const fn offset(&self) -> Option<usize> {
        match self {
            SegmentCoord::Set { offset, .. } => Some(*offset),
            SegmentCoord::Unset => None,
        }
    }
}

impl fmt::Display for SegmentCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentCoord::Unset => f.write_str("unset"),
            SegmentCoord::Set { segment, offset } => write!(f, "({segment}, {offset})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_distinct_from_unset() {
        let origin = SegmentCoord::new(0, 0);
        assert_ne!(origin, SegmentCoord::Unset);
        assert_ne!(origin.to_string(), SegmentCoord::Unset.to_string());
        assert!(origin.is_set());
        assert!(!SegmentCoord::default().is_set());
    }

    #[test]
    fn accessors_follow_state() {
        let coord = SegmentCoord::new(3, 2);
        assert_eq!(coord.segment(), Some(3));
        assert_eq!(coord.offset(), Some(2));
        assert_eq!(SegmentCoord::Unset.segment(), None);
        assert_eq!(SegmentCoord::Unset.offset(), None);
    }

    #[test]
    fn display_forms() {
        assert_eq!(SegmentCoord::new(1, 0).to_string(), "(1, 0)");
        assert_eq!(SegmentCoord::Unset.to_string(), "unset");
    }
}
