use super::{Position, SegmentCoord, SegmentError};

/// Several borrowed slices addressed as one logical sequence.
///
/// Segments keep their original order and are never copied. Absent segments
/// (`None`) are stored as empty slices, so the two are indistinguishable once
/// the view is built. Cumulative segment starts are computed once up front,
/// making `coord_at` a binary search over segments.
#[derive(Debug)]
pub struct SegmentedView<'a, T> {
    segments: Vec<&'a [T]>,
    /// `starts[i]` is the logical position of the first element of segment `i`.
    starts: Vec<usize>,
    len: usize,
}

impl<T> Clone for SegmentedView<'_, T> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            starts: self.starts.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> SegmentedView<'a, T> {
    /// Build a view over possibly-absent segments.
    ///
    /// Fails with [`SegmentError::LengthOverflow`] when the total length does
    /// not fit in `usize` (only possible for zero-sized `T`).
    pub fn new(segments: &[Option<&'a [T]>]) -> Result<Self, SegmentError> {
        Self::from_iter_segments(segments.iter().map(|segment| segment.unwrap_or(&[])))
    }

    /// Build a view over present segments.
    pub fn from_slices(segments: &[&'a [T]]) -> Result<Self, SegmentError> {
        Self::from_iter_segments(segments.iter().copied())
    }

    fn from_iter_segments<I>(segments: I) -> Result<Self, SegmentError>
    where
        I: IntoIterator<Item = &'a [T]>,
    {
        let segments: Vec<&'a [T]> = segments.into_iter().collect();
        let mut starts = Vec::with_capacity(segments.len());
        let mut len = 0usize;
        for (index, segment) in segments.iter().enumerate() {
            starts.push(len);
            len = len.checked_add(segment.len()).ok_or_else(|| {
                tracing::debug!(segment = index, "segmented view length overflows");
                SegmentError::LengthOverflow { segment: index }
            })?;
        }
        tracing::debug!(segments = segments.len(), len, "segmented view built");
        Ok(Self {
            segments,
            starts,
            len,
        })
    }

    /// Total number of elements across all segments.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when every segment is empty (or there are none).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of segments, including empty ones.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Borrow segment `index`; absent segments come back empty.
    pub fn segment(&self, index: usize) -> Option<&'a [T]> {
        self.segments.get(index).copied()
    }

    /// Map a logical position to the coordinate of the element it names.
    pub fn coord_at(&self, position: impl Into<Position>) -> Result<SegmentCoord, SegmentError> {
        let position = position.into();
        let Some(absolute) = position.resolve(self.len) else {
            tracing::debug!(%position, len = self.len, "position out of range");
            return Err(SegmentError::OutOfRange {
                position,
                len: self.len,
            });
        };

        // Last segment starting at or before `absolute`. Empty segments that
        // share a start with a later one sort before it, so the match always
        // has room for the offset.
        let segment = self.starts.partition_point(|&start| start <= absolute) - 1;
        Ok(SegmentCoord::new(segment, absolute - self.starts[segment]))
    }

    /// Logical position named by `coord`, or `None` if it names no element.
    pub fn position_of(&self, coord: SegmentCoord) -> Option<usize> {
        let SegmentCoord::Set { segment, offset } = coord else {
            return None;
        };
        let slice = self.segments.get(segment)?;
        (offset < slice.len()).then(|| self.starts[segment] + offset)
    }

    /// Element at a logical position.
    pub fn get(&self, position: impl Into<Position>) -> Option<&'a T> {
        let coord = self.coord_at(position).ok()?;
        self.get_coord(coord)
    }

    /// Element named by a coordinate.
    pub fn get_coord(&self, coord: SegmentCoord) -> Option<&'a T> {
        let SegmentCoord::Set { segment, offset } = coord else {
            return None;
        };
        self.segments.get(segment)?.get(offset)
    }

    /// Coordinate of the first element of the first non-empty segment.
    pub fn start(&self) -> SegmentCoord {
        self.segments
            .iter()
            .position(|segment| !segment.is_empty())
            .map_or(SegmentCoord::Unset, |segment| SegmentCoord::new(segment, 0))
    }

    /// Coordinate of the last element of the last non-empty segment.
    pub fn end(&self) -> SegmentCoord {
        self.segments
            .iter()
            .rposition(|segment| !segment.is_empty())
            .map_or(SegmentCoord::Unset, |segment| {
                SegmentCoord::new(segment, self.segments[segment].len() - 1)
            })
    }

    /// Elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.segments.iter().copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_view<'a>(parts: &[&'a str]) -> SegmentedView<'a, u8> {
        let slices: Vec<&[u8]> = parts.iter().map(|part| part.as_bytes()).collect();
        SegmentedView::from_slices(&slices).unwrap()
    }

    #[test]
    fn total_length_overflow_is_rejected() {
        let huge = vec![(); usize::MAX];
        let err = SegmentedView::from_slices(&[&huge[..], &huge[..0], &huge[..]]).unwrap_err();
        assert_eq!(err, SegmentError::LengthOverflow { segment: 2 });

        let none = SegmentedView::new(&[Some(&huge[..]), None, Some(&huge[..1])]);
        assert!(matches!(none, Err(SegmentError::LengthOverflow { .. })));

        let single = SegmentedView::from_slices(&[&huge[..]]).unwrap();
        assert_eq!(single.len(), usize::MAX);
        assert_eq!(single.end(), SegmentCoord::new(0, usize::MAX - 1));
    }

    #[test]
    fn all_empty_has_unset_bounds() {
        let view = text_view(&["", "", ""]);
        assert!(view.is_empty());
        assert_eq!(view.start(), SegmentCoord::Unset);
        assert_eq!(view.end(), SegmentCoord::Unset);
    }

    #[test]
    fn zero_segments_has_unset_bounds() {
        let view: SegmentedView<'_, u8> = SegmentedView::from_slices(&[]).unwrap();
        assert_eq!(view.segment_count(), 0);
        assert_eq!(view.start(), SegmentCoord::Unset);
        assert_eq!(view.end(), SegmentCoord::Unset);
        assert!(view.coord_at(0).is_err());
    }

    #[test]
    fn bounds_skip_empty_segments() {
        let view = text_view(&["", "a", "", "bcd", ""]);
        assert_eq!(view.start(), SegmentCoord::new(1, 0));
        assert_eq!(view.end(), SegmentCoord::new(3, 2));
    }

    #[test]
    fn from_end_position_resolves() {
        let view = text_view(&["abc", "", "yolo"]);
        assert_eq!(view.len(), 7);
        assert_eq!(view.coord_at(Position::FromEnd(5)), Ok(SegmentCoord::new(0, 2)));
        assert_eq!(view.coord_at(Position::FromEnd(1)), Ok(SegmentCoord::new(2, 3)));
        assert_eq!(view.coord_at(3), Ok(SegmentCoord::new(2, 0)));
    }

    #[test]
    fn out_of_range_is_reported() {
        let view = text_view(&["ab", "c"]);
        assert_eq!(
            view.coord_at(3),
            Err(SegmentError::OutOfRange {
                position: Position::FromStart(3),
                len: 3,
            })
        );
        assert!(view.coord_at(Position::FromEnd(0)).is_err());
        assert!(view.coord_at(Position::FromEnd(4)).is_err());
    }

    #[test]
    fn absent_segments_act_empty() {
        let first: &[u8] = b"hi";
        let second: &[u8] = b"there";
        let view = SegmentedView::new(&[None, Some(first), None, Some(second), None]).unwrap();
        assert_eq!(view.len(), 7);
        assert_eq!(view.segment(0), Some(&[][..]));
        assert_eq!(view.start(), SegmentCoord::new(1, 0));
        assert_eq!(view.end(), SegmentCoord::new(3, 4));
        assert_eq!(view.coord_at(2), Ok(SegmentCoord::new(3, 0)));
    }

    #[test]
    fn position_of_inverts_coord_at() {
        let view = text_view(&["", "xy", "", "", "z", "uvw"]);
        for position in 0..view.len() {
            let coord = view.coord_at(position).unwrap();
            assert_eq!(view.position_of(coord), Some(position));
        }
        assert_eq!(view.position_of(SegmentCoord::Unset), None);
        assert_eq!(view.position_of(SegmentCoord::new(0, 0)), None);
        assert_eq!(view.position_of(SegmentCoord::new(9, 0)), None);
    }

    #[test]
    fn element_access_and_iteration() {
        let view = text_view(&["ab", "", "cd"]);
        assert_eq!(view.get(2), Some(&b'c'));
        assert_eq!(view.get(Position::FromEnd(1)), Some(&b'd'));
        assert_eq!(view.get(4), None);
        assert_eq!(view.get_coord(SegmentCoord::new(2, 1)), Some(&b'd'));
        assert_eq!(view.get_coord(SegmentCoord::Unset), None);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), b"abcd".to_vec());
    }
}
