use std::fmt;
use std::iter::FusedIterator;

use super::ScanCursor;

/// Lazy iterator over the positions holding any of a set of candidates.
///
/// The candidate set is expected to be small; each element is compared
/// against every candidate in turn.
pub struct IndexOfAny<'a, T> {
    cursor: ScanCursor<'a, T>,
    candidates: &'a [T],
}

impl<'a, T: PartialEq> IndexOfAny<'a, T> {
    /// Create a scanner over `source` matching any element of `candidates`.
    ///
    /// An empty candidate set never matches.
    pub fn new(source: &'a [T], candidates: &'a [T]) -> Self {
        tracing::trace!(
            len = source.len(),
            candidates = candidates.len(),
            "index_of_any scan created"
        );
        Self {
            cursor: ScanCursor::new(source),
            candidates,
        }
    }
}

impl<'a, T> IndexOfAny<'a, T> {
    /// Portion of the source not yet scanned.
    pub fn remaining(&self) -> &'a [T] {
        self.cursor.remaining()
    }

    /// Most recently yielded position, or `None` before the first match.
    pub fn last_match(&self) -> Option<usize> {
        self.cursor.current()
    }

    /// Candidate values being matched.
    pub fn candidates(&self) -> &'a [T] {
        self.candidates
    }
}

impl<T> Clone for IndexOfAny<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            candidates: self.candidates,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexOfAny<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexOfAny")
            .field("candidates", &self.candidates)
            .field("last_match", &self.cursor.current())
            .field("remaining", &self.cursor.remaining().len())
            .finish()
    }
}

impl<T: PartialEq> Iterator for IndexOfAny<'_, T> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let candidates = self.candidates;
        self.cursor.advance(|item| candidates.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cursor.remaining().len()))
    }
}

impl<T: PartialEq> FusedIterator for IndexOfAny<'_, T> {}
