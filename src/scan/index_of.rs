use std::fmt;
use std::iter::FusedIterator;

use super::ScanCursor;

/// Lazy iterator over the positions of a single target value.
///
/// Positions are absolute (relative to the original source) and strictly
/// ascending. The iterator is single pass: once exhausted it keeps returning
/// `None`, and scanning again needs a fresh `IndexOf`. Cloning yields an
/// independent iterator that resumes from the same point.
pub struct IndexOf<'a, T> {
    cursor: ScanCursor<'a, T>,
    target: &'a T,
}

impl<'a, T: PartialEq> IndexOf<'a, T> {
    /// Create a scanner over `source` looking for `target`.
    pub fn new(source: &'a [T], target: &'a T) -> Self {
        tracing::trace!(len = source.len(), "index_of scan created");
        Self {
            cursor: ScanCursor::new(source),
            target,
        }
    }
}

impl<'a, T> IndexOf<'a, T> {
    /// Portion of the source not yet scanned.
    pub fn remaining(&self) -> &'a [T] {
        self.cursor.remaining()
    }

    /// Most recently yielded position, or `None` before the first match.
    pub fn last_match(&self) -> Option<usize> {
        self.cursor.current()
    }
}

impl<T> Clone for IndexOf<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            target: self.target,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexOf")
            .field("target", self.target)
            .field("last_match", &self.cursor.current())
            .field("remaining", &self.cursor.remaining().len())
            .finish()
    }
}

impl<T: PartialEq> Iterator for IndexOf<'_, T> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let target = self.target;
        self.cursor.advance(|item| item == target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cursor.remaining().len()))
    }
}

impl<T: PartialEq> FusedIterator for IndexOf<'_, T> {}
