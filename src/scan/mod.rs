//! Delimiter scanning over borrowed slices.
//!
//! The iterators here walk a slice once, front to back, and yield the
//! absolute positions of matching elements in ascending order. They keep
//! only the unscanned suffix and the last emitted position, so scanning never
//! allocates regardless of how many matches the source contains.
//!
//! ```
//! use seqview::scan::{scan, scan_any};
//!
//! let dashes: Vec<usize> = scan(b"a--b-", &b'-').collect();
//! assert_eq!(dashes, vec![1, 2, 4]);
//!
//! let seps: Vec<usize> = scan_any(b"k=v;x", b"=;").collect();
//! assert_eq!(seps, vec![1, 3]);
//! ```

mod index_of;
mod index_of_any;
mod split;

pub use index_of::IndexOf;
pub use index_of_any::IndexOfAny;
pub use split::SplitOn;

/// Find every position of `target` in `source`.
pub fn scan<'a, T: PartialEq>(source: &'a [T], target: &'a T) -> IndexOf<'a, T> {
    IndexOf::new(source, target)
}

/// Find every position in `source` holding any element of `targets`.
pub fn scan_any<'a, T: PartialEq>(source: &'a [T], targets: &'a [T]) -> IndexOfAny<'a, T> {
    IndexOfAny::new(source, targets)
}

/// Split `source` into the pieces between occurrences of `delimiter`.
pub fn split_on<'a, T: PartialEq>(source: &'a [T], delimiter: &'a T) -> SplitOn<'a, T> {
    SplitOn::new(source, delimiter)
}

/// Shared traversal state: the unscanned suffix plus the last emitted
/// absolute position.
#[derive(Debug)]
pub(crate) struct ScanCursor<'a, T> {
    remaining: &'a [T],
    current: Option<usize>,
}

// Manual impl: cloning a cursor never requires `T: Clone`.
impl<T> Clone for ScanCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
            current: self.current,
        }
    }
}

impl<'a, T> ScanCursor<'a, T> {
    pub(crate) fn new(source: &'a [T]) -> Self {
        Self {
            remaining: source,
            current: None,
        }
    }

    pub(crate) fn remaining(&self) -> &'a [T] {
        self.remaining
    }

    pub(crate) fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move past the next element satisfying `is_match` and return its
    /// absolute position.
    pub(crate) fn advance<F>(&mut self, is_match: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        if self.remaining.is_empty() {
            return None;
        }

        let Some(relative) = self.remaining.iter().position(is_match) else {
            // Nothing left to find; drop the tail without rescanning it.
            self.remaining = &[];
            return None;
        };

        let position = match self.current {
            Some(current) => current + relative + 1,
            None => relative,
        };
        self.current = Some(position);

        let consumed = relative + 1;
        self.remaining = if consumed == self.remaining.len() {
            &[]
        } else {
            &self.remaining[consumed..]
        };

        Some(position)
    }
}
