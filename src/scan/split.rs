use std::iter::FusedIterator;

use super::IndexOf;

/// Sub-slices of a source separated by a delimiter.
///
/// `n` delimiters produce `n + 1` pieces, so leading, trailing, and adjacent
/// delimiters yield empty pieces. Each piece borrows from the source.
#[derive(Debug)]
pub struct SplitOn<'a, T> {
    source: &'a [T],
    delimiters: IndexOf<'a, T>,
    start: usize,
    finished: bool,
}

impl<'a, T: PartialEq> SplitOn<'a, T> {
    /// Split `source` on every occurrence of `delimiter`.
    pub fn new(source: &'a [T], delimiter: &'a T) -> Self {
        Self {
            source,
            delimiters: IndexOf::new(source, delimiter),
            start: 0,
            finished: false,
        }
    }
}

impl<T> Clone for SplitOn<'_, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            delimiters: self.delimiters.clone(),
            start: self.start,
            finished: self.finished,
        }
    }
}

impl<'a, T: PartialEq> Iterator for SplitOn<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        if self.finished {
            return None;
        }

        match self.delimiters.next() {
            Some(position) => {
                let piece = &self.source[self.start..position];
                self.start = position + 1;
                Some(piece)
            }
            None => {
                self.finished = true;
                Some(&self.source[self.start..])
            }
        }
    }
}

impl<T: PartialEq> FusedIterator for SplitOn<'_, T> {}
