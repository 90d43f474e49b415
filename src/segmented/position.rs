use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Logical position addressed from either end of a sequence.
///
/// `FromStart(i)` is the usual 0-based index. `FromEnd(n)` counts back from
/// the end, so `FromEnd(1)` is the last element and `FromEnd(len)` the first;
/// `FromEnd(0)` names one-past-the-end and never resolves to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// 0-based offset from the first element.
    FromStart(usize),
    /// 1-based distance from the end.
    FromEnd(usize),
}

impl Position {
    /// Absolute index of this position in a sequence of length `len`, if it
    /// names an element.
    pub fn resolve(self, len: usize) -> Option<usize> {
        let absolute = match self {
            Position::FromStart(index) => index,
            Position::FromEnd(distance) => len.checked_sub(distance)?,
        };
        (absolute < len).then_some(absolute)
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Position::FromStart(index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::FromStart(index) => write!(f, "{index}"),
            Position::FromEnd(distance) => write!(f, "^{distance}"),
        }
    }
}

/// Failure to parse a [`Position`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid position '{0}': expected `N` or `^N`")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (from_end, digits) = match trimmed.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let value: usize = digits
            .parse()
            .map_err(|_| ParsePositionError(s.to_string()))?;
        Ok(if from_end {
            Position::FromEnd(value)
        } else {
            Position::FromStart(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_start_resolves_within_bounds() {
        assert_eq!(Position::FromStart(0).resolve(3), Some(0));
        assert_eq!(Position::FromStart(2).resolve(3), Some(2));
        assert_eq!(Position::FromStart(3).resolve(3), None);
    }

    #[test]
    fn from_end_counts_back() {
        assert_eq!(Position::FromEnd(1).resolve(7), Some(6));
        assert_eq!(Position::FromEnd(5).resolve(7), Some(2));
        assert_eq!(Position::FromEnd(7).resolve(7), Some(0));
        assert_eq!(Position::FromEnd(8).resolve(7), None);
        assert_eq!(Position::FromEnd(0).resolve(7), None);
    }

    #[test]
    fn nothing_resolves_in_empty_sequence() {
        assert_eq!(Position::FromStart(0).resolve(0), None);
        assert_eq!(Position::FromEnd(0).resolve(0), None);
    }

    #[test]
    fn parses_both_forms() {
        assert_eq!("12".parse::<Position>(), Ok(Position::FromStart(12)));
        assert_eq!("^3".parse::<Position>(), Ok(Position::FromEnd(3)));
        assert_eq!(" ^0 ".parse::<Position>(), Ok(Position::FromEnd(0)));
        assert!("^".parse::<Position>().is_err());
        assert!("-1".parse::<Position>().is_err());
    }

    #[test]
    fn display_matches_parse_syntax() {
        assert_eq!(Position::FromStart(4).to_string(), "4");
        assert_eq!(Position::FromEnd(2).to_string(), "^2");
    }
}
