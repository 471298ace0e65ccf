//! Board square addressing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the 64 board squares, addressed by file (a-h = 0-7) and rank (1-8 = 0-7).
///
/// Both coordinates are always in `0..8`; the only constructors are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

/// Error returned when parsing an algebraic square name such as `e4`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid square name '{0}'")]
pub struct ParseSquareError(pub String);

impl Square {
    /// Creates a square from file/rank coordinates, or `None` when either is outside `0..8`.
    pub fn new(file: i32, rank: i32) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Creates a square from its `rank * 8 + file` index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::new(i32::from(index % 8), i32::from(index / 8))
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Index in `0..64`, a1 = 0, h1 = 7, a8 = 56.
    pub fn index(self) -> u8 {
        self.rank * 8 + self.file
    }

    /// Iterates a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseSquareError(s.to_string()));
        }
        let file = i32::from(bytes[0].to_ascii_lowercase()) - i32::from(b'a');
        let rank = i32::from(bytes[1]) - i32::from(b'1');
        Square::new(file, rank).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}
