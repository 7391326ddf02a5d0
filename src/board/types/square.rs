//! Square types and notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

use super::size::BoardSize;

/// Largest supported dimension.
pub(crate) const MAX_DIMENSION: usize = 10;

pub(crate) fn column_to_index(column: char) -> usize {
    column as usize - ('A' as usize)
}

pub(crate) fn row_to_index(row: char) -> usize {
    row as usize - ('a' as usize)
}

/// A cell on the board, represented as (row, column).
///
/// Written as an uppercase column letter followed by a lowercase row
/// letter, so `Square(1, 2)` is `Cb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, column)

impl Square {
    /// Create a square with bounds checking against `size`
    #[must_use]
    pub fn new(row: usize, column: usize, size: BoardSize) -> Option<Self> {
        let n = size.dimension();
        if row < n && column < n {
            Some(Square(row, column))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.1
    }

    /// Cell index in a row-major grid of dimension `size`.
    #[inline]
    #[must_use]
    pub const fn as_index(self, size: BoardSize) -> usize {
        self.0 * size.dimension() + self.1
    }

    /// Shift by a row and column delta, staying on a board of `size`.
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize, size: BoardSize) -> Option<Self> {
        let n = size.dimension() as isize;
        let row = self.0 as isize + d_row;
        let column = self.1 as isize + d_column;
        if (0..n).contains(&row) && (0..n).contains(&column) {
            Some(Square(row as usize, column as usize))
        } else {
            None
        }
    }

    /// Midpoint between two squares two diagonal steps apart.
    #[inline]
    #[must_use]
    pub const fn midpoint(self, other: Square) -> Square {
        Square((self.0 + other.0) / 2, (self.1 + other.1) / 2)
    }

    /// Letter naming column `column` (`A` for 0).
    #[inline]
    #[must_use]
    pub const fn column_letter(column: usize) -> char {
        (column as u8 + b'A') as char
    }

    /// Letter naming row `row` (`a` for 0).
    #[inline]
    #[must_use]
    pub const fn row_letter(row: usize) -> char {
        (row as u8 + b'a') as char
    }

    /// Dark cells are the ones pieces can ever stand on.
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            Square::column_letter(self.1),
            Square::row_letter(self.0)
        )
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let column = match chars[0] {
            'A'..='J' => column_to_index(chars[0]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match chars[1] {
            'a'..='j' => row_to_index(chars[1]),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(row, column))
    }
}
