//! Supported board dimensions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

/// Width and height of a square board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardSize {
    Six,
    #[default]
    Eight,
    Ten,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Six, BoardSize::Eight, BoardSize::Ten];

    /// Number of rows (and columns).
    #[inline]
    #[must_use]
    pub const fn dimension(self) -> usize {
        match self {
            BoardSize::Six => 6,
            BoardSize::Eight => 8,
            BoardSize::Ten => 10,
        }
    }

    /// Rows filled by each side in the starting layout: `(N - 2) / 2`.
    #[inline]
    #[must_use]
    pub const fn rows_per_side(self) -> usize {
        (self.dimension() - 2) / 2
    }

    /// Number of cells on the board.
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.dimension() * self.dimension()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(BoardSize::Six),
            8 => Ok(BoardSize::Eight),
            10 => Ok(BoardSize::Ten),
            other => Err(BoardError::UnsupportedSize { size: other }),
        }
    }
}

impl FromStr for BoardSize {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| BoardError::InvalidSize {
            input: s.to_string(),
        })?;
        BoardSize::try_from(value)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        write!(f, "{n}x{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_side() {
        assert_eq!(BoardSize::Six.rows_per_side(), 2);
        assert_eq!(BoardSize::Eight.rows_per_side(), 3);
        assert_eq!(BoardSize::Ten.rows_per_side(), 4);
    }

    #[test]
    fn test_rejects_unsupported_sizes() {
        for bad in [0, 4, 7, 9, 12] {
            assert_eq!(
                BoardSize::try_from(bad),
                Err(BoardError::UnsupportedSize { size: bad })
            );
        }
    }

    #[test]
    fn test_parse_from_text() {
        assert_eq!("10".parse::<BoardSize>(), Ok(BoardSize::Ten));
        assert_eq!(" 6 ".parse::<BoardSize>(), Ok(BoardSize::Six));
        assert!(matches!(
            "eight".parse::<BoardSize>(),
            Err(BoardError::InvalidSize { .. })
        ));
    }
}
