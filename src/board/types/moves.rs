//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MoveParseError;

use super::square::{Square, MAX_DIMENSION};

/// Separator between origin and destination in move notation.
pub const MOVE_SEPARATOR: char = '>';

/// A diagonal move of one square (step) or two squares (capture).
///
/// Formats as `Cb>Dc`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            from: Square(0, 0),
            to: Square(0, 0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Get the origin square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Rows travelled, which is also the diagonal distance.
    #[inline]
    #[must_use]
    pub const fn distance(self) -> usize {
        self.from.0.abs_diff(self.to.0)
    }

    /// Returns true if this move jumps over a rival piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.distance() == 2
    }

    /// Square of the jumped piece, if this is a capture
    #[inline]
    #[must_use]
    pub const fn captured_square(self) -> Option<Square> {
        if self.is_capture() {
            Some(self.from.midpoint(self.to))
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{MOVE_SEPARATOR}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse strict `<Col><Row>><Col><Row>` notation. Shape only: whether
    /// the move is legal is decided against a side's legal-move set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }
        if chars[2] != MOVE_SEPARATOR {
            return Err(MoveParseError::MissingSeparator {
                notation: s.to_string(),
            });
        }

        let invalid = |_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = chars[..2].iter().collect::<String>().parse().map_err(invalid)?;
        let to: Square = chars[3..].iter().collect::<String>().parse().map_err(invalid)?;
        Ok(Move { from, to })
    }
}

/// Upper bound on moves for one side: every playable cell of the largest
/// board holding a piece with 4 diagonals each. A step and a capture along
/// the same diagonal exclude each other.
pub(crate) const MAX_MOVES: usize = 4 * MAX_DIMENSION * MAX_DIMENSION / 2;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "MoveList overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// New list holding the moves that satisfy `keep`, in order.
    #[must_use]
    pub fn filtered<F>(&self, mut keep: F) -> MoveList
    where
        F: FnMut(&Move) -> bool,
    {
        self.iter().copied().filter(|m| keep(m)).collect()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(ToString::to_string)).finish()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_token_format() {
        let mv = Move::new(Square(1, 2), Square(2, 3));
        assert_eq!(mv.to_string(), "Cb>Dc");
        assert_eq!("Cb>Dc".parse::<Move>(), Ok(mv));
    }

    #[test]
    fn test_capture_detection() {
        let step = Move::new(Square(1, 2), Square(2, 1));
        let jump = Move::new(Square(1, 2), Square(3, 4));
        assert!(!step.is_capture());
        assert_eq!(step.captured_square(), None);
        assert!(jump.is_capture());
        assert_eq!(jump.captured_square(), Some(Square(2, 3)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "Q".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 1 })
        );
        assert!(matches!(
            "Cb-Dc".parse::<Move>(),
            Err(MoveParseError::MissingSeparator { .. })
        ));
        assert!(matches!(
            "cb>dc".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "Cb>Dé".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_filtered_keeps_order() {
        let list: MoveList = [
            Move::new(Square(1, 2), Square(3, 4)),
            Move::new(Square(1, 2), Square(2, 1)),
            Move::new(Square(1, 2), Square(3, 0)),
        ]
        .into_iter()
        .collect();
        let captures = list.filtered(|m| m.is_capture());
        assert_eq!(captures.len(), 2);
        assert_eq!(captures[0].to(), Square(3, 4));
        assert_eq!(captures[1].to(), Square(3, 0));
    }
}
