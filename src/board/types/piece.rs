//! Side, rank and piece types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::size::BoardSize;
use super::square::Square;

/// The two sides of a game.
///
/// `First` starts on rows `0..` and moves toward increasing rows,
/// `Second` starts on the far rows and moves toward row 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides in index order (First=0, Second=1)
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Forward row direction (+1 for First, -1 for Second)
    #[inline]
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Row on which a soldier of this side is crowned.
    #[inline]
    #[must_use]
    pub const fn promotion_row(self, size: BoardSize) -> usize {
        match self {
            Side::First => size.dimension() - 1,
            Side::Second => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "First"),
            Side::Second => write!(f, "Second"),
        }
    }
}

/// Piece rank. Promotion is one-way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    #[default]
    Soldier,
    King,
}

impl Rank {
    /// Points awarded for a piece of this rank left on the board at game end.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rank::Soldier => 1,
            Rank::King => 4,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Rank::King)
    }
}

/// Stable handle to a piece in the board's arena.
///
/// Ids are never reused within a game, so a captured piece's id simply
/// stops resolving.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    #[inline]
    #[must_use]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A single game token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    owner: Side,
    rank: Rank,
    square: Square,
}

impl Piece {
    #[must_use]
    pub(crate) const fn new(owner: Side, rank: Rank, square: Square) -> Self {
        Piece {
            owner,
            rank,
            square,
        }
    }

    #[inline]
    #[must_use]
    pub const fn owner(&self) -> Side {
        self.owner
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.rank.is_king()
    }

    pub(crate) fn move_to(&mut self, square: Square) {
        self.square = square;
    }

    pub(crate) fn crown(&mut self) {
        self.rank = Rank::King;
    }

    /// Row directions this piece may move in, forward first.
    #[must_use]
    pub fn directions(&self) -> &'static [isize] {
        match (self.owner, self.rank) {
            (Side::First, Rank::Soldier) => &[1],
            (Side::First, Rank::King) => &[1, -1],
            (Side::Second, Rank::Soldier) => &[-1],
            (Side::Second, Rank::King) => &[-1, 1],
        }
    }
}
