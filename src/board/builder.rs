//! Fluent builder for constructing arbitrary positions.
//!
//! Allows setting up a board piece by piece instead of starting from the
//! standard layout.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, BoardSize, Rank, Side, Square};
//!
//! let board = BoardBuilder::new(BoardSize::Eight)
//!     .piece(Square(1, 2), Side::First, Rank::Soldier)
//!     .piece(Square(2, 3), Side::Second, Rank::Soldier)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.count(Side::Second), 1);
//! ```

use super::{Board, BoardError, BoardSize, Rank, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    size: BoardSize,
    pieces: Vec<(Square, Side, Rank)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        BoardBuilder {
            size,
            pieces: Vec::new(),
        }
    }

    /// Create a builder starting from the standard initial layout.
    #[must_use]
    pub fn starting_position(size: BoardSize) -> Self {
        let board = Board::new(size);
        let pieces = board
            .live_pieces()
            .map(|(_, p)| (p.square(), p.owner(), p.rank()))
            .collect();
        BoardBuilder { size, pieces }
    }

    /// Place a piece, replacing whatever was on that square.
    ///
    /// Pieces keep the order they were first placed in.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, rank: Rank) -> Self {
        if let Some(slot) = self.pieces.iter_mut().find(|(sq, _, _)| *sq == square) {
            *slot = (square, side, rank);
        } else {
            self.pieces.push((square, side, rank));
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board, failing if any piece lies off the grid or on a
    /// light square.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty(self.size);

        for (square, side, rank) in self.pieces {
            if !board.contains(square) {
                return Err(BoardError::SquareOffBoard {
                    notation: square.to_string(),
                });
            }
            if !square.is_playable() {
                return Err(BoardError::UnplayableSquare {
                    notation: square.to_string(),
                });
            }
            board.place(square, side, rank);
        }

        Ok(board)
    }
}
