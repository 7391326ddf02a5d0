//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//!
//! let board = Board::new(BoardSize::Six);
//! assert_eq!(board.count(Side::First), 6);
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, BoardSize, Move, MoveList, MoveParseError, Piece, PieceId,
    Rank, Side, Square, SquareError,
};
