//! Checkers board representation and move generation.
//!
//! A board is a square grid (6, 8 or 10 cells wide) of optional piece ids
//! backed by a piece arena. Move generation covers diagonal steps, single
//! captures and king bidirectionality; sequencing captures into chains is
//! the game engine's job.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, BoardSize, Side};
//!
//! let board = Board::new(BoardSize::Eight);
//! let moves = board.generate_side_moves(Side::First);
//! println!("First player has {} opening moves", moves.len());
//! ```

mod builder;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, MoveParseError, SquareError};
pub use state::Board;
pub use types::{
    BoardSize, Move, MoveList, Piece, PieceId, Rank, Side, Square, MOVE_SEPARATOR,
};
