//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side`, `Rank` and `Piece` - who owns a token and how it moves
//! - `BoardSize` - the three supported grid dimensions
//! - `Square` - (row, column) cell coordinates
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod size;
mod square;

// Re-export all public types
pub use moves::{Move, MoveList, MOVE_SEPARATOR};
pub use piece::{Piece, PieceId, Rank, Side};
pub use size::BoardSize;
pub use square::Square;
