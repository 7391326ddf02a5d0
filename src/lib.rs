pub mod board;
pub mod config;
pub mod console;
pub mod engine;

pub use board::{Board, BoardSize, Move, Side, Square};
pub use config::{GameConfig, GameMode};
pub use engine::{Frontend, Game, Outcome, Player, TurnError};
