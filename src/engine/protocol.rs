//! Frontend trait the game engine drives.
//!
//! Defines the seam between the rules engine and whatever supplies human
//! moves and shows progress (the console, a test script, ...).

use crate::board::{Board, Move};

use super::{Outcome, Player};

/// Collaborator consulted by [`Game::play`](super::Game::play).
///
/// Only `request_move` returns something the engine consumes; the rest are
/// notifications.
pub trait Frontend {
    /// Ask a human player for a move token (blocking). `"Q"` forfeits.
    fn request_move(&mut self, player: &Player) -> String;

    /// Called once per rejected token, before asking again.
    fn notify_invalid_input(&mut self);

    /// Show the current board.
    fn render(&mut self, board: &Board);

    /// Report a move that was just applied for `player`.
    fn announce_move(&mut self, player: &Player, mv: Move);

    /// Report a win or a tie. Not called for a forfeit.
    fn announce_game_end(&mut self, outcome: Outcome, players: &[Player; 2]);

    /// Report the players' accumulated scores.
    fn announce_scores(&mut self, first: &Player, second: &Player);
}
