//! Game engine: turn state machine, players and the frontend seam.
//!
//! [`Game`] owns the board and both players, validates submitted tokens
//! against the side on turn, applies moves, enforces chain captures and
//! decides when the game is over. Everything interactive goes through the
//! [`Frontend`] trait.

mod controller;
mod outcome;
mod player;
mod protocol;

pub use controller::Game;
pub use outcome::{GameState, Outcome, Scores, TurnError, TurnOutcome, FORFEIT_TOKEN};
pub use player::{Player, PlayerKind, COMPUTER_NAME};
pub use protocol::Frontend;
