//! Turn results, game states and turn errors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Move, MoveParseError, Side, Square};

/// Token a player enters to give up the game.
pub const FORFEIT_TOKEN: &str = "Q";

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The side to move had no moves, and neither did its opponent.
    Tie,
    /// The given side won because its opponent could not move.
    Win(Side),
    /// The given side entered the forfeit token.
    Forfeit(Side),
}

impl Outcome {
    /// Winning side, if any. A forfeit hands the win to the opponent.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Tie => None,
            Outcome::Win(side) => Some(side),
            Outcome::Forfeit(side) => Some(side.opponent()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Tie => write!(f, "tie"),
            Outcome::Win(side) => write!(f, "{side} wins"),
            Outcome::Forfeit(side) => write!(f, "{side} forfeits"),
        }
    }
}

/// Where the turn state machine currently rests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Waiting on `side`. `chain_from` is set while the same piece must
    /// keep capturing from that square.
    AwaitingMove {
        side: Side,
        chain_from: Option<Square>,
    },
    Finished(Outcome),
}

impl GameState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, GameState::Finished(_))
    }

    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            GameState::Finished(outcome) => Some(outcome),
            GameState::AwaitingMove { .. } => None,
        }
    }
}

/// Result of one accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move captured and the same piece must capture again.
    ChainCapture { side: Side, mv: Move },
    /// The move completed the turn; `next` is now to move.
    TurnSwitched { mv: Move, next: Side },
    /// The move (or a forfeit, with `mv` unset) ended the game.
    GameOver { mv: Option<Move>, outcome: Outcome },
}

impl TurnOutcome {
    /// The move that was applied, if any.
    #[must_use]
    pub const fn applied_move(self) -> Option<Move> {
        match self {
            TurnOutcome::ChainCapture { mv, .. } | TurnOutcome::TurnSwitched { mv, .. } => Some(mv),
            TurnOutcome::GameOver { mv, .. } => mv,
        }
    }
}

/// Points awarded at the end of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Scores {
    pub first: u32,
    pub second: u32,
}

impl Scores {
    #[must_use]
    pub const fn of(self, side: Side) -> u32 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    #[must_use]
    pub const fn total(self) -> u32 {
        self.first + self.second
    }

    pub(crate) fn add(&mut self, side: Side, points: u32) {
        match side {
            Side::First => self.first += points,
            Side::Second => self.second += points,
        }
    }
}

/// Error type for rejected submissions. None of these change game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// Token is not in the active side's legal-move set
    InvalidMoveToken {
        token: String,
        reason: Option<MoveParseError>,
    },
    /// The game has already ended
    GameOver { outcome: Outcome },
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::InvalidMoveToken {
                token,
                reason: Some(reason),
            } => write!(f, "Invalid move '{token}': {reason}"),
            TurnError::InvalidMoveToken { token, reason: None } => {
                write!(f, "Move '{token}' is not legal now")
            }
            TurnError::GameOver { outcome } => {
                write!(f, "Game is over ({outcome})")
            }
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::InvalidMoveToken {
                reason: Some(reason),
                ..
            } => Some(reason),
            _ => None,
        }
    }
}
