//! Game configuration shared by the console session and the binaries.

use std::fmt;

use clap::ValueEnum;

use crate::board::BoardSize;
use crate::engine::COMPUTER_NAME;

/// Who plays the second side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum GameMode {
    /// A human against the computer (`c` at the setup prompt).
    #[default]
    #[value(name = "computer")]
    VsComputer,
    /// Two humans sharing the console (`p` at the setup prompt).
    #[value(name = "pvp")]
    TwoPlayer,
}

impl GameMode {
    /// Map a setup-prompt answer to a mode. Only the exact keys `c` and `p`
    /// are accepted.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "c" => Some(GameMode::VsComputer),
            "p" => Some(GameMode::TwoPlayer),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::VsComputer => write!(f, "computer"),
            GameMode::TwoPlayer => write!(f, "pvp"),
        }
    }
}

/// Everything needed to start a session.
///
/// `second_name` is ignored in [`GameMode::VsComputer`]; the computer is
/// always named [`COMPUTER_NAME`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: BoardSize,
    pub mode: GameMode,
    pub first_name: String,
    pub second_name: String,
    /// Seed for the computer player's random choices. `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: BoardSize::Eight,
            mode: GameMode::VsComputer,
            first_name: "Player".to_string(),
            second_name: COMPUTER_NAME.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = name.into();
        self
    }

    #[must_use]
    pub fn with_second_name(mut self, name: impl Into<String>) -> Self {
        self.second_name = name.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
