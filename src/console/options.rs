//! Interactive session setup.

use std::io::{BufRead, Write};

use log::debug;

use crate::board::BoardSize;
use crate::config::{GameConfig, GameMode};

use super::command::{parse_board_size, parse_game_mode, parse_name, wants_rematch};
use super::print::{prompt_text, Prompt, WRONG_INPUT};
use super::{ConsoleFrontend, SetupError};

/// Settings already decided before the prompts run (for example from the
/// command line). Anything left `None` is asked for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupPreset {
    pub size: Option<BoardSize>,
    pub mode: Option<GameMode>,
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub seed: Option<u64>,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    /// Complete `preset` into a full config: first name, board size, game
    /// mode, then the second name in two-player mode.
    ///
    /// Preset names are validated like typed ones but a bad preset value is
    /// an error rather than a re-prompt.
    pub fn configure(&mut self, preset: SetupPreset) -> Result<GameConfig, SetupError> {
        let first_name = match preset.first_name {
            Some(name) => parse_name(&name)?,
            None => self.prompt_until(Prompt::PlayerName, parse_name)?,
        };
        let size = match preset.size {
            Some(size) => size,
            None => self.prompt_until(Prompt::BoardSize, parse_board_size)?,
        };
        let mode = match preset.mode {
            Some(mode) => mode,
            None => self.prompt_until(Prompt::GameMode, parse_game_mode)?,
        };

        let mut config = GameConfig::new()
            .with_size(size)
            .with_mode(mode)
            .with_first_name(first_name);
        if mode == GameMode::TwoPlayer {
            let second_name = match preset.second_name {
                Some(name) => parse_name(&name)?,
                None => self.prompt_until(Prompt::PlayerName, parse_name)?,
            };
            config = config.with_second_name(second_name);
        }
        if let Some(seed) = preset.seed {
            config = config.with_seed(seed);
        }

        debug!("session config: {config:?}");
        Ok(config)
    }

    /// Ask after a finished game. End of input means no.
    pub fn prompt_rematch(&mut self) -> bool {
        match self.ask(prompt_text(Prompt::Rematch)) {
            Ok(Some(answer)) => wants_rematch(&answer),
            Ok(None) => false,
            Err(e) => {
                debug!("rematch prompt failed: {e}");
                false
            }
        }
    }

    /// Show `prompt` until `parse` accepts the answer.
    fn prompt_until<T, F>(&mut self, prompt: Prompt, parse: F) -> Result<T, SetupError>
    where
        F: Fn(&str) -> Result<T, SetupError>,
    {
        loop {
            let Some(answer) = self.ask(prompt_text(prompt))? else {
                return Err(SetupError::InputClosed);
            };
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("{e}");
                    self.say(WRONG_INPUT);
                }
            }
        }
    }
}
