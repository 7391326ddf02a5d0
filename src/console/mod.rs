//! Line-oriented console frontend.
//!
//! Reads answers and move tokens one line at a time and writes the board,
//! prompts and results as plain text. Any `BufRead`/`Write` pair works, so
//! the same frontend drives stdin/stdout and in-memory test buffers.

use std::fmt;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use log::{info, warn};

use crate::board::{Board, Move};
use crate::engine::{Frontend, Outcome, Player, FORFEIT_TOKEN};

pub mod command;
pub mod options;
pub mod print;
pub mod session;

pub use options::SetupPreset;
pub use session::{run_session, SessionSummary};

/// Error type for session setup.
#[derive(Debug)]
pub enum SetupError {
    /// Name is not 1 to 10 ASCII letters
    InvalidName { input: String },
    /// Board size is not one of 6, 8 or 10
    InvalidBoardSize { input: String },
    /// Game mode is neither `c` nor `p`
    InvalidGameMode { input: String },
    /// Input ended before setup was complete
    InputClosed,
    /// Reading or writing the console failed
    Io(io::Error),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidName { input } => {
                write!(f, "Invalid player name '{input}': expected 1-10 letters")
            }
            SetupError::InvalidBoardSize { input } => {
                write!(f, "Invalid board size '{input}': expected 6, 8 or 10")
            }
            SetupError::InvalidGameMode { input } => {
                write!(f, "Invalid game mode '{input}': expected 'c' or 'p'")
            }
            SetupError::InputClosed => write!(f, "Input closed during setup"),
            SetupError::Io(e) => write!(f, "Console I/O failed: {e}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SetupError {
    fn from(e: io::Error) -> Self {
        SetupError::Io(e)
    }
}

/// Console frontend over an input reader and an output writer.
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
}

impl ConsoleFrontend<StdinLock<'static>, Stdout> {
    /// Frontend bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        ConsoleFrontend::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleFrontend { input, output }
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its line ending, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced, so a garbled line reaches the
    /// validators as an ordinary wrong answer.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Show `text` and wait for the answer.
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Write one line. The game goes on if the console cannot be written.
    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            warn!("console write failed: {e}");
        }
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn request_move(&mut self, player: &Player) -> String {
        match self.ask(&print::turn_prompt(player)) {
            Ok(Some(token)) => token,
            Ok(None) => {
                info!("input closed, {player} forfeits");
                FORFEIT_TOKEN.to_string()
            }
            Err(e) => {
                warn!("reading move for {player} failed: {e}");
                FORFEIT_TOKEN.to_string()
            }
        }
    }

    fn notify_invalid_input(&mut self) {
        self.say(print::WRONG_INPUT);
    }

    fn render(&mut self, board: &Board) {
        self.say(&print::render_board(board));
    }

    fn announce_move(&mut self, player: &Player, mv: Move) {
        self.say(&print::move_announcement(player, mv));
    }

    fn announce_game_end(&mut self, outcome: Outcome, players: &[Player; 2]) {
        if let Some(message) = print::end_message(outcome, players) {
            self.say(&message);
        }
    }

    fn announce_scores(&mut self, first: &Player, second: &Player) {
        self.say(&print::score_line(first));
        self.say(&print::score_line(second));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use std::io::Cursor;

    fn frontend(input: &str) -> ConsoleFrontend<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleFrontend::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_request_move_strips_line_ending_only() {
        let mut console = frontend(" Cb>Dc \r\nFe>Ed\n");
        let player = Player::human(Side::First, "Alice");
        assert_eq!(console.request_move(&player), " Cb>Dc ");
        assert_eq!(console.request_move(&player), "Fe>Ed");

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Alice's Turn (O) : ").count(), 2);
    }

    #[test]
    fn test_invalid_utf8_line_is_kept_as_text() {
        let mut console =
            ConsoleFrontend::new(Cursor::new(b"\xff\xfe\nAb>Bc\n".to_vec()), Vec::new());
        let player = Player::human(Side::First, "Alice");
        assert_eq!(console.request_move(&player), "\u{FFFD}\u{FFFD}");
        assert_eq!(console.request_move(&player), "Ab>Bc");
    }

    #[test]
    fn test_end_of_input_forfeits() {
        let mut console = frontend("");
        let player = Player::human(Side::Second, "Bob");
        assert_eq!(console.request_move(&player), FORFEIT_TOKEN);
    }

    #[test]
    fn test_scores_are_two_lines() {
        let mut console = frontend("");
        let first = Player::human(Side::First, "Alice");
        let second = Player::computer(Side::Second);
        console.announce_scores(&first, &second);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Alice has 0 points\nComputer has 0 points\n");
    }

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::InvalidBoardSize {
            input: "7".to_string(),
        };
        assert!(err.to_string().contains("'7'"));
        assert!(SetupError::InputClosed.to_string().contains("closed"));
    }
}
