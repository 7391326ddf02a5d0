//! Parsing of the answers typed at setup and session prompts.

use crate::board::BoardSize;
use crate::config::GameMode;

use super::SetupError;

/// Longest accepted player name.
pub const MAX_NAME_LEN: usize = 10;

/// Accept 1 to 10 ASCII letters, nothing else.
pub fn parse_name(input: &str) -> Result<String, SetupError> {
    let valid = (1..=MAX_NAME_LEN).contains(&input.len())
        && input.bytes().all(|b| b.is_ascii_alphabetic());
    if valid {
        Ok(input.to_string())
    } else {
        Err(SetupError::InvalidName {
            input: input.to_string(),
        })
    }
}

/// Accept `6`, `8` or `10` (surrounding whitespace allowed).
pub fn parse_board_size(input: &str) -> Result<BoardSize, SetupError> {
    input.parse().map_err(|_| SetupError::InvalidBoardSize {
        input: input.to_string(),
    })
}

/// Accept exactly `c` or `p`.
pub fn parse_game_mode(input: &str) -> Result<GameMode, SetupError> {
    GameMode::from_key(input).ok_or_else(|| SetupError::InvalidGameMode {
        input: input.to_string(),
    })
}

/// Only an exact `r` asks for a rematch.
#[must_use]
pub fn wants_rematch(input: &str) -> bool {
    input == "r"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(parse_name("Alice").unwrap(), "Alice");
        assert!(parse_name("abcdefghij").is_ok());
        for bad in ["", "abcdefghijk", "Al ice", "Alice1", "Zoë", " Bob"] {
            assert!(
                matches!(parse_name(bad), Err(SetupError::InvalidName { .. })),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_board_sizes() {
        assert_eq!(parse_board_size("6").unwrap(), BoardSize::Six);
        assert_eq!(parse_board_size(" 10 ").unwrap(), BoardSize::Ten);
        for bad in ["", "7", "12", "eight", "-8"] {
            assert!(parse_board_size(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_game_modes() {
        assert_eq!(parse_game_mode("p").unwrap(), GameMode::TwoPlayer);
        assert!(matches!(
            parse_game_mode("x"),
            Err(SetupError::InvalidGameMode { .. })
        ));
    }

    #[test]
    fn test_rematch_answer() {
        assert!(wants_rematch("r"));
        assert!(!wants_rematch("R"));
        assert!(!wants_rematch("yes"));
        assert!(!wants_rematch(""));
    }
}
