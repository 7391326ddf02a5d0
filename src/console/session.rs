//! A console session: one or more games between the same players.

use std::io::{BufRead, Write};

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::engine::{Frontend, Game, Outcome, Scores};

use super::print::GOODBYE;
use super::ConsoleFrontend;

/// What a finished session amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: u32,
    pub last_outcome: Outcome,
    /// Points accumulated over every game.
    pub totals: Scores,
}

/// Play games until the player declines a rematch, then say goodbye with
/// the accumulated scores.
pub fn run_session<R, W, G>(
    console: &mut ConsoleFrontend<R, W>,
    config: &GameConfig,
    rng: &mut G,
) -> SessionSummary
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut game = Game::from_config(config);
    let mut games_played = 0;
    let last_outcome = loop {
        let outcome = game.play(console, rng);
        games_played += 1;
        if !console.prompt_rematch() {
            break outcome;
        }
        game.rematch();
    };

    let [first, second] = game.players();
    console.say(GOODBYE);
    console.announce_scores(first, second);
    info!("session over after {games_played} game(s)");

    SessionSummary {
        games_played,
        last_outcome,
        totals: Scores {
            first: first.score(),
            second: second.score(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSize, Side};
    use crate::config::GameMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn session(input: &str, config: &GameConfig) -> (SessionSummary, String) {
        session_bytes(input.as_bytes(), config)
    }

    fn session_bytes(input: &[u8], config: &GameConfig) -> (SessionSummary, String) {
        let mut console = ConsoleFrontend::new(Cursor::new(input.to_vec()), Vec::new());
        let mut rng = StdRng::seed_from_u64(11);
        let summary = run_session(&mut console, config, &mut rng);
        (summary, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_forfeit_then_quit() {
        let config = GameConfig::new()
            .with_size(BoardSize::Six)
            .with_first_name("Alice");
        let (summary, out) = session("Q\nx\n", &config);

        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.last_outcome, Outcome::Forfeit(Side::First));
        assert_eq!(summary.totals, Scores { first: 0, second: 6 });
        assert!(!out.contains("Game ended"));
        assert!(out.ends_with("Bye Bye, thanks for playing\nAlice has 0 points\nComputer has 6 points\n"));
    }

    #[test]
    fn test_rematch_accumulates() {
        let config = GameConfig::new()
            .with_size(BoardSize::Eight)
            .with_mode(GameMode::TwoPlayer)
            .with_first_name("Alice")
            .with_second_name("Bob");
        // Alice forfeits twice.
        let (summary, out) = session("Q\nr\nQ\n", &config);

        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.totals, Scores { first: 0, second: 24 });
        assert!(out.contains("Bob has 12 points"));
        assert!(out.contains("Bob has 24 points"));
    }

    #[test]
    fn test_closed_input_forfeits_side_on_turn() {
        let config = GameConfig::new()
            .with_size(BoardSize::Six)
            .with_mode(GameMode::TwoPlayer)
            .with_first_name("Alice")
            .with_second_name("Bob");
        let (summary, out) = session("Ab>Bc\n", &config);
        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.last_outcome, Outcome::Forfeit(Side::Second));
        assert!(out.contains("Alice's move was (O) : Ab>Bc"));
        assert!(out.contains("Bob's Turn (X) : "));
    }

    #[test]
    fn test_garbled_move_line_is_reprompted() {
        let config = GameConfig::new()
            .with_size(BoardSize::Six)
            .with_mode(GameMode::TwoPlayer)
            .with_first_name("Alice")
            .with_second_name("Bob");
        let (summary, out) = session_bytes(b"\xff\xfe\nAb>Bc\nQ\nx\n", &config);

        assert_eq!(out.matches("wrong input, try again").count(), 1);
        assert!(out.contains("Alice's move was (O) : Ab>Bc"));
        assert_eq!(summary.last_outcome, Outcome::Forfeit(Side::Second));
    }
}
