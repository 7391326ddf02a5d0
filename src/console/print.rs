//! Text the console shows. Everything here is a pure function of its
//! arguments; writing it out is the frontend's job.

use std::fmt::Write as _;

use crate::board::{Board, Move, Rank, Side, Square};
use crate::engine::{Outcome, Player};

pub const WRONG_INPUT: &str = "wrong input, try again";
pub const GOODBYE: &str = "Bye Bye, thanks for playing";

/// Generic setup and session prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    PlayerName,
    GameMode,
    BoardSize,
    Rematch,
}

#[must_use]
pub const fn prompt_text(prompt: Prompt) -> &'static str {
    match prompt {
        Prompt::PlayerName => "Enter player name",
        Prompt::GameMode => "Enter 'c' to play against the computer and 'p' for multi player",
        Prompt::BoardSize => "Enter '6', '8', or '10' as the board size",
        Prompt::Rematch => "Press 'r' for a rematch or anything else to quit",
    }
}

/// Symbol drawn for a piece.
#[must_use]
pub const fn piece_symbol(owner: Side, rank: Rank) -> char {
    match (owner, rank) {
        (Side::First, Rank::Soldier) => 'O',
        (Side::First, Rank::King) => 'Q',
        (Side::Second, Rank::Soldier) => 'X',
        (Side::Second, Rank::King) => 'Z',
    }
}

/// Symbol a side is referred to by in prompts (its soldier).
#[must_use]
pub const fn side_symbol(side: Side) -> char {
    piece_symbol(side, Rank::Soldier)
}

/// Draw the board as a grid with lettered columns and rows.
///
/// ```
/// use checkers_engine::board::{Board, BoardSize};
/// use checkers_engine::console::print::render_board;
///
/// let text = render_board(&Board::new(BoardSize::Six));
/// let lines: Vec<&str> = text.lines().collect();
/// assert_eq!(lines[0], "   A   B   C   D   E   F");
/// assert_eq!(lines[1], " =========================");
/// assert_eq!(lines[2], "a|   | O |   | O |   | O |");
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let n = board.dimension();
    let separator = format!(" {}", "=".repeat(4 * n + 1));
    let mut out = String::with_capacity((n + 1) * (4 * n + 4) * 2);

    for col in 0..n {
        let _ = write!(out, "   {}", Square::column_letter(col));
    }
    out.push('\n');

    for row in 0..n {
        out.push_str(&separator);
        out.push('\n');
        out.push(Square::row_letter(row));
        out.push('|');
        for col in 0..n {
            let symbol = board
                .piece_at(Square(row, col))
                .map_or(' ', |p| piece_symbol(p.owner(), p.rank()));
            let _ = write!(out, " {symbol} |");
        }
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

#[must_use]
pub fn turn_prompt(player: &Player) -> String {
    format!(
        "{}'s Turn ({}) : ",
        player.name(),
        side_symbol(player.side())
    )
}

#[must_use]
pub fn move_announcement(player: &Player, mv: Move) -> String {
    format!(
        "{}'s move was ({}) : {mv}",
        player.name(),
        side_symbol(player.side())
    )
}

/// End-of-game line. Forfeits have none.
#[must_use]
pub fn end_message(outcome: Outcome, players: &[Player; 2]) -> Option<String> {
    match outcome {
        Outcome::Win(side) => Some(format!(
            "Game ended, and the winner is: {}",
            players[side.index()].name()
        )),
        Outcome::Tie => Some("Game ended, and it's a tie".to_string()),
        Outcome::Forfeit(_) => None,
    }
}

#[must_use]
pub fn score_line(player: &Player) -> String {
    format!("{} has {} points", player.name(), player.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, BoardSize};

    #[test]
    fn test_render_eight_by_eight() {
        let text = render_board(&Board::new(BoardSize::Eight));
        let lines: Vec<&str> = text.lines().collect();
        // header + 8 rows each preceded by a separator + final separator
        assert_eq!(lines.len(), 1 + 8 * 2 + 1);
        assert_eq!(lines[0], "   A   B   C   D   E   F   G   H");
        assert_eq!(lines[1].len(), 1 + 4 * 8 + 1);
        assert_eq!(lines[2], "a|   | O |   | O |   | O |   | O |");
        assert_eq!(lines[16], "h| X |   | X |   | X |   | X |   |");
        assert_eq!(lines[8], "d|   |   |   |   |   |   |   |   |");
        assert_eq!(lines[lines.len() - 1], lines[1]);
    }

    #[test]
    fn test_kings_use_their_own_symbols() {
        let board = BoardBuilder::new(BoardSize::Six)
            .piece(Square(0, 1), Side::Second, Rank::King)
            .piece(Square(5, 0), Side::First, Rank::King)
            .build()
            .unwrap();
        let text = render_board(&board);
        assert!(text.contains("a|   | Z |"));
        assert!(text.contains("f| Q |"));
    }

    #[test]
    fn test_player_lines() {
        let alice = Player::human(Side::First, "Alice");
        let computer = Player::computer(Side::Second);
        assert_eq!(turn_prompt(&alice), "Alice's Turn (O) : ");
        assert_eq!(
            move_announcement(&computer, "Fe>Ed".parse().unwrap()),
            "Computer's move was (X) : Fe>Ed"
        );
        assert_eq!(score_line(&alice), "Alice has 0 points");
    }

    #[test]
    fn test_end_messages() {
        let players = [
            Player::human(Side::First, "Alice"),
            Player::human(Side::Second, "Bob"),
        ];
        assert_eq!(
            end_message(Outcome::Win(Side::Second), &players).as_deref(),
            Some("Game ended, and the winner is: Bob")
        );
        assert_eq!(
            end_message(Outcome::Tie, &players).as_deref(),
            Some("Game ended, and it's a tie")
        );
        assert_eq!(end_message(Outcome::Forfeit(Side::First), &players), None);
    }
}
