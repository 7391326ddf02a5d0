//! Per-side state: identity, owned pieces and the current legal-move set.

use std::fmt;

use log::trace;
use rand::Rng;

use crate::board::{Board, Move, MoveList, PieceId, Side, Square};

/// Display name used for the computer player.
pub const COMPUTER_NAME: &str = "Computer";

/// Who supplies a side's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayerKind {
    #[default]
    Human,
    Computer,
}

/// One side of the game.
///
/// The piece list is the side's live pieces in creation order. The
/// legal-move set is only ever replaced wholesale, by a refresh or by
/// narrowing to chain captures.
#[derive(Clone, Debug)]
pub struct Player {
    side: Side,
    name: String,
    kind: PlayerKind,
    score: u32,
    pieces: Vec<PieceId>,
    legal_moves: MoveList,
}

impl Player {
    #[must_use]
    pub fn new(side: Side, name: impl Into<String>, kind: PlayerKind) -> Self {
        Player {
            side,
            name: name.into(),
            kind,
            score: 0,
            pieces: Vec::new(),
            legal_moves: MoveList::new(),
        }
    }

    #[must_use]
    pub fn human(side: Side, name: impl Into<String>) -> Self {
        Player::new(side, name, PlayerKind::Human)
    }

    #[must_use]
    pub fn computer(side: Side) -> Self {
        Player::new(side, COMPUTER_NAME, PlayerKind::Computer)
    }

    #[inline]
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    /// Points accumulated over every game of the session.
    #[inline]
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    #[must_use]
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    #[must_use]
    pub fn has_moves(&self) -> bool {
        !self.legal_moves.is_empty()
    }

    /// Whether `mv` is in the current legal-move set.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves.contains(mv)
    }

    /// Recompute the legal-move set from scratch against `board`.
    pub fn refresh_legal_moves(&mut self, board: &Board) {
        self.legal_moves = board.generate_moves(&self.pieces);
        trace!(
            "{} ({}) has {} legal moves",
            self.name,
            self.side,
            self.legal_moves.len()
        );
    }

    /// Narrow the legal-move set to captures starting at `from`.
    ///
    /// Returns false and leaves the set alone if there are none.
    pub fn narrow_to_chain(&mut self, from: Square) -> bool {
        let chain = self
            .legal_moves
            .filtered(|m| m.from() == from && m.is_capture());
        if chain.is_empty() {
            return false;
        }
        self.legal_moves = chain;
        true
    }

    /// Uniformly random move from the legal-move set.
    ///
    /// Callers must check for termination first; an empty set returns `None`.
    pub fn random_legal_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        debug_assert!(
            self.has_moves(),
            "random move requested for {} with no legal moves",
            self.side
        );
        if self.legal_moves.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.legal_moves.len());
        self.legal_moves.get(idx)
    }

    /// Take ownership of this side's pieces on a fresh board.
    pub(crate) fn reset_pieces(&mut self, board: &Board) {
        self.pieces = board.pieces_of(self.side).collect();
        self.legal_moves = MoveList::new();
    }

    pub(crate) fn remove_piece(&mut self, id: PieceId) -> bool {
        match self.pieces.iter().position(|&p| p == id) {
            Some(idx) => {
                self.pieces.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, BoardSize, Rank};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_refresh_is_idempotent() {
        let board = Board::new(BoardSize::Eight);
        let mut player = Player::human(Side::First, "Alice");
        player.reset_pieces(&board);
        player.refresh_legal_moves(&board);
        let first = player.legal_moves().clone();
        player.refresh_legal_moves(&board);
        assert_eq!(player.legal_moves(), &first);
    }

    #[test]
    fn test_narrow_to_chain_keeps_only_captures_from_square() {
        let board = BoardBuilder::new(BoardSize::Eight)
            .piece(Square(2, 3), Side::First, Rank::Soldier)
            .piece(Square(3, 4), Side::Second, Rank::Soldier)
            .piece(Square(2, 7), Side::First, Rank::Soldier)
            .build()
            .unwrap();
        let mut player = Player::human(Side::First, "Alice");
        player.reset_pieces(&board);
        player.refresh_legal_moves(&board);
        assert!(player.legal_moves().len() > 1);

        assert!(player.narrow_to_chain(Square(2, 3)));
        let tokens: Vec<String> = player.legal_moves().iter().map(ToString::to_string).collect();
        assert_eq!(tokens, ["Dc>Fe"]);
    }

    #[test]
    fn test_narrow_without_chain_leaves_set() {
        let board = Board::new(BoardSize::Six);
        let mut player = Player::human(Side::First, "Alice");
        player.reset_pieces(&board);
        player.refresh_legal_moves(&board);
        let before = player.legal_moves().clone();
        assert!(!player.narrow_to_chain(Square(1, 0)));
        assert_eq!(player.legal_moves(), &before);
    }

    #[test]
    fn test_random_move_is_member() {
        let board = Board::new(BoardSize::Ten);
        let mut player = Player::computer(Side::Second);
        player.reset_pieces(&board);
        player.refresh_legal_moves(&board);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mv = player.random_legal_move(&mut rng).expect("has moves");
            assert!(player.is_legal(mv));
        }
    }

    #[test]
    fn test_remove_piece() {
        let board = Board::new(BoardSize::Six);
        let mut player = Player::human(Side::First, "Alice");
        player.reset_pieces(&board);
        let id = player.pieces()[0];
        assert!(player.remove_piece(id));
        assert!(!player.remove_piece(id));
        assert_eq!(player.pieces().len(), 5);
    }
}
