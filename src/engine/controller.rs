//! Turn engine: validation, move application, chain captures, termination
//! and scoring.

use log::{debug, info, warn};
use rand::Rng;

use crate::board::{Board, BoardSize, Move, MoveList, Side};
use crate::config::{GameConfig, GameMode};

use super::{
    Frontend, GameState, Outcome, Player, Scores, TurnError, TurnOutcome, FORFEIT_TOKEN,
};

/// One game between two players on one board.
///
/// Both sides' legal-move sets are refreshed after every applied move, so
/// they are never stale when the next submission is validated. Rejected
/// submissions leave every piece of state untouched.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    state: GameState,
    last_scores: Option<Scores>,
}

impl Game {
    /// Start a game in the standard layout with `First` to move.
    #[must_use]
    pub fn new(size: BoardSize, first: Player, second: Player) -> Self {
        Game::from_board(Board::new(size), first, second, Side::First)
    }

    /// Build the players a config describes and start a game.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let first = Player::human(Side::First, config.first_name.clone());
        let second = match config.mode {
            GameMode::VsComputer => Player::computer(Side::Second),
            GameMode::TwoPlayer => Player::human(Side::Second, config.second_name.clone()),
        };
        Game::new(config.size, first, second)
    }

    /// Start from an arbitrary position with `to_move` on turn.
    ///
    /// If `to_move` already has no legal move the game is finished on
    /// construction.
    #[must_use]
    pub fn from_board(board: Board, first: Player, second: Player, to_move: Side) -> Self {
        debug_assert_eq!(first.side(), Side::First);
        debug_assert_eq!(second.side(), Side::Second);

        let mut game = Game {
            board,
            players: [first, second],
            state: GameState::AwaitingMove {
                side: to_move,
                chain_from: None,
            },
            last_scores: None,
        };
        game.start(to_move);
        game
    }

    /// Fresh board of the same size for the same players. Accumulated
    /// scores carry over.
    pub fn rematch(&mut self) {
        info!(
            "rematch: {} {} - {} {}",
            self.players[0],
            self.players[0].score(),
            self.players[1],
            self.players[1].score()
        );
        self.board = Board::new(self.board.size());
        self.last_scores = None;
        self.start(Side::First);
    }

    fn start(&mut self, to_move: Side) {
        for player in &mut self.players {
            player.reset_pieces(&self.board);
        }
        self.refresh_legal_moves();
        info!(
            "new {} game: {} vs {}",
            self.board.size(),
            self.players[0],
            self.players[1]
        );

        self.state = match self.termination(to_move) {
            Some(outcome) => {
                self.finish(outcome);
                GameState::Finished(outcome)
            }
            None => GameState::AwaitingMove {
                side: to_move,
                chain_from: None,
            },
        };
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Side on turn, or `None` once the game is over.
    #[must_use]
    pub fn side_to_move(&self) -> Option<Side> {
        match self.state {
            GameState::AwaitingMove { side, .. } => Some(side),
            GameState::Finished(_) => None,
        }
    }

    /// Legal moves of the side on turn (empty once the game is over).
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.side_to_move()
            .map(|side| self.player(side).legal_moves().clone())
            .unwrap_or_default()
    }

    /// Points awarded by the last finished game, if it has finished.
    #[must_use]
    pub fn scores(&self) -> Option<Scores> {
        self.last_scores
    }

    /// Recompute both sides' legal-move sets from the board.
    pub fn refresh_legal_moves(&mut self) {
        for player in &mut self.players {
            player.refresh_legal_moves(&self.board);
        }
    }

    /// Uniformly random legal move for the side on turn.
    pub fn random_legal_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        let side = self.side_to_move()?;
        self.player(side).random_legal_move(rng)
    }

    /// Submit a token for the side on turn: `"Q"` or a move like `Cb>Dc`.
    ///
    /// The token must match a move in the current legal-move set exactly.
    pub fn submit(&mut self, token: &str) -> Result<TurnOutcome, TurnError> {
        if token == FORFEIT_TOKEN {
            return self.forfeit();
        }
        self.ensure_running()?;
        let mv: Move = token.parse().map_err(|e| {
            warn!("rejected token {token:?}");
            TurnError::InvalidMoveToken {
                token: token.to_string(),
                reason: Some(e),
            }
        })?;
        self.play_move(mv)
    }

    /// The side on turn gives up.
    pub fn forfeit(&mut self) -> Result<TurnOutcome, TurnError> {
        let side = self.ensure_running()?;
        let outcome = Outcome::Forfeit(side);
        self.finish(outcome);
        self.state = GameState::Finished(outcome);
        Ok(TurnOutcome::GameOver { mv: None, outcome })
    }

    /// Validate and apply `mv` for the side on turn.
    pub fn play_move(&mut self, mv: Move) -> Result<TurnOutcome, TurnError> {
        let side = self.ensure_running()?;
        if !self.player(side).is_legal(mv) {
            warn!("rejected illegal move {mv} for {side}");
            return Err(TurnError::InvalidMoveToken {
                token: mv.to_string(),
                reason: None,
            });
        }

        let captured = self.apply(side, mv);
        self.refresh_legal_moves();

        if captured && self.players[side.index()].narrow_to_chain(mv.to()) {
            debug!("{side} must keep capturing from {}", mv.to());
            self.state = GameState::AwaitingMove {
                side,
                chain_from: Some(mv.to()),
            };
            return Ok(TurnOutcome::ChainCapture { side, mv });
        }

        let next = side.opponent();
        if let Some(outcome) = self.termination(next) {
            self.finish(outcome);
            self.state = GameState::Finished(outcome);
            return Ok(TurnOutcome::GameOver {
                mv: Some(mv),
                outcome,
            });
        }

        self.state = GameState::AwaitingMove {
            side: next,
            chain_from: None,
        };
        Ok(TurnOutcome::TurnSwitched { mv, next })
    }

    /// Drive the game to its end through `frontend`.
    ///
    /// Computer players draw a uniformly random legal move from `rng`;
    /// human tokens are re-requested until one is accepted.
    pub fn play<F, R>(&mut self, frontend: &mut F, rng: &mut R) -> Outcome
    where
        F: Frontend + ?Sized,
        R: Rng + ?Sized,
    {
        frontend.render(&self.board);
        loop {
            let side = match self.state {
                GameState::AwaitingMove { side, .. } => side,
                GameState::Finished(outcome) => {
                    if !matches!(outcome, Outcome::Forfeit(_)) {
                        frontend.announce_game_end(outcome, &self.players);
                    }
                    frontend.announce_scores(&self.players[0], &self.players[1]);
                    return outcome;
                }
            };

            let turn = self.take_turn(side, frontend, rng);
            if let Some(mv) = turn.applied_move() {
                frontend.render(&self.board);
                frontend.announce_move(self.player(side), mv);
            }
        }
    }

    fn take_turn<F, R>(&mut self, side: Side, frontend: &mut F, rng: &mut R) -> TurnOutcome
    where
        F: Frontend + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            let player = &self.players[side.index()];
            let result = if player.is_computer() {
                // Termination is checked before the state rests on a side, so
                // an empty set here only concedes.
                match player.random_legal_move(rng) {
                    Some(mv) => self.play_move(mv),
                    None => self.forfeit(),
                }
            } else {
                let token = frontend.request_move(player);
                self.submit(&token)
            };

            match result {
                Ok(turn) => return turn,
                Err(err) => {
                    debug!("{err}");
                    frontend.notify_invalid_input();
                }
            }
        }
    }

    fn ensure_running(&self) -> Result<Side, TurnError> {
        match self.state {
            GameState::AwaitingMove { side, .. } => Ok(side),
            GameState::Finished(outcome) => Err(TurnError::GameOver { outcome }),
        }
    }

    /// Relocate, promote and remove the jumped piece. Returns whether a
    /// capture happened.
    fn apply(&mut self, side: Side, mv: Move) -> bool {
        let Some(id) = self.board.relocate(mv.from(), mv.to()) else {
            return false;
        };
        debug!("{side} plays {mv}");

        if mv.to().row() == side.promotion_row(self.board.size())
            && self.board.piece(id).is_some_and(|p| !p.is_king())
        {
            self.board.crown(id);
            debug!("{side} crowned at {}", mv.to());
        }

        let Some(over) = mv.captured_square() else {
            return false;
        };
        match self.board.remove(over) {
            Some((captured, _)) => {
                self.players[side.opponent().index()].remove_piece(captured);
                true
            }
            None => false,
        }
    }

    /// Ending, if `to_move` cannot move.
    fn termination(&self, to_move: Side) -> Option<Outcome> {
        if self.player(to_move).has_moves() {
            return None;
        }
        let opponent = to_move.opponent();
        if self.player(opponent).has_moves() {
            Some(Outcome::Win(opponent))
        } else {
            Some(Outcome::Tie)
        }
    }

    /// Tally the remaining pieces into both players' scores.
    ///
    /// A forfeiting side gets nothing for its own pieces.
    fn finish(&mut self, outcome: Outcome) -> Scores {
        let forfeiter = match outcome {
            Outcome::Forfeit(side) => Some(side),
            Outcome::Tie | Outcome::Win(_) => None,
        };

        let mut scores = Scores::default();
        for (_, piece) in self.board.live_pieces() {
            if Some(piece.owner()) != forfeiter {
                scores.add(piece.owner(), piece.rank().value());
            }
        }
        for player in &mut self.players {
            player.add_points(scores.of(player.side()));
        }

        info!(
            "game over ({outcome}): {} +{}, {} +{}",
            self.players[0], scores.first, self.players[1], scores.second
        );
        self.last_scores = Some(scores);
        scores
    }
}
