//! Legal move enumeration.
//!
//! Moves are one diagonal square (step) or a two-square jump over an
//! adjacent rival (capture). Soldiers only move forward; kings also move
//! backward, still one square at a time.

use super::{Board, Move, MoveList, PieceId, Side, Square};

/// Column offsets, right diagonal before left.
const COLUMN_DELTAS: [isize; 2] = [1, -1];

impl Board {
    /// Every legal move for `pieces`, in piece order.
    ///
    /// Per piece: forward direction before reverse (kings only), and within
    /// a direction steps before captures, right before left. The random
    /// move picker indexes into this order.
    #[must_use]
    pub fn generate_moves(&self, pieces: &[PieceId]) -> MoveList {
        let mut moves = MoveList::new();
        for &id in pieces {
            self.generate_piece_moves(id, &mut moves);
        }
        moves
    }

    /// Legal moves for every live piece of `side`, in creation order.
    #[must_use]
    pub fn generate_side_moves(&self, side: Side) -> MoveList {
        let pieces: Vec<PieceId> = self.pieces_of(side).collect();
        self.generate_moves(&pieces)
    }

    pub(crate) fn generate_piece_moves(&self, id: PieceId, moves: &mut MoveList) {
        let Some(piece) = self.piece(id) else {
            return;
        };
        for &direction in piece.directions() {
            self.generate_moves_in_direction(piece.square(), piece.owner(), direction, moves);
        }
    }

    fn generate_moves_in_direction(
        &self,
        from: Square,
        side: Side,
        direction: isize,
        moves: &mut MoveList,
    ) {
        for d_column in COLUMN_DELTAS {
            if let Some(to) = from.offset(direction, d_column, self.size) {
                if self.is_empty(to) {
                    moves.push(Move::new(from, to));
                }
            }
        }

        for d_column in COLUMN_DELTAS {
            let Some(over) = from.offset(direction, d_column, self.size) else {
                continue;
            };
            let Some(to) = from.offset(2 * direction, 2 * d_column, self.size) else {
                continue;
            };
            if self.is_empty(to) && self.is_rival(over, side) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
