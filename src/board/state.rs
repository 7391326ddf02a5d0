use super::{BoardError, BoardSize, Piece, PieceId, Rank, Side, Square};

/// An N×N grid of optional occupants plus the arena that owns the pieces.
///
/// The board knows nothing about rules. Cells hold ids into `arena`; a
/// captured piece leaves its arena slot as `None` so ids stay stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) size: BoardSize,
    pub(crate) cells: Vec<Option<PieceId>>,
    pub(crate) arena: Vec<Option<Piece>>,
}

impl Board {
    /// Board in the starting layout.
    ///
    /// Each side fills `(N - 2) / 2` rows on the odd-parity cells. Pieces
    /// are created line by line, left to right, which fixes each side's
    /// piece order for move enumeration.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        let mut board = Board::empty(size);
        let n = size.dimension();
        for line in 0..size.rows_per_side() {
            for column in 0..n {
                if line % 2 == column % 2 {
                    board.place(Square(n - line - 1, column), Side::Second, Rank::Soldier);
                } else {
                    board.place(Square(line, column), Side::First, Rank::Soldier);
                }
            }
        }
        board
    }

    /// Starting board for a raw dimension, rejecting anything but 6, 8 or 10.
    pub fn with_dimension(dimension: usize) -> Result<Self, BoardError> {
        Ok(Board::new(BoardSize::try_from(dimension)?))
    }

    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Board {
            size,
            cells: vec![None; size.cell_count()],
            arena: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        sq.row() < self.dimension() && sq.column() < self.dimension()
    }

    /// Occupant id of a cell. Off-board squares read as empty.
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<PieceId> {
        if self.contains(sq) {
            self.cells[sq.as_index(self.size)]
        } else {
            None
        }
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.arena.get(id.as_usize()).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.get(sq).and_then(|id| self.piece(id))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// True if `sq` holds a piece owned by the opponent of `side`.
    #[must_use]
    pub fn is_rival(&self, sq: Square, side: Side) -> bool {
        self.piece_at(sq).is_some_and(|p| p.owner() != side)
    }

    /// Live pieces of `side` in creation order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = PieceId> + '_ {
        self.live_pieces()
            .filter(move |(_, piece)| piece.owner() == side)
            .map(|(id, _)| id)
    }

    /// Every live piece in creation order.
    pub fn live_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.arena
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|p| (PieceId(idx as u16), p)))
    }

    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    pub(crate) fn set(&mut self, sq: Square, id: PieceId) {
        let idx = sq.as_index(self.size);
        self.cells[idx] = Some(id);
    }

    pub(crate) fn clear(&mut self, sq: Square) -> Option<PieceId> {
        let idx = sq.as_index(self.size);
        self.cells[idx].take()
    }

    /// Create a piece on an empty cell.
    pub(crate) fn place(&mut self, sq: Square, owner: Side, rank: Rank) -> PieceId {
        debug_assert!(self.is_empty(sq), "placing onto occupied {sq}");
        let id = PieceId(self.arena.len() as u16);
        self.arena.push(Some(Piece::new(owner, rank, sq)));
        self.set(sq, id);
        id
    }

    /// Move the occupant of `from` to the empty cell `to`, keeping the
    /// piece's stored square in step with the grid.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<PieceId> {
        let id = self.clear(from)?;
        if let Some(piece) = self.arena[id.as_usize()].as_mut() {
            piece.move_to(to);
        }
        self.set(to, id);
        Some(id)
    }

    pub(crate) fn crown(&mut self, id: PieceId) {
        if let Some(piece) = self.arena[id.as_usize()].as_mut() {
            piece.crown();
        }
    }

    /// Take the occupant of `sq` off the board for good.
    pub(crate) fn remove(&mut self, sq: Square) -> Option<(PieceId, Piece)> {
        let id = self.clear(sq)?;
        self.arena[id.as_usize()].take().map(|piece| (id, piece))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BoardSize::default())
    }
}
