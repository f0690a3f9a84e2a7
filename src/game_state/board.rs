//! Flat 6×6 piece grid with cached occupancy masks.
//!
//! `Board` is owned by `GameState`; every state-producing operation builds a
//! new board, while legality probes mutate a scratch copy through the
//! apply/undo pair below.

use crate::game_state::chess_rules::NUM_SQUARES;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
    occupancy_by_color: [SquareMask; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
            occupancy_by_color: [0; 2],
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.at(position.square())
    }

    #[inline]
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Put `piece` on `position` (or clear it), returning what was there.
    pub fn set(&mut self, position: Position, piece: Option<Piece>) -> Option<Piece> {
        self.set_square(position.square(), piece)
    }

    fn set_square(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let mask = 1u64 << square;
        let previous = self.squares[square as usize].take();
        if let Some(old) = previous {
            self.occupancy_by_color[old.color.index()] &= !mask;
        }
        if let Some(new) = piece {
            self.occupancy_by_color[new.color.index()] |= mask;
        }
        self.squares[square as usize] = piece;
        previous
    }

    #[inline]
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        self.set(position, None)
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> SquareMask {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> SquareMask {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    /// Every occupied square with its piece, in square order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, piece)| piece.map(|p| (Position::from_square(sq as Square), p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        squares_in(self.occupancy(color)).filter_map(move |sq| {
            self.at(sq).map(|piece| (Position::from_square(sq), piece))
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    pub fn contains_id(&self, id: PieceId) -> bool {
        self.squares.iter().flatten().any(|piece| piece.id == id)
    }

    /// Move whatever stands on `from` to `to` (or place `drop` on `to` when
    /// `from` is `None`) and return the record needed to roll it back.
    pub fn apply_trial(&mut self, from: Option<Position>, to: Position, drop: Option<Piece>) -> Option<UndoState> {
        let moved_piece = match from {
            Some(origin) => self.take(origin)?,
            None => drop?,
        };
        let captured_piece = self.set(to, Some(moved_piece));
        Some(UndoState {
            from: from.map(Position::square),
            to: to.square(),
            moved_piece,
            captured_piece,
        })
    }

    pub fn undo_trial(&mut self, undo: UndoState) {
        self.set_square(undo.to, undo.captured_piece);
        if let Some(origin) = undo.from {
            self.set_square(origin, Some(undo.moved_piece));
        }
    }
}
