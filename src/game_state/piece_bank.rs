//! Per-color store of captured pieces available for dropping.

use crate::game_state::chess_types::*;

/// Captured pieces, already recolored to the capturing side, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceBank {
    pieces: [Vec<Piece>; 2],
}

impl PieceBank {
    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    #[inline]
    pub fn push(&mut self, piece: Piece) {
        self.pieces[piece.color.index()].push(piece);
    }

    /// Remove the oldest banked piece of `kind` owned by `color`.
    pub fn remove_first_of_kind(&mut self, color: Color, kind: PieceKind) -> Option<Piece> {
        let bank = &mut self.pieces[color.index()];
        let index = bank.iter().position(|piece| piece.kind == kind)?;
        Some(bank.remove(index))
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces(color)
            .iter()
            .filter(|piece| piece.kind == kind)
            .count()
    }

    pub fn is_empty(&self, color: Color) -> bool {
        self.pieces(color).is_empty()
    }

    /// Banked pieces of `color` with duplicate kinds collapsed, keeping the
    /// first-seen order. Drops of two equal kinds are interchangeable.
    pub fn distinct_kinds(&self, color: Color) -> Vec<Piece> {
        let mut out: Vec<Piece> = Vec::new();
        for piece in self.pieces(color) {
            if !out.iter().any(|seen| seen.kind == piece.kind) {
                out.push(*piece);
            }
        }
        out
    }
}
