use crate::game_state::chess_types::*;

/// Single undo record for `Board::apply_trial` / `Board::undo_trial`.
///
/// Legality filters simulate a candidate on a scratch board, test king safety,
/// then roll the board back with this record instead of cloning a new grid per
/// candidate.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub from: Option<Square>,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
}
