use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Push every square of `targets` onto `out` as a `Position`.
#[inline]
pub fn push_targets(targets: SquareMask, out: &mut Vec<Position>) {
    out.extend(squares_in(targets).map(Position::from_square));
}

/// Apply a move (`from` set) or drop (`drop` set) to `scratch`, test whether
/// `color`'s king is attacked, and roll the board back.
pub(crate) fn leaves_king_safe(
    scratch: &mut Board,
    from: Option<Position>,
    to: Position,
    drop: Option<Piece>,
    color: Color,
) -> bool {
    let Some(undo) = scratch.apply_trial(from, to, drop) else {
        return false;
    };
    let safe = !is_king_in_check(scratch, color);
    scratch.undo_trial(undo);
    safe
}
