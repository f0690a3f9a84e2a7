//! Attack and check detection.
//!
//! Everything here works on raw attack patterns (pseudo-legal, ignoring the
//! attacker's own king safety). Nothing in this module calls the filtered
//! legal-move path, so check detection and king-move legality cannot recurse
//! into each other.

use tracing::warn;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares attacked by `piece` standing on `square`.
#[inline]
pub fn piece_attacks(piece: Piece, square: Square, occupancy: SquareMask) -> SquareMask {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

/// Locate `color`'s king. A missing king breaks a board invariant: debug
/// builds assert, release builds log and report `None`.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    let king = board.find_king(color);
    if king.is_none() {
        warn!(?color, "no king on the board");
        debug_assert!(false, "{color:?} king missing from the board");
    }
    king
}

pub fn is_square_attacked(board: &Board, position: Position, attacker_color: Color) -> bool {
    let target_mask = position.mask();
    let occupancy = board.occupancy_all();
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(piece, from.square(), occupancy) & target_mask != 0)
}

/// Every `attacker_color` piece whose attack pattern covers `position`.
pub fn attackers_to_square(
    board: &Board,
    position: Position,
    attacker_color: Color,
) -> Vec<(Position, Piece)> {
    let target_mask = position.mask();
    let occupancy = board.occupancy_all();
    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| piece_attacks(*piece, from.square(), occupancy) & target_mask != 0)
        .collect()
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king, color.opposite())
}

/// Whether `color` (default: the side to move) is currently in check.
#[inline]
pub fn is_in_check(game_state: &GameState, color: Option<Color>) -> bool {
    is_king_in_check(&game_state.board, color.unwrap_or(game_state.current_player))
}

/// Squares strictly between `a` and `b` when they share a row, column, or
/// diagonal; empty otherwise.
pub fn squares_between(a: Position, b: Position) -> SquareMask {
    let d_row = b.row as i8 - a.row as i8;
    let d_col = b.col as i8 - a.col as i8;

    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned || (d_row == 0 && d_col == 0) {
        return 0;
    }

    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let mut mask = 0u64;
    let mut current = a.offset(step_row, step_col);
    while let Some(pos) = current {
        if pos == b {
            break;
        }
        mask |= pos.mask();
        current = pos.offset(step_row, step_col);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_in_check, squares_between};
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_open_file_gives_check() {
        let state = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(5, 0), PieceKind::Rook, Color::Black),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        assert!(is_in_check(&state, Some(Color::White)));
        assert!(is_in_check(&state, None));
        assert!(!is_in_check(&state, Some(Color::Black)));
    }

    #[test]
    fn blocked_rook_does_not_give_check() {
        let state = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(2, 0), PieceKind::Knight, Color::White),
                (Position::new(5, 0), PieceKind::Rook, Color::Black),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        assert!(!is_in_check(&state, Some(Color::White)));
    }

    #[test]
    fn pawn_push_square_is_not_an_attack() {
        let state = GameState::from_pieces(
            &[
                (Position::new(2, 2), PieceKind::King, Color::White),
                (Position::new(3, 2), PieceKind::Pawn, Color::Black),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        assert!(!is_in_check(&state, None));
    }

    #[test]
    fn double_check_reports_both_attackers() {
        let state = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(4, 0), PieceKind::Rook, Color::Black),
                (Position::new(2, 1), PieceKind::Knight, Color::Black),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        let attackers = attackers_to_square(&state.board, Position::new(0, 0), Color::Black);
        assert_eq!(attackers.len(), 2);
    }

    #[test]
    fn squares_between_lines_and_non_lines() {
        let a1 = Position::new(0, 0);
        let a4 = Position::new(3, 0);
        assert_eq!(
            squares_between(a1, a4),
            Position::new(1, 0).mask() | Position::new(2, 0).mask()
        );
        let d4 = Position::new(3, 3);
        assert_eq!(
            squares_between(d4, a1),
            Position::new(1, 1).mask() | Position::new(2, 2).mask()
        );
        assert_eq!(squares_between(a1, Position::new(1, 2)), 0);
        assert_eq!(squares_between(a1, Position::new(0, 1)), 0);
    }
}
