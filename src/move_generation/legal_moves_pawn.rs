use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::pawn_moves::pawn_attacks;

/// Pseudo-legal pawn destinations: single push onto an empty square, double
/// push from the start row through two empty squares, and diagonal captures of
/// opposing pieces. No en-passant in this variant.
pub fn generate_pawn_moves(board: &Board, from: Position, pawn: Piece, out: &mut Vec<Position>) {
    let forward = pawn.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row == pawn_start_row(pawn.color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    let captures = pawn_attacks(pawn.color, from.square()) & board.occupancy(pawn.color.opposite());
    push_targets(captures, out);
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn pawn(color: Color) -> Piece {
        Piece::new(PieceId(1), PieceKind::Pawn, color)
    }

    #[test]
    fn white_pawn_on_start_row_has_double_step() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_pawn_moves(&board, Position::new(1, 0), pawn(Color::White), &mut out);
        assert_eq!(out, vec![Position::new(2, 0), Position::new(3, 0)]);
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_pawn_moves(&board, Position::new(4, 5), pawn(Color::Black), &mut out);
        assert_eq!(out, vec![Position::new(3, 5), Position::new(2, 5)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::empty();
        board.set(
            Position::new(2, 0),
            Some(Piece::new(PieceId(2), PieceKind::Knight, Color::Black)),
        );
        let mut out = Vec::new();
        generate_pawn_moves(&board, Position::new(1, 0), pawn(Color::White), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn pawn_captures_only_opposing_pieces_diagonally() {
        let mut board = Board::empty();
        board.set(
            Position::new(3, 1),
            Some(Piece::new(PieceId(2), PieceKind::Rook, Color::Black)),
        );
        board.set(
            Position::new(3, 3),
            Some(Piece::new(PieceId(3), PieceKind::Rook, Color::White)),
        );
        let mut out = Vec::new();
        generate_pawn_moves(&board, Position::new(2, 2), pawn(Color::White), &mut out);
        assert_eq!(out, vec![Position::new(3, 2), Position::new(3, 1)]);
    }
}
