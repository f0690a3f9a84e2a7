use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_attacks;

/// King destinations: adjacent squares that are empty or hold an opposing
/// piece, minus any square where the king would stand attacked after moving.
///
/// The safety probe runs on a scratch copy of the board with the king moved,
/// so sliders that were blocked by the king itself are seen through.
pub fn generate_king_moves(board: &Board, from: Position, king: Piece, out: &mut Vec<Position>) {
    let mut candidates = Vec::with_capacity(8);
    push_targets(king_attacks(from.square()) & !board.occupancy(king.color), &mut candidates);

    let mut scratch = board.clone();
    for to in candidates {
        let Some(undo) = scratch.apply_trial(Some(from), to, None) else {
            continue;
        };
        let safe = !is_square_attacked(&scratch, to, king.color.opposite());
        scratch.undo_trial(undo);
        if safe {
            out.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn king_cannot_retreat_along_checking_ray() {
        let mut board = Board::empty();
        let king = Piece::new(PieceId(1), PieceKind::King, Color::White);
        board.set(Position::new(2, 2), Some(king));
        board.set(
            Position::new(2, 5),
            Some(Piece::new(PieceId(2), PieceKind::Rook, Color::Black)),
        );
        let mut out = Vec::new();
        generate_king_moves(&board, Position::new(2, 2), king, &mut out);
        assert!(!out.contains(&Position::new(2, 1)));
        assert!(!out.contains(&Position::new(2, 3)));
        assert!(out.contains(&Position::new(1, 1)));
        assert!(out.contains(&Position::new(3, 2)));
    }

    #[test]
    fn king_may_capture_undefended_piece() {
        let mut board = Board::empty();
        let king = Piece::new(PieceId(1), PieceKind::King, Color::White);
        board.set(Position::new(0, 0), Some(king));
        board.set(
            Position::new(1, 1),
            Some(Piece::new(PieceId(2), PieceKind::Queen, Color::Black)),
        );
        let mut out = Vec::new();
        generate_king_moves(&board, Position::new(0, 0), king, &mut out);
        assert_eq!(out, vec![Position::new(1, 1)]);
    }
}
