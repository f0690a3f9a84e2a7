//! Drop (reinsertion) legality.

use crate::game_state::chess_rules::is_pawn_drop_forbidden_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::check_evasion_mask;
use crate::move_generation::legal_move_shared::{leaves_king_safe, push_targets};

/// Empty squares where `piece` (a bank piece of the side to move) may be
/// dropped.
///
/// Pawns never land on row 0 or row 5. Under a single non-knight check only
/// squares between checker and king qualify; under a knight check or a double
/// check nothing does. Each square is also verified to leave the king safe.
pub fn get_valid_drop_squares(game_state: &GameState, piece: &Piece) -> Vec<Position> {
    let mover = game_state.current_player;
    let board = &game_state.board;

    let evasion = check_evasion_mask(board, mover);
    let mut candidates = Vec::with_capacity(36);
    push_targets(!board.occupancy_all() & evasion, &mut candidates);

    if piece.kind == PieceKind::Pawn {
        candidates.retain(|pos| !is_pawn_drop_forbidden_row(pos.row));
    }

    let dropped = Piece {
        color: mover,
        has_moved: true,
        ..*piece
    };
    let mut scratch = board.clone();
    candidates.retain(|&to| leaves_king_safe(&mut scratch, None, to, Some(dropped), mover));
    candidates
}

#[cfg(test)]
mod tests {
    use super::get_valid_drop_squares;
    use crate::game_state::chess_types::*;

    fn banked(game: &GameState, kind: PieceKind) -> Piece {
        *game
            .piece_bank
            .pieces(game.current_player)
            .iter()
            .find(|p| p.kind == kind)
            .expect("piece banked")
    }

    #[test]
    fn pawn_drops_skip_first_and_last_rows() {
        let game = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .with_banked(PieceKind::Pawn, Color::White);

        let squares = get_valid_drop_squares(&game, &banked(&game, PieceKind::Pawn));
        assert!(!squares.is_empty());
        assert!(squares.iter().all(|p| p.row != 0 && p.row != 5));
        assert!(squares.iter().all(|p| game.board.is_empty_at(*p)));
        assert_eq!(squares.len(), 24);
    }

    #[test]
    fn drops_under_check_must_block() {
        let game = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(3, 3), PieceKind::Bishop, Color::Black),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .with_banked(PieceKind::Rook, Color::White);
        assert!(game.is_check);

        let squares = get_valid_drop_squares(&game, &banked(&game, PieceKind::Rook));
        assert_eq!(squares, vec![Position::new(1, 1), Position::new(2, 2)]);
    }

    #[test]
    fn drops_cannot_answer_knight_check() {
        let game = GameState::from_pieces(
            &[
                (Position::new(0, 0), PieceKind::King, Color::White),
                (Position::new(1, 2), PieceKind::Knight, Color::Black),
                (Position::new(5, 5), PieceKind::King, Color::Black),
            ],
            Color::White,
        )
        .with_banked(PieceKind::Queen, Color::White);
        assert!(game.is_check);
        assert!(get_valid_drop_squares(&game, &banked(&game, PieceKind::Queen)).is_empty());
    }
}
