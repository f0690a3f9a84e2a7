//! Full legal move generation pipeline.
//!
//! Per-kind pseudo-legal generation, then the check-evasion constraint, then a
//! king-safety trial on a scratch board for every non-king candidate.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{promotion_row, BOARD_MASK};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_drops::get_valid_drop_squares;
use crate::move_generation::legal_move_apply::apply_action;
use crate::move_generation::legal_move_checks::{attackers_to_square, king_square, squares_between};
use crate::move_generation::legal_move_shared::leaves_king_safe;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{Action, GeneratedAction, MoveGenerator};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_actions(&self, game_state: &GameState) -> Vec<GeneratedAction> {
        legal_actions(game_state)
            .into_iter()
            .map(|action| GeneratedAction {
                game_after_action: apply_action(game_state, &action),
                action,
            })
            .collect()
    }
}

/// Legal destinations for the piece on `from`. Empty when the square is empty,
/// off the board, or holds a piece of the side not to move.
pub fn get_valid_moves(game_state: &GameState, from: Position) -> Vec<Position> {
    if !from.is_on_board() {
        return Vec::new();
    }
    let Some(piece) = game_state.board.get(from) else {
        return Vec::new();
    };
    if piece.color != game_state.current_player {
        return Vec::new();
    }
    legal_destinations(&game_state.board, from, piece)
}

/// Squares a non-king piece of `color` may occupy to resolve the current check.
///
/// Not in check: the whole board. One checker: its square, plus the line to
/// the king unless the checker is a knight. Two or more checkers: nothing.
pub(crate) fn check_evasion_mask(board: &Board, color: Color) -> SquareMask {
    let Some(king) = king_square(board, color) else {
        return BOARD_MASK;
    };
    let checkers = attackers_to_square(board, king, color.opposite());
    match checkers.as_slice() {
        [] => BOARD_MASK,
        [(checker_pos, checker)] => {
            if checker.kind == PieceKind::Knight {
                checker_pos.mask()
            } else {
                checker_pos.mask() | squares_between(*checker_pos, king)
            }
        }
        _ => 0,
    }
}

pub(crate) fn legal_destinations(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    let mut pseudo = Vec::with_capacity(16);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, &mut pseudo),
        PieceKind::Knight => generate_knight_moves(board, from, piece, &mut pseudo),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, &mut pseudo),
        PieceKind::Rook => generate_rook_moves(board, from, piece, &mut pseudo),
        PieceKind::Queen => generate_queen_moves(board, from, piece, &mut pseudo),
        // King destinations are already safety-filtered.
        PieceKind::King => {
            generate_king_moves(board, from, piece, &mut pseudo);
            return pseudo;
        }
    }

    let evasion = check_evasion_mask(board, piece.color);
    if evasion == 0 {
        return Vec::new();
    }

    let mut scratch = board.clone();
    pseudo.retain(|&to| {
        evasion & to.mask() != 0 && leaves_king_safe(&mut scratch, Some(from), to, None, piece.color)
    });
    pseudo
}

/// Every legal action of the side to move, without building successor states.
///
/// Board moves are listed piece by piece in square order; drops follow, one
/// set per distinct banked kind in bank order. Promotions default to a queen.
pub fn legal_actions(game_state: &GameState) -> Vec<Action> {
    let mover = game_state.current_player;
    let board = &game_state.board;
    let mut actions = Vec::with_capacity(32);

    for (from, piece) in board.pieces_of(mover) {
        for to in legal_destinations(board, from, piece) {
            let promotion = (piece.kind == PieceKind::Pawn && to.row == promotion_row(mover))
                .then_some(PieceKind::Queen);
            actions.push(Action::Move {
                from,
                to,
                piece,
                captured: board.get(to),
                promotion,
            });
        }
    }

    for piece in game_state.piece_bank.distinct_kinds(mover) {
        for to in get_valid_drop_squares(game_state, &piece) {
            actions.push(Action::Drop { to, piece });
        }
    }

    actions
}

/// Whether the side to move has at least one legal move or drop. Stops at the
/// first one found.
pub fn has_any_legal_action(game_state: &GameState) -> bool {
    let mover = game_state.current_player;
    let board = &game_state.board;

    let any_move = board
        .pieces_of(mover)
        .any(|(from, piece)| !legal_destinations(board, from, piece).is_empty());
    if any_move {
        return true;
    }

    game_state
        .piece_bank
        .distinct_kinds(mover)
        .iter()
        .any(|piece| !get_valid_drop_squares(game_state, piece).is_empty())
}
