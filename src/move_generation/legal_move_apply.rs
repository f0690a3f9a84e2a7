//! State-producing rules operations: board moves, drops, and their bookkeeping.
//!
//! Both entry points return a brand-new `GameState`. A malformed request
//! returns an unchanged clone of the input instead of failing; callers are
//! expected to draw requests from `get_valid_moves` / `get_valid_drop_squares`.

use crate::game_state::chess_rules::{is_pawn_drop_forbidden_row, promotion_row};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_status::refresh_status;
use crate::move_generation::move_generator::Action;
use crate::moves::move_descriptions::MoveRecord;
use crate::search::zobrist::compute_zobrist_key;

/// Move the piece on `from` to `to`, banking any captured piece and promoting a
/// pawn that reaches its last row (`promote_to`, default queen).
///
/// No-op when either square is off the board, `from` does not hold a piece of
/// the side to move, or `to` holds a friendly piece or a king.
pub fn make_move(
    game_state: &GameState,
    from: Position,
    to: Position,
    promote_to: Option<PieceKind>,
) -> GameState {
    if !from.is_on_board() || !to.is_on_board() {
        return game_state.clone();
    }
    let mover = game_state.current_player;
    let Some(piece) = game_state.board.get(from).filter(|p| p.color == mover) else {
        return game_state.clone();
    };
    if game_state
        .board
        .get(to)
        .is_some_and(|p| p.color == mover || p.kind == PieceKind::King)
    {
        return game_state.clone();
    }

    let mut next = game_state.clone();

    let mut moved = piece;
    moved.has_moved = true;
    let promotion = (piece.kind == PieceKind::Pawn && to.row == promotion_row(mover))
        .then(|| promotion_kind(promote_to));
    if let Some(kind) = promotion {
        moved.kind = kind;
    }

    next.board.take(from);
    let captured = next.board.set(to, Some(moved));
    if let Some(victim) = captured {
        let id = next.mint_piece_id();
        next.piece_bank.push(Piece {
            id,
            color: mover,
            ..victim
        });
    }

    finish_action(
        &mut next,
        MoveRecord::Board {
            from,
            to,
            piece,
            captured,
            promotion,
            is_check: false,
            is_checkmate: false,
        },
    );
    next
}

/// Drop the oldest banked piece of `piece.kind` owned by the side to move onto
/// `to`. The placed piece gets a fresh id and the mover's color.
///
/// No-op when `to` is off the board or occupied, the bank has no piece of that
/// kind, or a pawn would land on row 0 or row 5.
pub fn drop_piece(game_state: &GameState, piece: &Piece, to: Position) -> GameState {
    if !to.is_on_board() || !game_state.board.is_empty_at(to) {
        return game_state.clone();
    }
    if piece.kind == PieceKind::Pawn && is_pawn_drop_forbidden_row(to.row) {
        return game_state.clone();
    }

    let mover = game_state.current_player;
    let mut next = game_state.clone();
    if next.piece_bank.remove_first_of_kind(mover, piece.kind).is_none() {
        return game_state.clone();
    }

    let id = next.mint_piece_id();
    let placed = Piece {
        id,
        kind: piece.kind,
        color: mover,
        has_moved: true,
    };
    next.board.set(to, Some(placed));

    finish_action(
        &mut next,
        MoveRecord::Drop {
            to,
            piece: placed,
            is_check: false,
            is_checkmate: false,
        },
    );
    next
}

/// Replay an action produced by the legal move generator.
pub fn apply_action(game_state: &GameState, action: &Action) -> GameState {
    match *action {
        Action::Move {
            from,
            to,
            promotion,
            ..
        } => make_move(game_state, from, to, promotion),
        Action::Drop { to, piece } => drop_piece(game_state, &piece, to),
    }
}

#[inline]
fn promotion_kind(requested: Option<PieceKind>) -> PieceKind {
    match requested {
        Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => kind,
        _ => PieceKind::Queen,
    }
}

/// Flip the turn, recompute status and hash, and append the history record.
fn finish_action(next: &mut GameState, record: MoveRecord) {
    next.current_player = next.current_player.opposite();
    refresh_status(next);
    next.zobrist_key = compute_zobrist_key(next);

    let record = record.with_status(next.is_check, next.is_checkmate);
    next.move_history.push(record);
    next.last_move = Some(record);
}
