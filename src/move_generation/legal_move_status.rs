//! Check / checkmate / stalemate flags for the side to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_action;

/// The side to move is in check and no move or drop resolves it.
///
/// Every legal action is already filtered to leave the king unattacked, so
/// "no escaping action" reduces to "no legal action at all".
pub fn is_checkmate(game_state: &GameState) -> bool {
    is_in_check(game_state, None) && !has_any_legal_action(game_state)
}

/// The side to move is not in check and has no legal move or drop.
pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_in_check(game_state, None) && !has_any_legal_action(game_state)
}

/// Recompute `is_check`, then `is_checkmate` (in check) or `is_stalemate`
/// (not in check), for `current_player`.
pub fn refresh_status(game_state: &mut GameState) {
    let in_check = is_in_check(game_state, None);
    let stuck = !has_any_legal_action(game_state);
    game_state.is_check = in_check;
    game_state.is_checkmate = in_check && stuck;
    game_state.is_stalemate = !in_check && stuck;
}
