//! Capture-first ordering of search candidates.

use std::cmp::Reverse;

use crate::move_generation::move_generator::Action;
use crate::search::board_scoring::piece_value;

/// Sort key: captured value, then moving-piece value, both descending.
#[inline]
fn ordering_key(action: &Action) -> (Reverse<i32>, Reverse<i32>) {
    let captured = action.captured().map_or(0, |piece| piece_value(piece.kind));
    let mover = piece_value(action.piece().kind);
    (Reverse(captured), Reverse(mover))
}

/// Order `actions` in place for alpha-beta. `preferred` (typically the
/// transposition table's best action) is moved to the front when present.
/// The sort is stable, so equal keys keep generation order.
pub fn order_actions(actions: &mut [Action], preferred: Option<Action>) {
    actions.sort_by_key(ordering_key);

    if let Some(preferred) = preferred {
        if let Some(idx) = actions.iter().position(|a| *a == preferred) {
            actions[..=idx].rotate_right(1);
        }
    }
}
