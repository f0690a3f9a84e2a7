//! Rook move generation.
//!
//! Orthogonal rays slide until blocked; an opposing blocker is included, a
//! friendly blocker is not.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(board: &Board, from: Position, rook: Piece, out: &mut Vec<Position>) {
    let own_occ = board.occupancy(rook.color);
    push_targets(rook_attacks(from.square(), board.occupancy_all()) & !own_occ, out);
}
