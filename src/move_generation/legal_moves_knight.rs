use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(board: &Board, from: Position, knight: Piece, out: &mut Vec<Position>) {
    let own_occ = board.occupancy(knight.color);
    push_targets(knight_attacks(from.square()) & !own_occ, out);
}
