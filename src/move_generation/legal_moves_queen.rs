use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(board: &Board, from: Position, queen: Piece, out: &mut Vec<Position>) {
    let own_occ = board.occupancy(queen.color);
    push_targets(queen_attacks(from.square(), board.occupancy_all()) & !own_occ, out);
}
