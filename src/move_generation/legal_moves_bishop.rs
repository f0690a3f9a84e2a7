use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(board: &Board, from: Position, bishop: Piece, out: &mut Vec<Position>) {
    let own_occ = board.occupancy(bishop.color);
    push_targets(bishop_attacks(from.square(), board.occupancy_all()) & !own_occ, out);
}
