use crate::game_state::chess_rules::BOARD_SIZE;

const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares a rook on `square` reaches given `occupancy`. The first occupied
/// square of each ray is included; callers mask out friendly pieces.
#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    let sq = square as i32;
    let mut attacks = 0u64;

    for (row_step, col_step) in ORTHOGONAL_STEPS {
        attacks |= trace_ray(sq, row_step, col_step, occupancy);
    }

    attacks
}

pub(crate) fn trace_ray(square: i32, row_step: i32, col_step: i32, occupancy: u64) -> u64 {
    let size = BOARD_SIZE as i32;
    let mut row = (square / size) + row_step;
    let mut col = (square % size) + col_step;
    let mut attacks = 0u64;

    while (0..size).contains(&row) && (0..size).contains(&col) {
        let bit = 1u64 << (row * size + col);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += row_step;
        col += col_step;
    }

    attacks
}
