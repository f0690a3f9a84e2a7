use crate::game_state::chess_rules::{BOARD_SIZE, NUM_SQUARES};
use crate::game_state::chess_types::Color;

pub const WHITE_PAWN_ATTACKS: [u64; NUM_SQUARES] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; NUM_SQUARES] = generate_pawn_attacks(-1);

/// Diagonal capture squares of a pawn. Forward pushes never attack.
#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(direction: i32) -> [u64; NUM_SQUARES] {
    let mut table = [0u64; NUM_SQUARES];
    let mut sq = 0usize;

    while sq < NUM_SQUARES {
        let col = (sq % BOARD_SIZE) as i32;
        let row = (sq / BOARD_SIZE) as i32;
        let target_row = row + direction;
        let mut attacks = 0u64;

        if target_row >= 0 && target_row < BOARD_SIZE as i32 {
            if col > 0 {
                attacks |= 1u64 << (target_row as usize * BOARD_SIZE + (col - 1) as usize);
            }
            if col < BOARD_SIZE as i32 - 1 {
                attacks |= 1u64 << (target_row as usize * BOARD_SIZE + (col + 1) as usize);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
