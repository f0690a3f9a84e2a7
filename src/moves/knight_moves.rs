use crate::game_state::chess_rules::{BOARD_SIZE, NUM_SQUARES};

pub const KNIGHT_ATTACKS: [u64; NUM_SQUARES] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [u64; NUM_SQUARES] {
    let mut table = [0u64; NUM_SQUARES];
    let mut sq = 0usize;

    while sq < NUM_SQUARES {
        let col = (sq % BOARD_SIZE) as i32;
        let row = (sq / BOARD_SIZE) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 2, col - 1);
        attacks |= set_if_valid(row - 2, col + 1);
        attacks |= set_if_valid(row - 1, col - 2);
        attacks |= set_if_valid(row - 1, col + 2);
        attacks |= set_if_valid(row + 1, col - 2);
        attacks |= set_if_valid(row + 1, col + 2);
        attacks |= set_if_valid(row + 2, col - 1);
        attacks |= set_if_valid(row + 2, col + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row >= BOARD_SIZE as i32 || col < 0 || col >= BOARD_SIZE as i32 {
        return 0;
    }

    let square = (row as usize) * BOARD_SIZE + (col as usize);
    1u64 << square
}
