use crate::moves::rook_moves::trace_ray;

const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    let sq = square as i32;
    let mut attacks = 0u64;

    for (row_step, col_step) in DIAGONAL_STEPS {
        attacks |= trace_ray(sq, row_step, col_step, occupancy);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn long_diagonal_from_a1() {
        let expected = (1u64 << 7) | (1u64 << 14) | (1u64 << 21) | (1u64 << 28) | (1u64 << 35);
        assert_eq!(bishop_attacks(0, 0), expected);
    }

    #[test]
    fn bishop_blocker_is_included_and_stops_ray() {
        let c3 = 14u8;
        let blocker_on_d4 = 1u64 << 21;
        let attacks = bishop_attacks(c3, blocker_on_d4);
        assert_ne!(attacks & blocker_on_d4, 0);
        assert_eq!(attacks & (1u64 << 28), 0);
        assert_ne!(attacks & (1u64 << 0), 0);
    }
}
