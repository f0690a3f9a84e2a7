use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: u8, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::moves::bishop_moves::bishop_attacks;
    use crate::moves::rook_moves::rook_attacks;

    #[test]
    fn queen_on_empty_board_covers_both_ray_sets() {
        let c3 = 14u8;
        assert_eq!(queen_attacks(c3, 0), rook_attacks(c3, 0) | bishop_attacks(c3, 0));
        assert_eq!(queen_attacks(0, 0).count_ones(), 15);
    }

    #[test]
    fn queen_stops_at_first_blocker() {
        let a1 = 0u8;
        let blocker_on_c3 = 1u64 << 14;
        let attacks = queen_attacks(a1, blocker_on_c3);
        assert_ne!(attacks & blocker_on_c3, 0);
        assert_eq!(attacks & (1u64 << 21), 0);
    }
}
