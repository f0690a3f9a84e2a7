//! Fixed rule parameters of the 6×6 bank variant.
//!
//! Board dimensions, the starting layout, and the color-relative ranks used by
//! pawn double steps, promotion, and the pawn drop restriction.

use crate::game_state::chess_types::{Color, PieceKind, Position};

pub const BOARD_SIZE: usize = 6;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Mask covering every square of the board.
pub const BOARD_MASK: u64 = (1u64 << NUM_SQUARES) - 1;

/// Starting placement: White in the bottom-left corner, Black mirrored into the
/// top-right corner. Banks start empty and White moves first.
pub const STARTING_LAYOUT: [(Position, PieceKind, Color); 10] = [
    (Position::new(0, 0), PieceKind::King, Color::White),
    (Position::new(0, 1), PieceKind::Rook, Color::White),
    (Position::new(0, 2), PieceKind::Knight, Color::White),
    (Position::new(0, 3), PieceKind::Bishop, Color::White),
    (Position::new(1, 0), PieceKind::Pawn, Color::White),
    (Position::new(5, 5), PieceKind::King, Color::Black),
    (Position::new(5, 4), PieceKind::Rook, Color::Black),
    (Position::new(5, 3), PieceKind::Knight, Color::Black),
    (Position::new(5, 2), PieceKind::Bishop, Color::Black),
    (Position::new(4, 5), PieceKind::Pawn, Color::Black),
];

/// Row from which a pawn of `color` may advance two squares.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 4,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 5,
        Color::Black => 0,
    }
}

/// Pawns may never be dropped on the first or last row, for either color.
#[inline]
pub const fn is_pawn_drop_forbidden_row(row: u8) -> bool {
    row == 0 || row == (BOARD_SIZE as u8 - 1)
}
