//! Core value types for the 6×6 board.
//!
//! Colors, piece kinds, piece identities, and board coordinates. The board is
//! indexed by a flat square number `row * 6 + col`, so every set of squares
//! fits in the low 36 bits of a `u64` mask.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

use crate::game_state::chess_rules::BOARD_SIZE;

/// Flat square index (`0..36`).
pub type Square = u8;

/// Set of squares, one bit per square index.
pub type SquareMask = u64;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case letter used in notation (`P`, `N`, `B`, `R`, `Q`, `K`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Identity of one physical piece. A captured piece is re-minted with a new id
/// when it enters the capturer's bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            has_moved: false,
        }
    }
}

/// Board coordinate. `row` 0 is WHITE's back rank, `col` 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Build a position the caller knows to be on the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a position from signed coordinates, rejecting anything off-board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 || row >= BOARD_SIZE as i8 || col >= BOARD_SIZE as i8 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    #[inline]
    pub const fn square(self) -> Square {
        self.row * BOARD_SIZE as u8 + self.col
    }

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Self {
            row: square / BOARD_SIZE as u8,
            col: square % BOARD_SIZE as u8,
        }
    }

    #[inline]
    pub const fn mask(self) -> SquareMask {
        1u64 << self.square()
    }
}

/// Iterate the squares set in `mask`, lowest index first.
#[inline]
pub fn squares_in(mut mask: SquareMask) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            None
        } else {
            let sq = mask.trailing_zeros() as Square;
            mask &= mask - 1;
            Some(sq)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{squares_in, Color, Position};

    #[test]
    fn square_index_round_trips_through_position() {
        for sq in 0..36u8 {
            assert_eq!(Position::from_square(sq).square(), sq);
        }
        assert_eq!(Position::new(5, 5).square(), 35);
    }

    #[test]
    fn try_new_rejects_off_board_coordinates() {
        assert!(Position::try_new(-1, 0).is_none());
        assert!(Position::try_new(0, 6).is_none());
        assert_eq!(Position::try_new(2, 3), Some(Position::new(2, 3)));
        assert!(!Position::new(6, 0).is_on_board());
    }

    #[test]
    fn forward_direction_is_mirrored() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn squares_in_walks_set_bits() {
        let got: Vec<u8> = squares_in((1 << 3) | (1 << 35)).collect();
        assert_eq!(got, vec![3, 35]);
    }
}
