//! Conversions between board positions and algebraic coordinates.
//!
//! Files run `a..f` (column 0..5) and ranks `1..6` (row 0..5), so WHITE's
//! back rank is rank 1.

use crate::errors::ChessError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Position;

const LAST_FILE: u8 = b'a' + BOARD_SIZE as u8 - 1;
const LAST_RANK: u8 = b'1' + BOARD_SIZE as u8 - 1;

/// Convert algebraic notation (for example: "c3") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=LAST_FILE).contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=LAST_RANK).contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank as char));
    }

    Ok(Position::new(rank - b'1', file - b'a'))
}

/// Convert a position to algebraic notation (for example: "c3").
#[inline]
pub fn position_to_algebraic(position: Position) -> Result<String, ChessError> {
    if !position.is_on_board() {
        return Err(ChessError::OutOfBounds(position));
    }

    let file_char = char::from(b'a' + position.col);
    let rank_char = char::from(b'1' + position.row);
    Ok(format!("{file_char}{rank_char}"))
}
