//! History records for applied moves and drops.

use crate::game_state::chess_types::{Piece, PieceKind, Position};

/// One entry of `GameState::move_history`.
///
/// Board moves and drops are separate variants, so a drop never carries an
/// origin square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRecord {
    Board {
        from: Position,
        to: Position,
        /// The piece as it stood before moving (pre-promotion kind).
        piece: Piece,
        /// The opposing piece that stood on `to`, before it was banked.
        captured: Option<Piece>,
        promotion: Option<PieceKind>,
        is_check: bool,
        is_checkmate: bool,
    },
    Drop {
        to: Position,
        /// The piece as placed on the board (fresh id, mover's color).
        piece: Piece,
        is_check: bool,
        is_checkmate: bool,
    },
}

impl MoveRecord {
    #[inline]
    pub fn to(&self) -> Position {
        match self {
            MoveRecord::Board { to, .. } | MoveRecord::Drop { to, .. } => *to,
        }
    }

    #[inline]
    pub fn from(&self) -> Option<Position> {
        match self {
            MoveRecord::Board { from, .. } => Some(*from),
            MoveRecord::Drop { .. } => None,
        }
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        match self {
            MoveRecord::Board { piece, .. } | MoveRecord::Drop { piece, .. } => *piece,
        }
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        match self {
            MoveRecord::Board { captured, .. } => *captured,
            MoveRecord::Drop { .. } => None,
        }
    }

    #[inline]
    pub fn is_drop(&self) -> bool {
        matches!(self, MoveRecord::Drop { .. })
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        match self {
            MoveRecord::Board { is_check, .. } | MoveRecord::Drop { is_check, .. } => *is_check,
        }
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        match self {
            MoveRecord::Board { is_checkmate, .. } | MoveRecord::Drop { is_checkmate, .. } => {
                *is_checkmate
            }
        }
    }

    /// Stamp the check / checkmate outcome computed after the action.
    pub(crate) fn with_status(mut self, check: bool, checkmate: bool) -> Self {
        match &mut self {
            MoveRecord::Board {
                is_check,
                is_checkmate,
                ..
            }
            | MoveRecord::Drop {
                is_check,
                is_checkmate,
                ..
            } => {
                *is_check = check;
                *is_checkmate = checkmate;
            }
        }
        self
    }
}
