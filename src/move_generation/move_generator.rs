use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveRecord;

/// One playable action for the side to move: a board move or a drop from the
/// piece bank. Carries enough to replay it with `apply_action` and to order it
/// during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move {
        from: Position,
        to: Position,
        piece: Piece,
        captured: Option<Piece>,
        /// Set when a pawn reaches its promotion row.
        promotion: Option<PieceKind>,
    },
    Drop {
        to: Position,
        piece: Piece,
    },
}

impl Action {
    #[inline]
    pub fn to(&self) -> Position {
        match self {
            Action::Move { to, .. } | Action::Drop { to, .. } => *to,
        }
    }

    #[inline]
    pub fn from(&self) -> Option<Position> {
        match self {
            Action::Move { from, .. } => Some(*from),
            Action::Drop { .. } => None,
        }
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        match self {
            Action::Move { piece, .. } | Action::Drop { piece, .. } => *piece,
        }
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        match self {
            Action::Move { captured, .. } => *captured,
            Action::Drop { .. } => None,
        }
    }

    #[inline]
    pub fn is_drop(&self) -> bool {
        matches!(self, Action::Drop { .. })
    }
}

/// The action a history entry replays. Drops carry the piece as placed.
impl From<&MoveRecord> for Action {
    fn from(record: &MoveRecord) -> Self {
        match *record {
            MoveRecord::Board {
                from,
                to,
                piece,
                captured,
                promotion,
                ..
            } => Action::Move {
                from,
                to,
                piece,
                captured,
                promotion,
            },
            MoveRecord::Drop { to, piece, .. } => Action::Drop { to, piece },
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedAction {
    pub action: Action,
    pub game_after_action: GameState,
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal action for `game_state.current_player`, each paired with the
    /// resulting state. Moves come first (board order), then drops.
    fn generate_legal_actions(&self, game_state: &GameState) -> Vec<GeneratedAction>;
}
