//! Compact text notation for actions and history records.
//!
//! Board moves read `a2-a3` (with `=Q` on promotion), drops read `N@c3`.
//! History records additionally carry `+` for check and `#` for mate.

use crate::errors::ChessError;
use crate::move_generation::move_generator::Action;
use crate::moves::move_descriptions::MoveRecord;
use crate::utils::algebraic::position_to_algebraic;

/// Notation for an action before it is played (no check marker).
pub fn action_to_notation(action: &Action) -> Result<String, ChessError> {
    match *action {
        Action::Move {
            from,
            to,
            promotion,
            ..
        } => {
            let mut out = format!(
                "{}-{}",
                position_to_algebraic(from)?,
                position_to_algebraic(to)?
            );
            if let Some(kind) = promotion {
                out.push('=');
                out.push(kind.letter());
            }
            Ok(out)
        }
        Action::Drop { to, piece } => Ok(format!(
            "{}@{}",
            piece.kind.letter(),
            position_to_algebraic(to)?
        )),
    }
}

/// Notation for an entry of `GameState::move_history`.
pub fn record_to_notation(record: &MoveRecord) -> Result<String, ChessError> {
    let mut out = action_to_notation(&<Action as From<&MoveRecord>>::from(record))?;
    if record.is_checkmate() {
        out.push('#');
    } else if record.is_check() {
        out.push('+');
    }
    Ok(out)
}

/// Space-separated notation of the whole history.
pub fn history_to_notation(history: &[MoveRecord]) -> Result<String, ChessError> {
    let moves = history
        .iter()
        .map(record_to_notation)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(moves.join(" "))
}
