//! Engine abstraction layer used by the match harness and the binary.
//!
//! Different opponent strategies sit behind one trait so they can be selected
//! and configured at runtime.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::errors::ChessError;
use crate::game_state::chess_types::GameState;
use crate::move_generation::move_generator::Action;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the side to move has no legal action.
    pub best_action: Option<Action>,
    /// WHITE-positive score of the chosen line, when the engine computes one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), ChessError> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    fn set_stop_signal(&mut self, _stop_signal: Option<Arc<AtomicBool>>) {}

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError>;
}

/// Parse an on/off option value.
pub(crate) fn parse_bool_option(name: &str, value: &str) -> Result<bool, ChessError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid_option(name, value)),
    }
}

pub(crate) fn invalid_option(name: &str, value: &str) -> ChessError {
    ChessError::InvalidOptionValue {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool_option;
    use crate::errors::ChessError;

    #[test]
    fn bool_options_accept_common_spellings() {
        assert_eq!(parse_bool_option("X", " On "), Ok(true));
        assert_eq!(parse_bool_option("X", "0"), Ok(false));
        assert!(matches!(
            parse_bool_option("X", "maybe"),
            Err(ChessError::InvalidOptionValue { .. })
        ));
    }
}
