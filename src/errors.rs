//! Errors used at the fallible edges of the engine.
//!
//! The rules engine and the search never fail: malformed move requests come
//! back as the unchanged input state and "no legal action" is reported through
//! the status flags on `GameState`. `ChessError` covers the places where input
//! arrives from outside the core instead: algebraic notation, engine options,
//! and the engine-vs-engine harness.

use thiserror::Error;

use crate::game_state::chess_types::Position;

/// Unified error type for the crate's fallible entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate string was not of the form `<file><rank>` with file
    /// `a..f` and rank `1..6`.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    /// A single file or rank character was out of range.
    #[error("invalid algebraic character: {0:?}")]
    InvalidAlgebraicChar(char),

    /// A position lies outside the 6×6 board.
    #[error("position out of bounds: row {}, col {}", .0.row, .0.col)]
    OutOfBounds(Position),

    /// `Engine::set_option` was called with a name the engine does not know.
    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    /// `Engine::set_option` was called with a value that does not parse.
    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// An engine proposed an action that is not legal in the current state.
    #[error("engine {engine} returned an illegal action: {action}")]
    IllegalEngineAction { engine: String, action: String },
}
