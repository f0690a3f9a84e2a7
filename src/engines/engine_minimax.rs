//! Minimax engine: the full-strength opponent.
//!
//! Wraps `MinimaxSearch` behind the `Engine` trait and exposes its
//! configuration as string options (`Depth`, `TranspositionTable`,
//! `NullMovePruning`, `HashMb`, `MaxNodes`).

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::debug;

use crate::engines::engine_trait::{invalid_option, parse_bool_option, Engine, EngineOutput};
use crate::errors::ChessError;
use crate::game_state::chess_types::GameState;
use crate::search::minimax::{MinimaxSearch, SearchConfig};

/// Depths above this make a single move take far too long with drops in play.
pub const MAX_ENGINE_DEPTH: u8 = 6;

pub struct MinimaxEngine {
    search: MinimaxSearch,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig {
            depth: depth.min(MAX_ENGINE_DEPTH),
            ..SearchConfig::default()
        })
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.search.config()
    }

    fn update_config(&mut self, update: impl FnOnce(&mut SearchConfig)) {
        let mut config = self.search.config().clone();
        update(&mut config);
        self.search.set_config(config);
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        if name.eq_ignore_ascii_case("Depth") {
            let depth = value
                .trim()
                .parse::<u8>()
                .map_err(|_| invalid_option(name, value))?;
            self.update_config(|c| c.depth = depth.min(MAX_ENGINE_DEPTH));
            return Ok(());
        }
        if name.eq_ignore_ascii_case("TranspositionTable") {
            let enabled = parse_bool_option(name, value)?;
            self.update_config(|c| c.use_transposition_table = enabled);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("NullMovePruning") {
            let enabled = parse_bool_option(name, value)?;
            self.update_config(|c| c.use_null_move_pruning = enabled);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("HashMb") {
            let mb = value
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid_option(name, value))?;
            self.update_config(|c| c.tt_size_mb = mb.max(1));
            return Ok(());
        }
        if name.eq_ignore_ascii_case("MaxNodes") {
            let nodes = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid_option(name, value))?;
            // Zero lifts the budget.
            self.update_config(|c| c.max_nodes = (nodes > 0).then_some(nodes));
            return Ok(());
        }
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    fn set_stop_signal(&mut self, stop_signal: Option<Arc<AtomicBool>>) {
        self.update_config(|c| c.stop_flag = stop_signal);
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError> {
        let result = self.search.find_best_move(game_state);
        debug!(
            engine = self.name(),
            nodes = result.nodes,
            score = result.best_score,
            "minimax engine move"
        );

        let mut out = EngineOutput {
            best_action: result.best_action,
            score: Some(result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {} roots {}",
            self.config().depth,
            result.best_score,
            result.nodes,
            result.elapsed_ms,
            result.completed_root_actions
        ));
        out.info_lines.push(format!(
            "info string tt probes {} hits {} stores {}",
            result.tt_stats.probes, result.tt_stats.hits, result.tt_stats.stores
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    use super::{MinimaxEngine, MAX_ENGINE_DEPTH};
    use crate::engines::engine_trait::Engine;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;

    #[test]
    fn options_update_search_config() {
        let mut engine = MinimaxEngine::default();
        engine.set_option("Depth", "3").expect("valid depth");
        engine.set_option("transpositiontable", "off").expect("valid flag");
        engine.set_option("NullMovePruning", "false").expect("valid flag");
        engine.set_option("HashMb", "2").expect("valid size");
        engine.set_option("MaxNodes", "5000").expect("valid budget");

        let config = engine.config();
        assert_eq!(config.depth, 3);
        assert!(!config.use_transposition_table);
        assert!(!config.use_null_move_pruning);
        assert_eq!(config.tt_size_mb, 2);
        assert_eq!(config.max_nodes, Some(5000));

        engine.set_option("MaxNodes", "0").expect("valid budget");
        assert_eq!(engine.config().max_nodes, None);
        engine.set_option("Depth", "99").expect("valid depth");
        assert_eq!(engine.config().depth, MAX_ENGINE_DEPTH);
    }

    #[test]
    fn bad_options_are_reported() {
        let mut engine = MinimaxEngine::new(1);
        assert_eq!(
            engine.set_option("Contempt", "10"),
            Err(ChessError::UnknownOption("Contempt".to_owned()))
        );
        assert!(matches!(
            engine.set_option("Depth", "deep"),
            Err(ChessError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn chooses_a_legal_opening_move() {
        let mut engine = MinimaxEngine::new(1);
        let game = GameState::new_game();
        let out = engine.choose_move(&game).expect("search runs");
        let action = out.best_action.expect("opening has moves");
        assert_eq!(action.piece().color, Color::White);
        assert!(out.score.is_some());
        assert!(!out.info_lines.is_empty());
    }

    #[test]
    fn raised_stop_signal_keeps_only_first_root_candidate() {
        let mut engine = MinimaxEngine::new(2);
        engine.set_stop_signal(Some(Arc::new(AtomicBool::new(true))));
        assert!(engine.config().stop_flag.is_some());

        let out = engine.choose_move(&GameState::new_game()).expect("search runs");
        assert!(out.best_action.is_some());
        assert!(out.info_lines[0].ends_with("roots 1"));

        engine.set_stop_signal(None);
        assert!(engine.config().stop_flag.is_none());
    }
}
