//! Fixed-depth minimax with alpha-beta pruning.
//!
//! WHITE maximizes, BLACK minimizes; all scores are WHITE-positive. The root
//! evaluates every candidate action in generation order and keeps the first
//! strictly better one, so ties go to the earliest action. Inside the tree,
//! candidates are ordered capture-first, a transposition table caches
//! bounded scores, and null-move pruning skips quiet subtrees at depth > 2.
//!
//! `SearchConfig::depth` is the depth searched *below* each root action, so a
//! depth-2 search looks three plies ahead in total.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_action;
use crate::move_generation::legal_move_generator::legal_actions;
use crate::move_generation::legal_move_status::refresh_status;
use crate::move_generation::move_generator::Action;
use crate::search::board_scoring::{BoardScorer, PositionalScorer, CHECKMATE_SCORE};
use crate::search::move_ordering::order_actions;
use crate::search::transposition_table::{Bound, TTEntry, TTStats, TranspositionTable};
use crate::search::zobrist::side_to_move_key;

/// Wider than any reachable score.
const INFINITY: i32 = CHECKMATE_SCORE * 2;
/// Scores beyond this magnitude encode a forced mate.
const MATE_THRESHOLD: i32 = CHECKMATE_SCORE - 1000;

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;
pub const DEFAULT_TT_SIZE_MB: usize = 8;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub depth: u8,
    pub use_transposition_table: bool,
    pub use_null_move_pruning: bool,
    pub tt_size_mb: usize,
    /// Stop starting new root candidates once this many nodes were visited.
    pub max_nodes: Option<u64>,
    /// Checked between root candidates.
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            use_transposition_table: true,
            use_null_move_pruning: true,
            tt_size_mb: DEFAULT_TT_SIZE_MB,
            max_nodes: None,
            stop_flag: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_action: Option<Action>,
    pub best_score: i32,
    pub nodes: u64,
    pub elapsed_ms: u64,
    /// Root candidates fully searched before completion or cancellation.
    pub completed_root_actions: usize,
    pub tt_stats: TTStats,
}

/// One search engine instance. Owns its scorer and transposition table; the
/// table is cleared at the start of every `find_best_move`.
pub struct MinimaxSearch<S: BoardScorer = PositionalScorer> {
    config: SearchConfig,
    scorer: S,
    tt: TranspositionTable,
    nodes: u64,
}

impl MinimaxSearch<PositionalScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl<S: BoardScorer> MinimaxSearch<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        let tt = TranspositionTable::new_with_mb(config.tt_size_mb);
        Self {
            config,
            scorer,
            tt,
            nodes: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration, reallocating the table if its size changed.
    pub fn set_config(&mut self, config: SearchConfig) {
        if config.tt_size_mb != self.config.tt_size_mb {
            self.tt = TranspositionTable::new_with_mb(config.tt_size_mb);
        }
        self.config = config;
    }

    /// Choose an action for `game_state.current_player`.
    ///
    /// Returns no action when the side to move has none. When cancelled by the
    /// stop flag or node budget, the best candidate among those fully searched
    /// so far is returned; the first candidate is always searched.
    pub fn find_best_move(&mut self, game_state: &GameState) -> SearchResult {
        let started_at = Instant::now();
        self.tt.clear();
        self.nodes = 0;

        let mover = game_state.current_player;
        let actions = legal_actions(game_state);
        if actions.is_empty() {
            debug!(?mover, "no legal action at root");
            return SearchResult {
                best_action: None,
                best_score: self.scorer.score(game_state),
                nodes: 1,
                elapsed_ms: started_at.elapsed().as_millis() as u64,
                completed_root_actions: 0,
                tt_stats: self.tt.stats(),
            };
        }

        let maximizing = mover == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Action, i32)> = None;
        let mut completed = 0usize;

        for action in &actions {
            if completed > 0 && self.should_stop() {
                debug!(completed, total = actions.len(), "root search stopped early");
                break;
            }

            let child = apply_action(game_state, action);
            let score = self.minimax(
                &child,
                self.config.depth,
                alpha,
                beta,
                child.current_player == Color::White,
                1,
                false,
            );
            completed += 1;
            trace!(?action, score, "root candidate");

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((*action, score));
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        let result = SearchResult {
            best_action: best.map(|(action, _)| action),
            best_score: best.map_or(0, |(_, score)| score),
            nodes: self.nodes,
            elapsed_ms: started_at.elapsed().as_millis() as u64,
            completed_root_actions: completed,
            tt_stats: self.tt.stats(),
        };
        debug!(
            ?mover,
            depth = self.config.depth,
            best_score = result.best_score,
            nodes = result.nodes,
            elapsed_ms = result.elapsed_ms,
            completed = result.completed_root_actions,
            "search finished"
        );
        result
    }

    #[inline]
    fn should_stop(&self) -> bool {
        if let Some(cap) = self.config.max_nodes {
            if self.nodes >= cap {
                return true;
            }
        }
        if let Some(flag) = &self.config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        false
    }

    fn minimax(
        &mut self,
        game_state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ply: u8,
        in_null_move: bool,
    ) -> i32 {
        self.nodes += 1;
        let key = game_state.zobrist_key;
        let use_tt = self.config.use_transposition_table;

        let mut tt_action = None;
        if use_tt {
            if let Some(entry) = self.tt.probe(key) {
                if let Some(score) = entry.usable_score(depth, alpha, beta) {
                    return tt_score_from_storage(score, ply);
                }
                tt_action = entry.best_action;
            }
        }

        if depth == 0 || game_state.is_game_over() {
            let score = self.leaf_score(game_state, ply);
            if use_tt {
                self.tt.store(TTEntry {
                    key,
                    depth,
                    score: tt_score_for_storage(score, ply),
                    bound: Bound::Exact,
                    best_action: None,
                });
            }
            return score;
        }

        if self.config.use_null_move_pruning && !in_null_move && depth > 2 && !game_state.is_check {
            let reduced = depth - depth / 3 - 1;
            let passed = null_move_state(game_state);
            if maximizing {
                let score = self.minimax(&passed, reduced, beta - 1, beta, false, ply + 1, true);
                if score >= beta {
                    return beta;
                }
            } else {
                let score = self.minimax(&passed, reduced, alpha, alpha + 1, true, ply + 1, true);
                if score <= alpha {
                    return alpha;
                }
            }
        }

        let alpha_orig = alpha;
        let beta_orig = beta;

        let mut actions = legal_actions(game_state);
        order_actions(&mut actions, tt_action);

        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_action = None;

        for action in &actions {
            let child = apply_action(game_state, action);
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, ply + 1, in_null_move);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_action = Some(*action);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_action = Some(*action);
                }
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        if use_tt {
            let bound = if best_score <= alpha_orig {
                Bound::Upper
            } else if best_score >= beta_orig {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.tt.store(TTEntry {
                key,
                depth,
                score: tt_score_for_storage(best_score, ply),
                bound,
                best_action,
            });
        }

        best_score
    }

    /// Static score, with mates pulled toward zero by the distance from the
    /// root so a faster mate scores higher.
    #[inline]
    fn leaf_score(&self, game_state: &GameState, ply: u8) -> i32 {
        let score = self.scorer.score(game_state);
        if game_state.is_checkmate {
            if score > 0 {
                score - i32::from(ply)
            } else {
                score + i32::from(ply)
            }
        } else {
            score
        }
    }
}

/// Same position with the turn handed to the opponent.
fn null_move_state(game_state: &GameState) -> GameState {
    let mut passed = game_state.clone();
    passed.current_player = passed.current_player.opposite();
    passed.zobrist_key ^= side_to_move_key();
    refresh_status(&mut passed);
    passed
}

/// Convert a root-relative mate score to a node-relative one before storing.
#[inline]
fn tt_score_for_storage(score: i32, ply: u8) -> i32 {
    if score >= MATE_THRESHOLD {
        score.saturating_add(i32::from(ply))
    } else if score <= -MATE_THRESHOLD {
        score.saturating_sub(i32::from(ply))
    } else {
        score
    }
}

#[inline]
fn tt_score_from_storage(score: i32, ply: u8) -> i32 {
    if score >= MATE_THRESHOLD {
        score.saturating_sub(i32::from(ply))
    } else if score <= -MATE_THRESHOLD {
        score.saturating_add(i32::from(ply))
    } else {
        score
    }
}

/// Best action for the side to move with the default configuration, or `None`
/// when it has no legal action (checkmate or stalemate).
pub fn find_best_move(game_state: &GameState) -> Option<Action> {
    MinimaxSearch::new(SearchConfig::default())
        .find_best_move(game_state)
        .best_action
}
