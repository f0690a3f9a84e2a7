//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from the initial
//! position, after a seeded random opening prefix, and aggregates results over
//! a series with colors assigned deterministically from the base seed.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_action;
use crate::move_generation::legal_move_generator::legal_actions;
use crate::utils::move_notation::{action_to_notation, record_to_notation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
    /// The stop signal was raised before the game finished.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    /// Handed to both engines and checked between plies.
    pub stop_signal: Option<Arc<AtomicBool>>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            stop_signal: None,
        }
    }
}

impl MatchConfig {
    #[inline]
    fn stop_requested(&self) -> bool {
        self.stop_signal
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, ChessError> {
    engine_white.new_game();
    engine_black.new_game();
    engine_white.set_stop_signal(config.stop_signal.clone());
    engine_black.set_stop_signal(config.stop_signal.clone());

    let (state, opening_moves) = apply_seeded_random_opening(
        &GameState::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        opening_moves,
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if config.stop_requested() {
            result.outcome = MatchOutcome::Stopped;
            return Ok(result);
        }

        let state = &result.final_state;
        if state.is_checkmate {
            result.outcome = match state.current_player {
                Color::White => MatchOutcome::BlackWinCheckmate,
                Color::Black => MatchOutcome::WhiteWinCheckmate,
            };
            return Ok(result);
        }
        if state.is_stalemate {
            result.outcome = MatchOutcome::DrawStalemate;
            return Ok(result);
        }

        let mover = state.current_player;
        let engine = match mover {
            Color::White => &mut engine_white,
            Color::Black => &mut engine_black,
        };

        let started = Instant::now();
        let out = engine.choose_move(state)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let legal = legal_actions(state);
        let chosen = match out.best_action {
            Some(action) if legal.contains(&action) => action,
            Some(action) => {
                return Err(ChessError::IllegalEngineAction {
                    engine: engine.name().to_owned(),
                    action: action_to_notation(&action)
                        .unwrap_or_else(|err| err.to_string()),
                });
            }
            None => {
                return Err(ChessError::IllegalEngineAction {
                    engine: engine.name().to_owned(),
                    action: "none".to_owned(),
                });
            }
        };

        let next = apply_action(state, &chosen);
        if let Some(record) = next.last_move {
            let notation = record_to_notation(&record)?;
            debug!(?mover, action = %notation, "match ply");
            result.played_moves.push(notation);
        }
        result.final_state = next;
    }

    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, ChessError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        if config.per_game.stop_requested() {
            break;
        }

        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        info!(game = i + 1, games = config.games, seed, player1_is_white, "starting game");

        let result = if player1_is_white {
            play_engine_match(player1_factory(), player2_factory(), seed, &config.per_game)?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate => {
                let color = if result.outcome == MatchOutcome::WhiteWinCheckmate {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if player1_is_white == (color == Color::White) {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
            MatchOutcome::Stopped => SeriesOutcome::Stopped,
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            result = ?mapped,
            plies = result.final_state.move_history.len(),
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "finished game"
        );
    }

    stats.games = stats.outcomes.len() as u16;
    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play a seeded number of uniformly random legal actions (moves and drops).
/// Stops early if the game ends.
fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(GameState, Vec<String>), ChessError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal = legal_actions(&state);
        if legal.is_empty() {
            break;
        }

        let chosen = legal[rng.random_range(0..legal.len())];
        state = apply_action(&state, &chosen);
        if let Some(record) = state.last_move {
            opening_moves.push(record_to_notation(&record)?);
        }
    }

    Ok((state, opening_moves))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use super::{
        apply_seeded_random_opening, play_engine_match, play_engine_match_series, MatchConfig,
        MatchOutcome, MatchSeriesConfig, SeriesOutcome,
    };
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, EngineOutput};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::legal_actions;
    use crate::move_generation::move_generator::Action;

    /// Always plays the first legal action.
    struct FirstActionEngine;

    impl Engine for FirstActionEngine {
        fn name(&self) -> &str {
            "FirstAction"
        }

        fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError> {
            Ok(EngineOutput {
                best_action: legal_actions(game_state).first().copied(),
                ..EngineOutput::default()
            })
        }
    }

    /// Tries to move a piece that is not there.
    struct CheatingEngine;

    impl Engine for CheatingEngine {
        fn name(&self) -> &str {
            "Cheater"
        }

        fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError> {
            let piece = Piece::new(PieceId(999), PieceKind::Queen, game_state.current_player);
            Ok(EngineOutput {
                best_action: Some(Action::Drop {
                    to: Position::new(3, 3),
                    piece,
                }),
                ..EngineOutput::default()
            })
        }
    }

    /// Records the stop signal it was handed.
    struct SignalRecorder {
        seen: Arc<Mutex<Option<Arc<AtomicBool>>>>,
    }

    impl Engine for SignalRecorder {
        fn name(&self) -> &str {
            "SignalRecorder"
        }

        fn set_stop_signal(&mut self, stop_signal: Option<Arc<AtomicBool>>) {
            if let Ok(mut seen) = self.seen.lock() {
                *seen = stop_signal;
            }
        }

        fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError> {
            FirstActionEngine.choose_move(game_state)
        }
    }

    #[test]
    fn raised_stop_signal_ends_match_and_reaches_engines() {
        let flag = Arc::new(AtomicBool::new(false));
        let seen = Arc::new(Mutex::new(None));
        let config = MatchConfig {
            max_plies: 10,
            opening_min_plies: 0,
            opening_max_plies: 0,
            stop_signal: Some(Arc::clone(&flag)),
        };

        flag.store(true, Ordering::Relaxed);
        let result = play_engine_match(
            Box::new(SignalRecorder {
                seen: Arc::clone(&seen),
            }),
            Box::new(FirstActionEngine),
            0,
            &config,
        )
        .expect("match should run");

        assert_eq!(result.outcome, MatchOutcome::Stopped);
        assert!(result.played_moves.is_empty());
        let handed = seen.lock().expect("not poisoned").clone().expect("signal handed over");
        assert!(Arc::ptr_eq(&handed, &flag));

        let stats = play_engine_match_series(
            || Box::new(FirstActionEngine),
            || Box::new(FirstActionEngine),
            &MatchSeriesConfig {
                games: 3,
                base_seed: 1,
                per_game: config.clone(),
            },
        )
        .expect("series should run");
        assert_eq!(stats.games, 0);
        assert!(stats.outcomes.is_empty());
    }

    #[test]
    fn opening_prefix_is_deterministic() {
        let start = GameState::new_game();
        let (a, moves_a) = apply_seeded_random_opening(&start, 11, 2, 6).expect("opening plays");
        let (b, moves_b) = apply_seeded_random_opening(&start, 11, 2, 6).expect("opening plays");
        assert_eq!(moves_a, moves_b);
        assert_eq!(a.zobrist_key, b.zobrist_key);
        assert!((2..=6).contains(&moves_a.len()) || a.is_game_over());
    }

    #[test]
    fn match_respects_ply_limit() {
        let config = MatchConfig {
            max_plies: 6,
            opening_min_plies: 0,
            opening_max_plies: 0,
            ..MatchConfig::default()
        };
        let result = play_engine_match(
            Box::new(FirstActionEngine),
            Box::new(FirstActionEngine),
            3,
            &config,
        )
        .expect("match should run");

        assert!(result.opening_moves.is_empty());
        assert_eq!(
            result.white_move_count + result.black_move_count,
            result.played_moves.len() as u32
        );
        if result.outcome == MatchOutcome::DrawMaxPlies {
            assert_eq!(result.played_moves.len(), 6);
        }
    }

    #[test]
    fn illegal_engine_action_is_an_error() {
        let config = MatchConfig {
            max_plies: 4,
            opening_min_plies: 0,
            opening_max_plies: 0,
            ..MatchConfig::default()
        };
        let err = play_engine_match(
            Box::new(CheatingEngine),
            Box::new(FirstActionEngine),
            0,
            &config,
        )
        .expect_err("empty bank drop must be rejected");
        assert_eq!(
            err,
            ChessError::IllegalEngineAction {
                engine: "Cheater".to_owned(),
                action: "Q@d4".to_owned(),
            }
        );
    }

    #[test]
    fn series_accounts_for_every_game() {
        let config = MatchSeriesConfig {
            games: 2,
            base_seed: 5,
            per_game: MatchConfig {
                max_plies: 40,
                opening_min_plies: 0,
                opening_max_plies: 2,
                ..MatchConfig::default()
            },
        };
        let stats = play_engine_match_series(
            || Box::new(MinimaxEngine::new(1)),
            || Box::new(FirstActionEngine),
            &config,
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 2);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 2);
        assert!(stats.player1_moves > 0 && stats.player2_moves > 0);
        assert!(stats.report().starts_with("games=2 "));
    }

    #[test]
    fn series_is_reproducible() {
        let config = MatchSeriesConfig {
            games: 3,
            base_seed: 17,
            per_game: MatchConfig {
                max_plies: 20,
                ..MatchConfig::default()
            },
        };
        let run = || {
            play_engine_match_series(
                || Box::new(GreedyEngine::new(1)),
                || Box::new(GreedyEngine::new(2)),
                &config,
            )
            .expect("series should run")
            .outcomes
        };
        let first: Vec<SeriesOutcome> = run();
        assert_eq!(first, run());
    }
}
