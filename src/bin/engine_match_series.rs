//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --player1 minimax --player2 greedy --p1-option Depth=3`
//! Set `RUST_LOG=info` to follow each game.

use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use chessmihouse::engines::engine_greedy::GreedyEngine;
use chessmihouse::engines::engine_minimax::MinimaxEngine;
use chessmihouse::engines::engine_trait::Engine;
use chessmihouse::errors::ChessError;
use chessmihouse::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    Minimax,
    Greedy,
}

#[derive(Debug, Parser)]
#[command(about = "Play a seeded series between two engines")]
struct Args {
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    player1: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Greedy)]
    player2: EngineKind,

    /// Search depth for minimax players.
    #[arg(long, default_value_t = 2)]
    depth: u8,

    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Engine option for player 1 as `Name=value` (repeatable).
    #[arg(long = "p1-option", value_name = "NAME=VALUE")]
    player1_options: Vec<String>,

    /// Engine option for player 2 as `Name=value` (repeatable).
    #[arg(long = "p2-option", value_name = "NAME=VALUE")]
    player2_options: Vec<String>,
}

fn parse_options(raw: &[String]) -> Vec<(String, String)> {
    raw.iter()
        .map(|entry| match entry.split_once('=') {
            Some((name, value)) => (name.trim().to_owned(), value.trim().to_owned()),
            None => (entry.trim().to_owned(), String::new()),
        })
        .collect()
}

fn new_engine(kind: EngineKind, depth: u8, seed: u64) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new(depth)),
        EngineKind::Greedy => Box::new(GreedyEngine::new(seed)),
    }
}

fn configure(engine: &mut dyn Engine, options: &[(String, String)]) -> Result<(), ChessError> {
    for (name, value) in options {
        engine.set_option(name, value)?;
    }
    Ok(())
}

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let player1_options = parse_options(&args.player1_options);
    let player2_options = parse_options(&args.player2_options);

    // Fail on bad options before the first game starts.
    configure(
        new_engine(args.player1, args.depth, args.seed).as_mut(),
        &player1_options,
    )?;
    configure(
        new_engine(args.player2, args.depth, args.seed).as_mut(),
        &player2_options,
    )?;

    let (depth, seed) = (args.depth, args.seed);
    let factory = move |kind: EngineKind, options: Vec<(String, String)>| {
        move || {
            let mut engine = new_engine(kind, depth, seed);
            if let Err(err) = configure(engine.as_mut(), &options) {
                warn!(%err, "engine option rejected");
            }
            engine
        }
    };

    let stats = play_engine_match_series(
        factory(args.player1, player1_options),
        factory(args.player2, player2_options),
        &MatchSeriesConfig {
            games: args.games,
            base_seed: seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
