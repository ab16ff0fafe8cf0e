//! Strictly Minimax - CLI
//!
//! Thin query tool over the move engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_minimax::{Board, Engine, EngineConfig, apply, player_to_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(config.log_filter());

    let engine = Engine::new(config);
    match cli.command {
        Command::BestMove { board } => run_best_move(&engine, &board),
        Command::Analyze { board, json } => run_analyze(&engine, &board, json),
        Command::Play { board, json } => run_play(&engine, &board.unwrap_or_default(), json),
    }
}

/// Reads the config file if given, then applies command-line overrides.
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(match cli.strategy {
        Some(strategy) => config.with_strategy(strategy),
        None => config,
    })
}

/// Installs the fmt subscriber; `RUST_LOG` wins over the configured filter.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(engine, board), fields(board = %board))]
fn run_best_move(engine: &Engine, board: &Board) -> Result<()> {
    match engine.best_move(board) {
        Some(action) => println!("{} {} ({})", player_to_move(board), action, action.label()),
        None => println!("no move"),
    }
    Ok(())
}

#[instrument(skip(engine, board), fields(board = %board))]
fn run_analyze(engine: &Engine, board: &Board, json: bool) -> Result<()> {
    let report = engine.analyze(board);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.render());
    match report.action() {
        Some(action) => println!("move:  {} {}", player_to_move(board), action),
        None => println!("move:  none"),
    }
    println!("value: {}", report.value());
    println!("nodes: {}", report.stats().nodes);
    Ok(())
}

#[instrument(skip(engine, board), fields(board = %board))]
fn run_play(engine: &Engine, board: &Board, json: bool) -> Result<()> {
    info!(strategy = %engine.config().strategy(), "Starting self-play");
    let game = engine.self_play(board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    let mut current = *game.start();
    println!("{}\n", current.render());
    for action in game.moves() {
        let player = player_to_move(&current);
        current = apply(&current, *action)?;
        println!("{} plays {} ({})\n{}\n", player, action, action.label(), current.render());
    }
    println!("result: {}", game.outcome());
    Ok(())
}
