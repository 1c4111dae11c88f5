//! Strictly Gridtoe - command-line host
//!
//! Forwards moves to the engine and prints the board and result.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use strictly_gridtoe::{EngineConfig, GameEngine, MatchOutcome, Move, Position};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { size, config } => run_play(load_config(size, config)?),
        Command::Replay {
            size,
            config,
            json,
            moves,
        } => run_replay(load_config(size, config)?, json, &moves),
    }
}

/// Builds the engine config from an optional file and an optional size override.
#[instrument]
fn load_config(size: Option<usize>, path: Option<PathBuf>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let config = match size {
        Some(size) => config.with_size(size),
        None => config,
    };
    config.validate()?;

    debug!(?config, "Configuration resolved");
    Ok(config)
}

/// Interactive matches on stdin until EOF or `quit`.
#[instrument(skip(config))]
fn run_play(config: EngineConfig) -> Result<()> {
    let mut engine = GameEngine::with_config(&config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    info!(size = engine.size(), "Starting interactive play");
    writeln!(stdout, "{}", engine.board())?;
    prompt(&mut stdout, &engine)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            prompt(&mut stdout, &engine)?;
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let position: Position = match input.parse() {
            Ok(position) => position,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                prompt(&mut stdout, &engine)?;
                continue;
            }
        };

        match engine.submit_move(position.x, position.y) {
            Ok(result) => {
                writeln!(stdout, "{}", engine.board())?;
                if let Some(banner) = result.outcome.banner() {
                    writeln!(stdout, "{}", banner)?;
                    engine.reset();
                    writeln!(stdout, "New match.\n{}", engine.board())?;
                }
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        prompt(&mut stdout, &engine)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write, engine: &GameEngine) -> Result<()> {
    if let Some(mark) = engine.current_player() {
        write!(out, "{} to move> ", mark)?;
        out.flush()?;
    }
    Ok(())
}

/// JSON summary printed by `replay --json`.
#[derive(Debug, Serialize)]
struct ReplaySummary<'a> {
    size: usize,
    turn_count: usize,
    outcome: MatchOutcome,
    banner: Option<String>,
    history: &'a [Move],
}

/// Replays moves and prints the final board and banner.
#[instrument(skip(config, moves), fields(move_count = moves.len()))]
fn run_replay(config: EngineConfig, json: bool, moves: &[Position]) -> Result<()> {
    let engine = GameEngine::replay(*config.size(), moves)?;
    let mut stdout = io::stdout().lock();

    if json {
        let summary = ReplaySummary {
            size: engine.size(),
            turn_count: engine.turn_count(),
            outcome: engine.outcome(),
            banner: engine.outcome().banner(),
            history: engine.history(),
        };
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        writeln!(stdout)?;
        return Ok(());
    }

    writeln!(stdout, "{}", engine.board())?;
    match engine.outcome().banner() {
        Some(banner) => writeln!(stdout, "{}", banner)?,
        None => writeln!(stdout, "{}", engine.outcome())?,
    }
    Ok(())
}
