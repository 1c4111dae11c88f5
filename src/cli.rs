//! Command-line interface for strictly_gridtoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_gridtoe::Position;

/// Strictly Gridtoe - N-in-a-row tic-tac-toe on an N×N board
#[derive(Parser, Debug)]
#[command(name = "strictly_gridtoe")]
#[command(about = "N-in-a-row tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play matches by typing moves ("x,y" or "x y") on stdin
    Play {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay a list of moves and print the result
    Replay {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON summary instead of the board
        #[arg(long)]
        json: bool,

        /// Moves in play order, each "x,y"
        #[arg(required = true)]
        moves: Vec<Position>,
    },
}
