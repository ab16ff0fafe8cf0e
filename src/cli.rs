//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Board, SearchStrategy};

/// Strictly Minimax - optimal tic-tac-toe moves by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe move engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to engine configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured search strategy
    #[arg(long, global = true, value_enum)]
    pub strategy: Option<SearchStrategy>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board as nine cells in row-major order, e.g. "XOX/OXO/..."
        #[arg(short, long)]
        board: Board,
    },

    /// Print the search value, chosen move and node count
    Analyze {
        /// Board as nine cells in row-major order, e.g. "XOX/OXO/..."
        #[arg(short, long)]
        board: Board,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play optimal moves for both sides until the game ends
    Play {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<Board>,

        /// Emit the game as JSON
        #[arg(long)]
        json: bool,
    },
}
