//! Strictly Minimax - tic-tac-toe rules and optimal move selection
//!
//! This library models tic-tac-toe boards and picks the game-theoretically
//! optimal move by searching the complete game tree.
//!
//! # Architecture
//!
//! - **Games**: board model and pure rule functions (turn, moves, wins)
//! - **Search**: exhaustive minimax, plus an alpha-beta variant
//! - **Engine**: the `best_move` query and a configurable engine handle
//! - **Config**: TOML-backed engine settings
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, apply, best_move, is_terminal};
//!
//! let mut board = Board::new();
//! while let Some(action) = best_move(&board) {
//!     board = apply(&board, action).unwrap();
//! }
//! assert!(is_terminal(&board));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod games;
pub mod search;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Query facade
pub use engine::{Engine, PlayedGame, best_move};

// Crate-level exports - Search
pub use search::{SearchReport, SearchStats, SearchStrategy};

// Crate-level exports - Game types and rules (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionError, Board, BoardParseError, Cell, IllegalAction, Outcome, Player, Utility,
    apply, initial_state, is_full, is_terminal, legal_actions, outcome, player_to_move,
    successors, utility, winner,
};
