//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Every function takes a board by
//! reference and derives its answer; none of them mutate anything.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{IllegalAction, apply, legal_actions, successors};
pub use terminal::{is_full, is_terminal, outcome, utility};
pub use turn::player_to_move;
pub use win::winner;

use super::Board;

/// Returns the all-empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}
