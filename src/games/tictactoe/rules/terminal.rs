//! Terminal-state evaluation for tic-tac-toe.

use super::super::{Board, Cell, Outcome, Player, Utility};
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, cell)| cell != Cell::Empty)
}

/// Returns `true` if the game is over.
///
/// A board is terminal when someone has won *or* no empty cell remains;
/// a full board with a completed line is both at once.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns `1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Only meaningful on terminal boards.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> Utility {
    winner(board).map(Player::win_utility).unwrap_or(0)
}

/// Derives the game status from the board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Win(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
