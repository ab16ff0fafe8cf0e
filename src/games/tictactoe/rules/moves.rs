//! Move generation and application for tic-tac-toe.

use super::super::{Action, Board, Cell, Player};
use super::turn::player_to_move;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when an action targets an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Illegal action {}: cell already holds {}", action, occupant)]
pub struct IllegalAction {
    /// The rejected action.
    pub action: Action,
    /// The player whose mark is already there.
    pub occupant: Player,
}

/// Returns every coordinate whose cell is empty, in row-major order.
///
/// The result is empty exactly when the board is full.
#[instrument(level = "trace")]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    board
        .iter()
        .filter(|(_, cell)| *cell == Cell::Empty)
        .map(|(action, _)| action)
        .collect()
}

/// Returns every legal action paired with the board it produces.
///
/// Used by search to walk the game tree without re-validating actions
/// it generated itself.
pub fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> {
    let cell = Cell::Occupied(player_to_move(board));
    let board = *board;
    legal_actions(&board)
        .into_iter()
        .map(move |action| (action, board.with_cell(action, cell)))
}

/// Returns the board that results from the player to move marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`IllegalAction`] if the target cell is already occupied.
#[instrument(level = "trace")]
pub fn apply(board: &Board, action: Action) -> Result<Board, IllegalAction> {
    if let Cell::Occupied(occupant) = board.get(action) {
        return Err(IllegalAction { action, occupant });
    }
    let player = player_to_move(board);
    Ok(board.with_cell(action, Cell::Occupied(player)))
}
