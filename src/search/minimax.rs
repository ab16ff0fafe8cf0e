//! Exhaustive minimax over the tic-tac-toe game tree.
//!
//! Each call frame handles one board; successors are created, evaluated and
//! dropped on the way back up. Recursion depth is bounded by the number of
//! empty cells, so at most 9.

use super::{SearchReport, SearchStats, improves};
use crate::games::tictactoe::{
    Action, Board, Player, Utility, is_terminal, player_to_move, successors, utility,
};
use tracing::instrument;

/// Returns the optimal action for the player to move.
///
/// Returns `None` if the board is terminal. When several actions are equally
/// good, the first in row-major order is returned.
#[instrument(skip(board), fields(board = %board))]
pub fn best_action(board: &Board) -> Option<Action> {
    search(board).action
}

/// Value of `board` when X (the maximiser) is to move.
#[instrument(skip(board), fields(board = %board))]
pub fn max_value(board: &Board) -> Utility {
    max_value_counted(board, &mut SearchStats::default())
}

/// Value of `board` when O (the minimiser) is to move.
#[instrument(skip(board), fields(board = %board))]
pub fn min_value(board: &Board) -> Utility {
    min_value_counted(board, &mut SearchStats::default())
}

/// Runs a full search from `board`, reporting action, value and node count.
pub(crate) fn search(board: &Board) -> SearchReport {
    let mut stats = SearchStats::default();
    stats.nodes += 1;

    if is_terminal(board) {
        return SearchReport::new(None, utility(board), stats);
    }

    let player = player_to_move(board);
    let mut best: Option<(Action, Utility)> = None;
    for (action, next) in successors(board) {
        let value = match player {
            Player::X => min_value_counted(&next, &mut stats),
            Player::O => max_value_counted(&next, &mut stats),
        };
        if improves(player, value, best.map(|(_, v)| v)) {
            best = Some((action, value));
        }
    }

    match best {
        Some((action, value)) => SearchReport::new(Some(action), value, stats),
        None => SearchReport::new(None, utility(board), stats),
    }
}

fn max_value_counted(board: &Board, stats: &mut SearchStats) -> Utility {
    stats.nodes += 1;
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value_counted(&next, stats))
        .fold(Utility::MIN, Utility::max)
}

fn min_value_counted(board: &Board, stats: &mut SearchStats) -> Utility {
    stats.nodes += 1;
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value_counted(&next, stats))
        .fold(Utility::MAX, Utility::min)
}
