//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the best value X is already guaranteed elsewhere in the tree,
//! `beta` the best value O is guaranteed. Once a node's value falls outside
//! `(alpha, beta)` its remaining children cannot affect the root and are
//! skipped. Values are fail-soft: a pruned node returns a bound on the side
//! that gets discarded, and every value inside the window is exact.

use super::{SearchReport, SearchStats, improves};
use crate::games::tictactoe::{
    Action, Board, Player, Utility, is_terminal, player_to_move, successors, utility,
};
use tracing::instrument;

/// Returns the optimal action for the player to move.
///
/// Agrees with [`super::minimax::best_action`] on every board.
#[instrument(skip(board), fields(board = %board))]
pub fn best_action(board: &Board) -> Option<Action> {
    search(board).action
}

/// Value of `board` when X (the maximiser) is to move.
#[instrument(skip(board), fields(board = %board))]
pub fn max_value(board: &Board) -> Utility {
    max_value_counted(board, Utility::MIN, Utility::MAX, &mut SearchStats::default())
}

/// Value of `board` when O (the minimiser) is to move.
#[instrument(skip(board), fields(board = %board))]
pub fn min_value(board: &Board) -> Utility {
    min_value_counted(board, Utility::MIN, Utility::MAX, &mut SearchStats::default())
}

/// Runs a pruned search from `board`, reporting action, value and node count.
pub(crate) fn search(board: &Board) -> SearchReport {
    let mut stats = SearchStats::default();
    stats.nodes += 1;

    if is_terminal(board) {
        return SearchReport::new(None, utility(board), stats);
    }

    let player = player_to_move(board);
    let mut alpha = Utility::MIN;
    let mut beta = Utility::MAX;
    let mut best: Option<(Action, Utility)> = None;
    for (action, next) in successors(board) {
        // A child no better than the current best comes back as a bound at
        // or behind it, so `improves` still sees only genuine improvements.
        let value = match player {
            Player::X => min_value_counted(&next, alpha, beta, &mut stats),
            Player::O => max_value_counted(&next, alpha, beta, &mut stats),
        };
        if improves(player, value, best.map(|(_, v)| v)) {
            best = Some((action, value));
            match player {
                Player::X => alpha = alpha.max(value),
                Player::O => beta = beta.min(value),
            }
        }
    }

    match best {
        Some((action, value)) => SearchReport::new(Some(action), value, stats),
        None => SearchReport::new(None, utility(board), stats),
    }
}

fn max_value_counted(
    board: &Board,
    mut alpha: Utility,
    beta: Utility,
    stats: &mut SearchStats,
) -> Utility {
    stats.nodes += 1;
    if is_terminal(board) {
        return utility(board);
    }

    let mut value = Utility::MIN;
    for (_, next) in successors(board) {
        value = value.max(min_value_counted(&next, alpha, beta, stats));
        if value >= beta {
            break;
        }
        alpha = alpha.max(value);
    }
    value
}

fn min_value_counted(
    board: &Board,
    alpha: Utility,
    mut beta: Utility,
    stats: &mut SearchStats,
) -> Utility {
    stats.nodes += 1;
    if is_terminal(board) {
        return utility(board);
    }

    let mut value = Utility::MAX;
    for (_, next) in successors(board) {
        value = value.min(max_value_counted(&next, alpha, beta, stats));
        if value <= alpha {
            break;
        }
        beta = beta.min(value);
    }
    value
}
