//! Game-tree search for tic-tac-toe.
//!
//! The whole tree below any board is small enough to expand completely, so
//! there is no depth limit and no heuristic evaluation: every line of play is
//! followed to a terminal board and its utility is backed up by alternating
//! maximisation (X) and minimisation (O).
//!
//! Two interchangeable strategies are provided:
//!
//! - [`minimax`] visits every node of the tree.
//! - [`alphabeta`] skips subtrees that cannot change the result. It returns
//!   the same values and the same root action as [`minimax`].

pub mod alphabeta;
pub mod minimax;

use crate::games::tictactoe::{Action, Board, Player, Utility};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which search algorithm to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Plain exhaustive minimax.
    #[default]
    #[display("minimax")]
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[display("alpha-beta")]
    AlphaBeta,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
}

/// Result of searching one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct SearchReport {
    /// Optimal action for the player to move, or `None` on a terminal board.
    action: Option<Action>,
    /// Utility reached under optimal play by both sides.
    value: Utility,
    /// Search counters.
    stats: SearchStats,
}

/// Searches `board` with the chosen strategy.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board, strategy: SearchStrategy) -> SearchReport {
    let report = match strategy {
        SearchStrategy::Minimax => minimax::search(board),
        SearchStrategy::AlphaBeta => alphabeta::search(board),
    };
    debug!(
        action = ?report.action,
        value = report.value,
        nodes = report.stats.nodes,
        "Search complete"
    );
    report
}

/// Returns `true` if `value` is strictly better for `player` than `best`.
///
/// Ties keep the earlier action, so the first optimal action in row-major
/// order wins.
fn improves(player: Player, value: Utility, best: Option<Utility>) -> bool {
    match (player, best) {
        (_, None) => true,
        (Player::X, Some(best)) => value > best,
        (Player::O, Some(best)) => value < best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improves_prefers_own_direction() {
        assert!(improves(Player::X, 1, Some(0)));
        assert!(!improves(Player::X, -1, Some(0)));
        assert!(improves(Player::O, -1, Some(0)));
        assert!(!improves(Player::O, 1, Some(0)));
    }

    #[test]
    fn test_improves_keeps_first_on_tie() {
        assert!(!improves(Player::X, 0, Some(0)));
        assert!(!improves(Player::O, 0, Some(0)));
        assert!(improves(Player::O, 0, None));
    }

    #[test]
    fn test_strategies_agree_on_midgame_board() {
        let board: Board = "X../.O./...".parse().unwrap();
        let plain = search(&board, SearchStrategy::Minimax);
        let pruned = search(&board, SearchStrategy::AlphaBeta);
        assert_eq!(plain.action(), pruned.action());
        assert_eq!(plain.value(), pruned.value());
        assert!(pruned.stats().nodes <= plain.stats().nodes);
    }
}
