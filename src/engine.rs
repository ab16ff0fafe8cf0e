//! Move-selection entry points.
//!
//! [`best_move`] is the single call a presentation layer needs: hand it the
//! current board and it returns the move to play, or `None` once the game is
//! over. [`Engine`] wraps the same query with a configurable search strategy
//! and adds analysis and self-play.

use crate::config::EngineConfig;
use crate::games::tictactoe::{Action, Board, IllegalAction, Outcome, apply, outcome};
use crate::search::{self, SearchReport, minimax};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Returns the optimal move for the player to move on `board`.
///
/// Returns `None` if the board is already terminal. `board` must be reachable
/// from the empty board by legal alternating play.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> Option<Action> {
    minimax::best_action(board)
}

/// A game played out from some starting board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayedGame {
    /// Board the game started from.
    start: Board,
    /// Actions taken, in order.
    moves: Vec<Action>,
    /// Terminal board reached.
    board: Board,
    /// Result of the game.
    outcome: Outcome,
}

/// Move engine with a configured search strategy.
#[derive(Debug, Clone, Default, Getters)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine from configuration.
    #[instrument(skip(config), fields(strategy = %config.strategy()))]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the optimal move on `board`, or `None` if it is terminal.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_move(&self, board: &Board) -> Option<Action> {
        *self.analyze(board).action()
    }

    /// Searches `board` and reports the chosen move, its value and the work done.
    #[instrument(skip(self, board), fields(board = %board, strategy = %self.config.strategy()))]
    pub fn analyze(&self, board: &Board) -> SearchReport {
        search::search(board, *self.config.strategy())
    }

    /// Plays optimal moves for both sides until the game ends.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalAction`] only if the search proposes an occupied
    /// cell, which cannot happen for boards reachable by legal play.
    #[instrument(skip(self, start), fields(start = %start))]
    pub fn self_play(&self, start: &Board) -> Result<PlayedGame, IllegalAction> {
        let mut board = *start;
        let mut moves = Vec::new();

        while let Some(action) = self.best_move(&board) {
            board = apply(&board, action)?;
            debug!(%action, board = %board, "Move played");
            moves.push(action);
        }

        let outcome = outcome(&board);
        info!(moves = moves.len(), %outcome, "Self-play finished");
        Ok(PlayedGame {
            start: *start,
            moves,
            board,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;
    use crate::search::SearchStrategy;

    #[test]
    fn test_best_move_none_when_terminal() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(best_move(&board), None);
        assert_eq!(Engine::default().best_move(&board), None);
    }

    #[test]
    fn test_engine_strategies_agree() {
        let board: Board = "X.O/.../...".parse().unwrap();
        let plain = Engine::new(EngineConfig::new(SearchStrategy::Minimax));
        let pruned = Engine::new(EngineConfig::new(SearchStrategy::AlphaBeta));
        assert_eq!(plain.best_move(&board), pruned.best_move(&board));
        assert_eq!(plain.analyze(&board).value(), pruned.analyze(&board).value());
    }

    #[test]
    fn test_self_play_finishes_won_position() {
        // X to move with a win available.
        let board: Board = "XX./OO./...".parse().unwrap();
        let game = Engine::default().self_play(&board).unwrap();
        assert_eq!(game.moves(), &[Action::new(0, 2).unwrap()]);
        assert_eq!(*game.outcome(), Outcome::Win(Player::X));
        assert_eq!(*game.start(), board);
    }

    #[test]
    fn test_self_play_on_terminal_board_is_empty() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let game = Engine::default().self_play(&board).unwrap();
        assert!(game.moves().is_empty());
        assert_eq!(*game.outcome(), Outcome::Draw);
    }
}
