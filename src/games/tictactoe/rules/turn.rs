//! Turn derivation for tic-tac-toe.
//!
//! No turn field is stored anywhere: the player to move is recomputed from
//! the marks already on the board.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player whose turn it is on `board`.
///
/// X moves first and turns alternate, so O is to move exactly when X has
/// placed more marks than O. The result is only meaningful for boards
/// reachable by legal play; on any other board it is unspecified.
#[instrument(level = "trace")]
pub fn player_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player_to_move(&Board::new()), Player::X);
    }

    #[test]
    fn test_turns_alternate() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(player_to_move(&board), Player::O);

        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(player_to_move(&board), Player::X);

        let board: Board = "XOX/OXO/.X.".parse().unwrap();
        assert_eq!(player_to_move(&board), Player::O);

        let board: Board = "XOX/OXO/OX.".parse().unwrap();
        assert_eq!(player_to_move(&board), Player::X);
    }
}
