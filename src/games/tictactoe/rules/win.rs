//! Win detection logic for tic-tac-toe.

use super::super::{Action, Board, Player};
use tracing::instrument;

/// The 8 winning lines, as row-major cell indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.get(Action::ALL[a]);
        if let Some(player) = cell.player()
            && cell == board.get(Action::ALL[b])
            && cell == board.get(Action::ALL[c])
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.OX".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X/.OX/X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX/.X./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
