//! Core domain types for tic-tac-toe.

use super::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Signed value of a board from X's point of view.
///
/// `1` when X has won, `-1` when O has won, `0` otherwise.
pub type Utility = i32;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a game this player has won.
    pub fn win_utility(self) -> Utility {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol used by the board text format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            '.' | '-' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: copying one yields an independent board, and
/// every move produces a new board rather than editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from explicit cell contents, indexed `[row][col]`.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given action's coordinate.
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row()][action.col()]
    }

    /// Checks if the cell at the given coordinate is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    /// Returns all cells as rows.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over every coordinate with its cell, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::ALL.iter().map(move |&action| (action, self.get(action)))
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Counts the cells that are not empty.
    pub fn occupied_count(&self) -> usize {
        self.iter().filter(|(_, cell)| *cell != Cell::Empty).count()
    }

    /// Returns a copy of this board with one cell replaced.
    pub(crate) fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row()][action.col()] = cell;
        self
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based index so a reader can name them.
    #[instrument(level = "trace")]
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (row * 3 + col + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cell symbols.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// The text contained a character that is neither a mark nor a separator.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidSymbol(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            if c.is_whitespace() || c == '/' || c == '|' {
                continue;
            }
            let cell = Cell::from_symbol(c).ok_or(BoardParseError::InvalidSymbol(c))?;
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let board = Action::ALL
            .iter()
            .zip(cells)
            .fold(Board::new(), |board, (&action, cell)| {
                board.with_cell(action, cell)
            });
        Ok(board)
    }
}

/// Status of a game derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Win(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}
