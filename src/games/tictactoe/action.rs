//! Coordinate type naming the cell a move marks.
//!
//! An `Action` is only meaningful relative to a board: it is legal for a
//! board exactly when that board's cell at the coordinate is empty.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A `(row, column)` coordinate on the board, both in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    row: usize,
    col: usize,
}

/// Unchecked wire shape of an [`Action`]; bounds are enforced on conversion.
#[derive(Deserialize)]
struct RawAction {
    row: usize,
    col: usize,
}

impl TryFrom<RawAction> for Action {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

/// Error produced when building or parsing an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ActionError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Text that is neither `row,col` nor a cell index.
    #[display("Cannot parse action from {:?}", _0)]
    Unparseable(#[error(not(source))] String),
}

impl Action {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Creates an action, rejecting coordinates off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, ActionError> {
        if row > 2 || col > 2 {
            return Err(ActionError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row of the targeted cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of the targeted cell.
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates an action from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this coordinate (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = ActionError;

    /// Parses `"row,col"` (e.g. `"2,0"`) or a single index `"0"`..`"8"`.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || ActionError::Unparseable(s.to_string());
        let trimmed = s.trim();

        if let Some((row, col)) = trimmed.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| unparseable())?;
            let col = col.trim().parse::<usize>().map_err(|_| unparseable())?;
            return Self::new(row, col);
        }

        let index = trimmed.parse::<usize>().map_err(|_| unparseable())?;
        Self::from_index(index).ok_or_else(unparseable)
    }
}
