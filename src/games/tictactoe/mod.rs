//! Tic-tac-toe board model and rules.

pub mod action;
pub mod rules;
pub mod types;

pub use action::{Action, ActionError};
pub use rules::{
    IllegalAction, apply, initial_state, is_full, is_terminal, legal_actions, outcome,
    player_to_move, successors, utility, winner,
};
pub use types::{Board, BoardParseError, Cell, Outcome, Player, Utility};
