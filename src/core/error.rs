//! Error taxonomy.
//!
//! Every error here is a deterministic, caller-correctable condition. None
//! is transient and none is retried. A failing call leaves the environment
//! exactly as it was.

use thiserror::Error;

use super::action::{ActionIndex, Coord};

/// Why an action index was rejected before the board was consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidActionReason {
    /// Index outside `[0, action_count)`.
    OutOfRange {
        /// Size of the action space (`N * N`).
        action_count: usize,
    },
    /// The game already reached a terminal outcome.
    GameOver,
}

impl std::fmt::Display for InvalidActionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidActionReason::OutOfRange { action_count } => {
                write!(f, "expected 0..{action_count}")
            }
            InvalidActionReason::GameOver => write!(f, "game is over"),
        }
    }
}

/// Errors raised by the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// Action index is not acceptable in the current state.
    #[error("invalid action {action}: {reason}")]
    InvalidAction {
        action: ActionIndex,
        reason: InvalidActionReason,
    },

    /// Action index is in range but its cell is already occupied.
    #[error("illegal move {action}: cell {coord} is occupied")]
    IllegalMove { action: ActionIndex, coord: Coord },

    /// Board size outside the playable range.
    #[error("invalid configuration: board size {board_size} is outside {min}..={max}")]
    InvalidConfiguration {
        board_size: usize,
        min: usize,
        max: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EnvError>;
