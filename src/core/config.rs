//! Environment configuration.
//!
//! The only tunable is the board size. Drivers may embed `EnvConfig` in their
//! own config files via serde.

use serde::{Deserialize, Serialize};

use super::error::{EnvError, Result};

/// Smallest board on which a game can conclude meaningfully.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest accepted board (about a million cells).
pub const MAX_BOARD_SIZE: usize = 1024;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Complete environment configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Board side length `N` (board is `N x N`).
    pub board_size: usize,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl EnvConfig {
    /// Create a configuration with the default board size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Number of actions this configuration yields. `None` on overflow.
    #[must_use]
    pub fn action_count(&self) -> Option<usize> {
        self.board_size.checked_mul(self.board_size)
    }

    /// Check the board size against [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`]
    /// and return the action count.
    pub fn validate(&self) -> Result<usize> {
        let invalid = EnvError::InvalidConfiguration {
            board_size: self.board_size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        };

        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(invalid);
        }
        self.action_count().ok_or(invalid)
    }
}
