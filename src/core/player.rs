//! Player identification.
//!
//! The environment is strictly two-player: `PlayerA` always moves first and
//! turns alternate after every accepted move.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First mover.
    #[default]
    PlayerA,
    /// Second mover.
    PlayerB,
}

impl Player {
    /// The player who moves after this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    /// Board mark used by the text display.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::PlayerA => 'X',
            Player::PlayerB => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::PlayerA => write!(f, "PlayerA"),
            Player::PlayerB => write!(f, "PlayerB"),
        }
    }
}
