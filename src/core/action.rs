//! Action representation: flat indices mapped onto board coordinates.
//!
//! Every candidate move is an integer `ActionIndex`. The `ActionSpace` is the
//! fixed, row-major bijection between indices and `(row, col)` coordinates:
//! action `i` on an `N x N` board is `(i / N, i % N)`.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Integer identifying a candidate move.
pub type ActionIndex = usize;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row-major mapping from action index to coordinate.
///
/// Built once per board size and never modified afterwards.
///
/// ## Example
///
/// ```
/// use board_env::core::{ActionSpace, Coord};
///
/// let space = ActionSpace::new(3);
/// assert_eq!(space.len(), 9);
/// assert_eq!(space.coord(5), Some(Coord::new(1, 2)));
/// assert_eq!(space.coord(9), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    coords: Vec<Coord>,
}

impl ActionSpace {
    /// Build the action space for an `size x size` board.
    ///
    /// `size` must already be validated by `EnvConfig::validate`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let coords = (0..size * size)
            .map(|i| Coord::new(i / size, i % size))
            .collect();
        Self { coords }
    }

    /// Number of actions (`N * N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Check if the space has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinate for an action index.
    #[must_use]
    pub fn coord(&self, action: ActionIndex) -> Option<Coord> {
        self.coords.get(action).copied()
    }
}

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Training data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who moved.
    pub player: Player,

    /// The action taken.
    pub action: ActionIndex,

    /// Ply number (0-based, counts accepted moves since the last reset).
    pub ply: usize,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: ActionIndex, ply: usize) -> Self {
        Self { player, action, ply }
    }
}
