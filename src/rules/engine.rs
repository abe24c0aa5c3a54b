//! Environment trait for board-game implementations.
//!
//! Games implement `GameEnvironment` to define:
//! - What actions are legal
//! - How an action transitions the board
//! - Win/draw conditions

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::action::ActionIndex;
use crate::core::board::Board;
use crate::core::error::Result;
use crate::core::player::Player;

/// Scalar reward returned by `step`.
pub type Reward = f32;

/// Set of legal action indices.
pub type ActionSet = FxHashSet<ActionIndex>;

/// Game status derived from the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    #[default]
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(p),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    /// Reward for `player` if they produced this outcome with their move.
    ///
    /// `+1` for a win, `0` for everything else including a draw.
    #[must_use]
    pub fn reward_for(self, player: Player) -> Reward {
        if self.is_winner(player) {
            1.0
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "InProgress"),
            Outcome::Win(p) => write!(f, "Win({p})"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of one accepted `step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board snapshot after the move. Independent of the live board.
    pub board: Board,
    /// Reward from the mover's perspective.
    pub reward: Reward,
    /// True exactly when `outcome` is terminal.
    pub done: bool,
    /// Outcome after the move.
    pub outcome: Outcome,
}

impl StepResult {
    /// Build a step result, deriving `done` and `reward` from the outcome.
    #[must_use]
    pub fn new(board: Board, mover: Player, outcome: Outcome) -> Self {
        Self {
            board,
            reward: outcome.reward_for(mover),
            done: outcome.is_terminal(),
            outcome,
        }
    }

    /// Destructure into the conventional `(board, reward, done, outcome)` tuple.
    #[must_use]
    pub fn into_tuple(self) -> (Board, Reward, bool, Outcome) {
        (self.board, self.reward, self.done, self.outcome)
    }
}

/// Step/reset contract for turn-based board games.
///
/// ## Implementation Notes
///
/// - `reset`: Must be idempotent and callable mid-game
/// - `legal_actions`: Recomputed on every call; empty once the game is
///   terminal, even though empty cells may remain after a win
/// - `step`: Must validate before mutating; a failed step leaves state untouched
/// - Returned boards are snapshots, never handles to live state
pub trait GameEnvironment {
    /// Board side length `N`.
    fn board_size(&self) -> usize;

    /// Clear the board, give the move to `PlayerA`, and return the fresh board.
    fn reset(&mut self) -> Board;

    /// Indices that may be passed to `step` right now.
    ///
    /// While the game is in progress these are exactly the empty cells. Once
    /// the outcome is terminal the set is empty, even if a win left cells
    /// unfilled.
    fn legal_actions(&self) -> ActionSet;

    /// Apply the current player's move.
    fn step(&mut self, action: ActionIndex) -> Result<StepResult>;

    /// Player entitled to move next.
    fn turn(&self) -> Player;

    /// Current game status.
    fn outcome(&self) -> Outcome;

    // === Convenience Methods ===

    /// Size of the action space (`N * N`).
    fn action_count(&self) -> usize {
        self.board_size() * self.board_size()
    }

    /// Check if the game has ended.
    fn is_done(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Legal actions in ascending index order.
    fn sorted_legal_actions(&self) -> Vec<ActionIndex> {
        let mut actions: Vec<_> = self.legal_actions().into_iter().collect();
        actions.sort_unstable();
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Win(Player::PlayerA).is_terminal());
        assert_eq!(Outcome::default(), Outcome::InProgress);
    }

    #[test]
    fn test_outcome_winner() {
        let result = Outcome::Win(Player::PlayerB);
        assert!(!result.is_winner(Player::PlayerA));
        assert!(result.is_winner(Player::PlayerB));
        assert_eq!(result.winner(), Some(Player::PlayerB));

        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }

    #[test]
    fn test_reward_convention() {
        assert_eq!(Outcome::Win(Player::PlayerA).reward_for(Player::PlayerA), 1.0);
        assert_eq!(Outcome::Win(Player::PlayerA).reward_for(Player::PlayerB), 0.0);
        assert_eq!(Outcome::Draw.reward_for(Player::PlayerA), 0.0);
        assert_eq!(Outcome::Draw.reward_for(Player::PlayerB), 0.0);
        assert_eq!(Outcome::InProgress.reward_for(Player::PlayerA), 0.0);
    }

    #[test]
    fn test_step_result() {
        let board = Board::new(3);
        let step = StepResult::new(board.clone(), Player::PlayerA, Outcome::Win(Player::PlayerA));
        assert!(step.done);
        assert_eq!(step.reward, 1.0);

        let (b, reward, done, outcome) =
            StepResult::new(board.clone(), Player::PlayerB, Outcome::InProgress).into_tuple();
        assert_eq!(b, board);
        assert_eq!(reward, 0.0);
        assert!(!done);
        assert_eq!(outcome, Outcome::InProgress);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(format!("{}", Outcome::InProgress), "InProgress");
        assert_eq!(format!("{}", Outcome::Win(Player::PlayerB)), "Win(PlayerB)");
        assert_eq!(format!("{}", Outcome::Draw), "Draw");
    }
}
