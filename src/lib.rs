//! # board-env
//!
//! A minimal turn-based board-game environment with a step/reset interface,
//! built for external agents (RL loops, test harnesses, renderers).
//!
//! ## Design Principles
//!
//! 1. **Owned State**: The environment owns its board exclusively. Callers get
//!    borrowed views or O(1) snapshot clones, never a handle to live state.
//!
//! 2. **Validate, Then Mutate**: A rejected `step` leaves the environment
//!    exactly as it was.
//!
//! 3. **Capability Trait**: Drivers talk to `GameEnvironment` only, so other
//!    board games can implement the same contract.
//!
//! ## Architecture
//!
//! - **Line-Through-Last-Move**: Terminal detection inspects only the row,
//!   column and diagonals through the cell just played.
//!
//! - **Persistent Data Structures**: Board cells live in an `im::Vector`, so
//!   every returned snapshot shares structure with, but never aliases, the
//!   live board.
//!
//! ## Modules
//!
//! - `core`: Players, board, action space, configuration, errors
//! - `rules`: `GameEnvironment` trait, outcomes and step results
//! - `games`: Concrete environments (`tictactoe`)
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use board_env::{GameEnvironment, Outcome, Player, TicTacToe};
//!
//! let mut env = TicTacToe::with_size(3).unwrap();
//! env.reset();
//! for action in [0, 3, 1, 4] {
//!     env.step(action).unwrap();
//! }
//! let step = env.step(2).unwrap();
//! assert_eq!(step.outcome, Outcome::Win(Player::PlayerA));
//! assert_eq!(step.reward, 1.0);
//! assert!(step.done);
//! ```

pub mod core;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionIndex, ActionRecord, ActionSpace, Board, Cell, Coord,
    EnvConfig, EnvError, InvalidActionReason, Player, Result,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

pub use crate::rules::{ActionSet, GameEnvironment, Outcome, Reward, StepResult};

pub use crate::games::tictactoe::{Line, TicTacToe};
