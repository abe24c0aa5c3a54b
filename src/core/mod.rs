//! Core environment types: players, board, actions, configuration, errors.
//!
//! These are game-agnostic building blocks for square-grid, two-player games.
//! Concrete games live under `games` and implement `rules::GameEnvironment`.

pub mod player;
pub mod board;
pub mod action;
pub mod config;
pub mod error;

pub use player::Player;
pub use board::{Board, Cell};
pub use action::{ActionIndex, ActionRecord, ActionSpace, Coord};
pub use config::{EnvConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{EnvError, InvalidActionReason, Result};
