//! Environment trait for game implementations.
//!
//! Games implement `GameEnvironment` to define:
//! - Legal actions for the current board
//! - How actions modify the board
//! - Win/draw conditions
//!
//! Drivers (agent loops, test harnesses, renderers) only ever talk to
//! `GameEnvironment`; they never touch a game's internals.

pub mod engine;

pub use engine::{ActionSet, GameEnvironment, Outcome, Reward, StepResult};
