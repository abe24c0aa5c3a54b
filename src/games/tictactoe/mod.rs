//! `N x N` tic-tac-toe.
//!
//! - Board is `N x N` (default 3x3, minimum 3x3)
//! - `PlayerA` moves first; players alternate placing one mark per turn
//! - Win: a full row, column or diagonal of one player's marks
//! - Draw: board full with no completed line
//!
//! Actions are row-major cell indices: action `i` marks `(i / N, i % N)`.

mod game;
mod lines;

pub use game::TicTacToe;
pub use lines::Line;
