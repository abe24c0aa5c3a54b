//! Concrete games implementing `GameEnvironment`.

pub mod tictactoe;
