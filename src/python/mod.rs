//! Python bindings for the board-game environment.
//!
//! # Quick Start
//!
//! ```python
//! import board_env
//!
//! env = board_env.TicTacToeEnv(board_size=3)
//! board = env.reset()
//! while not env.done:
//!     action = env.legal_actions()[0]
//!     board, reward, done, outcome = env.step(action)
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// board_env: a step/reset board-game environment for RL agents.
#[pymodule]
fn board_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTicTacToeEnv>()?;
    Ok(())
}
