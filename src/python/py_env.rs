//! Environment bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Cell, EnvError, InvalidActionReason};
use crate::games::tictactoe::TicTacToe;
use crate::rules::GameEnvironment;

fn to_py_err(err: EnvError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Convert a Python integer into an action index.
///
/// A finished game reports `GameOver` before any range check, matching
/// `TicTacToe::step`.
fn action_index(env: &TicTacToe, action: i64) -> Result<usize, String> {
    let reason = if env.is_done() {
        InvalidActionReason::GameOver
    } else {
        InvalidActionReason::OutOfRange {
            action_count: env.action_count(),
        }
    };
    match usize::try_from(action) {
        Ok(index) if reason != InvalidActionReason::GameOver => Ok(index),
        _ => Err(format!("invalid action {action}: {reason}")),
    }
}

/// `0` empty, `1` PlayerA, `-1` PlayerB.
fn cell_code(cell: Cell) -> i8 {
    match cell {
        Cell::Empty => 0,
        Cell::PlayerA => 1,
        Cell::PlayerB => -1,
    }
}

fn board_to_numpy<'py>(py: Python<'py>, board: &Board) -> PyResult<Bound<'py, PyArray2<i8>>> {
    let n = board.size();
    let cells: Vec<i8> = board.cells().map(cell_code).collect();
    PyArray1::from_vec_bound(py, cells)
        .reshape([n, n])
        .map_err(|e| PyValueError::new_err(format!("{}", e)))
}

/// Python wrapper for the tic-tac-toe environment.
///
/// Boards are returned as `(N, N)` int8 arrays copied from the live board.
#[pyclass(name = "TicTacToeEnv")]
pub struct PyTicTacToeEnv {
    env: TicTacToe,
}

#[pymethods]
impl PyTicTacToeEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - board_size: Side length N (N >= 3)
    #[new]
    #[pyo3(signature = (board_size = 3))]
    fn new(board_size: usize) -> PyResult<Self> {
        let env = TicTacToe::with_size(board_size).map_err(to_py_err)?;
        Ok(Self { env })
    }

    /// Clear the board and return it.
    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let board = self.env.reset();
        board_to_numpy(py, &board)
    }

    /// Legal action indices in ascending order.
    fn legal_actions(&self) -> Vec<usize> {
        self.env.sorted_legal_actions()
    }

    /// Apply an action.
    ///
    /// Returns (board, reward, done, outcome). Raises ValueError on an
    /// invalid or illegal action; the environment is left unchanged.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: i64,
    ) -> PyResult<(Bound<'py, PyArray2<i8>>, f32, bool, String)> {
        let index = action_index(&self.env, action).map_err(PyValueError::new_err)?;

        let step = self.env.step(index).map_err(to_py_err)?;
        let board = board_to_numpy(py, &step.board)?;
        Ok((board, step.reward, step.done, step.outcome.to_string()))
    }

    /// Copy of the current board.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        board_to_numpy(py, self.env.board())
    }

    /// Board side length.
    #[getter]
    fn board_size(&self) -> usize {
        self.env.board_size()
    }

    /// Player to move ("PlayerA" or "PlayerB").
    #[getter]
    fn turn(&self) -> String {
        self.env.turn().to_string()
    }

    /// Whether the game has ended.
    #[getter]
    fn done(&self) -> bool {
        self.env.is_done()
    }

    /// Current outcome ("InProgress", "Win(PlayerA)", "Win(PlayerB)", "Draw").
    #[getter]
    fn outcome(&self) -> String {
        self.env.outcome().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "TicTacToeEnv(board_size={}, turn={}, outcome={})",
            self.env.board_size(),
            self.env.turn(),
            self.env.outcome()
        )
    }

    fn __str__(&self) -> String {
        self.env.board().to_string()
    }
}
