//! Tic-tac-toe environment.

use crate::core::{
    ActionIndex, ActionRecord, ActionSpace, Board, Cell, Coord, EnvConfig, EnvError,
    InvalidActionReason, Player, Result,
};
use crate::rules::{ActionSet, GameEnvironment, Outcome, StepResult};

use super::lines::Line;

/// `N x N` tic-tac-toe: first to fill a row, column or diagonal wins.
///
/// The environment owns its board; callers only ever see borrowed views
/// (`board()`) or snapshots (`snapshot()`, `reset()`, `step()`).
#[derive(Clone, Debug)]
pub struct TicTacToe {
    config: EnvConfig,
    actions: ActionSpace,
    board: Board,
    turn: Player,
    history: Vec<ActionRecord>,
}

impl TicTacToe {
    /// Create an environment from a configuration.
    ///
    /// Fails with `InvalidConfiguration` if the board size is outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(config: EnvConfig) -> Result<Self> {
        let action_count = config.validate()?;

        let size = config.board_size;
        tracing::debug!(board_size = size, actions = action_count, "created tic-tac-toe environment");

        Ok(Self {
            config,
            actions: ActionSpace::new(size),
            board: Board::new(size),
            turn: Player::PlayerA,
            history: Vec::with_capacity(action_count),
        })
    }

    /// Create an environment with the given board size.
    pub fn with_size(board_size: usize) -> Result<Self> {
        Self::new(EnvConfig::new().with_board_size(board_size))
    }

    /// Get the action space.
    #[must_use]
    pub fn action_space(&self) -> &ActionSpace {
        &self.actions
    }

    /// Read-only view of the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Accepted moves since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Number of accepted moves since the last reset.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Outcome after a mark was placed at `last`.
    ///
    /// Only lines through `last` can have been completed by that move. Every
    /// accepted move fills one cell, so a full history means a full board.
    fn terminal_check(&self, last: Coord) -> Outcome {
        let size = self.config.board_size;
        let mark = self.board.get(last).unwrap_or_default();

        if let Some(player) = mark.player() {
            let won = Line::through(last, size)
                .into_iter()
                .any(|line| line.cells(size).all(|i| self.board.cell(i) == Some(mark)));
            if won {
                return Outcome::Win(player);
            }
        }

        if self.history.len() == self.actions.len() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Validate an action without touching state.
    fn check_action(&self, action: ActionIndex) -> Result<()> {
        if self.is_done() {
            return Err(EnvError::InvalidAction {
                action,
                reason: InvalidActionReason::GameOver,
            });
        }

        let coord = self.actions.coord(action).ok_or(EnvError::InvalidAction {
            action,
            reason: InvalidActionReason::OutOfRange {
                action_count: self.actions.len(),
            },
        })?;

        if !matches!(self.board.cell(action), Some(Cell::Empty)) {
            return Err(EnvError::IllegalMove { action, coord });
        }

        Ok(())
    }
}

impl GameEnvironment for TicTacToe {
    fn board_size(&self) -> usize {
        self.config.board_size
    }

    fn reset(&mut self) -> Board {
        self.board.clear();
        self.turn = Player::PlayerA;
        self.history.clear();
        self.snapshot()
    }

    fn legal_actions(&self) -> ActionSet {
        if self.is_done() {
            return ActionSet::default();
        }

        self.board
            .cells()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    fn step(&mut self, action: ActionIndex) -> Result<StepResult> {
        self.check_action(action)?;

        let mover = self.turn;
        let ply = self.history.len();
        self.board.place(action, mover);
        self.history.push(ActionRecord::new(mover, action, ply));

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.turn = mover.opponent();
        }

        Ok(StepResult::new(self.snapshot(), mover, outcome))
    }

    fn turn(&self) -> Player {
        self.turn
    }

    fn outcome(&self) -> Outcome {
        match self.history.last().and_then(|rec| self.actions.coord(rec.action)) {
            Some(last) => self.terminal_check(last),
            None => Outcome::InProgress,
        }
    }
}
