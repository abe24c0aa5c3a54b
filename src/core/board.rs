//! Board representation.
//!
//! ## Cell
//!
//! One square: empty or marked by a player.
//!
//! ## Board
//!
//! Square `N x N` grid stored row-major in an `im::Vector`, so cloning a board
//! is O(1) and a clone never aliases the original. The environment hands out
//! clones as snapshots; mutating methods are crate-private.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Coord;
use super::player::Player;

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Check if the cell is unmarked.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::PlayerA),
            Cell::PlayerB => Some(Player::PlayerB),
        }
    }

    /// Display character (`X`, `O` or `.`).
    #[must_use]
    pub const fn mark(self) -> char {
        match self.player() {
            Some(player) => player.mark(),
            None => '.',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerA => Cell::PlayerA,
            Player::PlayerB => Cell::PlayerB,
        }
    }
}

/// Square game board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty `size x size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`N * N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a coordinate. `None` if outside the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if coord.row < self.size && coord.col < self.size {
            self.cell(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Cell at a row-major index. `None` if outside the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Iterate over cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over rows, each as a `Vec<Cell>`.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.size).map(move |row| {
            (0..self.size)
                .map(|col| self.cells[row * self.size + col])
                .collect()
        })
    }

    /// Number of cells marked by a player.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Number of unmarked cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Mark a cell. Caller must have checked bounds and emptiness.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        debug_assert!(self.cells[index].is_empty(), "placing on occupied cell");
        self.cells.set(index, Cell::from(player));
    }

    /// Clear every cell.
    pub(crate) fn clear(&mut self) {
        *self = Self::new(self.size);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.mark()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
