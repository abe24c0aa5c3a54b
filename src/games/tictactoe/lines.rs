//! Winning lines on an `N x N` board.

use smallvec::SmallVec;

use crate::core::Coord;

/// A full line of `N` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Row-major cell indices on this line.
    pub fn cells(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |i| match self {
            Line::Row(r) => r * size + i,
            Line::Column(c) => i * size + c,
            Line::MainDiagonal => i * size + i,
            Line::AntiDiagonal => i * size + (size - 1 - i),
        })
    }

    /// Every line passing through `coord`: its row, its column, and each
    /// diagonal it lies on.
    #[must_use]
    pub fn through(coord: Coord, size: usize) -> SmallVec<[Line; 4]> {
        let mut lines = SmallVec::new();
        lines.push(Line::Row(coord.row));
        lines.push(Line::Column(coord.col));
        if coord.row == coord.col {
            lines.push(Line::MainDiagonal);
        }
        if coord.row + coord.col + 1 == size {
            lines.push(Line::AntiDiagonal);
        }
        lines
    }
}
