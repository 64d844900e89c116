//! Line descriptors and the shared line-scanning primitive.
//!
//! Rows, columns, and the two diagonals are all "N cells addressed by an
//! index k in [0, N)", so one descriptor plus one tally routine covers every
//! scan the engine needs: win checks and the opponent's threat search alike.

use crate::board::Board;
use crate::types::{Cell, Coord, Mark};

/// One full line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row `i`: cell k is (i, k).
    Row(usize),
    /// Column `i`: cell k is (k, i).
    Column(usize),
    /// Main diagonal: cell k is (k, k).
    MainDiagonal,
    /// Anti-diagonal: cell k is (N-1-k, k).
    AntiDiagonal,
}

impl Line {
    /// Board coordinate of the k-th cell on this line.
    pub fn coord(self, k: usize, size: usize) -> Coord {
        match self {
            Line::Row(i) => Coord::new(i, k),
            Line::Column(i) => Coord::new(k, i),
            Line::MainDiagonal => Coord::new(k, k),
            Line::AntiDiagonal => Coord::new(size - 1 - k, k),
        }
    }

    /// The lines passing through `coord`: its row, its column, and whichever
    /// diagonals the cell lies on. At most four.
    pub fn through(coord: Coord, size: usize) -> Vec<Line> {
        let mut lines = vec![Line::Row(coord.row), Line::Column(coord.col)];
        if coord.row == coord.col {
            lines.push(Line::MainDiagonal);
        }
        if coord.row + coord.col == size - 1 {
            lines.push(Line::AntiDiagonal);
        }
        lines
    }
}

/// Result of one pass over a line, from the point of view of one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Cells holding the scanning player's mark.
    pub mine: usize,
    /// Cells holding the opposing mark.
    pub theirs: usize,
    /// Last empty cell seen on the line, if any.
    pub gap: Option<Coord>,
}

/// Scans `line` once, counting cells for and against `me` and recording the
/// last empty cell seen.
pub fn tally(board: &Board, line: Line, me: Mark) -> Tally {
    let mut counts = Tally {
        mine: 0,
        theirs: 0,
        gap: None,
    };
    for k in 0..board.size() {
        match board.cell_on(line, k) {
            Cell::Empty => counts.gap = Some(line.coord(k, board.size())),
            Cell::Occupied(mark) if mark == me => counts.mine += 1,
            Cell::Occupied(_) => counts.theirs += 1,
        }
    }
    counts
}
