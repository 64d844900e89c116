//! N-by-N grid of cells with legality and terminal-state checks.

use crate::error::Error;
use crate::lines::Line;
use crate::types::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square grid of cells, stored row-major.
///
/// The size is fixed at creation; changing it means building a new board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, Error> {
        if size < 1 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self::fresh(size))
    }

    /// Builds an empty board of an already-validated size.
    pub(crate) fn fresh(size: usize) -> Self {
        debug_assert!(size >= 1);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Result<usize, Error> {
        if coord.row >= self.size || coord.col >= self.size {
            return Err(Error::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        Ok(coord.row * self.size + coord.col)
    }

    /// Cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `coord` is outside the board.
    pub fn get(&self, coord: Coord) -> Result<Cell, Error> {
        Ok(self.cells[self.index(coord)?])
    }

    /// True if the cell at `coord` holds no mark; same bounds contract as
    /// [`Board::get`].
    pub fn is_empty(&self, coord: Coord) -> Result<bool, Error> {
        Ok(self.get(coord)?.is_empty())
    }

    /// True iff `coord` is in-bounds and empty. Never errors; this is the
    /// check callers use to decide between placing and rejecting.
    pub fn is_valid_move(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(Cell::Empty))
    }

    /// Places `mark` at `coord`. Only that one cell changes.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` for a coordinate outside the board and
    /// `Error::OccupiedCell` if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), Error> {
        let idx = self.index(coord)?;
        if self.cells[idx] != Cell::Empty {
            return Err(Error::OccupiedCell(coord));
        }
        self.cells[idx] = Cell::Occupied(mark);
        Ok(())
    }

    /// True if a completed line passes through `coord`.
    ///
    /// Only the row, the column, and whichever diagonals pass through the
    /// last-played cell can have just become complete, so this checks at most
    /// four lines (O(4N)) instead of scanning the whole board.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `coord` is outside the board.
    #[instrument(skip(self))]
    pub fn has_winning_line_through(&self, coord: Coord) -> Result<bool, Error> {
        self.index(coord)?;
        Ok(Line::through(coord, self.size)
            .into_iter()
            .any(|line| self.line_won(line)))
    }

    /// A line wins iff all N cells on it share one non-empty mark.
    fn line_won(&self, line: Line) -> bool {
        match self.cell_on(line, 0) {
            Cell::Empty => false,
            Cell::Occupied(mark) => {
                (1..self.size).all(|k| self.cell_on(line, k) == Cell::Occupied(mark))
            }
        }
    }

    /// Cell at index `k` of `line`. Line indices are always in-bounds for
    /// this board's size.
    pub(crate) fn cell_on(&self, line: Line, k: usize) -> Cell {
        let coord = line.coord(k, self.size);
        self.cells[coord.row * self.size + coord.col]
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterator over the empty coordinates in row-major order.
    ///
    /// The sequence is restartable: each call walks the board afresh.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| Coord::new(i / self.size, i % self.size))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = vec!["-"; self.size].join("+");
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            let cells: Vec<String> = (0..self.size)
                .map(|col| match self.cells[row * self.size + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
