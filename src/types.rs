//! Core domain types for the grid engine.

use serde::{Deserialize, Serialize};

/// Player mark on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player mark.
    Occupied(Mark),
}

impl Cell {
    /// True if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Zero-based board coordinate, row and column each in `[0, N)`.
///
/// Coordinates are transient: they address one move or query and are never
/// stored by the engine beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index from the top.
    pub row: usize,
    /// Column index from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// The board filled with no line complete.
    Stalemate,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Stalemate => None,
        }
    }

    /// True if the game ended in stalemate.
    pub fn is_stalemate(&self) -> bool {
        matches!(self, Outcome::Stalemate)
    }
}

/// Terminal or non-terminal status of a session.
///
/// Once a session is `Over` it accepts no further moves; a new session (or a
/// reset) is the only way back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    /// Moves are still being accepted.
    Running,
    /// The game has ended.
    Over(Outcome),
}

impl RunState {
    /// True while moves are still being accepted.
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_symbols() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_cell_mark() {
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Occupied(Mark::O).mark(), Some(Mark::O));
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Winner(Mark::X).winner(), Some(Mark::X));
        assert_eq!(Outcome::Stalemate.winner(), None);
        assert!(Outcome::Stalemate.is_stalemate());
    }
}
