//! Rule-based opponent: an ordered chain of heuristics.
//!
//! The chain is evaluated top to bottom and the first rule with a candidate
//! wins; there is no scoring or voting across rules.
//!
//! 1. Rows and columns: complete an own line one cell short of won, or block
//!    an opposing majority, scanning index 0..N and checking the row before
//!    the column at each index.
//! 2. The diagonals, main before anti, with the same qualifier.
//! 3. The first open corner, in the order (0,0), (0,N-1), (N-1,N-1), (N-1,0).
//! 4. A uniformly random empty cell.
//!
//! The blocking threshold (opponent count >= floor(N/2)+1) flags a developing
//! majority worth answering; it is a heuristic, not optimal play.

use crate::board::Board;
use crate::error::Error;
use crate::lines::{tally, Line, Tally};
use crate::types::{Coord, Mark};
use rand::Rng;
use tracing::{debug, instrument};

/// Move selector for the engine, generic over its randomness source so the
/// fallback rule stays deterministic under test.
#[derive(Debug, Clone)]
pub struct Policy<R> {
    rng: R,
}

impl<R: Rng> Policy<R> {
    /// Creates a policy over an injected randomness source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Selects one empty coordinate for `me` to play.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoMovesAvailable` if the board has no empty cell left;
    /// callers must not invoke the policy once the game is over.
    #[instrument(skip(self, board))]
    pub fn select(&mut self, board: &Board, me: Mark) -> Result<Coord, Error> {
        if let Some(coord) = orthogonal_target(board, me) {
            debug!(%coord, "row/column threat");
            return Ok(coord);
        }
        if let Some(coord) = diagonal_target(board, me) {
            debug!(%coord, "diagonal threat");
            return Ok(coord);
        }
        if let Some(coord) = open_corner(board) {
            debug!(%coord, "open corner");
            return Ok(coord);
        }
        let coord = self.random_fallback(board)?;
        debug!(%coord, "random fallback");
        Ok(coord)
    }

    /// Uniform pick over the remaining empty cells.
    fn random_fallback(&mut self, board: &Board) -> Result<Coord, Error> {
        let open: Vec<Coord> = board.empty_cells().collect();
        if open.is_empty() {
            return Err(Error::NoMovesAvailable);
        }
        Ok(open[self.rng.gen_range(0..open.len())])
    }
}

/// Rule 1: first qualifying row or column, row before column at each index.
fn orthogonal_target(board: &Board, me: Mark) -> Option<Coord> {
    (0..board.size()).find_map(|i| {
        line_target(board, Line::Row(i), me).or_else(|| line_target(board, Line::Column(i), me))
    })
}

/// Rule 2: the diagonals, main before anti.
fn diagonal_target(board: &Board, me: Mark) -> Option<Coord> {
    line_target(board, Line::MainDiagonal, me)
        .or_else(|| line_target(board, Line::AntiDiagonal, me))
}

/// A line qualifies when it is one own mark short of won, or the opponent
/// holds a majority on it, and an empty cell remains to target.
fn line_target(board: &Board, line: Line, me: Mark) -> Option<Coord> {
    let n = board.size();
    let Tally { mine, theirs, gap } = tally(board, line, me);
    if mine == n - 1 || theirs >= n / 2 + 1 {
        gap
    } else {
        None
    }
}

/// Rule 3: first empty corner in fixed priority order.
fn open_corner(board: &Board) -> Option<Coord> {
    let n = board.size();
    [
        Coord::new(0, 0),
        Coord::new(0, n - 1),
        Coord::new(n - 1, n - 1),
        Coord::new(n - 1, 0),
    ]
    .into_iter()
    .find(|&coord| board.is_valid_move(coord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn policy() -> Policy<StdRng> {
        Policy::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_blocks_opponent_row_majority() {
        // Opponent holds two of row 0 on a 3x3 board: floor(3/2)+1 = 2.
        let mut board = Board::new(3).unwrap();
        board.place(Coord::new(0, 0), Mark::O).unwrap();
        board.place(Coord::new(0, 1), Mark::O).unwrap();
        assert_eq!(
            policy().select(&board, Mark::X),
            Ok(Coord::new(0, 2))
        );
    }

    #[test]
    fn test_completes_own_column() {
        let mut board = Board::new(3).unwrap();
        board.place(Coord::new(0, 0), Mark::X).unwrap();
        board.place(Coord::new(1, 0), Mark::X).unwrap();
        assert_eq!(
            policy().select(&board, Mark::X),
            Ok(Coord::new(2, 0))
        );
    }

    #[test]
    fn test_row_beats_column_at_same_index() {
        // Both row 0 and column 0 are one short; the row is checked first.
        let mut board = Board::new(3).unwrap();
        board.place(Coord::new(0, 0), Mark::X).unwrap();
        board.place(Coord::new(0, 1), Mark::X).unwrap();
        board.place(Coord::new(1, 0), Mark::X).unwrap();
        assert_eq!(
            policy().select(&board, Mark::X),
            Ok(Coord::new(0, 2))
        );
    }

    #[test]
    fn test_completes_main_diagonal_before_corners() {
        let mut board = Board::new(3).unwrap();
        board.place(Coord::new(0, 0), Mark::X).unwrap();
        board.place(Coord::new(1, 1), Mark::X).unwrap();
        assert_eq!(
            policy().select(&board, Mark::X),
            Ok(Coord::new(2, 2))
        );
    }

    #[test]
    fn test_blocks_anti_diagonal() {
        let mut board = Board::new(3).unwrap();
        board.place(Coord::new(0, 2), Mark::X).unwrap();
        board.place(Coord::new(1, 1), Mark::X).unwrap();
        assert_eq!(
            policy().select(&board, Mark::O),
            Ok(Coord::new(2, 0))
        );
    }

    #[test]
    fn test_picks_last_open_corner() {
        // 4x4, no qualifying line anywhere, three corners taken.
        let mut board = Board::new(4).unwrap();
        board.place(Coord::new(0, 0), Mark::X).unwrap();
        board.place(Coord::new(0, 3), Mark::O).unwrap();
        board.place(Coord::new(3, 3), Mark::X).unwrap();
        assert_eq!(
            policy().select(&board, Mark::O),
            Ok(Coord::new(3, 0))
        );
    }

    #[test]
    fn test_corner_priority_order() {
        let board = Board::new(4).unwrap();
        assert_eq!(policy().select(&board, Mark::O), Ok(Coord::new(0, 0)));
    }

    #[test]
    fn test_single_empty_cell_is_selected() {
        // Full board minus (2,2); whatever rule fires must land there.
        let mut board = Board::new(3).unwrap();
        let marks = [
            [Mark::O, Mark::X, Mark::O],
            [Mark::X, Mark::X, Mark::O],
            [Mark::X, Mark::O, Mark::O],
        ];
        for (row, row_marks) in marks.iter().enumerate() {
            for (col, mark) in row_marks.iter().enumerate() {
                if (row, col) != (2, 2) {
                    board.place(Coord::new(row, col), *mark).unwrap();
                }
            }
        }
        assert_eq!(
            policy().select(&board, Mark::O),
            Ok(Coord::new(2, 2))
        );
    }

    #[test]
    fn test_full_board_errors() {
        let mut board = Board::new(2).unwrap();
        for coord in [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1),
        ] {
            board.place(coord, Mark::X).unwrap();
        }
        assert_eq!(
            policy().select(&board, Mark::O),
            Err(Error::NoMovesAvailable)
        );
    }

    /// Board with no qualifying line and every corner taken, so selection
    /// falls through to the random rule. Mixed outer rows keep every line
    /// below both qualifying thresholds.
    fn fallback_board() -> Board {
        let mut board = Board::new(3).unwrap();
        board.place(Coord::new(0, 0), Mark::X).unwrap();
        board.place(Coord::new(0, 1), Mark::O).unwrap();
        board.place(Coord::new(0, 2), Mark::X).unwrap();
        board.place(Coord::new(2, 0), Mark::O).unwrap();
        board.place(Coord::new(2, 1), Mark::X).unwrap();
        board.place(Coord::new(2, 2), Mark::O).unwrap();
        board
    }

    #[test]
    fn test_fallback_picks_an_empty_cell() {
        let board = fallback_board();
        let open: Vec<Coord> = board.empty_cells().collect();
        assert_eq!(open.len(), 3);
        for seed in 0..20 {
            let mut policy = Policy::new(StdRng::seed_from_u64(seed));
            let coord = policy.select(&board, Mark::X).unwrap();
            assert!(open.contains(&coord), "selected occupied cell {coord}");
        }
    }

    #[test]
    fn test_fallback_is_deterministic_per_seed() {
        let board = fallback_board();
        let mut a = Policy::new(StdRng::seed_from_u64(42));
        let mut b = Policy::new(StdRng::seed_from_u64(42));
        assert_eq!(
            a.select(&board, Mark::X).unwrap(),
            b.select(&board, Mark::X).unwrap()
        );
    }

    #[test]
    fn test_never_selects_occupied_cell() {
        let mut board = Board::new(4).unwrap();
        board.place(Coord::new(1, 1), Mark::X).unwrap();
        board.place(Coord::new(2, 2), Mark::O).unwrap();
        board.place(Coord::new(0, 3), Mark::X).unwrap();
        for seed in 0..20 {
            let mut policy = Policy::new(StdRng::seed_from_u64(seed));
            let coord = policy.select(&board, Mark::O).unwrap();
            assert!(board.is_valid_move(coord));
        }
    }
}
