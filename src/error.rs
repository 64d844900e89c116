//! Error kinds for board, session, and policy operations.

use crate::types::Coord;

/// Errors from board mutation, session requests, and the opponent policy.
///
/// `InvalidSize`, `OutOfBounds`, and `OccupiedCell` describe a bad request;
/// `NoMovesAvailable` and `GameOver` indicate the caller broke the state
/// machine contract (moving or invoking the policy after the game ended).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    /// Board size below the 1x1 minimum.
    #[display("board size must be at least 1, got {_0}")]
    InvalidSize(usize),

    /// Coordinate outside the board.
    #[display("{coord} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The board size it was checked against.
        size: usize,
    },

    /// Cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    OccupiedCell(Coord),

    /// The policy was asked to move on a full board.
    #[display("no empty cells remain to move into")]
    NoMovesAvailable,

    /// A mutating call arrived after the game ended.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidSize(0).to_string(),
            "board size must be at least 1, got 0"
        );
        assert_eq!(
            Error::OutOfBounds {
                coord: Coord::new(4, 1),
                size: 3
            }
            .to_string(),
            "(4, 1) is outside the 3x3 board"
        );
        assert_eq!(
            Error::OccupiedCell(Coord::new(0, 0)).to_string(),
            "cell (0, 0) is already occupied"
        );
    }
}
