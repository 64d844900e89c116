//! Generalized N-by-N tic-tac-toe engine with a rule-based opponent.
//!
//! The crate owns the game rules only: board state, move legality, win and
//! stalemate detection, and the priority chain the engine uses to answer a
//! human move. Rendering and input wiring belong to the caller; the interface
//! is structured coordinates in and [`GameEvent`]s out.
//!
//! # Example
//!
//! ```
//! use gridtac::{Coord, GameSession, MoveVerdict};
//!
//! # fn main() -> Result<(), gridtac::Error> {
//! let mut session = GameSession::new(3)?;
//! match session.request_move(Coord::new(1, 1))? {
//!     MoveVerdict::Accepted(report) => println!("{:?}", report.state),
//!     MoveVerdict::Rejected(cause) => println!("invalid move: {cause}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod lines;
mod policy;
mod session;
mod types;

// Crate-level exports - board and line scanning
pub use board::Board;
pub use error::Error;
pub use lines::{tally, Line, Tally};

// Crate-level exports - opponent policy
pub use policy::Policy;

// Crate-level exports - session and events
pub use session::{GameEvent, GameSession, MoveReport, MoveVerdict};

// Crate-level exports - domain types
pub use types::{Cell, Coord, Mark, Outcome, RunState};
