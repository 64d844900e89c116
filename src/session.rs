//! Game session: board ownership, turn order, and the move loop.
//!
//! A session owns its board outright and no state lives outside it, so any
//! number of sessions can coexist. One inbound move request drives the whole
//! exchange: validate, place, check for a win through the played cell, check
//! for stalemate, and (while the game continues) let the engine answer
//! through the same mutation path.

use crate::board::Board;
use crate::error::Error;
use crate::policy::Policy;
use crate::types::{Coord, Mark, Outcome, RunState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A change for the UI to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// One cell changed to hold `mark`; no batch contract, one event per
    /// successful placement.
    CellChanged {
        /// The cell that changed.
        coord: Coord,
        /// The mark now in it.
        mark: Mark,
    },
    /// The session ended. Produced exactly once per session and never
    /// followed by another `CellChanged`.
    GameOver(Outcome),
}

/// Verdict of an inbound move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveVerdict {
    /// The move was applied (and answered, when the engine had a reply).
    Accepted(MoveReport),
    /// Out-of-bounds or occupied target: nothing changed, no turn consumed,
    /// no engine reply.
    Rejected(Error),
}

/// What an accepted request changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Cell changes and, at most once and last, the game-over notice.
    pub events: Vec<GameEvent>,
    /// Session state after all changes.
    pub state: RunState,
}

/// One game: a board, whose turn it is, and whether it has ended.
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    board: Board,
    current_turn: Mark,
    state: RunState,
    engine_mark: Mark,
    policy: Policy<R>,
}

impl GameSession<StdRng> {
    /// Creates a session with OS-seeded randomness. X moves first; the
    /// engine answers as O.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `size` is zero.
    pub fn new(size: usize) -> Result<Self, Error> {
        Self::with_rng(size, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session over an injected randomness source, for
    /// deterministic play under test.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `size` is zero.
    pub fn with_rng(size: usize, rng: R) -> Result<Self, Error> {
        Ok(Self {
            board: Board::new(size)?,
            current_turn: Mark::X,
            state: RunState::Running,
            engine_mark: Mark::O,
            policy: Policy::new(rng),
        })
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Terminal or non-terminal status.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Discards the board wholesale and starts over at the current size,
    /// back to Running with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        // Size was validated when the session was built.
        self.board = Board::fresh(self.board.size());
        self.current_turn = Mark::X;
        self.state = RunState::Running;
        debug!(size = self.board.size(), "session reset");
    }

    /// Discards the session and rebuilds it at `new_size`, back to Running
    /// with X to move. The board is never resized in place.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `new_size` is zero; the session is
    /// left untouched.
    #[instrument(skip(self))]
    pub fn resize(&mut self, new_size: usize) -> Result<(), Error> {
        self.board = Board::new(new_size)?;
        self.current_turn = Mark::X;
        self.state = RunState::Running;
        debug!(size = new_size, "session rebuilt");
        Ok(())
    }

    /// Applies a human move and, while the game continues, the engine's
    /// reply through the same mutation path.
    ///
    /// An out-of-bounds or occupied target comes back as
    /// [`MoveVerdict::Rejected`]: non-fatal, no turn consumed, engine not
    /// invoked.
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` when called after the session ended; that is
    /// caller misuse of the state machine, not a user-level rejection.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, coord: Coord) -> Result<MoveVerdict, Error> {
        if !self.state.is_running() {
            warn!("move requested after game over");
            return Err(Error::GameOver);
        }
        if !self.board.is_valid_move(coord) {
            let cause = match self.board.get(coord) {
                Err(err) => err,
                Ok(_) => Error::OccupiedCell(coord),
            };
            debug!(%cause, "move rejected");
            return Ok(MoveVerdict::Rejected(cause));
        }

        let mut events = Vec::new();
        self.apply(coord, &mut events)?;
        if self.state.is_running() && self.current_turn == self.engine_mark {
            let reply = self.policy.select(&self.board, self.engine_mark)?;
            self.apply(reply, &mut events)?;
        }
        Ok(MoveVerdict::Accepted(MoveReport {
            events,
            state: self.state,
        }))
    }

    /// The single mutation path: place, win check through the played cell,
    /// stalemate check, then turn switch. The win check precedes the
    /// fullness check, so a full board with a winning line reports the win.
    fn apply(&mut self, coord: Coord, events: &mut Vec<GameEvent>) -> Result<(), Error> {
        let mark = self.current_turn;
        self.board.place(coord, mark)?;
        events.push(GameEvent::CellChanged { coord, mark });

        if self.board.has_winning_line_through(coord)? {
            self.state = RunState::Over(Outcome::Winner(mark));
            events.push(GameEvent::GameOver(Outcome::Winner(mark)));
        } else if self.board.is_full() {
            self.state = RunState::Over(Outcome::Stalemate);
            events.push(GameEvent::GameOver(Outcome::Stalemate));
        } else {
            // Turns alternate only while the game keeps running.
            self.current_turn = mark.opponent();
        }
        Ok(())
    }
}
