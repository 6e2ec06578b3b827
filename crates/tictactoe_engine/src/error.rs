//! Reasons a move is ignored.

use derive_more::{Display, Error};

use crate::Position;

/// Why a move request left the session unchanged.
///
/// Illegal moves are no-ops for the player; this type exists so callers can
/// log what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejected {
    /// The index does not name a square.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),

    /// The square is already marked.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The round has ended and awaits a restart.
    #[display("Round is already over")]
    RoundOver,
}
