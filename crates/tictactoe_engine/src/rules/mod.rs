//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage and from round bookkeeping,
//! so they hold for any board, including ones no legal game reaches.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player};

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No completed line and at least one empty square.
    InProgress,
    /// A player completed a line.
    Win {
        /// Owner of the completed line.
        player: Player,
        /// First completed line in scan order.
        line: Line,
    },
    /// Full board with no completed line.
    Draw,
}

impl RoundOutcome {
    /// The terminal result, or `None` while the round continues.
    pub fn result(self) -> Option<RoundResult> {
        match self {
            RoundOutcome::InProgress => None,
            RoundOutcome::Win { player, line } => Some(RoundResult::Win { player, line }),
            RoundOutcome::Draw => Some(RoundResult::Draw),
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RoundResult {
    /// A player completed a line.
    #[display("{player} is the winner!!")]
    Win {
        /// Winner of the round.
        player: Player,
        /// The winning line.
        line: Line,
    },
    /// The board filled up without a winner.
    #[display("It's a draw!")]
    Draw,
}

impl RoundResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundResult::Win { player, .. } => Some(*player),
            RoundResult::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            RoundResult::Win { line, .. } => Some(*line),
            RoundResult::Draw => None,
        }
    }
}

/// Classifies a board as in progress, won, or drawn.
///
/// Total over every combination of squares; move counts are not checked.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some((player, line)) = winning_line(board) {
        RoundOutcome::Win { player, line }
    } else if is_full(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}
