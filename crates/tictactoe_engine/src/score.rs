//! Running win tally across rounds.

use serde::{Deserialize, Serialize};

use crate::Player;

/// Wins per player for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total decided rounds.
    pub fn total(&self) -> u32 {
        self.x.saturating_add(self.o)
    }

    /// Returns a copy with one more win for `player`.
    pub(crate) fn with_win(self, player: Player) -> Self {
        match player {
            Player::X => Self {
                x: self.x.saturating_add(1),
                ..self
            },
            Player::O => Self {
                o: self.o.saturating_add(1),
                ..self
            },
        }
    }
}
