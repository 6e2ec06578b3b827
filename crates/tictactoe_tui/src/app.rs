//! Application state and logic.

use derive_getters::Getters;
use tictactoe_engine::{Position, Session};
use tracing::{debug, info, instrument};

use crate::input::{Action, move_cursor};
use crate::settings::Settings;

/// Main application state.
///
/// Holds the single [`Session`] value and replaces it wholesale after every
/// action.
#[derive(Debug, Clone, Getters)]
pub struct App {
    /// Current session.
    session: Session,
    /// Keyboard cursor.
    cursor: Position,
    #[getter(skip)]
    running: bool,
}

impl App {
    /// Creates a new application from settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self::with_session(Session::with_starting_player(*settings.first_player()))
    }

    /// Creates an application around an existing session.
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            running: true,
        }
    }

    /// Whether the event loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies a user action.
    #[instrument(skip(self), fields(round = self.session.round()))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Restart => {
                self.session = self.session.reset_round();
            }
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
            Action::Ignore => {}
        }
    }

    fn place(&mut self, pos: Position) {
        match self.session.try_apply_move(pos.to_index()) {
            Ok(next) => self.session = next,
            Err(rejected) => debug!(%rejected, "Move ignored"),
        }
    }
}
