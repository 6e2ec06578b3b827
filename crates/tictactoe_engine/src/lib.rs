//! Pure tic-tac-toe logic: board evaluation and multi-round sessions.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies any board as in progress, won or drawn
//! - **Session**: [`Session`] applies moves, ends rounds, keeps the score and
//!   alternates who opens each round
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Player, Session, Status};
//!
//! let session = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(Session::new(), |s, cell| s.apply_move(cell));
//!
//! assert_eq!(session.status(), Status::Won(Player::X));
//! assert_eq!(session.score().get(Player::X), 1);
//!
//! let next = session.reset_round();
//! assert_eq!(next.turn(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use error::MoveRejected;
pub use position::Position;
pub use rules::{LINES, Line, RoundOutcome, RoundResult, evaluate};
pub use score::Score;
pub use session::{Phase, Session, Status};
pub use types::{Board, Player, Square};
