//! Round and score bookkeeping for a sitting of consecutive games.
//!
//! A [`Session`] is an immutable value. Each operation returns the next
//! session, so a front end keeps exactly one value and swaps it after every
//! input event; rendering is then a pure function of that value.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::rules::{Line, RoundOutcome, RoundResult, evaluate};
use crate::{Board, MoveRejected, Player, Position, Score};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Round in progress; the player whose turn it is may mark a square.
    AwaitingMove,
    /// Round finished; only a reset starts the next one.
    RoundEnded(RoundResult),
}

/// Status line text, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// Waiting for this player to move.
    #[display("It's {_0}'s turn")]
    Turn(Player),
    /// This player won the round.
    #[display("{_0} is the winner!!")]
    Won(Player),
    /// The round ended in a draw.
    #[display("It's a draw!")]
    Draw,
}

/// Board, turn, phase and running score for consecutive rounds.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    /// Board of the current round.
    board: Board,
    /// Current round phase.
    phase: Phase,
    #[getter(skip)]
    turn: Player,
    #[getter(skip)]
    round_starter: Player,
    #[getter(skip)]
    score: Score,
    #[getter(skip)]
    round: u32,
}

impl Session {
    /// Starts a session whose first round is opened by X.
    #[instrument]
    pub fn new() -> Self {
        Self::with_starting_player(Player::X)
    }

    /// Starts a session whose first round is opened by `starter`.
    #[instrument]
    pub fn with_starting_player(starter: Player) -> Self {
        info!(%starter, "Starting session");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingMove,
            turn: starter,
            round_starter: starter,
            score: Score::new(),
            round: 1,
        }
    }

    /// Player whose mark the next move places.
    ///
    /// Once the round has ended this is the player who made the final move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Player who opened the current round.
    pub fn round_starter(&self) -> Player {
        self.round_starter
    }

    /// Wins accumulated over all rounds of this session.
    pub fn score(&self) -> Score {
        self.score
    }

    /// 1-based number of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether the current round accepts moves.
    pub fn is_awaiting_move(&self) -> bool {
        self.phase == Phase::AwaitingMove
    }

    /// Marks `cell_index` for the player to move.
    ///
    /// Illegal requests (round over, occupied square, index past 8) return
    /// an unchanged copy of this session.
    #[instrument(skip(self), fields(turn = %self.turn, round = self.round))]
    pub fn apply_move(&self, cell_index: usize) -> Session {
        match self.try_apply_move(cell_index) {
            Ok(next) => next,
            Err(rejected) => {
                debug!(%rejected, "Ignoring move");
                self.clone()
            }
        }
    }

    /// Marks `cell_index` for the player to move, reporting why an illegal
    /// request was ignored.
    ///
    /// # Errors
    ///
    /// - [`MoveRejected::RoundOver`] once the round has ended
    /// - [`MoveRejected::OutOfRange`] for an index past 8
    /// - [`MoveRejected::SquareOccupied`] for a marked square
    #[instrument(skip(self), fields(turn = %self.turn, round = self.round))]
    pub fn try_apply_move(&self, cell_index: usize) -> Result<Session, MoveRejected> {
        if !self.is_awaiting_move() {
            return Err(MoveRejected::RoundOver);
        }
        let pos = Position::from_index(cell_index).ok_or(MoveRejected::OutOfRange(cell_index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveRejected::SquareOccupied(pos));
        }

        let mut next = Self {
            board: self.board.with_mark(pos, self.turn),
            ..self.clone()
        };
        let lead = next.board.count(self.round_starter);
        let trail = next.board.count(self.round_starter.opponent());
        debug_assert!(
            lead == trail || lead == trail + 1,
            "mark counts out of step: starter {lead}, other {trail}"
        );

        match evaluate(&next.board).result() {
            Some(result) => {
                if let Some(winner) = result.winner() {
                    next.score = next.score.with_win(winner);
                }
                info!(
                    %result,
                    x = next.score.get(Player::X),
                    o = next.score.get(Player::O),
                    decided = next.score.total(),
                    "Round ended"
                );
                next.phase = Phase::RoundEnded(result);
            }
            None => {
                debug!(position = %pos, "Move applied");
                next.turn = self.turn.opponent();
            }
        }

        Ok(next)
    }

    /// Clears the board and opens the next round.
    ///
    /// The player who did not open the previous round opens this one,
    /// whoever won. Legal from any phase; the score is kept.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset_round(&self) -> Session {
        let starter = self.round_starter.opponent();
        info!(%starter, next_round = self.round.saturating_add(1), "Resetting round");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingMove,
            turn: starter,
            round_starter: starter,
            score: self.score,
            round: self.round.saturating_add(1),
        }
    }

    /// Classification of the current board, recomputed on demand.
    pub fn outcome(&self) -> RoundOutcome {
        evaluate(&self.board)
    }

    /// Status line for the current phase.
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::AwaitingMove => Status::Turn(self.turn),
            Phase::RoundEnded(RoundResult::Win { player, .. }) => Status::Won(player),
            Phase::RoundEnded(RoundResult::Draw) => Status::Draw,
        }
    }

    /// Winner or draw banner, present only once the round has ended.
    pub fn banner(&self) -> Option<RoundResult> {
        match self.phase {
            Phase::AwaitingMove => None,
            Phase::RoundEnded(result) => Some(result),
        }
    }

    /// Line to highlight, present only once a round has been won.
    pub fn winning_line(&self) -> Option<Line> {
        self.banner().and_then(|result| result.line())
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: Session, moves: &[usize]) -> Session {
        moves.iter().fold(session, |s, &m| s.apply_move(m))
    }

    #[test]
    fn test_turn_alternates_while_in_progress() {
        let session = Session::new().apply_move(4);
        assert_eq!(session.turn(), Player::O);
        let session = session.apply_move(0);
        assert_eq!(session.turn(), Player::X);
        assert!(session.is_awaiting_move());
    }

    #[test]
    fn test_try_apply_move_reports_reasons() {
        let session = Session::new().apply_move(4);
        assert_eq!(
            session.try_apply_move(4),
            Err(MoveRejected::SquareOccupied(Position::Center))
        );
        assert_eq!(session.try_apply_move(9), Err(MoveRejected::OutOfRange(9)));

        let won = play(Session::new(), &[0, 3, 1, 4, 2]);
        assert_eq!(won.try_apply_move(8), Err(MoveRejected::RoundOver));
    }

    #[test]
    fn test_out_of_range_is_a_no_op() {
        let session = Session::new().apply_move(2);
        assert_eq!(session.apply_move(42), session);
    }

    #[test]
    fn test_draw_leaves_score_alone() {
        // X O X / X O O / O X X
        let session = play(Session::new(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(session.banner(), Some(RoundResult::Draw));
        assert_eq!(session.status(), Status::Draw);
        assert_eq!(session.score().total(), 0);
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn test_winning_square_highlight() {
        let session = play(Session::new(), &[0, 3, 4, 5, 8]);
        assert_eq!(session.status(), Status::Won(Player::X));
        assert!(session.is_winning_square(Position::TopLeft));
        assert!(session.is_winning_square(Position::Center));
        assert!(session.is_winning_square(Position::BottomRight));
        assert!(!session.is_winning_square(Position::MiddleLeft));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Session::new().status().to_string(), "It's X's turn");
        let won = play(Session::new(), &[0, 3, 1, 4, 2]);
        assert_eq!(won.status().to_string(), "X is the winner!!");
        assert_eq!(won.banner().unwrap().to_string(), "X is the winner!!");
    }

    #[test]
    fn test_round_counter_advances_on_reset() {
        let session = Session::new();
        assert_eq!(session.round(), 1);
        assert_eq!(session.reset_round().reset_round().round(), 3);
    }
}
