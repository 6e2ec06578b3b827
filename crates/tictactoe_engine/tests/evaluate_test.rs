//! Tests for board evaluation.

use tictactoe_engine::{Board, LINES, Player, RoundOutcome, Square, evaluate};

/// Builds a board from nine characters: `X`, `O`, anything else is empty.
fn board(cells: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(cells.chars()) {
        *square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_top_row_win() {
    let outcome = evaluate(&board("XXXOO____"));
    match outcome {
        RoundOutcome::Win { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected win, got {:?}", other),
    }
}

#[test]
fn test_every_line_is_detected_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut b = Board::new();
            for pos in line.positions() {
                b.set(pos, Square::Occupied(player));
            }
            assert_eq!(evaluate(&b), RoundOutcome::Win { player, line });
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(evaluate(&board("XOXOXOOXO")), RoundOutcome::Draw);
}

#[test]
fn test_open_board_without_line_is_in_progress() {
    assert_eq!(evaluate(&Board::new()), RoundOutcome::InProgress);
    assert_eq!(evaluate(&board("XO_______")), RoundOutcome::InProgress);
    assert_eq!(evaluate(&board("XOXOXOOX_")), RoundOutcome::InProgress);
}

#[test]
fn test_win_on_full_board_beats_draw() {
    // X X X / O O X / X O O
    match evaluate(&board("XXXOOXXOO")) {
        RoundOutcome::Win { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected win, got {:?}", other),
    }
}

#[test]
fn test_first_line_in_scan_order_wins_on_malformed_board() {
    // Middle row for O and bottom row for X: the middle row comes first.
    match evaluate(&board("___OOOXXX")) {
        RoundOutcome::Win { player, line } => {
            assert_eq!(player, Player::O);
            assert_eq!(line.indices(), [3, 4, 5]);
        }
        other => panic!("Expected win, got {:?}", other),
    }

    // Middle column and anti-diagonal both for X: the column comes first.
    match evaluate(&board("_XX_X_XX_")) {
        RoundOutcome::Win { line, .. } => assert_eq!(line.indices(), [1, 4, 7]),
        other => panic!("Expected win, got {:?}", other),
    }
}

#[test]
fn test_evaluate_does_not_validate_move_counts() {
    assert_eq!(
        evaluate(&board("OOO______")),
        RoundOutcome::Win {
            player: Player::O,
            line: LINES[0]
        }
    );
    assert_eq!(evaluate(&board("XXOOXX___")), RoundOutcome::InProgress);
}
