//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use tictactoe_engine::{Position, Session};
use tictactoe_tui::{App, ScreenLayout, draw};

fn render(app: &App, width: u16, height: u16) -> (Buffer, ScreenLayout) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut layout = ScreenLayout::default();
    terminal.draw(|frame| layout = draw(frame, app)).unwrap();
    (terminal.backend().buffer().clone(), layout)
}

fn text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn play(moves: &[usize]) -> App {
    App::with_session(moves.iter().fold(Session::new(), |s, &m| s.apply_move(m)))
}

#[test]
fn test_fresh_screen() {
    let (buffer, _) = render(&play(&[]), 80, 30);
    let screen = text(&buffer);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("X: 0"));
    assert!(screen.contains("O: 0"));
    assert!(screen.contains("Round 1"));
    assert!(screen.contains("It's X's turn"));
    assert!(screen.contains("Restart game"));
    assert!(!screen.contains("winner"));
    assert!(!screen.contains("draw"));
}

#[test]
fn test_marks_render_in_squares() {
    let (buffer, layout) = render(&play(&[4, 0]), 80, 30);
    let center = layout.square(Position::Center);
    let top_left = layout.square(Position::TopLeft);
    let row_text = |rect: ratatui::layout::Rect| {
        (rect.x..rect.x + rect.width)
            .map(|x| buffer[(x, rect.y + 1)].symbol().to_string())
            .collect::<String>()
    };
    assert_eq!(row_text(center).trim(), "X");
    assert_eq!(row_text(top_left).trim(), "O");
    assert_eq!(row_text(layout.square(Position::BottomRight)).trim(), "9");
    assert!(text(&buffer).contains("It's X's turn"));
}

#[test]
fn test_win_shows_banner_score_and_highlight() {
    let (buffer, layout) = render(&play(&[0, 3, 1, 4, 2]), 80, 30);
    let screen = text(&buffer);
    assert!(screen.contains("X: 1"));
    assert_eq!(screen.matches("X is the winner!!").count(), 2);

    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        let square = layout.square(pos);
        assert_eq!(buffer[(square.x, square.y)].bg, Color::Green);
    }
    let other = layout.square(Position::Center);
    assert_ne!(buffer[(other.x, other.y)].bg, Color::Green);
}

#[test]
fn test_draw_shows_banner() {
    let (buffer, _) = render(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]), 80, 30);
    let screen = text(&buffer);
    assert!(screen.contains("It's a draw!"));
    assert!(screen.contains("X: 0"));
    assert!(screen.contains("O: 0"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let (buffer, _) = render(&play(&[0, 3, 1, 4, 2]), 20, 8);
    assert_eq!(buffer.area.width, 20);
}
