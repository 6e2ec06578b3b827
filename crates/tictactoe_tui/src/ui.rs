//! Stateless UI rendering for tic-tac-toe.
//!
//! Everything on screen is a projection of the [`App`]: the session's
//! board, score, status and banner plus the keyboard cursor.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Player, Position, RoundResult, Session, Square};

use crate::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BUTTON_WIDTH: u16 = 18;

const HELP: &str = "1-9 or click: mark · arrows/hjkl + Enter: mark at cursor · r: restart · q: quit";

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Square(Position),
    /// The restart button.
    Restart,
}

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Score header.
    pub header: Rect,
    /// Status line.
    pub status: Rect,
    /// The whole 3x3 grid, separators included.
    pub board: Rect,
    /// Individual squares in row-major order.
    pub squares: [Rect; 9],
    /// Restart button.
    pub restart: Rect,
    /// Winner or draw banner.
    pub banner: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into screen regions.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Status
                Constraint::Min(BOARD_HEIGHT), // Board
                Constraint::Length(3), // Restart
                Constraint::Length(3), // Banner
                Constraint::Length(1), // Help
            ])
            .split(area);

        let board = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
        Self {
            header: chunks[0],
            status: chunks[1],
            board,
            squares: Position::ALL.map(|pos| square_rect(board, pos)),
            restart: center_rect(chunks[3], BUTTON_WIDTH, 3),
            banner: chunks[4],
            help: chunks[5],
        }
    }

    /// Region of a single square.
    pub fn square(&self, pos: Position) -> Rect {
        self.squares[pos.to_index()]
    }

    /// What lies under the given terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let point = Point::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.square(*pos).contains(point))
            .map(Target::Square)
            .or_else(|| self.restart.contains(point).then_some(Target::Restart))
    }
}

/// Renders the whole screen and returns the layout it used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());
    let session = app.session();

    draw_header(frame, layout.header, session);
    draw_status(frame, layout.status, session);
    draw_board(frame, &layout, session, *app.cursor());
    draw_restart(frame, layout.restart);
    if let Some(result) = session.banner() {
        draw_banner(frame, layout.banner, result);
    }
    draw_help(frame, layout.help);

    layout
}

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Round {} ", session.round()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(inner);

    let score = session.score();
    let x_score = Paragraph::new(format!("X: {}", score.get(Player::X)))
        .style(player_style(Player::X))
        .alignment(Alignment::Left);
    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    let o_score = Paragraph::new(format!("O: {}", score.get(Player::O)))
        .style(player_style(Player::O))
        .alignment(Alignment::Right);

    frame.render_widget(x_score, cols[0]);
    frame.render_widget(title, cols[1]);
    frame.render_widget(o_score, cols[2]);
}

fn draw_status(frame: &mut Frame, area: Rect, session: &Session) {
    let status = Paragraph::new(session.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, session: &Session, cursor: Position) {
    let board = layout.board;
    let sep_style = Style::default().fg(Color::DarkGray);

    for col in 1..3 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        let area = Rect::new(x, board.y, 1, board.height).intersection(board);
        if area.is_empty() {
            continue;
        }
        let sep = Paragraph::new(vec![Line::from("│"); area.height as usize]).style(sep_style);
        frame.render_widget(sep, area);
    }
    for row in 1..3 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(board.x, y, board.width, 1).intersection(board);
        if area.is_empty() {
            continue;
        }
        let sep = Paragraph::new(["─"; 3].map(|s| s.repeat(CELL_WIDTH as usize)).join("┼"))
            .style(sep_style);
        frame.render_widget(sep, area);
    }

    for pos in Position::ALL {
        draw_square(frame, layout.square(pos), session, pos, cursor);
    }
}

fn draw_square(frame: &mut Frame, area: Rect, session: &Session, pos: Position, cursor: Position) {
    if area.is_empty() {
        return;
    }
    let (symbol, style) = match session.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (player.to_string(), player_style(player)),
    };

    let style = if session.is_winning_square(pos) {
        style.bg(Color::Green).fg(Color::Black)
    } else if session.is_awaiting_move() && pos == cursor {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };

    // Blank first line puts the mark on the middle row.
    let paragraph = Paragraph::new(vec![Line::default(), Line::from(symbol)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_restart(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new("Restart game")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, result: RoundResult) {
    let color = match result {
        RoundResult::Win { .. } => Color::Green,
        RoundResult::Draw => Color::Magenta,
    };
    let banner = Paragraph::new(result.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn square_rect(board: Rect, pos: Position) -> Rect {
    let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
    let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
    Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_are_disjoint_and_inside_board() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30));
        for (i, a) in layout.squares.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            assert_eq!(a.intersection(layout.board), *a);
            for b in &layout.squares[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_maps_square_and_button() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30));
        let center = layout.square(Position::Center);
        assert_eq!(
            layout.hit(center.x + 1, center.y + 1),
            Some(Target::Square(Position::Center))
        );
        assert_eq!(
            layout.hit(layout.restart.x + 2, layout.restart.y + 1),
            Some(Target::Restart)
        );
        // Separator column between the top-left and top-center squares.
        let top_left = layout.square(Position::TopLeft);
        assert_eq!(layout.hit(top_left.right(), top_left.y), None);
        assert_eq!(layout.hit(0, 0), None);
    }
}
