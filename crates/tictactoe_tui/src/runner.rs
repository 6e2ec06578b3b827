//! Terminal setup and the event loop.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument};

use crate::app::App;
use crate::input::{Action, action_for_key, action_for_mouse};
use crate::settings::Settings;
use crate::ui::{self, ScreenLayout};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Terminal modes entered so far, undone in reverse on drop.
///
/// Each flag is set only after its step succeeds, so a failure halfway
/// through setup still restores whatever was already switched on.
struct TerminalModes<W: Write> {
    out: W,
    raw: bool,
    alternate_screen: bool,
    mouse: bool,
}

impl<W: Write> TerminalModes<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            raw: false,
            alternate_screen: false,
            mouse: false,
        }
    }

    fn enter(&mut self, mouse: bool) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        self.raw = true;
        self.enter_screen(mouse)
    }

    fn enter_screen(&mut self, mouse: bool) -> Result<()> {
        execute!(self.out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        self.alternate_screen = true;
        if mouse {
            execute!(self.out, EnableMouseCapture).context("Failed to enable mouse capture")?;
            self.mouse = true;
        }
        Ok(())
    }

    fn restore(&mut self) {
        if self.mouse {
            let _ = execute!(self.out, DisableMouseCapture);
            self.mouse = false;
        }
        if self.alternate_screen {
            let _ = execute!(self.out, LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw {
            let _ = disable_raw_mode();
            self.raw = false;
        }
    }
}

impl<W: Write> Drop for TerminalModes<W> {
    fn drop(&mut self) {
        debug!(
            raw = self.raw,
            alternate_screen = self.alternate_screen,
            mouse = self.mouse,
            "Restoring terminal"
        );
        self.restore();
    }
}

/// Owns the terminal for the lifetime of the game.
struct TerminalGuard {
    terminal: Tui,
    _modes: TerminalModes<Stdout>,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> Result<Self> {
        let mut modes = TerminalModes::new(io::stdout());
        modes.enter(mouse)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            _modes: modes,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the game until the user quits.
#[instrument(skip_all, fields(first_player = %settings.first_player(), mouse = settings.mouse()))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting tic-tac-toe");
    let mut guard = TerminalGuard::enter(*settings.mouse())?;
    let mut app = App::new(settings);
    event_loop(&mut guard.terminal, &mut app)
}

/// Draws, waits for one input event, applies it; repeat.
fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while app.is_running() {
        let mut layout = ScreenLayout::default();
        terminal
            .draw(|frame| layout = ui::draw(frame, app))
            .context("Failed to draw frame")?;

        let action = match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(mouse) => action_for_mouse(mouse, &layout),
            _ => Action::Ignore,
        };
        if action != Action::Ignore {
            debug!(?action, "Input");
        }
        app.dispatch(action);
    }
    Ok(())
}
