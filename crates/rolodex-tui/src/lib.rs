pub mod app;
pub mod event;
pub mod input;
pub mod keys;
pub mod theme;
pub mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use rolodex_sources::PeopleSource;

use app::App;
use app::async_tasks::spawn_people_fetch;
use event::{AppEvent, EventHandler};

/// Raw mode, alternate screen and mouse capture for the lifetime of the value.
/// Dropping it restores the terminal, including on `?` early returns.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        match Self::setup() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                restore_terminal();
                Err(err)
            }
        }
    }

    fn setup() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;
        Ok(terminal)
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Mount the widget, fetch the pool in the background and run until quit.
///
/// Must be called from within a tokio runtime. The fetch is aborted if the
/// widget exits before it resolves.
pub fn run_tui(app: &mut App, source: Arc<dyn PeopleSource>) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original_hook(info);
    }));

    let mut session = TerminalSession::enter()?;
    let mut events = EventHandler::new(Duration::from_millis(app.config.ui.tick_ms));
    let _fetch = spawn_people_fetch(source, events.sender());

    loop {
        session.terminal().draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => keys::handle_key(app, key.code, key.modifiers),
            AppEvent::Mouse(mouse) => keys::handle_mouse(app, mouse),
            AppEvent::PeopleLoaded(people) => app.on_people_loaded(people),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
