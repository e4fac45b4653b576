//! Terminal UI: rendering and input dispatch.

mod app;
mod input;
mod ui;

pub use app::{App, LabelStyle, ViewOptions};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

/// Runs the game until the user quits.
pub fn run(options: ViewOptions) -> Result<()> {
    info!(?options, "starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(options);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "event loop error");
    }
    res
}

/// Draw/poll/dispatch cycle.
///
/// One input event per iteration, and a fresh frame derived from the new
/// state before the next event is read. The frame's click targets are
/// handed to the app so a mouse event always resolves against the layout
/// currently on screen.
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        let mut targets = ui::ClickTargets::default();
        terminal.draw(|f| targets = ui::draw(f, app))?;
        app.set_targets(targets);

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) {
                    info!("user quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
