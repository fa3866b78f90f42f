//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::Settings;
use crate::error::FinancialsError;
use crate::services::MetricsProjector;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(tui_error)?;

    Ok(terminal)
}

fn tui_error(err: io::Error) -> FinancialsError {
    FinancialsError::Tui(format!("Failed to set up terminal: {}", err))
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(projector: MetricsProjector<'_>, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    tracing::info!("dashboard started");

    let result = run_loop(&mut terminal, projector, settings);

    restore_terminal()?;
    tracing::info!("dashboard closed");

    result
}

/// Draw, wait for one event, handle it, repeat
fn run_loop(terminal: &mut Tui, projector: MetricsProjector<'_>, settings: &Settings) -> Result<()> {
    let mut app = App::new(projector, settings);
    let mut events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        let event = events.next()?;
        handle_event(&mut app, event)?;
    }

    Ok(())
}
