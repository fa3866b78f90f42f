//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::keybindings::{is_listed, KeyContext};
use crate::models::{Section, TableView};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some platforms report releases as well as presses
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if handle_global_key(app, key) {
        return Ok(());
    }

    if app.selection.active_section == Section::EstimatesActuals
        && !handle_estimates_key(app, key)
    {
        tracing::trace!(key = ?key.code, "unbound key");
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if is_listed(KeyContext::Dialog, key.code) {
        app.close_dialog();
    }
    Ok(())
}

/// Handle keys that work in every section; returns true if consumed
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_section(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_section(),
        KeyCode::Char('1') => app.select_section(Section::Overview),
        KeyCode::Char('2') => app.select_section(Section::EstimatesActuals),
        KeyCode::Char('3') => app.select_section(Section::CashFlow),
        _ => return false,
    }
    true
}

/// Handle table keys in the Estimates vs Actuals section; returns true if consumed
fn handle_estimates_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('s') => app.select_table_view(TableView::Summary),
        KeyCode::Char('e') => app.select_table_view(TableView::EstimatesOnly),
        KeyCode::Char('a') => app.select_table_view(TableView::ActualsOnly),
        KeyCode::Char('f') => app.next_column_filter(),
        KeyCode::Char('F') => app.previous_column_filter(),
        _ => return false,
    }
    true
}
