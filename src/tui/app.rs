//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use crate::config::settings::Settings;
use crate::models::{ColumnFilter, Section, TableView, ViewSelection};
use crate::services::MetricsProjector;

/// How long a status message stays visible
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Derives everything that gets drawn
    pub projector: MetricsProjector<'a>,

    /// Current section, table view and column filter
    pub selection: ViewSelection,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// When the status message was set
    status_set_at: Option<Instant>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(projector: MetricsProjector<'a>, settings: &Settings) -> Self {
        Self {
            projector,
            selection: settings.initial_selection(),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            status_message: None,
            status_set_at: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_at = None;
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= STATUS_TTL {
                self.clear_status();
            }
        }
    }

    /// Switch to a section
    pub fn select_section(&mut self, section: Section) {
        self.selection.select_section(section);
        tracing::debug!(?section, "section selected");
    }

    /// Switch to the next section
    pub fn next_section(&mut self) {
        self.selection.next_section();
    }

    /// Switch to the previous section
    pub fn previous_section(&mut self) {
        self.selection.previous_section();
    }

    /// Switch the table view
    pub fn select_table_view(&mut self, view: TableView) {
        self.selection.select_table_view(view);
        self.set_status(format!("Showing {}", view.title()));
    }

    /// Switch the column filter
    pub fn select_column_filter(&mut self, filter: ColumnFilter) {
        self.selection.select_column_filter(filter);
        self.set_status(format!("Filter: {}", filter.label()));
    }

    /// Cycle the column filter forward
    pub fn next_column_filter(&mut self) {
        self.select_column_filter(self.selection.column_filter.next());
    }

    /// Cycle the column filter backward
    pub fn previous_column_filter(&mut self) {
        self.select_column_filter(self.selection.column_filter.previous());
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }
}
