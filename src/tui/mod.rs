//! Terminal User Interface module
//!
//! An interactive dashboard built on ratatui: one tab per section, a status
//! bar and a help overlay. Everything drawn is derived from a
//! [`MetricsProjector`](crate::services::MetricsProjector) on each frame.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
