//! Dialog modules for the TUI
//!
//! Contains modal overlays drawn above the active section

pub mod help;
