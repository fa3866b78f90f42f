//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports and settings.

pub mod config;
pub mod dashboard;

pub use config::handle_config_command;
pub use dashboard::{handle_cash_flow_command, handle_overview_command, handle_table_command};
