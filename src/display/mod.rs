//! Display formatting for terminal output
//!
//! Provides utilities for formatting figures for terminal display,
//! including percentages, trend badges, bars and tables.

pub mod report;
pub mod table;

pub use report::{format_bar, format_percentage, format_trend};
pub use table::{render_cash_flow_table, render_projected_table};
