//! Configuration module for the financials dashboard
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancialsPaths;
pub use settings::Settings;
