//! Custom error types for the financials dashboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for dashboard operations
#[derive(Error, Debug)]
pub enum FinancialsError {
    /// An aggregate was requested over a data set with no usable rows
    #[error("No data available: {0}")]
    EmptyDataSet(&'static str),

    /// Section name outside the known set
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Table view name outside the known set
    #[error("Unknown table view: {0}")]
    UnknownTableView(String),

    /// Column filter name outside the known set
    #[error("Unknown column filter: {0}")]
    UnknownColumnFilter(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Currency string could not be parsed
    #[error("Invalid money format: {0}")]
    MoneyParse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FinancialsError {
    /// Check if this is an empty data set error
    pub fn is_empty_data_set(&self) -> bool {
        matches!(self, Self::EmptyDataSet(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from an unrecognised selection value
    pub fn is_unknown_selection(&self) -> bool {
        matches!(
            self,
            Self::UnknownSection(_) | Self::UnknownTableView(_) | Self::UnknownColumnFilter(_)
        )
    }
}

impl From<std::io::Error> for FinancialsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinancialsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type FinancialsResult<T> = Result<T, FinancialsError>;
