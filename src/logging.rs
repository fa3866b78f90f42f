//! Tracing subscriber setup
//!
//! Filter directives come from `RUST_LOG` when set, otherwise `warn`.
//! Interactive sessions log to a file so output never lands on the
//! alternate screen.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{FinancialsError, FinancialsResult};

const DEFAULT_FILTER: &str = "warn";

/// Where log output goes
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Standard error, for one-shot commands
    Stderr,
    /// Append to a file, for the TUI
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(target: LogTarget) -> FinancialsResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| FinancialsError::Io(format!("Failed to open log file: {}", e)))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| FinancialsError::Config(format!("Failed to initialize logging: {}", e)))
}
