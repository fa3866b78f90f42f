//! Path management for the financials dashboard
//!
//! Provides XDG-compliant path resolution for the settings file and log.
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCIALS_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/projectx-financials` or `~/.config/projectx-financials`
//! 3. Windows: `%APPDATA%\projectx-financials`

use std::path::{Path, PathBuf};

use crate::error::FinancialsError;

const APP_DIR_NAME: &str = "projectx-financials";

/// Manages all paths used by the dashboard
#[derive(Debug, Clone)]
pub struct FinancialsPaths {
    /// Base directory for configuration and logs
    base_dir: PathBuf,
}

impl FinancialsPaths {
    /// Create a new FinancialsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, FinancialsError> {
        let base_dir = match std::env::var("FINANCIALS_CONFIG_DIR") {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Resolve paths when an explicit settings file may have been given
    ///
    /// The usual resolution wins. If it fails and a settings file was named,
    /// the file's directory is used so the binary runs without a home
    /// directory.
    pub fn resolve(settings_file: Option<&Path>) -> Result<Self, FinancialsError> {
        match (Self::new(), settings_file) {
            (Ok(paths), _) => Ok(paths),
            (Err(_), Some(file)) => Ok(Self::beside(file)),
            (Err(err), None) => Err(err),
        }
    }

    /// Paths rooted in the directory holding `settings_file`
    pub fn beside(settings_file: &Path) -> Self {
        let dir = settings_file
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::with_base_dir(dir.to_path_buf())
    }

    /// Create FinancialsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("financials.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinancialsError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            FinancialsError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinancialsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FinancialsError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinancialsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinancialsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancialsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("financials.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("FINANCIALS_CONFIG_DIR", custom_path);

        let paths = FinancialsPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("FINANCIALS_CONFIG_DIR");
    }

    #[test]
    fn test_beside_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.json");

        let paths = FinancialsPaths::beside(&file);
        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.log_file(), temp_dir.path().join("financials.log"));

        let bare = FinancialsPaths::beside(Path::new("custom.json"));
        assert_eq!(bare.base_dir(), Path::new("."));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("config");
        let paths = FinancialsPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
