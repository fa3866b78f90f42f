//! User settings for the financials dashboard
//!
//! Settings seed the initial view selection and a few display parameters.
//! The selection itself is never written back.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use super::paths::FinancialsPaths;
use crate::error::FinancialsError;
use crate::models::{ColumnFilter, Money, Section, TableView, ViewSelection};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Section shown at startup
    #[serde(default, deserialize_with = "lenient_section")]
    pub default_section: Section,

    /// Table view selected at startup
    #[serde(default, deserialize_with = "lenient_table_view")]
    pub default_table_view: TableView,

    /// Column filter selected at startup
    #[serde(default, deserialize_with = "lenient_column_filter")]
    pub default_column_filter: ColumnFilter,

    /// Override for the profitability baseline cost (cents)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_cost: Option<Money>,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

// Unknown selection names fall back to the default instead of failing the load
fn lenient_section<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Section, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(Section::parse_or_default(&name))
}

fn lenient_table_view<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TableView, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(TableView::parse_or_default(&name))
}

fn lenient_column_filter<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ColumnFilter, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(ColumnFilter::parse_or_default(&name))
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_section: Section::default(),
            default_table_view: TableView::default(),
            default_column_filter: ColumnFilter::default(),
            baseline_cost: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// The selection a new session starts with
    pub fn initial_selection(&self) -> ViewSelection {
        ViewSelection::new(
            self.default_section,
            self.default_table_view,
            self.default_column_filter,
        )
    }

    /// Load settings from the default location, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancialsPaths) -> Result<Self, FinancialsError> {
        Self::load_from_or_default(&paths.settings_file())
    }

    /// Load settings from a specific file, or defaults if it doesn't exist
    pub fn load_from_or_default(path: &Path) -> Result<Self, FinancialsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| FinancialsError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            FinancialsError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.tick_rate_ms == 0 {
            return Err(FinancialsError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }

        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to the default location
    pub fn save(&self, paths: &FinancialsPaths) -> Result<(), FinancialsError> {
        paths.ensure_directories()?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), FinancialsError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinancialsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(path, contents)
            .map_err(|e| FinancialsError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.initial_selection(), ViewSelection::default());
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(settings.baseline_cost.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancialsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_section: Section::CashFlow,
            default_table_view: TableView::ActualsOnly,
            baseline_cost: Some(Money::from_euros(90_000)),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.initial_selection().active_section, Section::CashFlow);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancialsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "default_column_filter": "profit_only" }"#).unwrap();

        let loaded = Settings::load_from_or_default(&path).unwrap();
        assert_eq!(loaded.default_column_filter, ColumnFilter::ProfitOnly);
        assert_eq!(loaded.default_section, Section::Overview);
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_unknown_selection_names_fall_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "default_section": "budget", "default_table_view": "bogus",
                 "default_column_filter": "sideways", "tick_rate_ms": 100 }"#,
        )
        .unwrap();

        let loaded = Settings::load_from_or_default(&path).unwrap();
        assert_eq!(loaded.initial_selection(), ViewSelection::default());
        assert_eq!(loaded.tick_rate_ms, 100);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ default_section: ").unwrap();

        let err = Settings::load_from_or_default(&path).unwrap_err();
        assert!(matches!(err, FinancialsError::Config(_)));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tick_rate_ms": 0 }"#).unwrap();

        assert!(Settings::load_from_or_default(&path).is_err());
    }
}
