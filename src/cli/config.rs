//! CLI command for showing and initializing configuration

use std::path::Path;

use crate::config::settings::Settings;
use crate::error::FinancialsResult;

/// Handle the config command
///
/// With `init`, writes the current settings to `settings_path` unless a
/// file already exists there.
pub fn handle_config_command(
    settings: &Settings,
    settings_path: &Path,
    log_path: &Path,
    init: bool,
) -> FinancialsResult<()> {
    if init {
        if settings_path.exists() {
            println!("Settings file already exists: {}", settings_path.display());
        } else {
            if let Some(parent) = settings_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            settings.save_to(settings_path)?;
            println!("Wrote default settings to: {}", settings_path.display());
        }
        println!();
    }

    println!("Project X Financials Configuration");
    println!("==================================");
    println!("Settings file: {}", settings_path.display());
    println!("Log file:      {}", log_path.display());
    println!();
    println!("Settings:");
    println!("  Default section:       {}", settings.default_section.label());
    println!("  Default table view:    {}", settings.default_table_view.title());
    println!("  Default column filter: {}", settings.default_column_filter.label());
    match settings.baseline_cost {
        Some(cost) => println!("  Baseline cost:         {}", cost),
        None => println!("  Baseline cost:         (from data set)"),
    }
    println!("  Tick rate:             {} ms", settings.tick_rate_ms);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_settings_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");
        let log = temp_dir.path().join("financials.log");

        let settings = Settings {
            tick_rate_ms: 100,
            ..Settings::default()
        };
        handle_config_command(&settings, &path, &log, true).unwrap();
        assert!(path.exists());

        handle_config_command(&Settings::default(), &path, &log, true).unwrap();
        let loaded = Settings::load_from_or_default(&path).unwrap();
        assert_eq!(loaded.tick_rate_ms, 100);
    }
}
