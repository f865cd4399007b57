//! Path management for the dining budget tracker
//!
//! Provides XDG-compliant path resolution for the app config and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `DINING_BUDGET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/dining-budget` or `~/.config/dining-budget`
//! 3. Windows: `%APPDATA%\dining-budget`

use std::path::PathBuf;

use crate::error::DiningError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "DINING_BUDGET_DATA_DIR";

const APP_DIR_NAME: &str = "dining-budget";

/// Manages all paths used by the tracker
#[derive(Debug, Clone)]
pub struct DiningPaths {
    base_dir: PathBuf,
}

impl DiningPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, DiningError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the plan, transactions and presets
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// App preferences (`config.json`)
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// The budget plan (`data/settings.json`)
    pub fn budget_settings_file(&self) -> PathBuf {
        self.data_dir().join("settings.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn presets_file(&self) -> PathBuf {
        self.data_dir().join("presets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), DiningError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DiningError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DiningError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Whether a budget plan has been saved
    pub fn is_initialized(&self) -> bool {
        self.budget_settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DiningError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                DiningError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DiningError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DiningError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DiningPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DiningPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DiningPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.budget_settings_file(),
            temp_dir.path().join("data").join("settings.json")
        );
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
        assert_eq!(
            paths.presets_file(),
            temp_dir.path().join("data").join("presets.json")
        );
    }
}
