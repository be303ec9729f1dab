//! Path management for debt-destroyer
//!
//! ## Path Resolution Order
//!
//! 1. `DEBT_DESTROYER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/debt-destroyer` or `~/.config/debt-destroyer`
//! 3. Windows: `%APPDATA%\debt-destroyer`

use std::path::PathBuf;

use crate::error::DebtError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "DEBT_DESTROYER_DATA_DIR";

/// Manages all paths used by debt-destroyer
#[derive(Debug, Clone)]
pub struct DebtPaths {
    base_dir: PathBuf,
}

impl DebtPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, DebtError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DebtPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/debt-destroyer/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the export directory (~/.config/debt-destroyer/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to records.json (the record snapshot the engine reads)
    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), DebtError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DebtError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| DebtError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DebtError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| DebtError::Config("Could not determine HOME directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("debt-destroyer"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DebtError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DebtError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("debt-destroyer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DebtPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.records_file(),
            temp_dir.path().join("data").join("records.json")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DebtPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
