//! Configuration management for the mindspace application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting is the
//! application data directory, which holds the SQLite database and the
//! key-value preferences file.
//!
//! # Environment Variables
//!
//! - `MINDSPACE_DIR`: Path to the data directory (defaults to ~/.mindspace)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATABASE_FILE_NAME, DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_MINDSPACE_DIR,
    PREFERENCES_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the mindspace application.
///
/// # Examples
///
/// ```
/// use mindspace::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/tmp/mindspace"),
/// };
/// assert!(config.database_path().ends_with("mindspace.db"));
/// ```
pub struct Config {
    /// Directory where the database and preferences files are stored.
    ///
    /// Loaded from the MINDSPACE_DIR environment variable with a fallback
    /// to ~/.mindspace if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` so `~` and
    /// environment variable references are handled.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MINDSPACE_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand data directory: {}", e)))?;

        Ok(Config {
            data_dir: PathBuf::from(expanded.as_ref()),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Creates the data directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn ensure_data_dir_exists(&self) -> AppResult<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Path of the key-value preferences file.
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_from_env_var() {
        env::set_var(ENV_VAR_MINDSPACE_DIR, "/custom/mindspace/path");
        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/mindspace/path"));
        env::remove_var(ENV_VAR_MINDSPACE_DIR);
    }

    #[test]
    #[serial]
    fn test_load_default_under_home() {
        env::remove_var(ENV_VAR_MINDSPACE_DIR);
        env::set_var(ENV_VAR_HOME, "/home/tester");
        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/home/tester/.mindspace"));
    }

    #[test]
    fn test_derived_paths() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
        };
        assert_eq!(config.database_path(), PathBuf::from("/data/mindspace.db"));
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/data/preferences.json")
        );
    }

    #[test]
    fn test_validate_rejects_empty_dir() {
        let config = Config {
            data_dir: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/secret/location"),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("/secret/location"));
        assert!(debug.contains("REDACTED"));
    }
}
