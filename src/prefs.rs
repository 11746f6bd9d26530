//! Key-value preference store.
//!
//! The session marker and theme marker live outside the relational store in
//! a small key-value area. The platform store is modeled as the
//! [`Preferences`] trait so services can be composed against either the
//! file-backed implementation or an in-memory one in tests.

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A minimal string/integer key-value store with synchronous persistence.
pub trait Preferences {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn get_i64(&self, key: &str) -> Option<i64>;
    fn set_i64(&mut self, key: &str, value: i64) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// File-backed preferences, persisted as a flat JSON object.
///
/// Every mutation rewrites the file; the store holds a handful of keys so
/// this stays cheap.
pub struct FilePreferences {
    path: PathBuf,
    values: HashMap<String, serde_json::Value>,
}

impl FilePreferences {
    /// Loads preferences from `path`, starting empty if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prefs` if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: PathBuf) -> AppResult<Self> {
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)
                .map_err(|e| AppError::Prefs(format!("Malformed preferences file: {}", e)))?
        } else {
            HashMap::new()
        };
        Ok(FilePreferences { path, values })
    }

    fn persist(&self) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(&self.values)
            .map_err(|e| AppError::Prefs(format!("Failed to serialize preferences: {}", e)))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn set_string(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values
            .insert(key.to_string(), serde_json::Value::from(value));
        self.persist()
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(|v| v.as_i64())
    }

    fn set_i64(&mut self, key: &str, value: i64) -> AppResult<()> {
        self.values
            .insert(key.to_string(), serde_json::Value::from(value));
        self.persist()
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// In-memory preferences for tests.
#[derive(Default)]
pub struct MemoryPreferences {
    values: HashMap<String, serde_json::Value>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn set_string(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values
            .insert(key.to_string(), serde_json::Value::from(value));
        Ok(())
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(|v| v.as_i64())
    }

    fn set_i64(&mut self, key: &str, value: i64) -> AppResult<()> {
        self.values
            .insert(key.to_string(), serde_json::Value::from(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
