//! Theme preference.
//!
//! A single persisted marker constrained to light/dark/custom; anything else
//! normalizes to custom. Observers are notified synchronously, matching the
//! PIN lock's notification semantics.

use crate::constants::PREF_KEY_THEME;
use crate::errors::AppResult;
use crate::prefs::Preferences;

/// The enumerated theme set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Custom,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Custom => "custom",
        }
    }

    /// Parses a theme name case-insensitively; unknown values become Custom.
    pub fn normalize(value: &str) -> Theme {
        match value.trim().to_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::Custom,
        }
    }
}

/// Holds the current theme and persists changes under the fixed key.
pub struct ThemeService {
    prefs: Box<dyn Preferences>,
    current: Theme,
    observers: Vec<Box<dyn Fn(Theme)>>,
}

impl ThemeService {
    /// Creates the service, restoring the persisted theme if present.
    pub fn new(prefs: Box<dyn Preferences>) -> Self {
        let current = prefs
            .get_string(PREF_KEY_THEME)
            .map(|v| Theme::normalize(&v))
            .unwrap_or_default();
        ThemeService {
            prefs,
            current,
            observers: Vec::new(),
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.current
    }

    /// Registers a synchronous observer of theme changes.
    pub fn on_theme_change(&mut self, observer: impl Fn(Theme) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Sets and persists the theme, normalizing unknown values to Custom.
    pub fn set_theme(&mut self, value: &str) -> AppResult<()> {
        let theme = Theme::normalize(value);
        self.current = theme;
        self.prefs.set_string(PREF_KEY_THEME, theme.as_str())?;
        for observer in &self.observers {
            observer(theme);
        }
        Ok(())
    }
}
