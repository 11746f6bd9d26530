//! Constants used throughout the application.
//!
//! This module contains all constants used in the Mindspace application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mindspace";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A personal journaling tool with moods, tags, and streak statistics";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Mindspace data directory.
pub const ENV_VAR_MINDSPACE_DIR: &str = "MINDSPACE_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for application data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".mindspace";

// File System Parameters
/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "mindspace.db";
/// File name of the key-value preferences store inside the data directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

// Preference Keys
/// Preference key under which the active session's user id is persisted.
pub const PREF_KEY_SESSION_USER: &str = "mindspace_userid";
/// Preference key under which the selected theme is persisted.
pub const PREF_KEY_THEME: &str = "mindspace_theme";

// Validation
/// Required PIN length, in decimal digits.
pub const PIN_LENGTH: usize = 4;
/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 6;
/// Maximum number of secondary moods per journal entry.
pub const MAX_SECONDARY_MOODS: usize = 2;

// Statistics
/// Number of moods reported by the mood-frequency statistic.
pub const MOOD_FREQUENCY_LIMIT: usize = 5;
/// Number of tags reported by the tag-usage statistic.
pub const TAG_USAGE_LIMIT: usize = 10;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
