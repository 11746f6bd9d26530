/*!
# Mindspace

Mindspace is a personal journaling engine: local accounts, one dated entry per
day with a primary mood, optional secondary moods, tags and a category, plus
streak and mood-distribution statistics computed over the whole journal.

Everything is stored in a single SQLite database under the data directory,
with a small JSON preferences file alongside it for session and theme markers.

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `db`: SQLite schema, users, and journal entry persistence
- `auth`: Registration, login, and session restore
- `pin`: The 4-digit PIN lock state machine
- `moods`: The fixed mood taxonomy
- `stats`: Dashboard statistics (streaks, distributions, word counts)
- `export`: Plain-text journal export
- `prefs` / `theme`: Key-value preferences and the theme marker

## Usage Example

```rust,no_run
use mindspace::db::entries;
use mindspace::{Config, Database};

fn main() -> mindspace::AppResult<()> {
    let config = Config::load()?;
    config.ensure_data_dir_exists()?;

    let db = Database::open(&config.database_path())?;
    db.initialize_schema()?;

    let conn = db.get_conn()?;
    for entry in entries::get_all_entries(&conn, 1)? {
        println!("{} {}", entry.date, entry.title);
    }
    Ok(())
}
```
*/

/// Registration, login, password change, and session restore
pub mod auth;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Shared application constants
pub mod constants;
/// SQLite connection pool, schema, and persistence
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Plain-text journal export
pub mod export;
/// The fixed mood taxonomy
pub mod moods;
/// The PIN lock state machine
pub mod pin;
/// Key-value preferences store
pub mod prefs;
/// One-way hashing for passwords and PINs
pub mod security;
/// Dashboard statistics
pub mod stats;
/// Theme preference
pub mod theme;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use db::entries::{EntryDraft, JournalEntry};
pub use db::Database;
pub use errors::{AppError, AppResult};
pub use stats::DashboardStats;
