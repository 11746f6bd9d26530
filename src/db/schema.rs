//! Database schema definitions and initialization.
//!
//! This module defines the normalized SQLite schema for the journaling
//! domain and performs the two startup-time data tasks: the best-effort
//! additive `pin_hash` migration and mood taxonomy seeding.

use crate::errors::{AppResult, DatabaseError};
use crate::moods;
use rusqlite::{params, Connection};
use tracing::{debug, info};

/// Creates all database tables and indexes.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Tables
///
/// - `users`: Accounts with password and optional PIN hashes
/// - `categories`: Entry categories, created lazily by name
/// - `moods`: The seeded mood taxonomy
/// - `tags`: Tags, created lazily by name (case-sensitive)
/// - `journal_entries`: One row per entry, at most one per user per day
/// - `entry_moods`: Entry-to-mood junction with a Primary/Secondary role
/// - `entry_tags`: Entry-to-tag junction
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL,
            last_login_at TEXT
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Additive migration for databases created before the PIN lock existed.
    // A duplicate-column error means the column is already there; swallow it.
    if let Err(e) = conn.execute_batch("ALTER TABLE users ADD COLUMN pin_hash TEXT") {
        debug!("pin_hash column already exists: {}", e);
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS moods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            emoji TEXT NOT NULL,
            category TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS journal_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            category_id INTEGER,
            entry_date TEXT NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_journal_entries_user_id ON journal_entries(user_id);
        CREATE INDEX IF NOT EXISTS idx_journal_entries_date ON journal_entries(entry_date DESC);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entry_moods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            entry_id INTEGER NOT NULL,
            mood_id INTEGER NOT NULL,
            mood_role TEXT NOT NULL CHECK(mood_role IN ('Primary', 'Secondary'))
        );

        CREATE INDEX IF NOT EXISTS idx_entry_moods_entry_id ON entry_moods(entry_id);

        CREATE TABLE IF NOT EXISTS entry_tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            entry_id INTEGER NOT NULL,
            tag_id INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entry_tags_entry_id ON entry_tags(entry_id);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    debug!("Database tables created successfully");
    Ok(())
}

/// Seeds the mood table from the fixed taxonomy.
///
/// Any taxonomy mood whose name is not already present (case-insensitively)
/// is inserted. Idempotent.
///
/// # Errors
///
/// Returns an error if a query or insert fails.
pub fn seed_moods(conn: &Connection) -> AppResult<()> {
    let mut inserted = 0usize;

    for mood in moods::TAXONOMY.iter() {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM moods WHERE LOWER(name) = LOWER(?1))",
                params![mood.name],
                |row| row.get(0),
            )
            .map_err(DatabaseError::Sqlite)?;

        if !exists {
            conn.execute(
                "INSERT INTO moods (name, emoji, category) VALUES (?1, ?2, ?3)",
                params![mood.name, mood.emoji, mood.category.as_str()],
            )
            .map_err(DatabaseError::Sqlite)?;
            inserted += 1;
        }
    }

    if inserted > 0 {
        info!("Seeded {} moods", inserted);
    }
    Ok(())
}
