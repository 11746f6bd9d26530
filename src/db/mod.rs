//! Database operations for users, journal entries, and their associations.
//!
//! This module provides SQLite database operations for the normalized
//! journaling schema (users, categories, moods, tags, journal entries, and
//! the two junction tables). It uses connection pooling via r2d2; the pool
//! is created once by the composition root and shared for the process
//! lifetime.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions, additive migration, and mood seeding
//! - `users`: User row operations
//! - `entries`: Journal entry CRUD and junction handling
//!
//! # Example
//!
//! ```no_run
//! use mindspace::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/mindspace.db"))?;
//! db.initialize_schema()?;
//! # Ok::<(), mindspace::AppError>(())
//! ```

pub mod entries;
pub mod schema;
pub mod users;

use crate::errors::{AppResult, DatabaseError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
///
/// There is one `Database` per process, constructed at startup and injected
/// into the services that need it.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the SQLite database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the
    /// connection pool cannot be initialized. This is the only fatal
    /// startup failure in the persistence layer.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(5)
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Fail now rather than on first use if the file is unusable
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.execute_batch("PRAGMA journal_mode = WAL")
            .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Opens an in-memory database. Test-only convenience.
    #[cfg(test)]
    pub fn open_in_memory() -> AppResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(DatabaseError::Pool)?;
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all tables if they don't exist, applies the additive
    /// `pin_hash` migration, and seeds the mood taxonomy. Idempotent and
    /// safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation or seeding fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        schema::seed_moods(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_database_open_and_connect() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db = Database::open(&db_path).unwrap();
        let conn = db.get_conn().unwrap();

        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);
    }

    #[test]
    fn test_initialize_schema_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db = Database::open(&db_path).unwrap();
        db.initialize_schema().unwrap();
        db.initialize_schema().unwrap();
    }

    #[test]
    fn test_seeded_moods_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let db = Database::open(&db_path).unwrap();
            db.initialize_schema().unwrap();
        }

        let db = Database::open(&db_path).unwrap();
        db.initialize_schema().unwrap();
        let conn = db.get_conn().unwrap();
        let mood_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM moods", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mood_count, 15);
    }
}
