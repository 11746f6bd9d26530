//! User row operations.
//!
//! Emails are stored normalized (trimmed, lower-cased) by the auth layer;
//! lookups here match the stored value exactly. Credential hashes are
//! compared by exact string equality.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

/// A user account row, minus its credential hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        created_at: row.get(2)?,
        last_login_at: row.get(3)?,
    })
}

const USER_COLUMNS: &str = "id, email, created_at, last_login_at";

/// Inserts a new user row and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails (including a unique-email violation,
/// though the auth layer checks for duplicates first).
pub fn insert_user(
    conn: &Connection,
    email: &str,
    password_hash: &str,
    created_at: &str,
) -> AppResult<i64> {
    debug!("Inserting user");

    conn.execute(
        "INSERT INTO users (email, password_hash, created_at) VALUES (?1, ?2, ?3)",
        params![email, password_hash, created_at],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(conn.last_insert_rowid())
}

/// Retrieves a user by id. Returns `Ok(None)` if no such user exists.
pub fn get_user(conn: &Connection, user_id: i64) -> AppResult<Option<User>> {
    conn.query_row(
        &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
        params![user_id],
        user_from_row,
    )
    .optional()
    .map_err(|e| DatabaseError::Sqlite(e).into())
}

/// Retrieves a user by its stored (normalized) email.
pub fn find_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    conn.query_row(
        &format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS),
        params![email],
        user_from_row,
    )
    .optional()
    .map_err(|e| DatabaseError::Sqlite(e).into())
}

/// Retrieves a user whose email and password hash both match exactly.
///
/// Used by login; an unknown email and a wrong password are
/// indistinguishable here by design.
pub fn find_by_credentials(
    conn: &Connection,
    email: &str,
    password_hash: &str,
) -> AppResult<Option<User>> {
    conn.query_row(
        &format!(
            "SELECT {} FROM users WHERE email = ?1 AND password_hash = ?2",
            USER_COLUMNS
        ),
        params![email, password_hash],
        user_from_row,
    )
    .optional()
    .map_err(|e| DatabaseError::Sqlite(e).into())
}

/// Updates the last-login timestamp.
pub fn update_last_login(conn: &Connection, user_id: i64, timestamp: &str) -> AppResult<()> {
    let rows = conn
        .execute(
            "UPDATE users SET last_login_at = ?1 WHERE id = ?2",
            params![timestamp, user_id],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows == 0 {
        return Err(DatabaseError::NotFound("User not found.".to_string()).into());
    }
    Ok(())
}

/// Gets the stored password hash for a user.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if the user does not exist.
pub fn get_password_hash(conn: &Connection, user_id: i64) -> AppResult<String> {
    conn.query_row(
        "SELECT password_hash FROM users WHERE id = ?1",
        params![user_id],
        |row| row.get(0),
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound("User not found.".to_string())
        }
        _ => DatabaseError::Sqlite(e),
    })
    .map_err(Into::into)
}

/// Replaces the stored password hash.
pub fn update_password_hash(
    conn: &Connection,
    user_id: i64,
    password_hash: &str,
) -> AppResult<()> {
    let rows = conn
        .execute(
            "UPDATE users SET password_hash = ?1 WHERE id = ?2",
            params![password_hash, user_id],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows == 0 {
        return Err(DatabaseError::NotFound("User not found.".to_string()).into());
    }
    Ok(())
}

/// Gets the stored PIN hash for a user. `Ok(None)` means no PIN is set.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if the user does not exist.
pub fn get_pin_hash(conn: &Connection, user_id: i64) -> AppResult<Option<String>> {
    conn.query_row(
        "SELECT pin_hash FROM users WHERE id = ?1",
        params![user_id],
        |row| row.get(0),
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound("User not found.".to_string())
        }
        _ => DatabaseError::Sqlite(e),
    })
    .map_err(Into::into)
}

/// Sets or replaces the stored PIN hash.
pub fn update_pin_hash(conn: &Connection, user_id: i64, pin_hash: &str) -> AppResult<()> {
    let rows = conn
        .execute(
            "UPDATE users SET pin_hash = ?1 WHERE id = ?2",
            params![pin_hash, user_id],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows == 0 {
        return Err(DatabaseError::NotFound("User not found.".to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_and_get_user() {
        let conn = setup_test_db();
        let id = insert_user(&conn, "a@b.com", "hash", "2024-01-01T09:00:00").unwrap();
        assert!(id > 0);

        let user = get_user(&conn, id).unwrap().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.created_at, "2024-01-01T09:00:00");
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_duplicate_email_rejected_by_store() {
        let conn = setup_test_db();
        insert_user(&conn, "a@b.com", "hash", "2024-01-01T09:00:00").unwrap();
        let result = insert_user(&conn, "a@b.com", "hash2", "2024-01-02T09:00:00");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_by_credentials_requires_both_to_match() {
        let conn = setup_test_db();
        insert_user(&conn, "a@b.com", "hash", "2024-01-01T09:00:00").unwrap();

        assert!(find_by_credentials(&conn, "a@b.com", "hash")
            .unwrap()
            .is_some());
        assert!(find_by_credentials(&conn, "a@b.com", "wrong")
            .unwrap()
            .is_none());
        assert!(find_by_credentials(&conn, "x@y.com", "hash")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_update_last_login() {
        let conn = setup_test_db();
        let id = insert_user(&conn, "a@b.com", "hash", "2024-01-01T09:00:00").unwrap();

        update_last_login(&conn, id, "2024-02-01T10:30:00").unwrap();
        let user = get_user(&conn, id).unwrap().unwrap();
        assert_eq!(user.last_login_at.as_deref(), Some("2024-02-01T10:30:00"));
    }

    #[test]
    fn test_pin_hash_roundtrip() {
        let conn = setup_test_db();
        let id = insert_user(&conn, "a@b.com", "hash", "2024-01-01T09:00:00").unwrap();

        assert!(get_pin_hash(&conn, id).unwrap().is_none());
        update_pin_hash(&conn, id, "pinhash").unwrap();
        assert_eq!(get_pin_hash(&conn, id).unwrap().as_deref(), Some("pinhash"));
    }

    #[test]
    fn test_missing_user_is_not_found() {
        let conn = setup_test_db();
        assert!(get_user(&conn, 999).unwrap().is_none());
        assert!(get_pin_hash(&conn, 999).is_err());
        assert!(update_password_hash(&conn, 999, "h").is_err());
    }
}
