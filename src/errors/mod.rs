//! Error handling utilities for the mindspace application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Two error categories matter to callers:
//!
//! - [`ValidationError`] and [`DatabaseError::NotFound`] are *normal outcomes*:
//!   bad input or a missing row. Their `Display` output is the exact message
//!   shown to the user and callers are expected to render it directly.
//! - [`DatabaseError::Sqlite`], [`DatabaseError::Pool`] and [`AppError::Io`]
//!   are infrastructure failures. They are not caught or retried by this layer.

use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use mindspace::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("Entry not found.".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// Requested row not found.
    #[error("{0}")]
    NotFound(String),
}

/// A business-rule violation or bad input.
///
/// Each variant formats to the exact message the product shows the user.
/// These are returned through the normal `Result` channel and are never
/// treated as exceptional: the caller displays the message and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    // --- journal entries ---
    /// The entry references a non-positive user id.
    #[error("Invalid user.")]
    InvalidUser,

    /// The entry id is non-positive.
    #[error("Invalid entry.")]
    InvalidEntry,

    #[error("Title is required.")]
    TitleRequired,

    #[error("Primary mood is required.")]
    PrimaryMoodRequired,

    #[error("Maximum 2 secondary moods allowed.")]
    TooManySecondaryMoods,

    /// One-entry-per-day conflict on create.
    #[error("An entry already exists for this day.")]
    DuplicateEntryForDay,

    /// One-entry-per-day conflict when an update moves an entry to a new date.
    #[error("An entry already exists for this date.")]
    DuplicateEntryForDate,

    /// The primary mood does not match any name in the fixed taxonomy.
    #[error("Unknown primary mood: {0}")]
    UnknownPrimaryMood(String),

    // --- auth ---
    #[error("Email and password are required.")]
    CredentialsRequired,

    #[error("Please enter a valid email address (example: name@example.com).")]
    InvalidEmail,

    #[error("Password must be at least 6 characters and include uppercase, lowercase, number, and special character.")]
    WeakPassword,

    #[error("New password must be at least 6 characters and include uppercase, lowercase, number, and special character.")]
    WeakNewPassword,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("You must agree to the terms.")]
    TermsNotAccepted,

    #[error("Email already registered.")]
    EmailAlreadyRegistered,

    /// Deliberately generic: never reveals whether the email or the
    /// password was wrong.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("You are not logged in.")]
    NotLoggedIn,

    #[error("Current and new password are required.")]
    PasswordsRequired,

    #[error("Current password is incorrect.")]
    IncorrectCurrentPassword,

    #[error("User not found.")]
    UserNotFound,

    // --- PIN lock ---
    #[error("PINs do not match.")]
    PinMismatch,

    #[error("PIN must be exactly 4 digits.")]
    InvalidPinFormat,

    #[error("PIN not set. Please create a PIN first.")]
    PinNotSet,

    #[error("Incorrect PIN.")]
    IncorrectPin,
}

/// Represents all possible errors that can occur in the mindspace application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Business-rule violations and bad input. The message is user-facing.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Errors reading or writing the preferences store.
    #[error("Preferences error: {0}")]
    Prefs(String),
}

impl AppError {
    /// Returns `true` if this error is a normal, displayable outcome
    /// (validation failure or not-found) rather than an infrastructure failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Database(DatabaseError::NotFound(_))
        )
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
