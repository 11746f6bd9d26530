//! Registration, login, and session management.
//!
//! `AuthService` holds the single in-memory authenticated identity for the
//! process and the persisted session marker (a user id in the preferences
//! store). There is no multi-session support: one identity at a time,
//! replaced on login and cleared on logout.
//!
//! Login failures are deliberately uninformative: an unknown email and a
//! wrong password produce the same message.

pub mod validation;

use crate::constants::PREF_KEY_SESSION_USER;
use crate::db::users::{self, User};
use crate::db::Database;
use crate::errors::{AppResult, ValidationError};
use crate::prefs::Preferences;
use crate::security::hash_secret;
use chrono::Local;
use tracing::{debug, info};

/// Input for [`AuthService::register`].
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

/// Input for [`AuthService::login`].
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Authentication and session service.
pub struct AuthService<'a> {
    db: &'a Database,
    prefs: Box<dyn Preferences>,
    current_user: Option<User>,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a Database, prefs: Box<dyn Preferences>) -> Self {
        AuthService {
            db,
            prefs,
            current_user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Registers a new account and establishes a session for it.
    ///
    /// Validation order: non-blank email and password, email format,
    /// password strength, confirmation match, terms agreement, then email
    /// uniqueness against the normalized (trimmed, lower-cased) address.
    pub fn register(&mut self, request: &RegisterRequest) -> AppResult<User> {
        if request.email.trim().is_empty() || request.password.trim().is_empty() {
            return Err(ValidationError::CredentialsRequired.into());
        }
        if !validation::is_valid_email(&request.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !validation::is_strong_password(&request.password) {
            return Err(ValidationError::WeakPassword.into());
        }
        if request.password != request.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        if !request.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted.into());
        }

        let conn = self.db.get_conn()?;
        let email = normalize_email(&request.email);

        if users::find_by_email(&conn, &email)?.is_some() {
            return Err(ValidationError::EmailAlreadyRegistered.into());
        }

        let user_id = users::insert_user(
            &conn,
            &email,
            &hash_secret(&request.password),
            &now_timestamp(),
        )?;
        let user = users::get_user(&conn, user_id)?
            .ok_or(ValidationError::UserNotFound)?;

        self.prefs.set_i64(PREF_KEY_SESSION_USER, user.id)?;
        self.current_user = Some(user.clone());

        info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Authenticates against the stored email and password hash.
    ///
    /// Any mismatch, unknown email or wrong password alike, yields the same
    /// generic error. Updates the last-login timestamp on success.
    pub fn login(&mut self, request: &LoginRequest) -> AppResult<User> {
        let conn = self.db.get_conn()?;
        let email = normalize_email(&request.email);
        let hash = hash_secret(&request.password);

        let Some(user) = users::find_by_credentials(&conn, &email, &hash)? else {
            return Err(ValidationError::InvalidCredentials.into());
        };

        users::update_last_login(&conn, user.id, &now_timestamp())?;
        self.prefs.set_i64(PREF_KEY_SESSION_USER, user.id)?;
        self.current_user = Some(user.clone());

        info!("User {} logged in", user.id);
        Ok(user)
    }

    /// Changes the active user's password after verifying the current one
    /// by exact hash comparison.
    pub fn change_password(&mut self, current: &str, new: &str) -> AppResult<()> {
        let Some(user) = self.current_user.as_ref() else {
            return Err(ValidationError::NotLoggedIn.into());
        };
        if current.trim().is_empty() || new.trim().is_empty() {
            return Err(ValidationError::PasswordsRequired.into());
        }
        if !validation::is_strong_password(new) {
            return Err(ValidationError::WeakNewPassword.into());
        }

        let conn = self.db.get_conn()?;
        let stored_hash = users::get_password_hash(&conn, user.id)?;
        if stored_hash != hash_secret(current) {
            return Err(ValidationError::IncorrectCurrentPassword.into());
        }

        users::update_password_hash(&conn, user.id, &hash_secret(new))?;
        info!("Password changed for user {}", user.id);
        Ok(())
    }

    /// Re-establishes the session from the persisted user id, if any.
    ///
    /// Clears a stale marker when the user no longer exists. No-op when no
    /// marker is present.
    pub fn try_restore_session(&mut self) -> AppResult<()> {
        let Some(user_id) = self.prefs.get_i64(PREF_KEY_SESSION_USER) else {
            return Ok(());
        };
        if user_id <= 0 {
            return Ok(());
        }

        let conn = self.db.get_conn()?;
        match users::get_user(&conn, user_id)? {
            Some(user) => {
                debug!("Restored session for user {}", user.id);
                self.current_user = Some(user);
            }
            None => {
                debug!("Clearing stale session marker");
                self.prefs.remove(PREF_KEY_SESSION_USER)?;
            }
        }
        Ok(())
    }

    /// Clears the in-memory identity and the persisted marker. Idempotent.
    pub fn logout(&mut self) -> AppResult<()> {
        self.current_user = None;
        self.prefs.remove(PREF_KEY_SESSION_USER)?;
        Ok(())
    }
}
