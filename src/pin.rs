//! PIN lock.
//!
//! A secondary gate on top of authentication: a two-state lock that starts
//! Locked on process start and opens only through a successful
//! [`PinLockService::unlock`]. The PIN is exactly 4 decimal digits, checked
//! before any store access, and is hashed with the same one-way function as
//! account passwords.
//!
//! Unlike login, unlock failures differentiate "no PIN set" from "incorrect
//! PIN": the former points the user at a setup action rather than a
//! credential guess.

use crate::constants::PIN_LENGTH;
use crate::db::users;
use crate::db::Database;
use crate::errors::{AppResult, ValidationError};
use crate::security::hash_secret;
use tracing::{debug, info};

/// Synchronous observer of lock-state changes. Receives the new state.
pub type LockObserver = Box<dyn Fn(bool)>;

/// The PIN lock state machine.
pub struct PinLockService<'a> {
    db: &'a Database,
    unlocked: bool,
    observers: Vec<LockObserver>,
}

fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.chars().all(|c| c.is_ascii_digit())
}

impl<'a> PinLockService<'a> {
    /// Creates the service in the Locked state.
    pub fn new(db: &'a Database) -> Self {
        PinLockService {
            db,
            unlocked: false,
            observers: Vec::new(),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Registers an observer invoked synchronously, on the caller's thread,
    /// after every state change.
    pub fn on_state_change(&mut self, observer: impl Fn(bool) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn set_state(&mut self, unlocked: bool) {
        self.unlocked = unlocked;
        for observer in &self.observers {
            observer(unlocked);
        }
    }

    /// Locks, regardless of prior state.
    pub fn lock(&mut self) {
        debug!("PIN lock engaged");
        self.set_state(false);
    }

    /// Whether the user has a PIN configured.
    pub fn has_pin(&self, user_id: i64) -> AppResult<bool> {
        let conn = self.db.get_conn()?;
        match users::get_user(&conn, user_id)? {
            Some(_) => Ok(users::get_pin_hash(&conn, user_id)?
                .is_some_and(|h| !h.trim().is_empty())),
            None => Ok(false),
        }
    }

    /// Sets or replaces the user's PIN.
    ///
    /// The confirmation must match and the PIN must be exactly 4 digits;
    /// both are checked before touching the store.
    pub fn set_pin(&self, user_id: i64, pin: &str, confirm_pin: &str) -> AppResult<()> {
        if pin != confirm_pin {
            return Err(ValidationError::PinMismatch.into());
        }
        if !is_valid_pin(pin) {
            return Err(ValidationError::InvalidPinFormat.into());
        }

        let conn = self.db.get_conn()?;
        if users::get_user(&conn, user_id)?.is_none() {
            return Err(ValidationError::UserNotFound.into());
        }

        users::update_pin_hash(&conn, user_id, &hash_secret(pin))?;
        info!("PIN set for user {}", user_id);
        Ok(())
    }

    /// Attempts to unlock with the given PIN.
    ///
    /// Fails with distinct messages for a malformed PIN, an unknown user, a
    /// user without a PIN, and a wrong PIN. Flips the lock to Unlocked on
    /// success.
    pub fn unlock(&mut self, user_id: i64, pin: &str) -> AppResult<()> {
        if !is_valid_pin(pin) {
            return Err(ValidationError::InvalidPinFormat.into());
        }

        let conn = self.db.get_conn()?;
        if users::get_user(&conn, user_id)?.is_none() {
            return Err(ValidationError::UserNotFound.into());
        }

        let stored = users::get_pin_hash(&conn, user_id)?;
        let Some(stored) = stored.filter(|h| !h.trim().is_empty()) else {
            return Err(ValidationError::PinNotSet.into());
        };

        if stored != hash_secret(pin) {
            return Err(ValidationError::IncorrectPin.into());
        }

        info!("PIN lock opened for user {}", user_id);
        self.set_state(true);
        Ok(())
    }
}
