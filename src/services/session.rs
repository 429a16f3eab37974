//! Mock session service: login, signup, token verification and the
//! persisted current-session token.
//!
//! ARCHITECTURE
//! ============
//! One `SessionService` per process, shared by handle. The user directory
//! sits behind a mutex; the clock and key-value store are injected.
//!
//! TRADE-OFFS
//! ==========
//! Login and signup sleep to simulate network latency. The directory lock is
//! taken only after the sleep and never held across an await, so two
//! overlapping signups for one email resolve as "first wins, second gets
//! `DuplicateAccount`". Guarding against double submit is left to callers.
//!
//! The password check is a length check only (no stored hashes) and tokens
//! are unsigned; see `token` for what that means.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::directory::{User, UserDirectory};
use super::storage::{KeyValueStore, MemoryStore, StorageError};
use super::token;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Shortest password the mock login accepts.
pub const MIN_LOGIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub struct SessionService {
    directory: Mutex<UserDirectory>,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    config: AuthConfig,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("users", &self.lock_directory().len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SessionService {
    #[must_use]
    pub fn new(
        directory: UserDirectory,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        config: AuthConfig,
    ) -> Self {
        Self { directory: Mutex::new(directory), store, clock, config }
    }

    /// Seeded directory, in-memory store, system clock, default config.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            UserDirectory::seeded(),
            Arc::new(MemoryStore::new()),
            Arc::new(SystemClock),
            AuthConfig::default(),
        )
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn lock_directory(&self) -> MutexGuard<'_, UserDirectory> {
        self.directory
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Run `f` against the directory.
    pub fn with_directory<R>(&self, f: impl FnOnce(&mut UserDirectory) -> R) -> R {
        f(&mut self.lock_directory())
    }

    // =========================================================================
    // LOGIN / SIGNUP
    // =========================================================================

    /// Authenticate an existing user and persist a fresh token.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError> {
        tokio::time::sleep(self.config.login_delay).await;

        let user = self
            .lock_directory()
            .find_by_email(&credentials.email)
            .cloned();
        let Some(user) = user else {
            tracing::info!("login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if credentials.password.chars().count() < MIN_LOGIN_PASSWORD_LEN {
            tracing::info!(user_id = %user.id, "login rejected: password too short");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.start_session(&user)?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(AuthResponse { token, user })
    }

    /// Register a new user and persist a fresh token.
    pub async fn signup(&self, credentials: &SignupCredentials) -> Result<AuthResponse, AuthError> {
        tokio::time::sleep(self.config.signup_delay).await;

        let user = {
            let mut directory = self.lock_directory();
            if directory.find_by_email(&credentials.email).is_some() {
                tracing::info!("signup rejected: email already registered");
                return Err(AuthError::DuplicateAccount { email: credentials.email.clone() });
            }
            if credentials.password != credentials.confirm_password {
                return Err(AuthError::PasswordMismatch);
            }
            directory.register(&credentials.name, &credentials.email)?
        };

        let token = match self.start_session(&user) {
            Ok(token) => token,
            Err(err) => {
                // Roll back so the email stays available for a retry.
                self.lock_directory().remove(&user.id);
                tracing::warn!(user_id = %user.id, error = %err, "signup rolled back");
                return Err(err);
            }
        };
        tracing::info!(user_id = %user.id, "user signed up");
        Ok(AuthResponse { token, user })
    }

    fn start_session(&self, user: &User) -> Result<String, AuthError> {
        let token = token::issue(user, self.clock.unix_now(), self.config.token_ttl_signed())
            .map_err(StorageError::from)?;
        self.store.set(&self.config.storage_key, &token)?;
        Ok(token)
    }

    // =========================================================================
    // TOKENS
    // =========================================================================

    /// Resolve a token to its user. Malformed, expired or orphaned tokens
    /// all yield `None`. The signature segment is not checked.
    #[must_use]
    pub fn verify_token(&self, token: &str) -> Option<User> {
        let Some(claims) = token::decode(token) else {
            tracing::debug!("token rejected: malformed");
            return None;
        };
        if claims.is_expired_at(self.clock.unix_now()) {
            tracing::debug!(sub = %claims.sub, "token rejected: expired");
            return None;
        }
        let user = self.lock_directory().find_by_id(&claims.sub).cloned();
        if user.is_none() {
            tracing::debug!(sub = %claims.sub, "token rejected: unknown subject");
        }
        user
    }

    /// Clear the persisted token. Idempotent.
    pub fn logout(&self) {
        match self.store.remove(&self.config.storage_key) {
            Ok(()) => tracing::info!("session cleared"),
            Err(e) => tracing::warn!(error = %e, "failed to clear stored session"),
        }
    }

    /// The persisted token, if any.
    #[must_use]
    pub fn stored_token(&self) -> Option<String> {
        self.store
            .get(&self.config.storage_key)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to read stored session");
                None
            })
    }

    /// Verify the persisted token, as done at application start.
    #[must_use]
    pub fn restore(&self) -> Option<User> {
        self.stored_token().and_then(|t| self.verify_token(&t))
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
