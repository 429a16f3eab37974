//! Authentication error taxonomy.
//!
//! DESIGN
//! ======
//! Every variant is recoverable and carries a user-facing `Display` string.
//! `ErrorCode` adds a grepable code so callers can branch without matching
//! on message text.

use crate::services::storage::StorageError;

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for surfaced errors.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// AUTH ERROR
// =============================================================================

/// Errors produced by login, signup and form submission.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or a password that fails the mock check.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email already present in the directory.
    #[error("An account with this email already exists")]
    DuplicateAccount { email: String },

    /// Signup with differing password and confirmation.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// A form field failed validation before submission.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// The session token could not be persisted.
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl ErrorCode for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "E_INVALID_CREDENTIALS",
            Self::DuplicateAccount { .. } => "E_DUPLICATE_ACCOUNT",
            Self::PasswordMismatch => "E_PASSWORD_MISMATCH",
            Self::Validation { .. } => "E_VALIDATION",
            Self::Storage(_) => "E_STORAGE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
