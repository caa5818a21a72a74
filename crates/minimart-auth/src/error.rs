//! Authentication errors.

use crate::email::EmailError;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Operation requires an authenticated session.
    #[error("authentication required")]
    AuthenticationRequired,

    /// Session is already authenticated.
    #[error("already authenticated")]
    AlreadyAuthenticated,

    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Identity already registered for this email.
    #[error("identity already exists: {0}")]
    IdentityExists(String),

    /// Malformed email address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::AuthenticationRequired | AuthError::InvalidCredentials
        )
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Storage(e.to_string())
    }
}
