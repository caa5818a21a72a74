//! Session state machine.

use crate::email::Email;
use crate::error::AuthError;
use crate::identity::Identity;
use serde::{Deserialize, Serialize};

/// Session state: anonymous or authenticated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SessionState {
    /// No identity attached.
    Anonymous,
    /// Signed in as a registered identity.
    Authenticated {
        /// Display name of the identity.
        name: String,
        /// Email of the identity.
        email: Email,
    },
}

/// A shopper's session.
///
/// An explicit value owned by the caller and passed into each operation;
/// two sessions never share state. A session starts `Anonymous`, and
/// `sign_in`/`sign_out` are the only transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Create a new anonymous session.
    pub fn new() -> Self {
        Self {
            state: SessionState::Anonymous,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Check if the session is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    /// Email of the signed-in identity, if any.
    pub fn authenticated_email(&self) -> Option<&Email> {
        match &self.state {
            SessionState::Authenticated { email, .. } => Some(email),
            SessionState::Anonymous => None,
        }
    }

    /// Fail unless the session is anonymous.
    pub fn require_anonymous(&self) -> Result<(), AuthError> {
        if self.is_authenticated() {
            return Err(AuthError::AlreadyAuthenticated);
        }
        Ok(())
    }

    /// Fail unless the session is authenticated, returning the email.
    pub fn require_authenticated(&self) -> Result<&Email, AuthError> {
        self.authenticated_email()
            .ok_or(AuthError::AuthenticationRequired)
    }

    /// Transition `Anonymous` to `Authenticated` with a verified identity.
    ///
    /// Credential verification happens before this call; the session
    /// stores only the public profile, never the hash.
    pub fn sign_in(&mut self, identity: &Identity) -> Result<(), AuthError> {
        self.require_anonymous()?;
        self.state = SessionState::Authenticated {
            name: identity.name.clone(),
            email: identity.email.clone(),
        };
        Ok(())
    }

    /// Transition `Authenticated` to `Anonymous`.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.require_authenticated()?;
        self.state = SessionState::Anonymous;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
