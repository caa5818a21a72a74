//! Identity records and the identity directory.

use crate::email::Email;
use crate::error::AuthError;
use crate::password::{hash_password, verify_password};
use serde::{Deserialize, Serialize};

/// A registered identity.
///
/// Holds the public profile and the salted password hash; the plaintext
/// password is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// Email address (unique within the directory).
    pub email: Email,
    /// Argon2 PHC string for the password.
    pub password_hash: String,
}

/// The set of registered identities, keyed by unique email.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Directory {
    identities: Vec<Identity>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            identities: Vec::new(),
        }
    }

    /// Build a directory from records, rejecting duplicate emails.
    pub fn with_identities(identities: Vec<Identity>) -> Result<Self, AuthError> {
        let mut directory = Directory::new();
        for identity in identities {
            directory.insert(identity)?;
        }
        Ok(directory)
    }

    /// Insert an already-hashed record. Fails on a duplicate email.
    pub fn insert(&mut self, identity: Identity) -> Result<(), AuthError> {
        if self.find_by_email(identity.email.as_str()).is_some() {
            return Err(AuthError::IdentityExists(identity.email.to_string()));
        }
        self.identities.push(identity);
        Ok(())
    }

    /// Register a new identity, hashing the password.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let email = Email::parse(email)?;
        if self.find_by_email(email.as_str()).is_some() {
            return Err(AuthError::IdentityExists(email.to_string()));
        }
        let password_hash = hash_password(password)?;
        self.identities.push(Identity {
            name: name.into(),
            email,
            password_hash,
        });
        Ok(())
    }

    /// Find an identity by exact email match.
    pub fn find_by_email(&self, email: &str) -> Option<&Identity> {
        self.identities.iter().find(|i| i.email.as_str() == email)
    }

    /// Verify credentials and return the matching identity.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller. Matching is exact and case-sensitive.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&Identity, AuthError> {
        let identity = self
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, &identity.password_hash)?;
        Ok(identity)
    }

    /// All identities, in insertion order.
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_directory() -> Directory {
        let mut directory = Directory::new();
        directory
            .register("John Doe", "john@gmail.com", "john123")
            .unwrap();
        directory
            .register("Jane Smith", "jane@gmail.com", "jane456")
            .unwrap();
        directory
    }

    #[test]
    fn test_register_and_find() {
        let directory = sample_directory();
        assert_eq!(directory.len(), 2);

        let john = directory.find_by_email("john@gmail.com").unwrap();
        assert_eq!(john.name, "John Doe");
        assert_ne!(john.password_hash, "john123");
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut directory = sample_directory();
        let err = directory
            .register("John Again", "john@gmail.com", "other")
            .unwrap_err();
        assert!(matches!(err, AuthError::IdentityExists(_)));
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_register_invalid_email() {
        let mut directory = Directory::new();
        let err = directory.register("John Doe", "not-an-email", "john123").unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[test]
    fn test_authenticate() {
        let directory = sample_directory();
        let identity = directory.authenticate("john@gmail.com", "john123").unwrap();
        assert_eq!(identity.name, "John Doe");
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let directory = sample_directory();
        let err = directory
            .authenticate("john@gmail.com", "jane456")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_unknown_email() {
        let directory = sample_directory();
        let err = directory
            .authenticate("nobody@gmail.com", "john123")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_is_case_sensitive() {
        let directory = sample_directory();
        let err = directory
            .authenticate("John@gmail.com", "john123")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
