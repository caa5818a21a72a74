//! Identity storage seam.

use crate::error::AuthError;
use crate::identity::Identity;
use std::sync::Mutex;

/// External storage for the identity directory.
///
/// Records round-trip with their password hashes; the hash is an opaque
/// PHC string to the store.
pub trait IdentityStore {
    /// Load the stored identity list. An empty store loads as no identities.
    fn load(&self) -> Result<Vec<Identity>, AuthError>;

    /// Replace the stored identity list.
    fn save(&self, identities: &[Identity]) -> Result<(), AuthError>;
}

/// In-memory store backed by a serialized JSON snapshot.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    snapshot: Mutex<Option<Vec<u8>>>,
}

impl MemoryIdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Result<Vec<Identity>, AuthError> {
        let slot = self
            .snapshot
            .lock()
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        match slot.as_deref() {
            Some(bytes) => Ok(serde_json::from_slice(bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, identities: &[Identity]) -> Result<(), AuthError> {
        let bytes = serde_json::to_vec(identities)?;
        let mut slot = self
            .snapshot
            .lock()
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        *slot = Some(bytes);
        Ok(())
    }
}
