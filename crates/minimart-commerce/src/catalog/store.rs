//! Catalog storage seam.

use crate::catalog::Product;
use crate::error::CommerceError;
use std::sync::Mutex;

/// External storage for the catalog.
///
/// The catalog itself lives in memory; implementations of this trait own
/// durability. `load` returns the stored product list and `save` replaces
/// it wholesale.
pub trait CatalogStore {
    /// Load the stored product list. An empty store loads as no products.
    fn load(&self) -> Result<Vec<Product>, CommerceError>;

    /// Replace the stored product list.
    fn save(&self, products: &[Product]) -> Result<(), CommerceError>;
}

/// In-memory store backed by a serialized JSON snapshot.
///
/// The reference `CatalogStore` implementation, used by tests and by
/// embeddings that need no real durability.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    snapshot: Mutex<Option<Vec<u8>>>,
}

impl MemoryCatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self) -> Result<Vec<Product>, CommerceError> {
        let slot = self
            .snapshot
            .lock()
            .map_err(|e| CommerceError::StorageError(e.to_string()))?;
        match slot.as_deref() {
            Some(bytes) => Ok(serde_json::from_slice(bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, products: &[Product]) -> Result<(), CommerceError> {
        let bytes = serde_json::to_vec(products)?;
        let mut slot = self
            .snapshot
            .lock()
            .map_err(|e| CommerceError::StorageError(e.to_string()))?;
        *slot = Some(bytes);
        Ok(())
    }
}
