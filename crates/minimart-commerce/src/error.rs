//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog, cart, and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product name already in the catalog.
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),

    /// Quantity outside the allowed range for a product.
    #[error("Invalid quantity for {name}: requested {requested}, limit {limit}")]
    InvalidQuantity {
        name: String,
        requested: i64,
        limit: i64,
    },

    /// Cart already holds an entry for this product.
    #[error("Duplicate cart entry: {0}")]
    DuplicateCartEntry(String),

    /// Cart holds no entry for this product.
    #[error("Cart entry not found: {0}")]
    CartEntryNotFound(String),

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Storage error.
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::StorageError(e.to_string())
    }
}
