//! Storefront error types.

use minimart_auth::AuthError;
use minimart_commerce::error::CommerceError;
use thiserror::Error;

/// Errors surfaced by storefront operations.
///
/// The storefront wires two layers together, so its error type wraps
/// the failures of both: catalog, cart, and checkout problems arrive
/// as [`Commerce`](Self::Commerce); credential and session problems
/// arrive as [`Auth`](Self::Auth).
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("commerce error: {0}")]
    Commerce(#[from] CommerceError),

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

impl StorefrontError {
    /// Whether this error should end the shopper's session flow rather
    /// than be retried with different input.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Auth(e) => e.is_auth_failure(),
            Self::Commerce(_) => false,
        }
    }
}
