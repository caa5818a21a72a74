//! Authentication module for Minimart.
//!
//! Provides identity records with salted password hashes, credential
//! verification, and the per-shopper session state machine.

mod email;
mod error;
mod identity;
mod password;
mod session;
mod store;

pub use email::{Email, EmailError};
pub use error::AuthError;
pub use identity::{Directory, Identity};
pub use password::{hash_password, verify_password};
pub use session::{Session, SessionState};
pub use store::{IdentityStore, MemoryIdentityStore};
