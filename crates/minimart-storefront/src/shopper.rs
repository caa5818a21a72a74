//! Per-shopper state.

use minimart_auth::Session;
use minimart_commerce::cart::Cart;
use minimart_commerce::money::Currency;

/// Everything that belongs to one shopper: a session and a cart.
///
/// Shoppers are owned by the caller and passed by mutable reference
/// into storefront operations, so two shoppers never share session or
/// cart state. The cart deliberately lives outside the session: it
/// survives logout and is still there after the next login.
#[derive(Debug, Clone, Default)]
pub struct Shopper {
    /// Session state machine gating the mutating operations.
    pub session: Session,
    /// The shopper's cart.
    pub cart: Cart,
}

impl Shopper {
    /// Create an anonymous shopper with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an anonymous shopper whose cart prices in `currency`.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            session: Session::new(),
            cart: Cart::with_currency(currency),
        }
    }
}
