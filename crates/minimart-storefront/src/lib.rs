//! Storefront facade for Minimart.
//!
//! Wires the commerce core and the auth layer into the shopper-facing
//! operations: login, logout, add to cart, remove from cart, and
//! checkout. Shared shop state (catalog, identity directory, order
//! log) lives in [`Storefront`]; per-shopper state (session, cart)
//! lives in [`Shopper`] values owned by the caller and passed into
//! each operation.
//!
//! ```
//! use minimart_auth::Directory;
//! use minimart_commerce::catalog::{Catalog, Category};
//! use minimart_commerce::money::{Currency, Money};
//! use minimart_storefront::Storefront;
//!
//! let mut catalog = Catalog::new();
//! catalog.add(minimart_commerce::catalog::Product::new(
//!     "iPhone 12",
//!     Category::Electronics,
//!     Money::new(99900, Currency::USD),
//!     5,
//! ))?;
//!
//! let mut directory = Directory::new();
//! directory.register("John Doe", "john@gmail.com", "john123")?;
//!
//! let mut shop = Storefront::new(catalog, directory);
//! let mut shopper = shop.open_shopper();
//!
//! shop.login(&mut shopper, "john@gmail.com", "john123")?;
//! shop.add_to_cart(&mut shopper, "iPhone 12", 1)?;
//! let order = shop.checkout(&mut shopper)?;
//!
//! assert_eq!(order.grand_total.to_string(), "$1148.85");
//! assert!(shopper.cart.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod shopper;
mod storefront;

pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use shopper::Shopper;
pub use storefront::Storefront;
