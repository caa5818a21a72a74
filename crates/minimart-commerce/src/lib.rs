//! E-commerce domain types and logic for Minimart.
//!
//! This crate provides the in-memory commerce core:
//!
//! - **Catalog**: Products keyed by unique name, categories, stock
//! - **Cart**: Name-keyed entries with quantity limits and pricing
//! - **Checkout**: Settlement into order records with tax and stock commit
//! - **Money**: Cents-based arithmetic with basis-point tax rates
//!
//! # Example
//!
//! ```
//! use minimart_commerce::prelude::*;
//!
//! let mut catalog = Catalog::with_products(vec![Product::new(
//!     "iPhone 12",
//!     Category::Electronics,
//!     Money::new(99900, Currency::USD),
//!     5,
//! )])
//! .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(catalog.get("iPhone 12").unwrap(), 1).unwrap();
//!
//! let order = place_order(&mut catalog, &mut cart, "john@gmail.com", TAX_RATE).unwrap();
//! assert_eq!(order.grand_total.display(), "$1148.85");
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use money::{Currency, Money, TaxRate};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money, TaxRate};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogStore, Category, MemoryCatalogStore, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, LineTotals, MAX_QUANTITY_PER_ITEM};

    // Checkout
    pub use crate::checkout::{place_order, Order, OrderLine, TAX_RATE};
}
