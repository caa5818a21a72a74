//! Product catalog module.
//!
//! Contains types for products, categories, catalog lookups, and the
//! catalog storage seam.

mod catalog;
mod category;
mod product;
mod store;

pub use catalog::Catalog;
pub use category::Category;
pub use product::Product;
pub use store::{CatalogStore, MemoryCatalogStore};
