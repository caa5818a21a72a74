//! Product type and stock tracking.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// The name is the catalog key: lookups match it exactly and no two
/// products share one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name (unique within the catalog, case-sensitive).
    pub name: String,
    /// Category the product belongs to.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Units currently in stock.
    pub stock: i64,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, category: Category, price: Money, stock: i64) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            stock,
        }
    }

    /// Check if any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if the requested quantity can be fulfilled from stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= self.stock
    }

    /// Deduct sold units from stock.
    pub fn deduct(&mut self, quantity: i64) -> Result<(), CommerceError> {
        if !self.can_fulfill(quantity) {
            return Err(CommerceError::InvalidQuantity {
                name: self.name.clone(),
                requested: quantity,
                limit: self.stock,
            });
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Add restocked units. Negative quantities are ignored.
    pub fn restock(&mut self, quantity: i64) {
        self.stock = self.stock.saturating_add(quantity.max(0));
    }

    /// One-line rendering for product listings.
    pub fn summary(&self) -> String {
        format!(
            "{} [{}] {} ({} in stock)",
            self.name, self.category, self.price, self.stock
        )
    }
}
