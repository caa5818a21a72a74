//! Category types for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The catalog carries a closed set of categories; every product belongs
/// to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Phones, computers, and other devices.
    Electronics,
    /// Apparel and footwear.
    Clothing,
    /// Printed and digital books.
    Books,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Books => "books",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "clothing" => Some(Category::Clothing),
            "books" => Some(Category::Books),
            _ => None,
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [Category] {
        &[Category::Electronics, Category::Clothing, Category::Books]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
