//! Catalog container and lookups.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// The product catalog.
///
/// Holds every product, keyed by unique name. Lookups are linear scans;
/// the catalog is sized for a shelf of products, not a warehouse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Build a catalog from a product list, rejecting duplicate names.
    pub fn with_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut catalog = Catalog::new();
        for product in products {
            catalog.add(product)?;
        }
        Ok(catalog)
    }

    /// Add a product. Fails if the name is already taken.
    pub fn add(&mut self, product: Product) -> Result<(), CommerceError> {
        if self.find_by_name(&product.name).is_some() {
            return Err(CommerceError::DuplicateProduct(product.name));
        }
        self.products.push(product);
        Ok(())
    }

    /// Look up a product by exact name. Lookups have no side effects.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Look up a product by exact name, failing when absent.
    pub fn get(&self, name: &str) -> Result<&Product, CommerceError> {
        self.find_by_name(name)
            .ok_or_else(|| CommerceError::ProductNotFound(name.to_string()))
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in the given category.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Deduct sold stock for every line, or deduct nothing.
    ///
    /// Every line is validated before any stock moves, so a shortfall on
    /// one line cannot leave the catalog half-updated. Lines must be
    /// unique by product name, which cart entries guarantee.
    pub fn commit(&mut self, lines: &[(&str, i64)]) -> Result<(), CommerceError> {
        for &(name, quantity) in lines {
            let product = self.get(name)?;
            if !product.can_fulfill(quantity) {
                return Err(CommerceError::InvalidQuantity {
                    name: product.name.clone(),
                    requested: quantity,
                    limit: product.stock,
                });
            }
        }
        for &(name, quantity) in lines {
            if let Some(product) = self.products.iter_mut().find(|p| p.name == name) {
                product.stock -= quantity;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn sample_catalog() -> Catalog {
        Catalog::with_products(vec![
            Product::new(
                "iPhone 12",
                Category::Electronics,
                Money::new(99900, Currency::USD),
                5,
            ),
            Product::new(
                "Nike Air Max",
                Category::Clothing,
                Money::new(15000, Currency::USD),
                10,
            ),
            Product::new(
                "JavaScript: The Good Parts",
                Category::Books,
                Money::new(2500, Currency::USD),
                20,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_name() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_name("iPhone 12").is_some());
        assert!(catalog.find_by_name("iphone 12").is_none());
        assert!(catalog.find_by_name("Pixel 6").is_none());
    }

    #[test]
    fn test_get_missing_product() {
        let catalog = sample_catalog();
        let err = catalog.get("Pixel 6").unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(name) if name == "Pixel 6"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut catalog = sample_catalog();
        let err = catalog
            .add(Product::new(
                "iPhone 12",
                Category::Electronics,
                Money::new(89900, Currency::USD),
                3,
            ))
            .unwrap_err();
        assert!(matches!(err, CommerceError::DuplicateProduct(_)));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_in_category() {
        let catalog = sample_catalog();
        let books: Vec<_> = catalog.in_category(Category::Books).collect();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "JavaScript: The Good Parts");
    }

    #[test]
    fn test_commit_deducts_all_lines() {
        let mut catalog = sample_catalog();
        catalog
            .commit(&[("iPhone 12", 2), ("Nike Air Max", 3)])
            .unwrap();
        assert_eq!(catalog.get("iPhone 12").unwrap().stock, 3);
        assert_eq!(catalog.get("Nike Air Max").unwrap().stock, 7);
    }

    #[test]
    fn test_commit_shortfall_deducts_nothing() {
        let mut catalog = sample_catalog();
        let err = catalog
            .commit(&[("Nike Air Max", 3), ("iPhone 12", 6)])
            .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidQuantity { .. }));
        assert_eq!(catalog.get("Nike Air Max").unwrap().stock, 10);
        assert_eq!(catalog.get("iPhone 12").unwrap().stock, 5);
    }

    #[test]
    fn test_commit_unknown_product() {
        let mut catalog = sample_catalog();
        let err = catalog.commit(&[("Pixel 6", 1)]).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
    }
}
