//! Cart and cart entry types.

use crate::cart::{CartTotals, LineTotals};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::money::{Currency, Money, TaxRate};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart entry.
pub const MAX_QUANTITY_PER_ITEM: i64 = 10;

/// A shopping cart.
///
/// Entries name a catalog product and hold the desired quantity; prices
/// stay in the catalog and are resolved at pricing time. A product
/// appears in at most one entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Cart currency. Every priced product must match it.
    pub currency: Currency,
    lines: Vec<CartLine>,
}

/// A cart entry: one product name and its desired quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Name of the product in the catalog.
    pub product_name: String,
    /// Desired quantity, always in 1..=MAX_QUANTITY_PER_ITEM.
    pub quantity: i64,
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self {
            currency: Currency::default(),
            lines: Vec::new(),
        }
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            lines: Vec::new(),
        }
    }

    /// Add an entry for a product.
    ///
    /// The quantity must be at least 1 and at most the smaller of the
    /// product's stock and `MAX_QUANTITY_PER_ITEM`. A product that
    /// already has an entry is rejected; removing and re-adding is the
    /// way to change a quantity.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        let limit = product.stock.min(MAX_QUANTITY_PER_ITEM);
        if quantity < 1 || quantity > limit {
            return Err(CommerceError::InvalidQuantity {
                name: product.name.clone(),
                requested: quantity,
                limit,
            });
        }
        if self.line(&product.name).is_some() {
            return Err(CommerceError::DuplicateCartEntry(product.name.clone()));
        }
        self.lines.push(CartLine {
            product_name: product.name.clone(),
            quantity,
        });
        Ok(())
    }

    /// Remove the entry for a product, returning it.
    ///
    /// The whole entry goes regardless of its quantity.
    pub fn remove(&mut self, name: &str) -> Result<CartLine, CommerceError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_name == name)
            .ok_or_else(|| CommerceError::CartEntryNotFound(name.to_string()))?;
        Ok(self.lines.remove(index))
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the entry for a product.
    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_name == name)
    }

    /// All entries, in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Price the cart against the catalog, pre-tax.
    ///
    /// Fails with `ProductNotFound` when an entry no longer resolves.
    /// Stock is not consulted here; entries are validated against stock
    /// when added and again at checkout.
    pub fn subtotal(&self, catalog: &Catalog) -> Result<Money, CommerceError> {
        Ok(self
            .calculate_totals(catalog, TaxRate::from_bps(0))?
            .subtotal)
    }

    /// Price the cart against the catalog with tax applied.
    pub fn calculate_totals(
        &self,
        catalog: &Catalog,
        tax_rate: TaxRate,
    ) -> Result<CartTotals, CommerceError> {
        let mut lines = Vec::with_capacity(self.lines.len());
        let mut subtotal = Money::zero(self.currency);

        for line in &self.lines {
            let product = catalog.get(&line.product_name)?;
            if product.price.currency != self.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
            let line_total = product
                .price
                .try_multiply(line.quantity)
                .ok_or(CommerceError::Overflow)?;
            subtotal = subtotal.try_add(&line_total).ok_or(CommerceError::Overflow)?;
            lines.push(LineTotals {
                product_name: line.product_name.clone(),
                quantity: line.quantity,
                unit_price: product.price,
                line_total,
            });
        }

        let tax_total = subtotal.calculate_tax(tax_rate);
        let grand_total = subtotal.try_add(&tax_total).ok_or(CommerceError::Overflow)?;

        Ok(CartTotals {
            subtotal,
            tax_total,
            grand_total,
            lines,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
