//! Cart pricing breakdown types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Priced breakdown of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals, pre-tax.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Subtotal plus tax.
    pub grand_total: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineTotals>,
}

/// Priced breakdown of a single cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotals {
    /// Name of the product.
    pub product_name: String,
    /// Quantity in the cart.
    pub quantity: i64,
    /// Unit price at pricing time.
    pub unit_price: Money,
    /// Unit price times quantity.
    pub line_total: Money,
}
