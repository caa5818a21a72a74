//! Order record types.

use crate::cart::CartTotals;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A settled order.
///
/// A snapshot of what was charged at checkout; later catalog changes do
/// not touch it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Human-facing order number.
    pub order_number: String,
    /// Email of the purchasing customer.
    pub customer_email: String,
    /// Ordered lines.
    pub lines: Vec<OrderLine>,
    /// Sum of line totals, pre-tax.
    pub subtotal: Money,
    /// Tax charged on the subtotal.
    pub tax_total: Money,
    /// Amount charged: subtotal plus tax.
    pub grand_total: Money,
    /// Unix timestamp the order was placed.
    pub placed_at: i64,
}

/// A line on a settled order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product name at time of order.
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Total price for this line.
    pub line_total: Money,
}

impl Order {
    /// Build an order from priced cart totals.
    pub fn from_totals(customer_email: impl Into<String>, totals: CartTotals) -> Self {
        let lines = totals
            .lines
            .into_iter()
            .map(|l| OrderLine {
                product_name: l.product_name,
                quantity: l.quantity,
                unit_price: l.unit_price,
                line_total: l.line_total,
            })
            .collect();
        Self {
            order_number: Self::generate_order_number(),
            customer_email: customer_email.into(),
            lines,
            subtotal: totals.subtotal,
            tax_total: totals.tax_total,
            grand_total: totals.grand_total,
            placed_at: current_timestamp(),
        }
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("ORD-{}", ts)
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
