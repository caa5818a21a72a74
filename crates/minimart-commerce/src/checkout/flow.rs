//! Checkout settlement flow.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::money::TaxRate;

/// Tax rate applied at checkout: 15%.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(1500);

/// Settle a cart into an order.
///
/// The cart must be non-empty, every entry must price against the
/// catalog, and stock for every entry is deducted transactionally. On
/// success the cart is cleared; any failure leaves both the cart and
/// the catalog untouched.
pub fn place_order(
    catalog: &mut Catalog,
    cart: &mut Cart,
    customer_email: &str,
    tax_rate: TaxRate,
) -> Result<Order, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let totals = cart.calculate_totals(catalog, tax_rate)?;

    {
        let lines: Vec<(&str, i64)> = totals
            .lines
            .iter()
            .map(|l| (l.product_name.as_str(), l.quantity))
            .collect();
        catalog.commit(&lines)?;
    }

    let order = Order::from_totals(customer_email, totals);
    cart.clear();
    Ok(order)
}
