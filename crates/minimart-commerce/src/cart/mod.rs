//! Shopping cart module.
//!
//! Contains types for the cart, its entries, and pricing breakdowns.

mod cart;
mod totals;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
pub use totals::{CartTotals, LineTotals};
