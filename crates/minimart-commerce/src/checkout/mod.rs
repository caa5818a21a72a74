//! Checkout module.
//!
//! Contains the settlement flow and order records.

mod flow;
mod order;

pub use flow::{place_order, TAX_RATE};
pub use order::{Order, OrderLine};
