//! Storefront configuration.

use minimart_commerce::checkout::TAX_RATE;
use minimart_commerce::money::{Currency, TaxRate};

/// Settings shared by every operation on a storefront.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Currency every catalog price and cart line must use.
    pub currency: Currency,
    /// Tax rate applied to the cart subtotal at checkout.
    pub tax_rate: TaxRate,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            tax_rate: TAX_RATE,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the tax rate.
    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }
}
