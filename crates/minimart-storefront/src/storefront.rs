//! The storefront facade.

use minimart_auth::{Directory, IdentityStore};
use minimart_commerce::catalog::{Catalog, CatalogStore, Category, Product};
use minimart_commerce::checkout::{place_order, Order};
use tracing::{info, warn};

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::shopper::Shopper;

/// Shared shop state: the catalog, the identity directory, and the log
/// of settled orders.
///
/// Per-shopper state never lives here. Each caller owns a [`Shopper`]
/// and passes it into the operations below, so concurrent shoppers are
/// isolated by construction.
pub struct Storefront {
    catalog: Catalog,
    directory: Directory,
    config: StorefrontConfig,
    orders: Vec<Order>,
}

impl Storefront {
    /// Create a storefront over a catalog and identity directory with
    /// default configuration.
    pub fn new(catalog: Catalog, directory: Directory) -> Self {
        Self::with_config(catalog, directory, StorefrontConfig::default())
    }

    /// Create a storefront with explicit configuration.
    pub fn with_config(
        catalog: Catalog,
        directory: Directory,
        config: StorefrontConfig,
    ) -> Self {
        Self {
            catalog,
            directory,
            config,
            orders: Vec::new(),
        }
    }

    /// Load catalog and identities from their backing stores.
    pub fn load(
        catalog_store: &dyn CatalogStore,
        identity_store: &dyn IdentityStore,
        config: StorefrontConfig,
    ) -> Result<Self, StorefrontError> {
        let catalog = Catalog::with_products(catalog_store.load()?)?;
        let directory = Directory::with_identities(identity_store.load()?)?;
        info!(
            products = catalog.len(),
            identities = directory.len(),
            "Storefront loaded"
        );
        Ok(Self::with_config(catalog, directory, config))
    }

    /// Write the catalog and identities back to their stores.
    ///
    /// The order log is in-memory only and is not persisted.
    pub fn persist(
        &self,
        catalog_store: &dyn CatalogStore,
        identity_store: &dyn IdentityStore,
    ) -> Result<(), StorefrontError> {
        catalog_store.save(self.catalog.products())?;
        identity_store.save(self.directory.identities())?;
        Ok(())
    }

    /// Open a fresh anonymous shopper priced in this storefront's
    /// currency.
    pub fn open_shopper(&self) -> Shopper {
        Shopper::with_currency(self.config.currency)
    }

    /// Sign a shopper in.
    ///
    /// The session must be anonymous; a second login without an
    /// intervening logout is rejected with `AlreadyAuthenticated`. An
    /// unknown email and a wrong password are indistinguishable to the
    /// caller, both surface `InvalidCredentials`.
    pub fn login(
        &self,
        shopper: &mut Shopper,
        email: &str,
        password: &str,
    ) -> Result<(), StorefrontError> {
        shopper.session.require_anonymous()?;
        let identity = match self.directory.authenticate(email, password) {
            Ok(identity) => identity,
            Err(e) => {
                warn!(email = %email, "Login rejected");
                return Err(e.into());
            }
        };
        shopper.session.sign_in(identity)?;
        info!(email = %email, "Shopper signed in");
        Ok(())
    }

    /// Sign a shopper out, returning the session to anonymous.
    ///
    /// The cart is left untouched and is still there after the next
    /// login.
    pub fn logout(&self, shopper: &mut Shopper) -> Result<(), StorefrontError> {
        let email = shopper.session.require_authenticated()?.to_string();
        shopper.session.sign_out()?;
        info!(email = %email, "Shopper signed out");
        Ok(())
    }

    /// Add `quantity` units of a catalog product to the shopper's cart.
    ///
    /// Requires an authenticated session. The quantity is validated
    /// against stock and the per-item cap, and a product already in the
    /// cart is rejected rather than merged; remove it first to change
    /// its quantity.
    pub fn add_to_cart(
        &self,
        shopper: &mut Shopper,
        product_name: &str,
        quantity: i64,
    ) -> Result<(), StorefrontError> {
        shopper.session.require_authenticated()?;
        let product = self.catalog.get(product_name)?;
        shopper.cart.add(product, quantity)?;
        info!(
            product = %product_name,
            quantity,
            "Added to cart"
        );
        Ok(())
    }

    /// Remove a product's entire entry from the shopper's cart.
    ///
    /// Requires an authenticated session. The product does not have to
    /// exist in the catalog any more, only in the cart.
    pub fn remove_from_cart(
        &self,
        shopper: &mut Shopper,
        product_name: &str,
    ) -> Result<(), StorefrontError> {
        shopper.session.require_authenticated()?;
        shopper.cart.remove(product_name)?;
        info!(product = %product_name, "Removed from cart");
        Ok(())
    }

    /// Check the shopper out.
    ///
    /// Prices the cart at current catalog prices, applies the
    /// configured tax rate, deducts stock for every line, clears the
    /// cart, and records the settled order. Any failure leaves cart and
    /// stock exactly as they were.
    pub fn checkout(&mut self, shopper: &mut Shopper) -> Result<Order, StorefrontError> {
        let email = shopper.session.require_authenticated()?.to_string();
        let order = match place_order(
            &mut self.catalog,
            &mut shopper.cart,
            &email,
            self.config.tax_rate,
        ) {
            Ok(order) => order,
            Err(e) => {
                warn!(email = %email, error = %e, "Checkout failed");
                return Err(e.into());
            }
        };
        info!(
            email = %email,
            order_number = %order.order_number,
            total = %order.grand_total,
            "Checkout complete"
        );
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Every product in the catalog.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Look up a single product by exact name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.catalog.find_by_name(name)
    }

    /// Products belonging to one category.
    pub fn products_in(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.catalog.in_category(category)
    }

    /// Settled orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}
