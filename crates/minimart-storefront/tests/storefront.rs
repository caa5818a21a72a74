//! End-to-end storefront scenarios.
//!
//! Each test stands up a small shop (three products, two registered
//! shoppers) and drives it through the public surface only: login,
//! logout, add to cart, remove from cart, checkout.

use minimart_auth::{AuthError, Directory, MemoryIdentityStore};
use minimart_commerce::catalog::{Catalog, Category, MemoryCatalogStore, Product};
use minimart_commerce::error::CommerceError;
use minimart_commerce::money::{Currency, Money};
use minimart_storefront::{Storefront, StorefrontError};

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add(Product::new(
            "iPhone 12",
            Category::Electronics,
            usd(99_900),
            5,
        ))
        .unwrap();
    catalog
        .add(Product::new(
            "Nike Air Max",
            Category::Clothing,
            usd(15_000),
            10,
        ))
        .unwrap();
    catalog
        .add(Product::new(
            "JavaScript: The Good Parts",
            Category::Books,
            usd(2_500),
            20,
        ))
        .unwrap();
    catalog
}

fn seed_directory() -> Directory {
    let mut directory = Directory::new();
    directory
        .register("John Doe", "john@gmail.com", "john123")
        .unwrap();
    directory
        .register("Jane Smith", "jane@gmail.com", "jane456")
        .unwrap();
    directory
}

fn seed_storefront() -> Storefront {
    Storefront::new(seed_catalog(), seed_directory())
}

#[test]
fn test_full_purchase_flow() {
    let mut shop = seed_storefront();
    let mut shopper = shop.open_shopper();

    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();
    shop.add_to_cart(&mut shopper, "Nike Air Max", 2).unwrap();
    shop.add_to_cart(&mut shopper, "iPhone 12", 1).unwrap();
    shop.remove_from_cart(&mut shopper, "Nike Air Max").unwrap();

    let order = shop.checkout(&mut shopper).unwrap();

    assert_eq!(order.customer_email, "john@gmail.com");
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.subtotal, usd(99_900));
    assert_eq!(order.tax_total, usd(14_985));
    assert_eq!(order.grand_total, usd(114_885));
    assert_eq!(order.grand_total.to_string(), "$1148.85");

    // The cart is consumed, the iPhone stock is down one, and the
    // removed sneakers were never deducted.
    assert!(shopper.cart.is_empty());
    assert_eq!(shop.product("iPhone 12").unwrap().stock, 4);
    assert_eq!(shop.product("Nike Air Max").unwrap().stock, 10);

    assert_eq!(shop.orders().len(), 1);
    assert_eq!(shop.orders()[0], order);
}

#[test]
fn test_cart_operations_require_login() {
    let mut shop = seed_storefront();
    let mut shopper = shop.open_shopper();

    let err = shop.add_to_cart(&mut shopper, "iPhone 12", 1).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::AuthenticationRequired)
    ));

    let err = shop.remove_from_cart(&mut shopper, "iPhone 12").unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::AuthenticationRequired)
    ));

    let err = shop.checkout(&mut shopper).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::AuthenticationRequired)
    ));

    assert!(shopper.cart.is_empty());
}

#[test]
fn test_login_rejects_bad_credentials() {
    let shop = seed_storefront();
    let mut shopper = shop.open_shopper();

    let err = shop
        .login(&mut shopper, "john@gmail.com", "wrong")
        .unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::InvalidCredentials)
    ));

    // Unknown email reads exactly like a wrong password.
    let err = shop
        .login(&mut shopper, "nobody@gmail.com", "john123")
        .unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::InvalidCredentials)
    ));

    assert!(!shopper.session.is_authenticated());
}

#[test]
fn test_second_login_rejected() {
    let shop = seed_storefront();
    let mut shopper = shop.open_shopper();

    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();
    let err = shop
        .login(&mut shopper, "jane@gmail.com", "jane456")
        .unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::AlreadyAuthenticated)
    ));

    // Still John's session.
    assert_eq!(
        shopper.session.authenticated_email().map(|e| e.as_str()),
        Some("john@gmail.com")
    );
}

#[test]
fn test_logout_requires_login() {
    let shop = seed_storefront();
    let mut shopper = shop.open_shopper();

    let err = shop.logout(&mut shopper).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::AuthenticationRequired)
    ));
}

#[test]
fn test_add_unknown_product() {
    let shop = seed_storefront();
    let mut shopper = shop.open_shopper();
    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();

    let err = shop.add_to_cart(&mut shopper, "Galaxy S21", 1).unwrap_err();
    match err {
        StorefrontError::Commerce(CommerceError::ProductNotFound(name)) => {
            assert_eq!(name, "Galaxy S21");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_quantity_validation() {
    let shop = seed_storefront();
    let mut shopper = shop.open_shopper();
    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();

    // Zero and negative quantities are rejected.
    let err = shop.add_to_cart(&mut shopper, "iPhone 12", 0).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::InvalidQuantity { .. })
    ));

    // Stock is the binding limit for the iPhone (5 < cap of 10).
    let err = shop.add_to_cart(&mut shopper, "iPhone 12", 6).unwrap_err();
    match err {
        StorefrontError::Commerce(CommerceError::InvalidQuantity {
            requested, limit, ..
        }) => {
            assert_eq!(requested, 6);
            assert_eq!(limit, 5);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The per-item cap binds for the well-stocked book (20 > cap of 10).
    let err = shop
        .add_to_cart(&mut shopper, "JavaScript: The Good Parts", 11)
        .unwrap_err();
    match err {
        StorefrontError::Commerce(CommerceError::InvalidQuantity {
            requested, limit, ..
        }) => {
            assert_eq!(requested, 11);
            assert_eq!(limit, 10);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    shop.add_to_cart(&mut shopper, "JavaScript: The Good Parts", 10)
        .unwrap();
    assert_eq!(shopper.cart.item_count(), 10);
}

#[test]
fn test_duplicate_entry_rejected_until_removed() {
    let shop = seed_storefront();
    let mut shopper = shop.open_shopper();
    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();

    shop.add_to_cart(&mut shopper, "iPhone 12", 1).unwrap();
    let err = shop.add_to_cart(&mut shopper, "iPhone 12", 2).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::DuplicateCartEntry(_))
    ));
    assert_eq!(shopper.cart.item_count(), 1);

    // Remove-then-re-add is the supported way to change a quantity.
    shop.remove_from_cart(&mut shopper, "iPhone 12").unwrap();
    shop.add_to_cart(&mut shopper, "iPhone 12", 2).unwrap();
    assert_eq!(shopper.cart.item_count(), 2);
}

#[test]
fn test_remove_missing_entry() {
    let shop = seed_storefront();
    let mut shopper = shop.open_shopper();
    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();

    let err = shop.remove_from_cart(&mut shopper, "iPhone 12").unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::CartEntryNotFound(_))
    ));
}

#[test]
fn test_checkout_empty_cart() {
    let mut shop = seed_storefront();
    let mut shopper = shop.open_shopper();
    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();

    let err = shop.checkout(&mut shopper).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::EmptyCart)
    ));
    assert!(shop.orders().is_empty());
}

#[test]
fn test_cart_survives_logout() {
    let mut shop = seed_storefront();
    let mut shopper = shop.open_shopper();

    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();
    shop.add_to_cart(&mut shopper, "JavaScript: The Good Parts", 2)
        .unwrap();
    shop.logout(&mut shopper).unwrap();

    // Anonymous again: the cart is intact but gated.
    assert_eq!(shopper.cart.len(), 1);
    let err = shop.checkout(&mut shopper).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Auth(AuthError::AuthenticationRequired)
    ));

    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();
    let order = shop.checkout(&mut shopper).unwrap();
    assert_eq!(order.subtotal, usd(5_000));
    assert_eq!(order.grand_total, usd(5_750));
}

#[test]
fn test_shoppers_are_isolated() {
    let mut shop = seed_storefront();
    let mut john = shop.open_shopper();
    let mut jane = shop.open_shopper();

    shop.login(&mut john, "john@gmail.com", "john123").unwrap();
    shop.login(&mut jane, "jane@gmail.com", "jane456").unwrap();

    shop.add_to_cart(&mut john, "iPhone 12", 1).unwrap();
    assert!(jane.cart.is_empty());

    // Same product in a different cart is not a duplicate.
    shop.add_to_cart(&mut jane, "iPhone 12", 2).unwrap();

    let johns_order = shop.checkout(&mut john).unwrap();
    assert_eq!(shop.product("iPhone 12").unwrap().stock, 4);

    let janes_order = shop.checkout(&mut jane).unwrap();
    assert_eq!(shop.product("iPhone 12").unwrap().stock, 2);

    assert_eq!(johns_order.customer_email, "john@gmail.com");
    assert_eq!(janes_order.customer_email, "jane@gmail.com");
    assert_eq!(shop.orders().len(), 2);
}

#[test]
fn test_stock_decrement_limits_later_shoppers() {
    let mut shop = seed_storefront();
    let mut john = shop.open_shopper();
    let mut jane = shop.open_shopper();

    shop.login(&mut john, "john@gmail.com", "john123").unwrap();
    shop.add_to_cart(&mut john, "iPhone 12", 4).unwrap();
    shop.checkout(&mut john).unwrap();
    assert_eq!(shop.product("iPhone 12").unwrap().stock, 1);

    shop.login(&mut jane, "jane@gmail.com", "jane456").unwrap();
    let err = shop.add_to_cart(&mut jane, "iPhone 12", 2).unwrap_err();
    match err {
        StorefrontError::Commerce(CommerceError::InvalidQuantity { limit, .. }) => {
            assert_eq!(limit, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    shop.add_to_cart(&mut jane, "iPhone 12", 1).unwrap();
    shop.checkout(&mut jane).unwrap();
    assert_eq!(shop.product("iPhone 12").unwrap().stock, 0);
}

#[test]
fn test_checkout_failure_preserves_cart_and_stock() {
    let mut shop = seed_storefront();
    let mut john = shop.open_shopper();
    let mut jane = shop.open_shopper();

    shop.login(&mut john, "john@gmail.com", "john123").unwrap();
    shop.login(&mut jane, "jane@gmail.com", "jane456").unwrap();

    // Both want more iPhones than will be left.
    shop.add_to_cart(&mut john, "iPhone 12", 4).unwrap();
    shop.add_to_cart(&mut jane, "iPhone 12", 3).unwrap();
    shop.add_to_cart(&mut jane, "Nike Air Max", 1).unwrap();

    shop.checkout(&mut john).unwrap();

    // Jane's cart was valid when built but no longer is. Nothing is
    // deducted for the sneakers either.
    let err = shop.checkout(&mut jane).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::InvalidQuantity { .. })
    ));
    assert_eq!(jane.cart.len(), 2);
    assert_eq!(shop.product("iPhone 12").unwrap().stock, 1);
    assert_eq!(shop.product("Nike Air Max").unwrap().stock, 10);
    assert_eq!(shop.orders().len(), 1);
}

#[test]
fn test_persist_and_reload() {
    let catalog_store = MemoryCatalogStore::new();
    let identity_store = MemoryIdentityStore::new();

    let mut shop = seed_storefront();
    let mut shopper = shop.open_shopper();
    shop.login(&mut shopper, "john@gmail.com", "john123").unwrap();
    shop.add_to_cart(&mut shopper, "iPhone 12", 1).unwrap();
    shop.checkout(&mut shopper).unwrap();

    shop.persist(&catalog_store, &identity_store).unwrap();

    let reloaded = Storefront::load(
        &catalog_store,
        &identity_store,
        shop.config().clone(),
    )
    .unwrap();

    // Stock levels and password hashes both round-trip.
    assert_eq!(reloaded.products().len(), 3);
    assert_eq!(reloaded.product("iPhone 12").unwrap().stock, 4);

    let mut returning = reloaded.open_shopper();
    reloaded
        .login(&mut returning, "john@gmail.com", "john123")
        .unwrap();
    assert!(returning.session.is_authenticated());
}

#[test]
fn test_catalog_read_surface() {
    let shop = seed_storefront();

    assert_eq!(shop.products().len(), 3);
    assert!(shop.product("iPhone 12").is_some());
    assert!(shop.product("iphone 12").is_none());

    let electronics: Vec<_> = shop.products_in(Category::Electronics).collect();
    assert_eq!(electronics.len(), 1);
    assert_eq!(electronics[0].name, "iPhone 12");

    let books: Vec<_> = shop.products_in(Category::Books).collect();
    assert_eq!(books.len(), 1);
}
