//! Integration tests for the Kundan storefront core.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kundan-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_search` - Filtering through catalog sources and the cache
//! - `checkout_flow` - Cart to order to tracking, end to end
//!
//! Everything runs in memory; no services need to be started.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, TimeZone, Utc};
use kundan_core::{Address, Checkout};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fixed clock used by the flows so delivery dates are predictable.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
}

/// Checkout with a deterministic random source.
#[must_use]
pub fn seeded_checkout(seed: u64) -> Checkout<StdRng> {
    Checkout::new(StdRng::seed_from_u64(seed))
}

/// A complete Indian shipping address.
#[must_use]
pub fn sample_address() -> Address {
    Address {
        full_name: "Priya Mehta".to_string(),
        address_line1: "42 Park Street".to_string(),
        address_line2: None,
        city: "Kolkata".to_string(),
        state: "West Bengal".to_string(),
        postal_code: "700016".to_string(),
        country: "India".to_string(),
        phone: "+91 9123456780".to_string(),
    }
}

/// A small catalog document in the on-disk JSON format.
#[must_use]
pub fn catalog_json() -> &'static str {
    r#"{
        "categories": [
            {"id": "rings", "name": "Rings"},
            {"id": "anklets", "name": "Anklets"}
        ],
        "products": [
            {"id": "r1", "name": "Polki Cocktail Ring", "category": "rings",
             "subcategory": "polki", "price": 11499, "discountPrice": 9999,
             "description": "Uncut polki stones set in gold-plated silver",
             "rating": 4.6, "stock": 4, "isTrending": true},
            {"id": "a1", "name": "Ghungroo Payal", "category": "anklets",
             "subcategory": "payal", "price": "1899",
             "description": "Silver anklet pair with tiny bells",
             "rating": 4.3, "stock": 0, "isNew": true}
        ]
    }"#
}
