//! Kundan Core - Storefront domain logic.
//!
//! This crate provides the logic layer shared by the Kundan jewelry storefront
//! components:
//! - `cli` - Command-line tools for browsing the catalog and tracking orders
//! - `integration-tests` - End-to-end scenarios over the public API
//!
//! # Architecture
//!
//! Everything here is plain data and pure functions, except for the
//! [`source`] module which defines the async data-access seam the storefront
//! loads products and orders through. In-memory implementations back that
//! seam so tests can inject deterministic data.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money formatting, and order/payment statuses
//! - [`catalog`] - Products, categories, and the catalog filter
//! - [`cart`] - Cart store with quantity rules
//! - [`pricing`] - Discounts, GST, shipping and order totals
//! - [`orders`] - Orders, addresses, status transitions and tracking
//! - [`checkout`] - Turning a cart into an order
//! - [`source`] - Async catalog/order sources and the catalog cache
//! - [`text`] - Display helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod pricing;
pub mod source;
pub mod text;
pub mod types;

pub use cart::{Cart, CartError, CartItem};
pub use catalog::{
    Catalog, CatalogError, Category, FilterCriteria, Product, ProductError, filter_products,
};
pub use checkout::{Checkout, CheckoutError, OrderNumbers};
pub use orders::{
    Address, Order, OrderError, OrderTracking, PaymentMethod, PaymentMethodParseError,
};
pub use pricing::OrderSummary;
pub use types::*;
