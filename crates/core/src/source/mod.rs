//! Async data access for products and orders.
//!
//! # Architecture
//!
//! Storefront pages load data through [`CatalogSource`] and [`OrderSource`]
//! rather than reaching for a global list, so a real backend can replace the
//! in-memory implementations without touching callers, and tests can inject
//! exactly the data they need.
//!
//! - [`InMemoryCatalog`] - A fixed [`Catalog`], from the seed or a JSON file
//! - [`InMemoryOrders`] - An order store behind an async `RwLock`
//! - [`CachedCatalog`] - `moka` cache in front of any catalog source (5 minute TTL)

mod cache;
mod memory;

use std::future::Future;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, FilterCriteria, Product, filter_products};
use crate::orders::Order;
use crate::types::{OrderId, ProductId};

pub use cache::CachedCatalog;
pub use memory::{InMemoryCatalog, InMemoryOrders};

/// Errors that can occur when loading storefront data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data was malformed or invalid.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The backend could not serve the request.
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the product catalog.
pub trait CatalogSource: Send + Sync {
    /// All products, in catalog order.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, SourceError>> + Send;

    /// A single product by ID.
    fn fetch_product(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<Option<Product>, SourceError>> + Send;
}

/// Read/write access to placed orders.
pub trait OrderSource: Send + Sync {
    /// An order by ID.
    fn fetch_order(
        &self,
        id: &OrderId,
    ) -> impl Future<Output = Result<Option<Order>, SourceError>> + Send;

    /// Insert or replace an order.
    fn save_order(&self, order: Order) -> impl Future<Output = Result<(), SourceError>> + Send;
}

/// Load the catalog from a source and apply a filter.
///
/// # Errors
///
/// Propagates the source's error.
pub async fn search_products<S: CatalogSource>(
    source: &S,
    criteria: &FilterCriteria,
) -> Result<Vec<Product>, SourceError> {
    let products = source.fetch_products().await?;
    Ok(filter_products(&products, criteria))
}

/// Load a catalog file from disk.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be read and
/// [`SourceError::Catalog`] if its contents are invalid.
pub async fn load_catalog_file(path: &std::path::Path) -> Result<Catalog, SourceError> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(Catalog::from_json(&json)?)
}
