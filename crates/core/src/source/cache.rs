//! Cache in front of a catalog source.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use super::{CatalogSource, SourceError};
use crate::catalog::Product;
use crate::types::ProductId;

/// Default time-to-live for cached catalog data.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

const MAX_CAPACITY: u64 = 1000;

/// Cache key for catalog lookups.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Product(ProductId),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Arc<Vec<Product>>),
    Product(Box<Product>),
}

/// Catalog source that caches another source's responses.
///
/// Missing products are not cached, so a product added upstream shows up on
/// the next lookup.
pub struct CachedCatalog<S> {
    source: S,
    cache: Cache<CacheKey, CacheValue>,
}

impl<S: CatalogSource> CachedCatalog<S> {
    /// Wrap a source with the default 5 minute TTL.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, DEFAULT_TTL)
    }

    #[must_use]
    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_CAPACITY)
            .time_to_live(ttl)
            .build();
        Self { source, cache }
    }

    /// The wrapped source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Invalidate a cached product and the cached product list.
    pub async fn invalidate_product(&self, id: &ProductId) {
        self.cache.invalidate(&CacheKey::Product(id.clone())).await;
        self.cache.invalidate(&CacheKey::Products).await;
    }

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

impl<S: CatalogSource> CatalogSource for CachedCatalog<S> {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        if let Some(CacheValue::Products(products)) = self.cache.get(&CacheKey::Products).await {
            debug!("Cache hit for product list");
            return Ok(products.as_ref().clone());
        }

        debug!("Cache miss for product list");
        let products = self.source.fetch_products().await?;
        self.cache
            .insert(
                CacheKey::Products,
                CacheValue::Products(Arc::new(products.clone())),
            )
            .await;
        Ok(products)
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, SourceError> {
        let key = CacheKey::Product(id.clone());
        if let Some(CacheValue::Product(product)) = self.cache.get(&key).await {
            debug!(product_id = %id, "Cache hit for product");
            return Ok(Some(*product));
        }

        debug!(product_id = %id, "Cache miss for product");
        let product = self.source.fetch_product(id).await?;
        if let Some(product) = &product {
            self.cache
                .insert(key, CacheValue::Product(Box::new(product.clone())))
                .await;
        }
        Ok(product)
    }
}
