//! In-memory sources.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{CatalogSource, OrderSource, SourceError, load_catalog_file};
use crate::catalog::{Catalog, Product};
use crate::orders::Order;
use crate::types::{OrderId, ProductId};

/// Catalog source over a fixed [`Catalog`].
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// The built-in jewelry catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(Catalog::seed())
    }

    /// Load a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub async fn from_path(path: &Path) -> Result<Self, SourceError> {
        let catalog = load_catalog_file(path).await?;
        debug!(products = catalog.products().len(), "Catalog file loaded");
        Ok(Self::new(catalog))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl CatalogSource for InMemoryCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.catalog.products().to_vec())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, SourceError> {
        Ok(self.catalog.find(id.as_str()).cloned())
    }
}

/// Order store held in process memory.
///
/// Cheaply cloneable; clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrders {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

impl OrderSource for InMemoryOrders {
    async fn fetch_order(&self, id: &OrderId) -> Result<Option<Order>, SourceError> {
        Ok(self.orders.read().await.get(id).cloned())
    }

    async fn save_order(&self, order: Order) -> Result<(), SourceError> {
        debug!(order_id = %order.id, status = %order.status, "Saving order");
        self.orders.write().await.insert(order.id.clone(), order);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::cart::CartItem;
    use crate::catalog::FilterCriteria;
    use crate::orders::PaymentMethod;
    use crate::orders::tests::address;
    use crate::source::search_products;
    use crate::types::{CustomerId, OrderStatus, PaymentStatus};

    #[tokio::test]
    async fn test_seed_catalog_fetch() {
        let source = InMemoryCatalog::seed();
        let products = source.fetch_products().await.unwrap();
        assert_eq!(products.len(), 8);

        let ring = source.fetch_product(&ProductId::new("4")).await.unwrap();
        assert_eq!(ring.unwrap().name, "Emerald Cut Diamond Ring");
        assert!(
            source
                .fetch_product(&ProductId::new("99"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_search_products_filters_source() {
        let source = InMemoryCatalog::seed();
        let criteria = FilterCriteria::new().with_category("necklaces");
        let found = search_products(&source, &criteria).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6"]);
    }

    #[tokio::test]
    async fn test_from_path_loads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories": [{{"id": "rings", "name": "Rings"}}],
                "products": [{{"id": "r1", "name": "Band", "category": "rings",
                "subcategory": "plain", "price": 3499, "description": "Gold band",
                "rating": 4.1, "stock": 3}}]}}"#
        )
        .unwrap();

        let source = InMemoryCatalog::from_path(file.path()).await.unwrap();
        assert_eq!(source.catalog().categories().len(), 1);
        assert_eq!(source.fetch_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_from_path_rejects_invalid_discount() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": [{{"id": "r1", "name": "Band", "category": "rings",
                "subcategory": "plain", "price": 3499, "discountPrice": 3999,
                "description": "Gold band", "rating": 4.1, "stock": 3}}]}}"#
        )
        .unwrap();

        let err = InMemoryCatalog::from_path(file.path()).await.unwrap_err();
        assert!(matches!(err, SourceError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = InMemoryCatalog::from_path(Path::new("/nonexistent/catalog.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[tokio::test]
    async fn test_order_store_roundtrip() {
        let store = InMemoryOrders::new();
        let shared = store.clone();
        let product = Catalog::seed().products()[7].clone();
        let now = Utc::now();
        let order = Order {
            id: OrderId::new("ABCD1234"),
            customer_id: CustomerId::new("CUST123"),
            items: vec![CartItem {
                product,
                quantity: 1,
            }],
            status: OrderStatus::Pending,
            shipping_address: address(),
            payment_method: PaymentMethod::Cod,
            payment_status: PaymentStatus::Pending,
            total_amount: Decimal::new(378_882, 2),
            created_at: now,
            updated_at: now,
            tracking_number: None,
            estimated_delivery: None,
        };

        store.save_order(order.clone()).await.unwrap();
        assert_eq!(shared.len().await, 1);

        let fetched = shared.fetch_order(&order.id).await.unwrap();
        assert_eq!(fetched, Some(order));
        assert!(
            store
                .fetch_order(&OrderId::new("MISSING1"))
                .await
                .unwrap()
                .is_none()
        );
    }
}
