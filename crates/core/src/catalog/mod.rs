//! Product catalog and filtering.
//!
//! The catalog is a fixed list of products loaded once per process, either
//! the built-in seed (see [`seed`]) or a JSON file with the same shape.
//! [`filter_products`] narrows it with a [`FilterCriteria`].

pub mod seed;

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing;
use crate::types::{CategoryId, ProductId};

/// Highest rating a product can carry.
const MAX_RATING: f64 = 5.0;

/// A product category shown in navigation and filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A catalog product.
///
/// Field names serialize in camelCase to match catalog files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: CategoryId,
    pub subcategory: String,
    /// Base price.
    pub price: Decimal,
    /// Sale price; expected to be below `price` (see [`Product::validate`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_trending: bool,
}

/// Reasons a product record is rejected by [`Product::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
    #[error("product {id} has a non-positive price {price}")]
    NonPositivePrice { id: ProductId, price: Decimal },
    #[error("product {id} discount price {discount} is not below price {price}")]
    DiscountNotBelowPrice {
        id: ProductId,
        price: Decimal,
        discount: Decimal,
    },
    #[error("product {id} rating {rating} is outside 0..=5")]
    RatingOutOfRange { id: ProductId, rating: f64 },
}

impl Product {
    /// Price actually charged: the discount price when set, else the base price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }

    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Rounded percentage saved by the discount (0 without one).
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        pricing::discount_percent(self.price, self.discount_price)
    }

    /// Case-insensitive substring match against name, description or category.
    ///
    /// `needle` must already be lowercase.
    fn matches_lowercase_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }

    /// Check the record invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the name is blank, the price is not
    /// positive, the discount is not strictly below the price, or the rating
    /// is outside `0..=5`.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName(self.id.clone()));
        }
        if self.price <= Decimal::ZERO {
            return Err(ProductError::NonPositivePrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        if let Some(discount) = self.discount_price
            && discount >= self.price
        {
            return Err(ProductError::DiscountNotBelowPrice {
                id: self.id.clone(),
                price: self.price,
                discount,
            });
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange {
                id: self.id.clone(),
                rating: self.rating,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Optional constraints applied conjunctively to the catalog.
///
/// Unset fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub query: Option<String>,
}

impl FilterCriteria {
    /// Criteria that keep every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn with_min_price(mut self, min_price: Decimal) -> Self {
        self.min_price = Some(min_price);
        self
    }

    #[must_use]
    pub const fn with_max_price(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(max_price);
        self
    }

    #[must_use]
    pub const fn in_stock_only(mut self) -> Self {
        self.in_stock = true;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Number of constraints that are set (used for the filter badge).
    ///
    /// An empty query string does not count.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            self.category.is_some(),
            self.min_price.is_some(),
            self.max_price.is_some(),
            self.in_stock,
            self.query.as_deref().is_some_and(|q| !q.is_empty()),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Whether the criteria keep every product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Clear every constraint.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a product satisfies every set constraint.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.query.as_deref().map(str::to_lowercase);
        self.matches_with_needle(product, needle.as_deref())
    }

    fn matches_with_needle(&self, product: &Product, needle: Option<&str>) -> bool {
        let price = product.effective_price();

        self.category
            .as_ref()
            .is_none_or(|category| product.category == *category)
            && self.min_price.is_none_or(|min| price >= min)
            && self.max_price.is_none_or(|max| price <= max)
            && (!self.in_stock || product.is_in_stock())
            && needle.is_none_or(|needle| product.matches_lowercase_query(needle))
    }
}

/// Products satisfying every constraint in `criteria`, in input order.
///
/// ```
/// use kundan_core::catalog::{FilterCriteria, filter_products, seed};
///
/// let products = seed::products();
/// let rings = filter_products(&products, &FilterCriteria::new().with_category("rings"));
/// assert!(rings.iter().all(|p| p.category.as_str() == "rings"));
/// ```
#[must_use]
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.query.as_deref().map(str::to_lowercase);
    products
        .iter()
        .filter(|product| criteria.matches_with_needle(product, needle.as_deref()))
        .cloned()
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductError),
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

/// An immutable set of products and categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// # Errors
    ///
    /// Returns an error if a product fails [`Product::validate`] or two
    /// products share an ID.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self {
            categories,
            products,
        })
    }

    /// The built-in jewelry catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            categories: seed::categories(),
            products: seed::products(),
        }
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// The document is an object with a `products` array and an optional
    /// `categories` array.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.categories, raw.products)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Product> {
        filter_products(&self.products, criteria)
    }

    /// Products flagged as trending.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_trending)
    }

    /// Products flagged as new.
    pub fn new_arrivals(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_new)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, price: i64, discount: Option<i64>, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            category: CategoryId::new(category),
            subcategory: "test".to_string(),
            price: Decimal::from(price),
            discount_price: discount.map(Decimal::from),
            description: "A test piece".to_string(),
            features: Vec::new(),
            images: Vec::new(),
            rating: 4.5,
            stock,
            is_new: false,
            is_trending: false,
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let products = seed::products();
        assert_eq!(filter_products(&products, &FilterCriteria::new()), products);
    }

    #[test]
    fn test_price_range_and_stock() {
        let products = vec![
            product("rings-1", "rings", 15_999, None, 10),
            product("earrings-1", "earrings", 6999, Some(5999), 0),
        ];
        let criteria = FilterCriteria::new()
            .with_min_price(Decimal::from(6000))
            .with_max_price(Decimal::from(16_000))
            .in_stock_only();

        let result = filter_products(&products, &criteria);
        assert_eq!(ids(&result), vec!["rings-1"]);
    }

    #[test]
    fn test_range_uses_effective_price() {
        let products = vec![product("a", "earrings", 6999, Some(5999), 3)];

        let above = FilterCriteria::new().with_min_price(Decimal::from(6000));
        assert!(filter_products(&products, &above).is_empty());

        let below = FilterCriteria::new().with_max_price(Decimal::from(6000));
        assert_eq!(filter_products(&products, &below).len(), 1);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let products = vec![product("a", "rings", 5000, None, 1)];
        let criteria = FilterCriteria::new()
            .with_min_price(Decimal::from(5000))
            .with_max_price(Decimal::from(5000));
        assert_eq!(filter_products(&products, &criteria).len(), 1);
    }

    #[test]
    fn test_category_mismatch_excludes() {
        let products = seed::products();
        let criteria = FilterCriteria::new().with_category("anklets");
        let result = filter_products(&products, &criteria);
        assert_eq!(ids(&result), vec!["8"]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let products = seed::products();

        let by_name = filter_products(&products, &FilterCriteria::new().with_query("JHUMKAS"));
        assert_eq!(ids(&by_name), vec!["3"]);

        let by_description =
            filter_products(&products, &FilterCriteria::new().with_query("tinkling"));
        assert_eq!(ids(&by_description), vec!["8"]);

        let by_category =
            filter_products(&products, &FilterCriteria::new().with_query("Mangalsutras"));
        assert_eq!(ids(&by_category), vec!["7"]);
    }

    #[test]
    fn test_query_is_conjoined_with_other_constraints() {
        let products = seed::products();
        let criteria = FilterCriteria::new()
            .with_query("diamond")
            .with_category("earrings");
        assert_eq!(ids(&filter_products(&products, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let products = seed::products();
        let result = filter_products(&products, &FilterCriteria::new().with_query(""));
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_filter_is_idempotent_and_stable() {
        let products = seed::products();
        let criteria = FilterCriteria::new()
            .with_min_price(Decimal::from(7000))
            .in_stock_only();
        let once = filter_products(&products, &criteria);
        let twice = filter_products(&once, &criteria);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["1", "2", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_active_count_and_reset() {
        let mut criteria = FilterCriteria::new()
            .with_category("rings")
            .with_query("")
            .in_stock_only();
        assert_eq!(criteria.active_count(), 2);

        criteria.reset();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_validate_rejects_discount_above_price() {
        let bad = product("x", "rings", 1000, Some(1000), 1);
        assert!(matches!(
            bad.validate(),
            Err(ProductError::DiscountNotBelowPrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_rating_out_of_range() {
        let mut bad = product("x", "rings", 1000, None, 1);
        bad.rating = 5.5;
        assert!(matches!(
            bad.validate(),
            Err(ProductError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_seed_catalog_is_valid() {
        let seed = Catalog::seed();
        let rebuilt = Catalog::new(seed.categories().to_vec(), seed.products().to_vec()).unwrap();
        assert_eq!(rebuilt, seed);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{
            "products": [
                {"id": "1", "name": "A", "category": "rings", "subcategory": "s",
                 "price": 100, "description": "d", "rating": 4.0, "stock": 1},
                {"id": "1", "name": "B", "category": "rings", "subcategory": "s",
                 "price": 200, "description": "d", "rating": 4.0, "stock": 1}
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateProduct(_))
        ));
    }

    #[test]
    fn test_from_json_defaults_optional_fields() {
        let json = r#"{
            "products": [
                {"id": "9", "name": "Toe Ring", "category": "rings", "subcategory": "toe",
                 "price": "1499", "discountPrice": 1299, "description": "Silver toe ring",
                 "rating": 4.2, "stock": 40}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let product = catalog.find("9").unwrap();
        assert_eq!(product.effective_price(), Decimal::from(1299));
        assert!(!product.is_new);
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_featured_and_new_arrivals() {
        let catalog = Catalog::seed();
        let featured: Vec<&str> = catalog.featured().map(|p| p.id.as_str()).collect();
        let new: Vec<&str> = catalog.new_arrivals().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "4", "6"]);
        assert_eq!(new, vec!["3", "7"]);
    }
}
