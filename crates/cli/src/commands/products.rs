//! Catalog browsing commands.

use kundan_core::source::{CatalogSource, SourceError, search_products};
use kundan_core::text::truncate_text;
use kundan_core::{FilterCriteria, Product, ProductId, format_currency};
use tracing::{info, warn};

use super::StoreCatalog;

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// List products matching the criteria.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub async fn list(catalog: &StoreCatalog, criteria: &FilterCriteria) -> Result<(), SourceError> {
    let products = search_products(catalog, criteria).await?;

    info!(
        matched = products.len(),
        active_filters = criteria.active_count(),
        "Catalog search"
    );
    if products.is_empty() {
        warn!("No products match the selected filters");
        return Ok(());
    }

    for product in &products {
        info!("{}", summary_line(product));
    }
    Ok(())
}

/// Show a product in detail.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or the product does not exist.
pub async fn show(
    catalog: &StoreCatalog,
    id: &ProductId,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = catalog
        .fetch_product(id)
        .await?
        .ok_or_else(|| format!("Product not found: {id}"))?;

    info!("{} ({})", product.name, product.id);
    info!("  Category: {} / {}", product.category, product.subcategory);
    info!("  Price: {}", price_label(&product));
    info!("  Rating: {:.1}", product.rating);
    if product.is_in_stock() {
        info!("  In stock: {}", product.stock);
    } else {
        info!("  Out of stock");
    }
    info!("  {}", product.description);
    for feature in &product.features {
        info!("  - {feature}");
    }
    Ok(())
}

/// List trending products and new arrivals.
pub fn featured(catalog: &StoreCatalog) {
    let catalog = catalog.source().catalog();

    info!("Trending");
    for product in catalog.featured() {
        info!("{}", summary_line(product));
    }
    info!("New arrivals");
    for product in catalog.new_arrivals() {
        info!("{}", summary_line(product));
    }
}

/// List the catalog's categories.
pub fn categories(catalog: &StoreCatalog) {
    let categories = catalog.source().catalog().categories();
    if categories.is_empty() {
        warn!("Catalog defines no categories");
    }
    for category in categories {
        info!("{:<14} {}", category.id, category.name);
    }
}

fn price_label(product: &Product) -> String {
    match product.discount_price {
        Some(discount) => format!(
            "{} (was {}, {}% off)",
            format_currency(discount),
            format_currency(product.price),
            product.discount_percent()
        ),
        None => format_currency(product.price),
    }
}

fn summary_line(product: &Product) -> String {
    let mut badges = Vec::new();
    if product.is_new {
        badges.push("new");
    }
    if product.is_trending {
        badges.push("trending");
    }
    if !product.is_in_stock() {
        badges.push("sold out");
    }
    let badges = if badges.is_empty() {
        String::new()
    } else {
        format!(" [{}]", badges.join(", "))
    };

    format!(
        "{:>3}  {:<34} {:>10}  {}{badges}",
        product.id,
        product.name,
        price_label(product),
        truncate_text(&product.description, DESCRIPTION_PREVIEW_CHARS)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kundan_core::Catalog;
    use rust_decimal::Decimal;

    use super::*;

    fn necklace() -> Product {
        Catalog::seed().find("1").unwrap().clone()
    }

    #[test]
    fn test_price_label_without_discount() {
        assert_eq!(price_label(&necklace()), "₹12,999");
    }

    #[test]
    fn test_price_label_with_discount() {
        let mut product = necklace();
        product.discount_price = Some(Decimal::from(9999));
        assert_eq!(price_label(&product), "₹9,999 (was ₹12,999, 23% off)");
    }

    #[test]
    fn test_summary_line_badges() {
        let mut product = necklace();
        product.stock = 0;
        let line = summary_line(&product);
        assert!(line.contains("[trending, sold out]"));
        assert!(line.contains("Royal Rajasthani Kundan Necklace"));
    }
}
