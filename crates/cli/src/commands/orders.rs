//! Cart quote and order tracking commands.

use chrono::Utc;
use kundan_core::source::{CatalogSource, InMemoryOrders, OrderSource};
use kundan_core::{
    Address, Cart, Checkout, CustomerId, OrderStatus, OrderSummary, OrderTracking, PaymentMethod,
    ProductId, format_currency, pricing, progress_percent, status_step,
};
use rand::Rng;
use tracing::{info, warn};

use super::StoreCatalog;

const PROGRESS_BAR_WIDTH: usize = 30;
const DEMO_CUSTOMER: &str = "CUST123";

/// One `id:quantity` cart line from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Parse `id:quantity`, or a bare `id` meaning quantity 1.
///
/// # Errors
///
/// Returns a message if the id is empty or the quantity is not a positive integer.
pub fn parse_line_item(s: &str) -> Result<LineItem, String> {
    let (id, quantity) = match s.split_once(':') {
        Some((id, quantity)) => {
            let quantity = quantity
                .parse::<u32>()
                .map_err(|e| format!("invalid quantity in '{s}': {e}"))?;
            (id, quantity)
        }
        None => (s, 1),
    };
    if id.is_empty() {
        return Err(format!("missing product id in '{s}'"));
    }
    if quantity == 0 {
        return Err(format!("quantity must be at least 1 in '{s}'"));
    }
    Ok(LineItem {
        product_id: ProductId::new(id),
        quantity,
    })
}

/// Fill a cart from command-line lines.
async fn build_cart(
    catalog: &StoreCatalog,
    items: &[LineItem],
) -> Result<Cart, Box<dyn std::error::Error>> {
    let mut cart = Cart::new();
    for item in items {
        let product = catalog
            .fetch_product(&item.product_id)
            .await?
            .ok_or_else(|| format!("Product not found: {}", item.product_id))?;
        cart.add(&product, item.quantity)?;
    }
    Ok(cart)
}

/// Print the price breakdown for a cart.
///
/// # Errors
///
/// Returns an error if a product is unknown or a quantity exceeds stock.
pub async fn quote(
    catalog: &StoreCatalog,
    items: &[LineItem],
) -> Result<(), Box<dyn std::error::Error>> {
    let cart = build_cart(catalog, items).await?;

    for item in cart.items() {
        info!(
            "{:>3} x {:<34} {:>10}",
            item.quantity,
            item.product.name,
            format_currency(item.line_total())
        );
    }
    log_summary(&cart.summary());
    if let Some(remaining) = pricing::amount_to_free_shipping(cart.subtotal()) {
        info!(
            "Add {} more to get free shipping",
            format_currency(remaining)
        );
    }
    Ok(())
}

/// Place a demo order, move it to `target`, and print its tracking view.
///
/// # Errors
///
/// Returns an error if the cart cannot be built or the status cannot be
/// reached.
pub async fn track<R: Rng>(
    catalog: &StoreCatalog,
    rng: R,
    items: &[LineItem],
    target: OrderStatus,
    payment: PaymentMethod,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = build_cart(catalog, items).await?;
    let mut checkout = Checkout::new(rng);
    let store = InMemoryOrders::new();

    let mut order = checkout.place_order(
        &mut cart,
        CustomerId::new(DEMO_CUSTOMER),
        demo_address(),
        payment,
        Utc::now(),
    )?;

    if target == OrderStatus::Cancelled {
        order.cancel(Utc::now())?;
    } else {
        while order.status.step() < target.step() {
            checkout.advance(&mut order, Utc::now())?;
        }
    }
    store.save_order(order.clone()).await?;

    let stored = store
        .fetch_order(&order.id)
        .await?
        .ok_or("Order was not saved")?;
    log_tracking(&stored.tracking());
    info!(
        "Total {} paid by {} ({})",
        format_currency(stored.total_amount),
        stored.payment_method,
        stored.payment_status
    );
    for line in stored.shipping_address.lines() {
        info!("  {line}");
    }
    Ok(())
}

/// Print the step and progress for a raw status string.
pub fn status(raw: &str) {
    let step = status_step(raw);
    if raw.parse::<OrderStatus>().is_err() {
        warn!(status = raw, "Unrecognised status, treating as pending");
    }
    info!(
        "{raw}: step {step}, {:.2}% complete",
        progress_percent(step)
    );
}

fn log_summary(summary: &OrderSummary) {
    info!("Subtotal: {}", format_currency(summary.subtotal));
    info!("GST (18%): {}", format_currency(summary.tax));
    if summary.is_free_shipping() {
        info!("Shipping: Free");
    } else {
        info!("Shipping: {}", format_currency(summary.shipping));
    }
    info!("Total: {}", format_currency(summary.total));
}

fn log_tracking(tracking: &OrderTracking) {
    info!("Order #{} - {}", tracking.order_id, tracking.status.label());
    if tracking.cancelled {
        warn!("This order has been cancelled");
        return;
    }

    info!(
        "[{}] {:.0}%",
        progress_bar(tracking.progress_percent),
        tracking.progress_percent
    );
    for milestone in &tracking.milestones {
        let mark = if milestone.reached { 'x' } else { ' ' };
        info!("  [{mark}] {}", milestone.status.label());
    }
    if let Some(number) = &tracking.tracking_number {
        info!("Tracking number: {number}");
    }
    if let Some(estimate) = &tracking.estimated_delivery {
        info!("Estimated delivery: {estimate}");
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)] // percent is clamped to 0..=100
fn progress_bar(percent: f64) -> String {
    let filled = (percent.clamp(0.0, 100.0) / 100.0 * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn demo_address() -> Address {
    Address {
        full_name: "Aryan Sharma".to_string(),
        address_line1: "123 Main Street".to_string(),
        address_line2: Some("Apartment 4B".to_string()),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        postal_code: "400001".to_string(),
        country: "India".to_string(),
        phone: "+91 9876543210".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_item() {
        assert_eq!(
            parse_line_item("3:2").unwrap(),
            LineItem {
                product_id: ProductId::new("3"),
                quantity: 2
            }
        );
        assert_eq!(parse_line_item("8").unwrap().quantity, 1);
    }

    #[test]
    fn test_parse_line_item_rejects_bad_input() {
        assert!(parse_line_item(":2").is_err());
        assert!(parse_line_item("1:0").is_err());
        assert!(parse_line_item("1:two").is_err());
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0), "-".repeat(30));
        assert_eq!(progress_bar(100.0), "#".repeat(30));
        assert_eq!(progress_bar(200.0 / 3.0).matches('#').count(), 20);
    }
}
