//! Checkout: turning a cart into a pending order.
//!
//! Order numbers, tracking numbers and delivery estimates are drawn from an
//! injected random source so callers can seed it for reproducible output.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::{info, instrument};

use crate::cart::Cart;
use crate::orders::{Address, Order, PaymentMethod};
use crate::types::{CustomerId, OrderId, OrderStatus};

const ORDER_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ORDER_ID_LEN: usize = 8;
const TRACKING_PREFIX: &str = "TRK";
const TRACKING_DIGITS_BOUND: u32 = 1_000_000;
const MIN_DELIVERY_DAYS: i64 = 3;
const MAX_DELIVERY_DAYS: i64 = 12;

/// Errors placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Generator for order identifiers and carrier details.
#[derive(Debug, Clone)]
pub struct OrderNumbers<R> {
    rng: R,
}

impl<R: Rng> OrderNumbers<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Eight characters from `A-Z0-9`.
    pub fn order_id(&mut self) -> OrderId {
        let id: String = (0..ORDER_ID_LEN)
            .filter_map(|_| ORDER_ID_ALPHABET.choose(&mut self.rng))
            .map(|&b| char::from(b))
            .collect();
        OrderId::new(id)
    }

    /// `TRK` followed by up to six digits.
    pub fn tracking_number(&mut self) -> String {
        let digits = self.rng.random_range(0..TRACKING_DIGITS_BOUND);
        format!("{TRACKING_PREFIX}{digits}")
    }

    /// A delivery date 3 to 12 days after `from`, formatted like
    /// `24 October 2026`.
    pub fn estimated_delivery(&mut self, from: DateTime<Utc>) -> String {
        let days = self
            .rng
            .random_range(MIN_DELIVERY_DAYS..=MAX_DELIVERY_DAYS);
        format_delivery_date(from + Duration::days(days))
    }
}

/// Format a date the way delivery estimates are shown (`7 November 2026`).
#[must_use]
pub fn format_delivery_date(date: DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Places orders from carts.
#[derive(Debug, Clone)]
pub struct Checkout<R> {
    numbers: OrderNumbers<R>,
}

impl<R: Rng> Checkout<R> {
    pub const fn new(rng: R) -> Self {
        Self {
            numbers: OrderNumbers::new(rng),
        }
    }

    /// Create a pending order from the cart's contents and empty the cart.
    ///
    /// The order total is the cart subtotal plus GST plus shipping.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no items; the
    /// cart is left untouched.
    #[instrument(skip_all, fields(customer_id = %customer_id))]
    pub fn place_order(
        &mut self,
        cart: &mut Cart,
        customer_id: CustomerId,
        shipping_address: Address,
        payment_method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let summary = cart.summary();
        let items = cart.take_items();
        let order = Order {
            id: self.numbers.order_id(),
            customer_id,
            items,
            status: OrderStatus::Pending,
            shipping_address,
            payment_method,
            payment_status: payment_method.initial_status(),
            total_amount: summary.total,
            created_at: now,
            updated_at: now,
            tracking_number: None,
            estimated_delivery: None,
        };

        info!(
            order_id = %order.id,
            items = order.item_count(),
            total = %order.total_amount,
            "Order placed"
        );
        Ok(order)
    }

    /// Advance an order one status, attaching carrier details when it
    /// leaves `pending`.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::OrderError`] for delivered or cancelled orders.
    pub fn advance(
        &mut self,
        order: &mut Order,
        now: DateTime<Utc>,
    ) -> Result<OrderStatus, crate::OrderError> {
        let status = order.advance(now)?;
        if order.tracking_number.is_none() {
            let tracking = self.numbers.tracking_number();
            let estimate = self.numbers.estimated_delivery(now);
            order.attach_tracking(tracking, estimate);
        }
        Ok(status)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::seed;
    use crate::orders::tests::address;
    use crate::types::PaymentStatus;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    fn filled_cart() -> Cart {
        let products = seed::products();
        let mut cart = Cart::new();
        cart.add(&products[0], 1).unwrap();
        cart.add(&products[2], 2).unwrap();
        cart
    }

    #[test]
    fn test_place_order_builds_pending_order() {
        let mut checkout = Checkout::new(StdRng::seed_from_u64(7));
        let mut cart = filled_cart();

        let order = checkout
            .place_order(
                &mut cart,
                CustomerId::new("CUST123"),
                address(),
                PaymentMethod::Card,
                now(),
            )
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Completed);
        assert_eq!(order.total_amount, Decimal::new(3_185_646, 2));
        assert_eq!(order.item_count(), 3);
        assert!(order.tracking_number.is_none());
    }

    #[test]
    fn test_place_order_rejects_empty_cart() {
        let mut checkout = Checkout::new(StdRng::seed_from_u64(7));
        let result = checkout.place_order(
            &mut Cart::new(),
            CustomerId::new("CUST123"),
            address(),
            PaymentMethod::Cod,
            now(),
        );
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_order_ids_are_deterministic_for_a_seed() {
        let mut a = OrderNumbers::new(StdRng::seed_from_u64(42));
        let mut b = OrderNumbers::new(StdRng::seed_from_u64(42));
        let id = a.order_id();

        assert_eq!(id, b.order_id());
        assert_eq!(id.as_str().len(), 8);
        assert!(
            id.as_str()
                .bytes()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_tracking_number_format() {
        let mut numbers = OrderNumbers::new(StdRng::seed_from_u64(1));
        let tracking = numbers.tracking_number();
        let digits = tracking.strip_prefix("TRK").unwrap();
        assert!(!digits.is_empty() && digits.len() <= 6);
        assert!(digits.bytes().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_estimated_delivery_window() {
        let mut numbers = OrderNumbers::new(StdRng::seed_from_u64(3));
        let allowed: Vec<String> = (3..=12)
            .map(|d| format_delivery_date(now() + Duration::days(d)))
            .collect();
        for _ in 0..20 {
            assert!(allowed.contains(&numbers.estimated_delivery(now())));
        }
    }

    #[test]
    fn test_format_delivery_date() {
        assert_eq!(format_delivery_date(now()), "17 October 2026");
        let early = Utc.with_ymd_and_hms(2026, 11, 7, 0, 0, 0).unwrap();
        assert_eq!(format_delivery_date(early), "7 November 2026");
    }

    #[test]
    fn test_advance_attaches_tracking_once() {
        let mut checkout = Checkout::new(StdRng::seed_from_u64(9));
        let mut order = checkout
            .place_order(
                &mut filled_cart(),
                CustomerId::new("CUST123"),
                address(),
                PaymentMethod::Upi,
                now(),
            )
            .unwrap();

        checkout.advance(&mut order, now()).unwrap();
        let tracking = order.tracking_number.clone().unwrap();
        assert!(order.estimated_delivery.is_some());

        checkout.advance(&mut order, now()).unwrap();
        assert_eq!(order.tracking_number.as_deref(), Some(tracking.as_str()));
        assert_eq!(order.status, OrderStatus::Shipped);
    }
}
