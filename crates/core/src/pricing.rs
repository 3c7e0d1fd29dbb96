//! Price calculations for carts and orders.
//!
//! GST is 18% of the subtotal. Shipping is a flat charge unless the subtotal
//! exceeds the free-shipping threshold.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;

/// GST rate in percent.
pub const GST_PERCENT: u32 = 18;

/// Subtotals strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: u32 = 5000;

/// Shipping charge below the threshold.
pub const FLAT_SHIPPING: u32 = 250;

/// Rounded percentage saved by `discount` relative to `price`.
///
/// Returns 0 with no discount, a non-positive price, or a discount that
/// is not below the price.
#[must_use]
pub fn discount_percent(price: Decimal, discount: Option<Decimal>) -> u32 {
    let Some(discount) = discount else {
        return 0;
    };
    if price <= Decimal::ZERO {
        return 0;
    }
    ((price - discount) / price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Sum of effective price times quantity.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}

/// GST due on a subtotal.
#[must_use]
pub fn tax(subtotal: Decimal) -> Decimal {
    subtotal * Decimal::from(GST_PERCENT) / Decimal::ONE_HUNDRED
}

/// Shipping charge for a subtotal.
#[must_use]
pub fn shipping(subtotal: Decimal) -> Decimal {
    if subtotal > Decimal::from(FREE_SHIPPING_THRESHOLD) {
        Decimal::ZERO
    } else {
        Decimal::from(FLAT_SHIPPING)
    }
}

/// How much more must be added to qualify for free shipping.
///
/// `None` once the subtotal reaches the threshold. A subtotal of exactly the
/// threshold still pays shipping but gets no prompt, since "add ₹0" would
/// not help.
#[must_use]
pub fn amount_to_free_shipping(subtotal: Decimal) -> Option<Decimal> {
    let threshold = Decimal::from(FREE_SHIPPING_THRESHOLD);
    (subtotal < threshold).then(|| threshold - subtotal)
}

/// Subtotal plus GST plus shipping.
#[must_use]
pub fn total(subtotal: Decimal, shipping: Decimal) -> Decimal {
    subtotal + tax(subtotal) + shipping
}

/// Price breakdown shown on the cart and checkout pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the breakdown for a set of cart items.
    #[must_use]
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal = subtotal(items);
        let shipping = shipping(subtotal);
        Self {
            subtotal,
            tax: tax(subtotal),
            shipping,
            total: total(subtotal, shipping),
        }
    }

    #[must_use]
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn item(index: usize, quantity: u32) -> CartItem {
        let product = seed::products().into_iter().nth(index).unwrap();
        CartItem { product, quantity }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(
            discount_percent(Decimal::from(6999), Some(Decimal::from(5999))),
            14
        );
        assert_eq!(discount_percent(Decimal::from(1000), None), 0);
        assert_eq!(
            discount_percent(Decimal::from(1000), Some(Decimal::from(1200))),
            0
        );
    }

    #[test]
    fn test_tax_is_eighteen_percent() {
        assert_eq!(tax(Decimal::from(10_000)), Decimal::from(1800));
    }

    #[test]
    fn test_shipping_threshold_is_exclusive() {
        assert_eq!(shipping(Decimal::from(5000)), Decimal::from(250));
        assert_eq!(shipping(Decimal::from(5001)), Decimal::ZERO);
        assert_eq!(
            amount_to_free_shipping(Decimal::from(2999)),
            Some(Decimal::from(2001))
        );
        assert_eq!(amount_to_free_shipping(Decimal::from(5000)), None);
        assert_eq!(amount_to_free_shipping(Decimal::from(5001)), None);
    }

    #[test]
    fn test_summary_with_free_shipping() {
        // Kundan necklace x1 + jhumkas x2
        let items = vec![item(0, 1), item(2, 2)];
        let summary = OrderSummary::for_items(&items);

        assert_eq!(summary.subtotal, Decimal::from(26_997));
        assert_eq!(summary.tax, Decimal::new(485_946, 2));
        assert!(summary.is_free_shipping());
        assert_eq!(summary.total, Decimal::new(3_185_646, 2));
    }

    #[test]
    fn test_summary_with_flat_shipping() {
        let items = vec![item(7, 1)];
        let summary = OrderSummary::for_items(&items);

        assert_eq!(summary.shipping, Decimal::from(250));
        assert_eq!(summary.total, Decimal::new(378_882, 2));
    }
}
