//! Orders, shipping addresses, and the order tracking projection.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{CartItem, unit_count};
use crate::types::{CustomerId, OrderId, OrderStatus, PaymentStatus};

/// Errors from order status transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order {id} is {status} and cannot change status")]
    Terminal { id: OrderId, status: OrderStatus },
    #[error("order {0} has shipped and can no longer be cancelled")]
    AlreadyShipped(OrderId),
}

/// Error returned when a payment method string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid payment method: {0}")]
pub struct PaymentMethodParseError(String);

/// Shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub full_name: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

impl Address {
    /// Address rendered as display lines, skipping an empty second line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.full_name.clone(), self.address_line1.clone()];
        if let Some(line2) = self.address_line2.as_ref().filter(|l| !l.is_empty()) {
            lines.push(line2.clone());
        }
        lines.push(format!("{}, {} {}", self.city, self.state, self.postal_code));
        lines.push(self.country.clone());
        lines.push(format!("Phone: {}", self.phone));
        lines
    }
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    /// Cash on delivery.
    Cod,
}

impl PaymentMethod {
    /// Payment status right after checkout. Card and UPI are captured at
    /// checkout; cash on delivery is collected later.
    #[must_use]
    pub const fn initial_status(self) -> PaymentStatus {
        match self {
            Self::Card | Self::Upi => PaymentStatus::Completed,
            Self::Cod => PaymentStatus::Pending,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Upi => write!(f, "upi"),
            Self::Cod => write!(f, "cod"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = PaymentMethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            "cod" => Ok(Self::Cod),
            _ => Err(PaymentMethodParseError(s.to_owned())),
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<CartItem>,
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
}

impl Order {
    /// Move to the next status in the progression.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Terminal`] for delivered or cancelled orders.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<OrderStatus, OrderError> {
        let next = self.status.next().ok_or_else(|| OrderError::Terminal {
            id: self.id.clone(),
            status: self.status,
        })?;
        self.status = next;
        self.updated_at = now;
        Ok(next)
    }

    /// Cancel an order that has not shipped yet.
    ///
    /// # Errors
    ///
    /// Returns an error once the order has shipped, been delivered, or was
    /// already cancelled.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<(), OrderError> {
        match self.status {
            OrderStatus::Pending | OrderStatus::Processing => {
                self.status = OrderStatus::Cancelled;
                self.updated_at = now;
                Ok(())
            }
            OrderStatus::Shipped => Err(OrderError::AlreadyShipped(self.id.clone())),
            OrderStatus::Delivered | OrderStatus::Cancelled => Err(OrderError::Terminal {
                id: self.id.clone(),
                status: self.status,
            }),
        }
    }

    /// Record carrier details.
    pub fn attach_tracking(
        &mut self,
        tracking_number: impl Into<String>,
        estimated_delivery: impl Into<String>,
    ) {
        self.tracking_number = Some(tracking_number.into());
        self.estimated_delivery = Some(estimated_delivery.into());
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        unit_count(&self.items)
    }

    #[must_use]
    pub fn tracking(&self) -> OrderTracking {
        OrderTracking::from(self)
    }
}

/// One milestone on the tracking timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub status: OrderStatus,
    pub reached: bool,
}

/// Display projection of an order's progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTracking {
    pub order_id: OrderId,
    pub status: OrderStatus,
    /// 0..=3, or -1 when cancelled.
    pub step: i8,
    pub progress_percent: f64,
    pub cancelled: bool,
    pub milestones: [Milestone; 4],
    pub tracking_number: Option<String>,
    pub estimated_delivery: Option<String>,
}

impl From<&Order> for OrderTracking {
    fn from(order: &Order) -> Self {
        let step = order.status.step();
        let milestones = OrderStatus::PROGRESSION.map(|status| Milestone {
            status,
            reached: step >= status.step(),
        });
        Self {
            order_id: order.id.clone(),
            status: order.status,
            step,
            progress_percent: order.status.progress_percent(),
            cancelled: order.status == OrderStatus::Cancelled,
            milestones,
            tracking_number: order.tracking_number.clone(),
            estimated_delivery: order.estimated_delivery.clone(),
        }
    }
}
