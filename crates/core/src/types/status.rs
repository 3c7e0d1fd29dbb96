//! Status enums for orders and payments.
//!
//! Order statuses advance `pending -> processing -> shipped -> delivered`.
//! `cancelled` is terminal and sits outside that progression, which is why
//! its step is the [`CANCELLED_STEP`] sentinel rather than an ordinal.

use serde::{Deserialize, Serialize};

/// Step of the last status in the progression (`delivered`).
pub const FINAL_STEP: i8 = 3;

/// Step reported for a cancelled order.
pub const CANCELLED_STEP: i8 = -1;

/// Error returned when a status string is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} status: {value}")]
pub struct StatusParseError {
    kind: &'static str,
    value: String,
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    /// Terminal; excluded from the progress ordering.
    Cancelled,
}

impl OrderStatus {
    /// Statuses in progression order, excluding `Cancelled`.
    pub const PROGRESSION: [Self; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
    ];

    /// Ordinal position in the progression, or [`CANCELLED_STEP`].
    #[must_use]
    pub const fn step(self) -> i8 {
        match self {
            Self::Pending => 0,
            Self::Processing => 1,
            Self::Shipped => 2,
            Self::Delivered => FINAL_STEP,
            Self::Cancelled => CANCELLED_STEP,
        }
    }

    /// Progress through the progression as a percentage (0 when cancelled).
    #[must_use]
    pub fn progress_percent(self) -> f64 {
        progress_percent(self.step())
    }

    /// The status that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Processing),
            Self::Processing => Some(Self::Shipped),
            Self::Shipped => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human-readable label (e.g. "Shipped").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(StatusParseError {
                kind: "order",
                value: s.to_owned(),
            }),
        }
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(StatusParseError {
                kind: "payment",
                value: s.to_owned(),
            }),
        }
    }
}

/// Map a raw status string to its progress step.
///
/// Total over all inputs: unrecognised strings map to step 0, the same as
/// `pending`.
///
/// ```
/// use kundan_core::status_step;
///
/// assert_eq!(status_step("shipped"), 2);
/// assert_eq!(status_step("cancelled"), -1);
/// assert_eq!(status_step("on_hold"), 0);
/// ```
#[must_use]
pub fn status_step(status: &str) -> i8 {
    status.parse::<OrderStatus>().map_or(0, OrderStatus::step)
}

/// Progress percentage for a step: `step / 3 * 100`, or 0 for the cancelled
/// sentinel.
#[must_use]
pub fn progress_percent(step: i8) -> f64 {
    if step == CANCELLED_STEP {
        return 0.0;
    }
    f64::from(step) / f64::from(FINAL_STEP) * 100.0
}
