//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are whole-unit [`Decimal`] values (rupees, not paise). Display
//! rounds to zero fractional digits and groups digits the way the currency's
//! region does, so Indian rupee amounts read `₹2,45,230` rather than
//! `₹245,230`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in Indian rupees.
    #[must_use]
    pub const fn inr(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::INR)
    }

    /// Format for display with no fractional digits (e.g., "₹2,450").
    ///
    /// Halves round away from zero. A value that rounds to zero never shows
    /// a minus sign.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();
        let grouped = group_digits(&digits, self.currency_code.grouping());
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{grouped}", self.currency_code.symbol())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }

    /// Thousands grouping convention for the currency's home region.
    #[must_use]
    pub const fn grouping(self) -> DigitGrouping {
        match self {
            Self::INR => DigitGrouping::Indian,
            Self::USD | Self::EUR | Self::GBP => DigitGrouping::Western,
        }
    }
}

/// How integer digits are split into comma-separated groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitGrouping {
    /// Groups of three: `1,234,567`.
    Western,
    /// Last three digits, then groups of two: `12,34,567`.
    Indian,
}

impl DigitGrouping {
    /// Whether a separator goes before the digit at `position`, counted
    /// from the right starting at zero.
    const fn separator_before(self, position: usize) -> bool {
        match self {
            Self::Western => position > 0 && position % 3 == 0,
            Self::Indian => position == 3 || (position > 3 && (position - 3) % 2 == 0),
        }
    }
}

/// Format an amount as Indian rupees with no fractional digits.
///
/// ```
/// use kundan_core::format_currency;
///
/// assert_eq!(format_currency(2450), "₹2,450");
/// assert_eq!(format_currency(245_230), "₹2,45,230");
/// ```
#[must_use]
pub fn format_currency(amount: impl Into<Decimal>) -> String {
    Price::inr(amount.into()).display()
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 2);
    for (position, digit) in digits.chars().rev().enumerate() {
        if grouping.separator_before(position) {
            reversed.push(',');
        }
        reversed.push(digit);
    }
    reversed.chars().rev().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_thousands() {
        assert_eq!(format_currency(2450), "₹2,450");
    }

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(0), "₹0");
        assert_eq!(format_currency(250), "₹250");
    }

    #[test]
    fn test_format_currency_lakhs_and_crores() {
        assert_eq!(format_currency(245_230), "₹2,45,230");
        assert_eq!(format_currency(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(Decimal::new(24_505, 1)), "₹2,451");
        assert_eq!(format_currency(Decimal::new(24_504, 1)), "₹2,450");
        assert_eq!(format_currency(Decimal::new(-24_505, 1)), "-₹2,451");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_currency(Decimal::new(-4, 1)), "₹0");
    }

    #[test]
    fn test_western_grouping() {
        let price = Price::new(Decimal::from(1_234_567), CurrencyCode::USD);
        assert_eq!(price.display(), "$1,234,567");
    }

    #[test]
    fn test_display_trait_matches_display() {
        let price = Price::inr(Decimal::from(15_999));
        assert_eq!(price.to_string(), "₹15,999");
    }

    #[test]
    fn test_serde_amount_as_string() {
        let price = Price::inr(Decimal::from(2450));
        let json = serde_json::to_value(price).unwrap();
        assert_eq!(json["amount"], "2450");
        assert_eq!(json["currency_code"], "INR");
    }
}
