//! Core types for Kundan.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;

pub use id::*;
pub use price::{CurrencyCode, DigitGrouping, Price, format_currency};
pub use status::*;
