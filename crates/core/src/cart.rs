//! Shopping cart.
//!
//! The cart owns its line items and only changes through named actions,
//! each of which keeps every quantity within `1..=stock`. A line whose
//! quantity would drop below one is removed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Product;
use crate::pricing::{self, OrderSummary};
use crate::types::ProductId;

/// Errors from cart actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("product {0} is not in the cart")]
    UnknownItem(ProductId),
    #[error("only {available} of product {id} in stock (requested {requested})")]
    OutOfStock {
        id: ProductId,
        requested: u32,
        available: u32,
    },
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Effective price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.effective_price() * Decimal::from(self.quantity)
    }

    const fn can_increment(&self) -> bool {
        self.quantity < self.product.stock
    }
}

/// A shopper's cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product, merging with an existing line.
    ///
    /// Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] for a zero quantity and
    /// [`CartError::OutOfStock`] if the line would exceed the product's stock.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<u32, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let existing = self.position(&product.id);
        let current = existing
            .and_then(|index| self.items.get(index))
            .map_or(0, |item| item.quantity);
        let requested = current.saturating_add(quantity);
        check_stock(product, requested)?;

        match existing.and_then(|index| self.items.get_mut(index)) {
            Some(item) => item.quantity = requested,
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: requested,
            }),
        }
        Ok(requested)
    }

    /// Increase a line by one.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not in the cart or is already at
    /// its stock limit.
    pub fn increment(&mut self, id: &ProductId) -> Result<u32, CartError> {
        let item = self.item_mut(id)?;
        if !item.can_increment() {
            return Err(CartError::OutOfStock {
                id: id.clone(),
                requested: item.quantity.saturating_add(1),
                available: item.product.stock,
            });
        }
        item.quantity += 1;
        Ok(item.quantity)
    }

    /// Decrease a line by one, removing it when it reaches zero.
    ///
    /// Returns the new quantity, or `None` if the line was removed.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if the product is not in the cart.
    pub fn decrement(&mut self, id: &ProductId) -> Result<Option<u32>, CartError> {
        let item = self.item_mut(id)?;
        if item.quantity > 1 {
            item.quantity -= 1;
            return Ok(Some(item.quantity));
        }
        self.remove(id)?;
        Ok(None)
    }

    /// Set a line's quantity; zero removes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not in the cart or the quantity
    /// exceeds stock.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<Option<u32>, CartError> {
        if quantity == 0 {
            self.remove(id)?;
            return Ok(None);
        }
        let item = self.item_mut(id)?;
        check_stock(&item.product, quantity)?;
        item.quantity = quantity;
        Ok(Some(quantity))
    }

    /// Remove a line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if the product is not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> Result<CartItem, CartError> {
        let index = self
            .position(id)
            .ok_or_else(|| CartError::UnknownItem(id.clone()))?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove and return every line.
    pub fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == *id)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        unit_count(&self.items)
    }

    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        pricing::subtotal(&self.items)
    }

    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::for_items(&self.items)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == *id)
    }

    fn item_mut(&mut self, id: &ProductId) -> Result<&mut CartItem, CartError> {
        self.items
            .iter_mut()
            .find(|item| item.product.id == *id)
            .ok_or_else(|| CartError::UnknownItem(id.clone()))
    }
}

/// Total units across lines, saturating at `u32::MAX`.
pub(crate) fn unit_count(items: &[CartItem]) -> u32 {
    items
        .iter()
        .fold(0_u32, |count, item| count.saturating_add(item.quantity))
}

fn check_stock(product: &Product, requested: u32) -> Result<(), CartError> {
    if requested > product.stock {
        return Err(CartError::OutOfStock {
            id: product.id.clone(),
            requested,
            available: product.stock,
        });
    }
    Ok(())
}
