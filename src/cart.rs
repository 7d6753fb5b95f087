//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    ids::ProductId,
    pricing::{self, PricingError},
    products::Product,
};

/// Errors for cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No line for the given product exists in the cart.
    #[error("no cart line for product {0}")]
    UnknownItem(ProductId),

    /// Quantities below 1 are not representable; remove the line instead.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
}

/// A product snapshot plus a quantity.
///
/// The snapshot is a deep copy taken when the product first enters the cart;
/// later catalog edits never propagate to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// The product as it looked when first added to the cart.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Number of units of this product in the cart. Always at least 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// The working set of items a single session intends to purchase.
///
/// Holds at most one line per product id; adding an already-present product
/// increments its quantity instead of duplicating the line.
#[derive(Debug)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart that totals in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of the given product.
    ///
    /// If a line for the product already exists its quantity increases by
    /// exactly 1 and the original snapshot is kept; otherwise a new line with
    /// quantity 1 is appended, snapshotting the product as given.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
    }

    /// Remove and return the line for the given product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if no line for that product exists.
    pub fn remove(&mut self, id: ProductId) -> Result<CartLine, CartError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.product.id == id)
            .ok_or(CartError::UnknownItem(id))?;

        Ok(self.lines.remove(position))
    }

    /// Replace the quantity of the line for the given product.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is 0; the line is left
    ///   untouched. Removal is the only way to take a product out of the
    ///   cart.
    /// - [`CartError::UnknownItem`]: No line for that product exists.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let line = self.line_mut(id).ok_or(CartError::UnknownItem(id))?;
        line.quantity = quantity;

        Ok(())
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines, for display badges.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Subtotal of the cart (no shipping), zero when the cart is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] on money arithmetic or currency mismatch
    /// errors.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, PricingError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        pricing::subtotal(&self.lines)
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The currency the cart totals in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }
}
