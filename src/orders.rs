//! Orders

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::CartLine,
    ids::OrderId,
    pricing::{self, PricingError},
};

/// Errors that can reject a checkout.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The cart has no lines to order.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// The customer name was blank.
    #[error("customer name must not be empty")]
    MissingName,

    /// The customer email did not look like an address.
    #[error("customer email {0:?} is not a valid address")]
    InvalidEmail(String),

    /// Totalling the cart failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Fulfilment status of a placed order.
///
/// New orders start out [`OrderStatus::Pending`]. No transition logic lives
/// here; the field exists for fulfilment tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// Placed, awaiting fulfilment
    #[default]
    Pending,

    /// Handed to the carrier
    Shipped,

    /// Received by the customer
    Delivered,
}

/// Contact details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Customer display name
    pub name: String,

    /// Customer email address
    pub email: String,
}

/// An immutable record of a completed checkout.
///
/// The item list and total are frozen at placement; only the status is
/// expected to change over the order's life.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    customer: CustomerDetails,
    items: Vec<CartLine>,
    total: Money<'static, Currency>,
    status: OrderStatus,
    placed_on: Date,
}

impl Order {
    /// Order identifier.
    #[must_use]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Customer contact details captured at checkout.
    #[must_use]
    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// The cart lines as they were at checkout.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Subtotal of the items at checkout. Shipping is not included.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Current fulfilment status.
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Calendar date the order was placed.
    #[must_use]
    pub fn placed_on(&self) -> Date {
        self.placed_on
    }
}

/// Append-only ledger of placed orders, most recent first.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an order for the given cart lines, freezing a copy of them and
    /// their subtotal, and prepend it to the ledger. Returns a copy of the
    /// placed order.
    ///
    /// The caller owns clearing the cart afterwards; the ledger only reads
    /// the lines.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: `lines` is empty.
    /// - [`CheckoutError::MissingName`]: The customer name is blank.
    /// - [`CheckoutError::InvalidEmail`]: The email is not a plausible
    ///   address.
    /// - [`CheckoutError::Pricing`]: Totalling the lines failed.
    pub fn place(
        &mut self,
        customer: CustomerDetails,
        lines: &[CartLine],
        placed_on: Date,
    ) -> Result<Order, CheckoutError> {
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if customer.name.trim().is_empty() {
            return Err(CheckoutError::MissingName);
        }

        if !email_is_plausible(&customer.email) {
            return Err(CheckoutError::InvalidEmail(customer.email));
        }

        let total = pricing::subtotal(lines)?;

        let order = Order {
            id: OrderId::new(),
            customer,
            items: lines.to_vec(),
            total,
            status: OrderStatus::Pending,
            placed_on,
        };

        self.orders.insert(0, order.clone());

        Ok(order)
    }

    /// All orders, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by identifier.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Number of placed orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check whether any order has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a domain
/// containing a dot. Deliverability is out of scope.
fn email_is_plausible(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
