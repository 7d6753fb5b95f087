//! Session

use jiff::Zoned;
use rusty_money::iso;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cart::Cart,
    catalog::{Catalog, CatalogError},
    content::{ContentStore, NewPost},
    fixtures::{self, FixtureError},
    ids::{PostId, ProductId},
    orders::{CheckoutError, CustomerDetails, Order, OrderLedger},
};

/// Errors while building a seeded storefront.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The embedded seed document failed to parse.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The seed catalog failed validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// All state for one shopper's session: catalog, cart, order ledger,
/// editorial content, and the admin visibility flag.
///
/// Construct one per session and drop it at session end; nothing here is
/// global or persistent. A restart starts from the seed data again.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    ledger: OrderLedger,
    content: ContentStore,
    admin_mode: bool,
}

impl Storefront {
    /// Create a storefront with an empty catalog and no content.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            cart: Cart::new(iso::EUR),
            ledger: OrderLedger::new(),
            content: ContentStore::new(),
            admin_mode: false,
        }
    }

    /// Create a storefront pre-populated with the bundled sample catalog and
    /// blog posts.
    ///
    /// # Errors
    ///
    /// Returns a [`SeedError`] if the embedded seed document fails to parse
    /// or validate; the document is covered by tests, so this is not
    /// expected at runtime.
    pub fn seeded() -> Result<Self, SeedError> {
        let mut storefront = Self::new();
        storefront.catalog = Catalog::with_products(fixtures::seed_products()?)?;
        storefront.content = ContentStore::with_posts(fixtures::seed_posts()?);

        Ok(storefront)
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access to the catalog, for admin CRUD flows.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// The session's cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the cart.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// The order ledger, most recent order first.
    #[must_use]
    pub fn orders(&self) -> &OrderLedger {
        &self.ledger
    }

    /// The editorial content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Add one unit of a catalog product to the cart, snapshotting it as it
    /// currently is.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the product is not in the
    /// catalog.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let product = self.catalog.get(id).ok_or(CatalogError::NotFound(id))?;
        self.cart.add(product);

        Ok(())
    }

    /// Place an order for the current cart contents, then clear the cart.
    ///
    /// The order freezes a copy of the cart lines and their subtotal; later
    /// cart activity never touches it. On any error the cart is left as it
    /// was.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the cart is empty, the customer details
    /// fail validation, or totalling the cart fails.
    pub fn checkout(&mut self, customer: CustomerDetails) -> Result<Order, CheckoutError> {
        let placed_on = Zoned::now().date();

        let order = self.ledger.place(customer, self.cart.lines(), placed_on)?;

        debug!(order = %order.id(), lines = self.cart.len(), "clearing cart after checkout");
        self.cart.clear();

        info!(order = %order.id(), total = %order.total(), "order placed");

        Ok(order)
    }

    /// Publish a blog post dated today. Returns the assigned identifier.
    pub fn publish_post(&mut self, post: NewPost) -> PostId {
        let published_on = Zoned::now().date();

        self.content.publish(post, published_on)
    }

    /// Whether administrative views are currently revealed.
    ///
    /// This is a visibility toggle for the presentation layer, not an access
    /// control mechanism.
    #[must_use]
    pub fn admin_mode(&self) -> bool {
        self.admin_mode
    }

    /// Flip the admin visibility flag and return its new value.
    pub fn toggle_admin_mode(&mut self) -> bool {
        self.admin_mode = !self.admin_mode;
        self.admin_mode
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
