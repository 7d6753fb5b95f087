//! Almazara prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    content::{BlogPost, ContentStore, NewPost},
    copywriter::{
        Copywriter, CopywriterError, DESCRIPTION_FALLBACK, DESCRIPTION_UNAVAILABLE,
        GeminiCopywriter, PostIdea, ProductBrief, describe_product, suggest_post,
    },
    fixtures::FixtureError,
    ids::{OrderId, PostId, ProductId},
    orders::{CheckoutError, CustomerDetails, Order, OrderLedger, OrderStatus},
    pricing::PricingError,
    products::{Category, NewProduct, Product, ProductUpdate},
    session::{SeedError, Storefront},
};
