//! Almazara
//!
//! Almazara is the in-memory state engine behind an olive-oil storefront:
//! product catalog, cart, order ledger, editorial content, and a thin
//! best-effort bridge to a generative-text service for admin copywriting.
//!
//! All state lives inside a [`session::Storefront`] constructed for one
//! shopper's session; nothing is persisted and nothing is global. Mutations
//! are synchronous and immediately visible to every reader of the same
//! session. The only asynchronous surface is the [`copywriter`] bridge,
//! which degrades to fixed fallback values instead of surfacing errors.

pub mod cart;
pub mod catalog;
pub mod content;
pub mod copywriter;
pub mod fixtures;
pub mod ids;
pub mod orders;
pub mod pricing;
pub mod products;
pub mod session;

pub mod prelude;
