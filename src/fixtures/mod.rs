//! Fixtures
//!
//! Embedded sample catalog and blog posts used to seed a fresh storefront,
//! parsed from a YAML document compiled into the crate.

use jiff::civil::Date;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    content::BlogPost,
    ids::{PostId, ProductId},
    products::{Category, Product},
};

const SEED: &str = include_str!("seed.yaml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid acidity percentage
    #[error("invalid acidity value: {0}")]
    InvalidAcidity(String),
}

/// Seed document wrapper
#[derive(Debug, Deserialize)]
struct SeedFixture {
    products: Vec<ProductFixture>,
    posts: Vec<PostFixture>,
}

/// Product entry in the seed document
#[derive(Debug, Deserialize)]
struct ProductFixture {
    name: String,
    brand: String,

    /// Price string, e.g. `"24.90 EUR"`
    price: String,

    size: String,
    category: Category,

    /// Acidity percentage string, e.g. `"0.1"`
    acidity: String,

    stock: u32,
    description: String,
    image: String,
    featured: bool,
}

/// Blog post entry in the seed document
#[derive(Debug, Deserialize)]
struct PostFixture {
    title: String,
    excerpt: String,
    body: String,
    image: String,

    /// ISO date, e.g. `2023-10-15`
    date: Date,

    author: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let acidity = fixture
            .acidity
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidAcidity(fixture.acidity.clone()))?;

        Ok(Product {
            id: ProductId::new(),
            name: fixture.name,
            brand: fixture.brand,
            price: Money::from_minor(minor_units, currency),
            size: fixture.size,
            category: fixture.category,
            acidity,
            stock: fixture.stock,
            description: fixture.description,
            image: fixture.image,
            featured: fixture.featured,
        })
    }
}

impl From<PostFixture> for BlogPost {
    fn from(fixture: PostFixture) -> Self {
        Self {
            id: PostId::new(),
            title: fixture.title,
            excerpt: fixture.excerpt,
            body: fixture.body,
            image: fixture.image,
            published_on: fixture.date,
            author: fixture.author,
        }
    }
}

/// Parse a price string (e.g. `"24.90 EUR"`) into minor units and currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format `"AMOUNT CURRENCY"`,
/// if the amount cannot be parsed as a decimal, or if the currency code is
/// not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let (amount, currency_code) = s
        .split_once(' ')
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "EUR" => EUR,
        "GBP" => GBP,
        "USD" => USD,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

fn seed() -> Result<SeedFixture, FixtureError> {
    Ok(serde_norway::from_str(SEED)?)
}

/// The bundled sample catalog, in display order, with fresh identifiers.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded document fails to parse.
pub fn seed_products() -> Result<Vec<Product>, FixtureError> {
    seed()?.products.into_iter().map(Product::try_from).collect()
}

/// The bundled sample blog posts, most recent first, with fresh identifiers.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded document fails to parse.
pub fn seed_posts() -> Result<Vec<BlogPost>, FixtureError> {
    let mut posts: Vec<BlogPost> = seed()?.posts.into_iter().map(BlogPost::from).collect();

    posts.sort_by(|a, b| b.published_on.cmp(&a.published_on));

    Ok(posts)
}
