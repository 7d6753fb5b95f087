//! Products

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::ids::ProductId;

/// Catalog category tag for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Extra virgin olive oil
    ExtraVirgin,

    /// Certified organic production
    Organic,

    /// Infused or flavoured oils
    Flavored,

    /// Gourmet and gift ranges
    Gourmet,
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier, assigned by the catalog at creation
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Producer brand
    pub brand: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Bottle or container size label, e.g. `"500ml"`
    pub size: String,

    /// Category tag
    pub category: Category,

    /// Acidity as a percentage, e.g. `0.1`
    pub acidity: Decimal,

    /// Units in stock
    pub stock: u32,

    /// Marketing description
    pub description: String,

    /// Image URL
    pub image: String,

    /// Whether the product is featured on the storefront
    pub featured: bool,
}

/// Attributes for a product about to enter the catalog.
///
/// The catalog assigns the identifier; everything else is supplied here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Producer brand
    pub brand: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Bottle or container size label
    pub size: String,

    /// Category tag
    pub category: Category,

    /// Acidity as a percentage
    pub acidity: Decimal,

    /// Units in stock
    pub stock: u32,

    /// Marketing description
    pub description: String,

    /// Image URL
    pub image: String,

    /// Whether the product is featured on the storefront
    pub featured: bool,
}

/// Full replacement of a product's attributes.
///
/// An update replaces every attribute of the entry; the identifier and the
/// catalog position are preserved.
pub type ProductUpdate = NewProduct;

impl NewProduct {
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            brand: self.brand,
            price: self.price,
            size: self.size,
            category: self.category,
            acidity: self.acidity,
            stock: self.stock,
            description: self.description,
            image: self.image,
            featured: self.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn category_deserializes_from_kebab_case() -> TestResult {
        let category: Category = serde_norway::from_str("extra-virgin")?;

        assert_eq!(category, Category::ExtraVirgin);

        Ok(())
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result: Result<Category, _> = serde_norway::from_str("lampante");

        assert!(result.is_err(), "unknown tag should not deserialize");
    }
}
