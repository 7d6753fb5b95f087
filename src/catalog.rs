//! Catalog

use thiserror::Error;

use crate::{
    ids::ProductId,
    products::{NewProduct, Product, ProductUpdate},
};

/// Errors for catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with the given identifier exists.
    #[error("no product with id {0}")]
    NotFound(ProductId),

    /// Two products with the same identifier were supplied.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}

/// Ordered, mutable set of sellable products.
///
/// Identifiers are unique across the catalog: [`Catalog::add`] assigns fresh
/// ones and [`Catalog::with_products`] rejects duplicates.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with the given products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an
    /// identifier.
    pub fn with_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        for (index, product) in products.iter().enumerate() {
            let seen_before = products
                .iter()
                .take(index)
                .any(|earlier| earlier.id == product.id);

            if seen_before {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products })
    }

    /// Add a product, assigning it a fresh identifier, and append it to the
    /// end of the catalog. Returns the assigned identifier.
    pub fn add(&mut self, product: NewProduct) -> ProductId {
        let id = ProductId::new();
        self.products.push(product.into_product(id));

        id
    }

    /// Replace every attribute of the product with the given identifier,
    /// preserving its catalog position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has that identifier;
    /// the catalog is left unchanged.
    pub fn update(
        &mut self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<&Product, CatalogError> {
        let entry = self
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        *entry = update.into_product(id);

        Ok(entry)
    }

    /// Remove and return the product with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has that identifier;
    /// the catalog is left unchanged.
    pub fn remove(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let position = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        Ok(self.products.remove(position))
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products flagged as featured, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.featured)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso};

    use crate::products::Category;

    use super::*;

    fn picual(price_minor: i64) -> NewProduct {
        NewProduct {
            name: "Reserva Familiar Picual".to_string(),
            brand: "Finca La Torre".to_string(),
            price: Money::from_minor(price_minor, iso::EUR),
            size: "500ml".to_string(),
            category: Category::ExtraVirgin,
            acidity: Decimal::new(1, 1),
            stock: 50,
            description: "Notas de hierba recién cortada.".to_string(),
            image: "https://example.test/picual.jpg".to_string(),
            featured: true,
        }
    }

    #[test]
    fn add_appends_and_assigns_unique_ids() {
        let mut catalog = Catalog::new();

        let first = catalog.add(picual(2490));
        let second = catalog.add(picual(1950));

        assert_ne!(first, second);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products().first().map(|p| p.id), Some(first));
    }

    #[test]
    fn add_stores_every_attribute() {
        let mut catalog = Catalog::new();

        let id = catalog.add(picual(2490));

        let stored = catalog.get(id);
        assert!(stored.is_some(), "created product should be readable");
        if let Some(product) = stored {
            assert_eq!(product.name, "Reserva Familiar Picual");
            assert_eq!(product.brand, "Finca La Torre");
            assert_eq!(product.price, Money::from_minor(2490, iso::EUR));
            assert_eq!(product.category, Category::ExtraVirgin);
            assert_eq!(product.stock, 50);
            assert!(product.featured);
        }
    }

    #[test]
    fn update_replaces_all_fields_and_preserves_position() -> testresult::TestResult {
        let mut catalog = Catalog::new();
        let first = catalog.add(picual(2490));
        let second = catalog.add(picual(1950));

        let mut update = picual(2800);
        update.name = "Hojiblanca Ecológico".to_string();
        update.featured = false;
        catalog.update(first, update)?;

        assert_eq!(catalog.len(), 2);
        let stored = catalog.products().first();
        assert_eq!(stored.map(|p| p.id), Some(first), "position preserved");
        assert_eq!(
            stored.map(|p| p.name.as_str()),
            Some("Hojiblanca Ecológico")
        );
        assert_eq!(stored.map(|p| p.price), Some(Money::from_minor(2800, iso::EUR)));
        assert_eq!(catalog.products().get(1).map(|p| p.id), Some(second));

        Ok(())
    }

    #[test]
    fn update_unknown_id_errors_and_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(picual(2490));
        let before: Vec<_> = catalog.products().to_vec();

        let unknown = ProductId::new();
        let result = catalog.update(unknown, picual(100));

        assert_eq!(result, Err(CatalogError::NotFound(unknown)));
        assert_eq!(catalog.products(), before.as_slice());
    }

    #[test]
    fn remove_deletes_exactly_one_entry() -> testresult::TestResult {
        let mut catalog = Catalog::new();
        let first = catalog.add(picual(2490));
        let second = catalog.add(picual(1950));

        let removed = catalog.remove(first)?;

        assert_eq!(removed.id, first);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products().first().map(|p| p.id), Some(second));

        Ok(())
    }

    #[test]
    fn remove_unknown_id_errors_and_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(picual(2490));

        let unknown = ProductId::new();
        let result = catalog.remove(unknown);

        assert_eq!(result, Err(CatalogError::NotFound(unknown)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn with_products_accepts_distinct_ids() -> testresult::TestResult {
        let products = vec![
            picual(2490).into_product(ProductId::new()),
            picual(1950).into_product(ProductId::new()),
        ];

        let catalog = Catalog::with_products(products)?;

        assert_eq!(catalog.len(), 2);

        Ok(())
    }

    #[test]
    fn with_products_rejects_duplicate_ids() {
        let id = ProductId::new();
        let products = vec![
            picual(2490).into_product(id),
            picual(1950).into_product(ProductId::new()),
            picual(2800).into_product(id),
        ];

        let result = Catalog::with_products(products);

        assert!(matches!(result, Err(CatalogError::DuplicateId(dupe)) if dupe == id));
    }

    #[test]
    fn featured_filters_by_flag() {
        let mut catalog = Catalog::new();
        catalog.add(picual(2490));
        let mut plain = picual(4500);
        plain.featured = false;
        catalog.add(plain);

        assert_eq!(catalog.featured().count(), 1);
    }
}
