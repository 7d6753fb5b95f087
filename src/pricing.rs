//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::CartLine;

/// Errors that can occur while totalling cart lines.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// No lines were provided, so currency could not be determined.
    #[error("no lines provided; cannot determine currency")]
    NoLines,

    /// Multiplying a unit price by a quantity overflowed minor units.
    #[error("line total overflowed minor units")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Price of a single line: unit price times quantity, in minor units.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: The multiplication overflowed minor units.
pub fn line_total(line: &CartLine) -> Result<Money<'static, Currency>, PricingError> {
    let price = line.product().price;

    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(line.quantity()))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Subtotal of a set of cart lines (no shipping, no discounts).
///
/// # Errors
///
/// - [`PricingError::NoLines`]: No lines were provided, so currency could not
///   be determined.
/// - [`PricingError::Overflow`]: A line total overflowed minor units.
/// - [`PricingError::Money`]: Wrapped money arithmetic or currency mismatch
///   error.
pub fn subtotal(lines: &[CartLine]) -> Result<Money<'static, Currency>, PricingError> {
    let first = lines.first().ok_or(PricingError::NoLines)?;
    let currency = first.product().price.currency();

    lines
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, line| {
            let total = acc.add(line_total(line)?)?;
            Ok(total)
        })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{
        cart::Cart,
        ids::ProductId,
        products::{Category, Product},
    };

    use super::*;

    fn product(minor: i64) -> Product {
        Product {
            id: ProductId::new(),
            name: "Arbequina Premium".to_string(),
            brand: "Castillo de Canena".to_string(),
            price: Money::from_minor(minor, iso::EUR),
            size: "500ml".to_string(),
            category: Category::Organic,
            acidity: Decimal::new(15, 2),
            stock: 30,
            description: "Suave y frutado.".to_string(),
            image: "https://example.test/arbequina.jpg".to_string(),
            featured: true,
        }
    }

    fn lines_for(quantities: &[(i64, u32)]) -> Vec<CartLine> {
        let mut cart = Cart::new(iso::EUR);
        for (minor, quantity) in quantities {
            let product = product(*minor);
            for _ in 0..*quantity {
                cart.add(&product);
            }
        }
        cart.lines().to_vec()
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() -> TestResult {
        let lines = lines_for(&[(2490, 5)]);
        let line = lines.first().expect("missing line");

        assert_eq!(line_total(line)?, Money::from_minor(12_450, iso::EUR));

        Ok(())
    }

    #[test]
    fn subtotal_sums_all_lines() -> TestResult {
        let lines = lines_for(&[(2490, 2), (1950, 1)]);

        assert_eq!(subtotal(&lines)?, Money::from_minor(6930, iso::EUR));

        Ok(())
    }

    #[test]
    fn subtotal_of_no_lines_errors() {
        assert!(matches!(subtotal(&[]), Err(PricingError::NoLines)));
    }

    #[test]
    fn subtotal_with_mixed_currencies_errors() {
        let mut cart = Cart::new(iso::EUR);
        cart.add(&product(2490));

        let mut imported = product(1800);
        imported.price = Money::from_minor(1800, iso::GBP);
        cart.add(&imported);

        assert!(matches!(
            subtotal(cart.lines()),
            Err(PricingError::Money(_))
        ));
    }
}
