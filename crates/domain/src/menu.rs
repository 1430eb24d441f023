//! Menu: a priced bundle of products belonging to a menu group.
//!
//! Each [`MenuProduct`] carries the product price as it was when the menu was
//! created, so later product price changes never rewrite menu history.

use serde::{Deserialize, Serialize};

use crate::error::{ServeryError, ValidationError};
use crate::id::{MenuGroupId, MenuId, ProductId};
use crate::money::Money;
use crate::quantity;

/// One product line of a menu with its price snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuProduct {
    pub product_id: ProductId,
    pub quantity: u64,
    pub price: Money,
}

impl MenuProduct {
    #[must_use]
    pub fn new(product_id: ProductId, quantity: u64, price: Money) -> Self {
        Self {
            product_id,
            quantity,
            price,
        }
    }

    /// Snapshot price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceOverflow`] if the amount does not fit.
    pub fn amount(&self) -> Result<Money, ValidationError> {
        self.price.times(self.quantity)
    }
}

/// A sellable menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub price: Money,
    pub menu_group_id: MenuGroupId,
    pub menu_products: Vec<MenuProduct>,
}

impl Menu {
    /// Create a builder for a menu in the given group.
    #[must_use]
    pub fn builder(menu_group_id: MenuGroupId) -> MenuBuilder {
        MenuBuilder {
            id: None,
            name: None,
            price: None,
            menu_group_id,
            menu_products: Vec::new(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - a product quantity is above [`quantity::MAX`]
    ///   ([`ValidationError::QuantityTooLarge`])
    /// - `price` exceeds the sum of its products
    ///   ([`ValidationError::MenuPriceExceedsActualPrice`])
    pub fn validate(&self) -> Result<(), ServeryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        for menu_product in &self.menu_products {
            quantity::ensure_within_limit(menu_product.quantity)?;
        }
        validate_menu_price(self.price, &self.menu_products)?;
        Ok(())
    }
}

/// Reject a declared price that is higher than buying every product alone.
///
/// # Errors
///
/// Returns [`ValidationError::MenuPriceExceedsActualPrice`] when
/// `price > Σ(snapshot price × quantity)`, or
/// [`ValidationError::PriceOverflow`] if the sum does not fit.
pub fn validate_menu_price(
    price: Money,
    menu_products: &[MenuProduct],
) -> Result<(), ValidationError> {
    let amounts = menu_products
        .iter()
        .map(MenuProduct::amount)
        .collect::<Result<Vec<_>, _>>()?;
    let total = Money::sum(amounts)?;
    if price.is_greater_than(total) {
        return Err(ValidationError::MenuPriceExceedsActualPrice);
    }
    Ok(())
}

/// Step-by-step builder for [`Menu`].
#[derive(Debug)]
pub struct MenuBuilder {
    id: Option<MenuId>,
    name: Option<String>,
    price: Option<Money>,
    menu_group_id: MenuGroupId,
    menu_products: Vec<MenuProduct>,
}

impl MenuBuilder {
    #[must_use]
    pub fn id(mut self, id: MenuId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn menu_product(mut self, menu_product: MenuProduct) -> Self {
        self.menu_products.push(menu_product);
        self
    }

    /// Consume the builder, validate, and return a [`Menu`].
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] if the price is missing, the name
    /// is empty, or the price rule fails.
    pub fn build(self) -> Result<Menu, ServeryError> {
        let price = self.price.ok_or(ValidationError::PriceIsNotProvided)?;
        let menu = Menu {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            price,
            menu_group_id: self.menu_group_id,
            menu_products: self.menu_products,
        };
        menu.validate()?;
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn money(value: i64) -> Money {
        Money::new(Decimal::from(value)).unwrap()
    }

    fn menu_with_price(price: i64) -> Result<Menu, ServeryError> {
        Menu::builder(MenuGroupId::new())
            .name("Chicken set")
            .price(money(price))
            .menu_product(MenuProduct::new(ProductId::new(), 1, money(1000)))
            .build()
    }

    #[test]
    fn should_reject_price_above_sum_of_products() {
        assert!(matches!(
            menu_with_price(2001),
            Err(ServeryError::Validation(
                ValidationError::MenuPriceExceedsActualPrice
            ))
        ));
    }

    #[test]
    fn should_accept_price_below_sum_of_products() {
        let menu = menu_with_price(999).unwrap();
        assert_eq!(menu.price, money(999));
        assert_eq!(menu.menu_products.len(), 1);
    }

    #[test]
    fn should_accept_price_equal_to_sum_of_products() {
        assert!(menu_with_price(1000).is_ok());
    }

    #[test]
    fn should_multiply_snapshot_price_by_quantity() {
        let products = [
            MenuProduct::new(ProductId::new(), 2, money(16000)),
            MenuProduct::new(ProductId::new(), 1, money(500)),
        ];
        assert!(validate_menu_price(money(32500), &products).is_ok());
        assert_eq!(
            validate_menu_price(money(32501), &products),
            Err(ValidationError::MenuPriceExceedsActualPrice)
        );
    }

    #[test]
    fn should_only_allow_free_menu_without_products() {
        assert!(validate_menu_price(Money::ZERO, &[]).is_ok());
        assert!(validate_menu_price(money(1), &[]).is_err());
    }

    #[test]
    fn should_reject_oversized_quantity_even_when_product_is_free() {
        let result = Menu::builder(MenuGroupId::new())
            .name("Free refills")
            .price(Money::ZERO)
            .menu_product(MenuProduct::new(ProductId::new(), u64::MAX, Money::ZERO))
            .build();
        assert!(matches!(
            result,
            Err(ServeryError::Validation(ValidationError::QuantityTooLarge(
                u64::MAX
            )))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Menu::builder(MenuGroupId::new()).price(Money::ZERO).build();
        assert!(matches!(
            result,
            Err(ServeryError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_is_missing() {
        let result = Menu::builder(MenuGroupId::new()).name("Empty").build();
        assert!(matches!(
            result,
            Err(ServeryError::Validation(ValidationError::PriceIsNotProvided))
        ));
    }
}
