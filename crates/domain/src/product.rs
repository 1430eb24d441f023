//! Product: a sellable item with a unit price.

use serde::{Deserialize, Serialize};

use crate::error::{ServeryError, ValidationError};
use crate::id::ProductId;
use crate::money::Money;

/// A single item the kitchen can prepare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl Product {
    /// Create a builder for constructing a [`Product`].
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ServeryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Product`].
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<ProductId>,
    name: Option<String>,
    price: Option<Money>,
}

impl ProductBuilder {
    #[must_use]
    pub fn id(mut self, id: ProductId) -> Self {
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

    /// Consume the builder, validate, and return a [`Product`].
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] if the name is missing or empty,
    /// or if no price was given.
    pub fn build(self) -> Result<Product, ServeryError> {
        let price = self.price.ok_or(ValidationError::PriceIsNotProvided)?;
        let product = Product {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            price,
        };
        product.validate()?;
        Ok(product)
    }
}
