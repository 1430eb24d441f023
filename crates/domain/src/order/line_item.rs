//! Order line item: a quantity of one menu on an order.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::MenuId;
use crate::quantity;

/// A menu ordered `quantity` times. Owned by its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub menu_id: MenuId,
    pub quantity: u64,
}

impl OrderLineItem {
    /// # Errors
    ///
    /// Returns [`ValidationError::QuantityNotPositive`] when `quantity` is zero,
    /// or [`ValidationError::QuantityTooLarge`] above [`quantity::MAX`].
    pub fn new(menu_id: MenuId, quantity: u64) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::QuantityNotPositive);
        }
        let quantity = quantity::ensure_within_limit(quantity)?;
        Ok(Self { menu_id, quantity })
    }
}
