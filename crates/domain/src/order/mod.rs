//! Order: menus ordered at a table and their kitchen status.
//!
//! An order starts in [`OrderStatus::Cooking`] and is frozen once it reaches
//! [`OrderStatus::Completion`]. Tables and table groups consult the status of
//! their orders before they allow occupancy changes.

mod line_item;
mod status;

pub use line_item::OrderLineItem;
pub use status::OrderStatus;

use serde::{Deserialize, Serialize};

use crate::error::{ConflictError, ServeryError, ValidationError};
use crate::id::{MenuId, OrderId, OrderTableId};
use crate::time::Timestamp;

/// An order placed at an order table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_table_id: OrderTableId,
    pub status: OrderStatus,
    pub ordered_at: Timestamp,
    pub line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Open a new order in the [`OrderStatus::Cooking`] state.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OrderLineEmpty`] when `line_items` is empty.
    pub fn new(
        order_table_id: OrderTableId,
        line_items: Vec<OrderLineItem>,
        ordered_at: Timestamp,
    ) -> Result<Self, ServeryError> {
        if line_items.is_empty() {
            return Err(ValidationError::OrderLineEmpty.into());
        }
        Ok(Self {
            id: OrderId::new(),
            order_table_id,
            status: OrderStatus::Cooking,
            ordered_at,
            line_items,
        })
    }

    /// Menus referenced by the line items, in line order.
    #[must_use]
    pub fn menu_ids(&self) -> Vec<MenuId> {
        self.line_items.iter().map(|item| item.menu_id).collect()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Move the order to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::OrderIsCompleted`] when the order is already
    /// completed, whatever `status` is requested.
    pub fn change_status(&mut self, status: OrderStatus) -> Result<(), ServeryError> {
        if self.is_completed() {
            return Err(ConflictError::OrderIsCompleted(self.id).into());
        }
        // TODO: confirm with the floor team whether MEAL -> COOKING should be rejected.
        self.status = status;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ConflictError::OrderIsNotCompleted`] while the order is
    /// still cooking or being eaten.
    pub fn ensure_completed(&self) -> Result<(), ServeryError> {
        if !self.is_completed() {
            return Err(ConflictError::OrderIsNotCompleted(self.id).into());
        }
        Ok(())
    }
}
