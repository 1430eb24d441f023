//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ServeryError`]
//! via `#[from]`. Every rejection maps to exactly one violated invariant.

use crate::id::{MenuGroupId, MenuId, OrderId, OrderTableId, ProductId, TableGroupId};

/// Top-level error returned by domain logic, services and ports.
#[derive(Debug, thiserror::Error)]
pub enum ServeryError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("conflict: {0}")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The caller supplied input that can never be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("price must be provided")]
    PriceIsNotProvided,

    #[error("price must not be negative")]
    PriceIsNegative,

    #[error("price exceeds the representable range")]
    PriceOverflow,

    #[error("menu price is greater than the sum of its products")]
    MenuPriceExceedsActualPrice,

    #[error("an order needs at least one line item")]
    OrderLineEmpty,

    #[error("quantity must be at least one")]
    QuantityNotPositive,

    #[error("quantity {0} is too large")]
    QuantityTooLarge(u64),

    #[error("a table group needs at least two tables")]
    OrderTableCountNotEnough,

    #[error("number of guests must not be negative")]
    NumberOfGuestsNotPositive,

    #[error("number of guests {0} is too large")]
    NumberOfGuestsTooLarge(i64),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("unknown order status: {0}")]
    UnknownOrderStatus(String),
}

/// A referenced record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("product {0} does not exist")]
    Product(ProductId),

    #[error("menu group {0} does not exist")]
    MenuGroup(MenuGroupId),

    #[error("menu {0} does not exist")]
    Menu(MenuId),

    #[error("order {0} does not exist")]
    Order(OrderId),

    #[error("order table {0} does not exist")]
    OrderTable(OrderTableId),

    #[error("table group {0} does not exist")]
    TableGroup(TableGroupId),
}

/// The request is well-formed but the current state forbids it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("order table {0} is empty")]
    OrderTableIsEmpty(OrderTableId),

    #[error("order table {0} is not empty or already grouped")]
    OrderTableNotEmpty(OrderTableId),

    #[error("order table {0} belongs to a table group")]
    TableGroupExists(OrderTableId),

    #[error("order {0} is not completed")]
    OrderIsNotCompleted(OrderId),

    #[error("order {0} is already completed")]
    OrderIsCompleted(OrderId),
}
