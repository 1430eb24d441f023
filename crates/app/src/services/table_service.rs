//! Table service: seating changes on individual order tables.

use servery_domain::error::{NotFoundError, ServeryError};
use servery_domain::id::OrderTableId;
use servery_domain::order_table::OrderTable;

use crate::ports::{OrderCompletion, OrderTableRepository};

/// Application service for order tables.
pub struct TableService<TR, OC> {
    tables: TR,
    orders: OC,
}

impl<TR: OrderTableRepository, OC: OrderCompletion> TableService<TR, OC> {
    /// Create a new service backed by the given repository and order lookup.
    pub fn new(tables: TR, orders: OC) -> Self {
        Self { tables, orders }
    }

    /// Register a standalone table.
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] when `number_of_guests` is
    /// negative, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn create_table(
        &self,
        number_of_guests: i64,
        empty: bool,
    ) -> Result<OrderTable, ServeryError> {
        let table = OrderTable::new(number_of_guests, empty)?;
        self.tables.create(table).await
    }

    /// List all tables.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_tables(&self) -> Result<Vec<OrderTable>, ServeryError> {
        self.tables.get_all().await
    }

    /// Seat or clear a table.
    ///
    /// # Errors
    ///
    /// - [`NotFoundError::OrderTable`] when the table does not exist
    /// - [`ConflictError::TableGroupExists`](servery_domain::error::ConflictError::TableGroupExists)
    ///   when the table is grouped
    /// - [`ConflictError::OrderIsNotCompleted`](servery_domain::error::ConflictError::OrderIsNotCompleted)
    ///   while an order at the table is in progress
    #[tracing::instrument(skip(self))]
    pub async fn change_empty(
        &self,
        id: OrderTableId,
        empty: bool,
    ) -> Result<OrderTable, ServeryError> {
        let mut table = self.get_table(id).await?;
        table.ensure_ungrouped()?;
        self.orders.ensure_orders_completed(id).await?;
        table.change_empty(empty)?;
        let updated = self.tables.update(table).await?;
        tracing::info!(order_table_id = %id, empty, "table occupancy changed");
        Ok(updated)
    }

    /// Change how many guests sit at a table.
    ///
    /// # Errors
    ///
    /// - [`NotFoundError::OrderTable`] when the table does not exist
    /// - [`ValidationError::NumberOfGuestsNotPositive`](servery_domain::error::ValidationError::NumberOfGuestsNotPositive)
    ///   when the count is negative
    /// - [`ConflictError::OrderTableIsEmpty`](servery_domain::error::ConflictError::OrderTableIsEmpty)
    ///   when the table is empty
    #[tracing::instrument(skip(self))]
    pub async fn change_number_of_guests(
        &self,
        id: OrderTableId,
        number_of_guests: i64,
    ) -> Result<OrderTable, ServeryError> {
        let mut table = self.get_table(id).await?;
        table.change_number_of_guests(number_of_guests)?;
        self.tables.update(table).await
    }

    async fn get_table(&self, id: OrderTableId) -> Result<OrderTable, ServeryError> {
        self.tables
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::OrderTable(id).into())
    }
}
