//! Table storage port: order tables and table groups.

use std::future::Future;

use servery_domain::error::ServeryError;
use servery_domain::id::{OrderTableId, TableGroupId};
use servery_domain::order_table::OrderTable;
use servery_domain::table_group::TableGroup;

/// Repository for persisting and querying [`OrderTable`]s.
pub trait OrderTableRepository {
    /// Create a new table in storage.
    fn create(
        &self,
        table: OrderTable,
    ) -> impl Future<Output = Result<OrderTable, ServeryError>> + Send;

    /// Get a table by its unique identifier.
    fn get_by_id(
        &self,
        id: OrderTableId,
    ) -> impl Future<Output = Result<Option<OrderTable>, ServeryError>> + Send;

    /// Get all tables.
    fn get_all(&self) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send;

    /// Get the subset of `ids` that exists. Order of the result is unspecified.
    fn find_by_ids(
        &self,
        ids: &[OrderTableId],
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send;

    /// Get every member of a table group.
    fn find_by_table_group_id(
        &self,
        table_group_id: TableGroupId,
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send;

    /// Update an existing table.
    fn update(
        &self,
        table: OrderTable,
    ) -> impl Future<Output = Result<OrderTable, ServeryError>> + Send;

    /// Update several tables; either every update is stored or none is.
    fn update_all(
        &self,
        tables: Vec<OrderTable>,
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send;
}

/// Repository for persisting and querying [`TableGroup`]s.
pub trait TableGroupRepository {
    /// Store a new group together with its already-updated member tables.
    /// Either the group and every member update are stored, or nothing is.
    fn create(
        &self,
        table_group: TableGroup,
        members: Vec<OrderTable>,
    ) -> impl Future<Output = Result<TableGroup, ServeryError>> + Send;

    /// Get a table group by its unique identifier.
    fn get_by_id(
        &self,
        id: TableGroupId,
    ) -> impl Future<Output = Result<Option<TableGroup>, ServeryError>> + Send;
}
