//! Table group service: grouping empty tables for one party and releasing
//! them again.
//!
//! Every lookup and rule check runs before the first write, and each
//! operation hands all of its row changes to the repository in one call so
//! they are stored together.

use std::collections::HashMap;

use servery_domain::error::{NotFoundError, ServeryError};
use servery_domain::id::{OrderTableId, TableGroupId};
use servery_domain::order_table::OrderTable;
use servery_domain::table_group::TableGroup;

use crate::ports::{OrderCompletion, OrderTableRepository, TableGroupRepository};

/// A table group together with its members, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedTables {
    pub table_group: TableGroup,
    pub order_tables: Vec<OrderTable>,
}

/// Application service for table groups.
pub struct TableGroupService<TR, GR, OC> {
    tables: TR,
    groups: GR,
    orders: OC,
}

impl<TR, GR, OC> TableGroupService<TR, GR, OC>
where
    TR: OrderTableRepository,
    GR: TableGroupRepository,
    OC: OrderCompletion,
{
    /// Create a new service backed by the given repositories and order lookup.
    pub fn new(tables: TR, groups: GR, orders: OC) -> Self {
        Self {
            tables,
            groups,
            orders,
        }
    }

    /// Group the given tables.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::OrderTableCountNotEnough`](servery_domain::error::ValidationError::OrderTableCountNotEnough)
    ///   for fewer than two ids
    /// - [`NotFoundError::OrderTable`] for the first id that does not resolve;
    ///   an id repeated in the request resolves only once
    /// - [`ConflictError::OrderTableNotEmpty`](servery_domain::error::ConflictError::OrderTableNotEmpty)
    ///   when any table is occupied or already grouped
    #[tracing::instrument(skip(self, order_table_ids), fields(tables = order_table_ids.len()))]
    pub async fn create_table_group(
        &self,
        order_table_ids: Vec<OrderTableId>,
    ) -> Result<GroupedTables, ServeryError> {
        TableGroup::ensure_enough_tables(order_table_ids.len())?;

        let mut found: HashMap<OrderTableId, OrderTable> = self
            .tables
            .find_by_ids(&order_table_ids)
            .await?
            .into_iter()
            .map(|table| (table.id, table))
            .collect();
        let mut tables = order_table_ids
            .iter()
            .map(|id| found.remove(id).ok_or(NotFoundError::OrderTable(*id)))
            .collect::<Result<Vec<_>, _>>()?;

        let table_group = TableGroup::group(&mut tables, servery_domain::time::now())?;
        let table_group = self.groups.create(table_group, tables.clone()).await?;
        tracing::info!(table_group_id = %table_group.id, "table group created");

        Ok(GroupedTables {
            table_group,
            order_tables: tables,
        })
    }

    /// Release every member of a table group.
    ///
    /// Members keep their current `empty` flag.
    ///
    /// # Errors
    ///
    /// - [`NotFoundError::TableGroup`] when the group does not exist
    /// - [`ConflictError::OrderIsNotCompleted`](servery_domain::error::ConflictError::OrderIsNotCompleted)
    ///   while any member has an order in progress
    #[tracing::instrument(skip(self))]
    pub async fn ungroup(&self, id: TableGroupId) -> Result<(), ServeryError> {
        let table_group = self
            .groups
            .get_by_id(id)
            .await?
            .ok_or(NotFoundError::TableGroup(id))?;

        let mut members = self.tables.find_by_table_group_id(id).await?;
        for table in &members {
            self.orders.ensure_orders_completed(table.id).await?;
        }

        table_group.ungroup(&mut members);
        let released = members.len();
        self.tables.update_all(members).await?;
        tracing::info!(table_group_id = %id, released, "table group released");
        Ok(())
    }
}
