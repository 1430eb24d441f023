//! Order service: order placement and the kitchen status lifecycle.

use std::future::Future;

use servery_domain::error::{NotFoundError, ServeryError, ValidationError};
use servery_domain::id::{OrderId, OrderTableId};
use servery_domain::order::{Order, OrderLineItem, OrderStatus};

use crate::ports::{Catalog, OrderCompletion, OrderRepository, OrderTableRepository};

/// Application service for orders.
///
/// Also answers [`OrderCompletion`] queries for the table services.
pub struct OrderService<OR, TR, C> {
    orders: OR,
    tables: TR,
    catalog: C,
}

impl<OR, TR, C> OrderService<OR, TR, C>
where
    OR: OrderRepository,
    TR: OrderTableRepository,
    C: Catalog,
{
    /// Create a new service backed by the given repositories and catalog.
    pub fn new(orders: OR, tables: TR, catalog: C) -> Self {
        Self {
            orders,
            tables,
            catalog,
        }
    }

    /// Place an order at a table.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`ValidationError::OrderLineEmpty`] when `line_items` is empty
    /// - [`NotFoundError::Menu`] for the first unknown menu
    /// - [`NotFoundError::OrderTable`] when the table does not exist
    /// - [`ConflictError::OrderTableIsEmpty`](servery_domain::error::ConflictError::OrderTableIsEmpty)
    ///   when nobody is seated at the table
    #[tracing::instrument(skip(self, line_items), fields(line_items = line_items.len()))]
    pub async fn create_order(
        &self,
        order_table_id: OrderTableId,
        line_items: Vec<OrderLineItem>,
    ) -> Result<Order, ServeryError> {
        if line_items.is_empty() {
            return Err(ValidationError::OrderLineEmpty.into());
        }
        for item in &line_items {
            if !self.catalog.exists_menu(item.menu_id).await? {
                return Err(NotFoundError::Menu(item.menu_id).into());
            }
        }

        let table = self
            .tables
            .get_by_id(order_table_id)
            .await?
            .ok_or(NotFoundError::OrderTable(order_table_id))?;
        table.ensure_not_empty()?;

        let order = Order::new(order_table_id, line_items, servery_domain::time::now())?;
        let created = self.orders.create(order).await?;
        tracing::info!(order_id = %created.id, "order placed");
        Ok(created)
    }

    /// Look up an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Order`] when no order with `id` exists, or a
    /// storage error from the repository.
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ServeryError> {
        self.orders
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Order(id).into())
    }

    /// List all orders with their line items.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ServeryError> {
        self.orders.get_all().await
    }

    /// Move an order to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Order`] when the order does not exist, or
    /// [`ConflictError::OrderIsCompleted`](servery_domain::error::ConflictError::OrderIsCompleted)
    /// once the order is completed.
    #[tracing::instrument(skip(self))]
    pub async fn change_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ServeryError> {
        let mut order = self.get_order(id).await?;
        let previous = order.status;
        order.change_status(status)?;
        let updated = self.orders.update(order).await?;
        tracing::info!(order_id = %id, from = %previous, to = %status, "order status changed");
        Ok(updated)
    }
}

impl<OR, TR, C> OrderCompletion for OrderService<OR, TR, C>
where
    OR: OrderRepository + Sync,
    TR: Sync,
    C: Sync,
{
    fn ensure_orders_completed(
        &self,
        order_table_id: OrderTableId,
    ) -> impl Future<Output = Result<(), ServeryError>> + Send {
        async move {
            let orders = self.orders.find_by_order_table_id(order_table_id).await?;
            for order in &orders {
                order.ensure_completed()?;
            }
            tracing::debug!(%order_table_id, orders = orders.len(), "every order is completed");
            Ok(())
        }
    }
}
