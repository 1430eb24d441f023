//! Order repository port: persistence for orders and their line items.

use std::future::Future;

use servery_domain::error::ServeryError;
use servery_domain::id::{OrderId, OrderTableId};
use servery_domain::order::Order;

/// Repository for persisting and querying [`Order`]s.
pub trait OrderRepository {
    /// Create an order and its line items in one unit of work.
    fn create(&self, order: Order) -> impl Future<Output = Result<Order, ServeryError>> + Send;

    /// Get an order by its unique identifier.
    fn get_by_id(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<Option<Order>, ServeryError>> + Send;

    /// Get all orders, oldest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Order>, ServeryError>> + Send;

    /// Get every order placed at a table.
    fn find_by_order_table_id(
        &self,
        order_table_id: OrderTableId,
    ) -> impl Future<Output = Result<Vec<Order>, ServeryError>> + Send;

    /// Update the status of an existing order.
    fn update(&self, order: Order) -> impl Future<Output = Result<Order, ServeryError>> + Send;
}
