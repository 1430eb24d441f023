//! Order completion port: lets table modules ask about orders without
//! depending on how orders are stored.

use std::future::Future;
use std::sync::Arc;

use servery_domain::error::ServeryError;
use servery_domain::id::OrderTableId;

/// Answers whether a table still has orders in progress.
pub trait OrderCompletion {
    /// Succeed only if every order placed at `order_table_id` is completed.
    ///
    /// Fails with
    /// [`ConflictError::OrderIsNotCompleted`](servery_domain::error::ConflictError::OrderIsNotCompleted)
    /// for the first order still cooking or being eaten.
    fn ensure_orders_completed(
        &self,
        order_table_id: OrderTableId,
    ) -> impl Future<Output = Result<(), ServeryError>> + Send;
}

impl<T: OrderCompletion + Send + Sync> OrderCompletion for Arc<T> {
    fn ensure_orders_completed(
        &self,
        order_table_id: OrderTableId,
    ) -> impl Future<Output = Result<(), ServeryError>> + Send {
        (**self).ensure_orders_completed(order_table_id)
    }
}
