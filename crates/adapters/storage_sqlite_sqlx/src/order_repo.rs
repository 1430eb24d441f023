//! `SQLite` implementation of [`OrderRepository`].

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use servery_app::ports::OrderRepository;
use servery_domain::error::ServeryError;
use servery_domain::id::{OrderId, OrderTableId};
use servery_domain::order::{Order, OrderLineItem};

use crate::codec::{decode, decode_count, decode_timestamp, encode_count, encode_timestamp};
use crate::error::StorageError;

/// Order row without its line items.
struct Wrapper(Order);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let order_table_id: String = row.try_get("order_table_id")?;
        let status: String = row.try_get("status")?;
        let ordered_at: String = row.try_get("ordered_at")?;

        Ok(Self(Order {
            id: decode(&id)?,
            order_table_id: decode(&order_table_id)?,
            status: decode(&status)?,
            ordered_at: decode_timestamp(&ordered_at)?,
            line_items: Vec::new(),
        }))
    }
}

struct LineWrapper(OrderId, OrderLineItem);

impl<'r> FromRow<'r, SqliteRow> for LineWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let order_id: String = row.try_get("order_id")?;
        let menu_id: String = row.try_get("menu_id")?;
        let quantity: i64 = row.try_get("quantity")?;

        let line_item = OrderLineItem::new(decode(&menu_id)?, decode_count(quantity)?)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        Ok(Self(decode(&order_id)?, line_item))
    }
}

const INSERT: &str =
    "INSERT INTO orders (id, order_table_id, status, ordered_at) VALUES (?, ?, ?, ?)";
const INSERT_LINE: &str =
    "INSERT INTO order_line_items (order_id, position, menu_id, quantity) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM orders WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM orders ORDER BY rowid";
const SELECT_BY_ORDER_TABLE_ID: &str =
    "SELECT * FROM orders WHERE order_table_id = ? ORDER BY rowid";
const SELECT_ALL_LINES: &str = "SELECT * FROM order_line_items ORDER BY order_id, position";
const SELECT_LINES_BY_ORDER_TABLE_ID: &str = "SELECT l.* FROM order_line_items l JOIN orders o ON o.id = l.order_id WHERE o.order_table_id = ? ORDER BY l.order_id, l.position";
const SELECT_LINES_BY_ORDER_ID: &str =
    "SELECT * FROM order_line_items WHERE order_id = ? ORDER BY position";
const UPDATE_STATUS: &str = "UPDATE orders SET status = ? WHERE id = ?";

/// Attach line items to their orders, keeping the order of `orders`.
fn assemble(orders: Vec<Wrapper>, lines: Vec<LineWrapper>) -> Vec<Order> {
    let mut by_order: HashMap<OrderId, Vec<OrderLineItem>> = HashMap::new();
    for LineWrapper(order_id, line_item) in lines {
        by_order.entry(order_id).or_default().push(line_item);
    }
    orders
        .into_iter()
        .map(|Wrapper(mut order)| {
            order.line_items = by_order.remove(&order.id).unwrap_or_default();
            order
        })
        .collect()
}

/// `SQLite`-backed order repository.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for SqliteOrderRepository {
    fn create(&self, order: Order) -> impl Future<Output = Result<Order, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(order.id.to_string())
                .bind(order.order_table_id.to_string())
                .bind(order.status.as_str())
                .bind(encode_timestamp(order.ordered_at))
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            for (position, line_item) in (0_i64..).zip(&order.line_items) {
                sqlx::query(INSERT_LINE)
                    .bind(order.id.to_string())
                    .bind(position)
                    .bind(line_item.menu_id.to_string())
                    .bind(encode_count(line_item.quantity).map_err(StorageError::from)?)
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(order)
        }
    }

    fn get_by_id(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<Option<Order>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;
            let Some(row) = row else {
                return Ok(None);
            };

            let lines: Vec<LineWrapper> = sqlx::query_as(SELECT_LINES_BY_ORDER_ID)
                .bind(id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(assemble(vec![row], lines).pop())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Order>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            let lines: Vec<LineWrapper> = sqlx::query_as(SELECT_ALL_LINES)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(assemble(rows, lines))
        }
    }

    fn find_by_order_table_id(
        &self,
        order_table_id: OrderTableId,
    ) -> impl Future<Output = Result<Vec<Order>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_ORDER_TABLE_ID)
                .bind(order_table_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            let lines: Vec<LineWrapper> = sqlx::query_as(SELECT_LINES_BY_ORDER_TABLE_ID)
                .bind(order_table_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(assemble(rows, lines))
        }
    }

    fn update(&self, order: Order) -> impl Future<Output = Result<Order, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE_STATUS)
                .bind(order.status.as_str())
                .bind(order.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(order)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;
    use crate::{SqliteMenuGroupRepository, SqliteMenuRepository, SqliteOrderTableRepository};
    use servery_app::ports::{MenuGroupRepository, MenuRepository, OrderTableRepository};
    use servery_domain::id::MenuId;
    use servery_domain::menu::Menu;
    use servery_domain::menu_group::MenuGroup;
    use servery_domain::money::Money;
    use servery_domain::order::OrderStatus;
    use servery_domain::order_table::OrderTable;

    async fn seed(pool: &SqlitePool) -> (MenuId, OrderTableId) {
        let group = MenuGroup::new("Set meals").unwrap();
        SqliteMenuGroupRepository::new(pool.clone())
            .create(group.clone())
            .await
            .unwrap();
        let menu = Menu::builder(group.id)
            .name("Chicken set")
            .price(Money::ZERO)
            .build()
            .unwrap();
        SqliteMenuRepository::new(pool.clone())
            .create(menu.clone())
            .await
            .unwrap();
        let table = OrderTable::new(2, false).unwrap();
        SqliteOrderTableRepository::new(pool.clone())
            .create(table.clone())
            .await
            .unwrap();
        (menu.id, table.id)
    }

    fn order(menu_id: MenuId, table_id: OrderTableId) -> Order {
        Order::new(
            table_id,
            vec![
                OrderLineItem::new(menu_id, 2).unwrap(),
                OrderLineItem::new(menu_id, 1).unwrap(),
            ],
            servery_domain::time::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_store_order_with_line_items() {
        let pool = memory_pool().await;
        let (menu_id, table_id) = seed(&pool).await;
        let repo = SqliteOrderRepository::new(pool);
        let created = order(menu_id, table_id);

        repo.create(created.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repo.get_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn should_update_status_and_find_by_table() {
        let pool = memory_pool().await;
        let (menu_id, table_id) = seed(&pool).await;
        let repo = SqliteOrderRepository::new(pool);
        let first = order(menu_id, table_id);
        let mut second = order(menu_id, table_id);
        repo.create(first.clone()).await.unwrap();
        repo.create(second.clone()).await.unwrap();

        second.change_status(OrderStatus::Completion).unwrap();
        repo.update(second.clone()).await.unwrap();

        let found = repo.find_by_order_table_id(table_id).await.unwrap();
        assert_eq!(found, vec![first, second]);
        assert!(
            repo.find_by_order_table_id(OrderTableId::new())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn should_reject_order_for_unknown_table() {
        let pool = memory_pool().await;
        let (menu_id, _) = seed(&pool).await;
        let repo = SqliteOrderRepository::new(pool);
        let orphan = order(menu_id, OrderTableId::new());

        assert!(matches!(
            repo.create(orphan.clone()).await,
            Err(ServeryError::Storage(_))
        ));
        assert!(repo.get_by_id(orphan.id).await.unwrap().is_none());
    }
}
