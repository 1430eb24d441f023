//! `SQLite` implementation of [`OrderTableRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqliteConnection, SqlitePool};

use servery_app::ports::OrderTableRepository;
use servery_domain::error::ServeryError;
use servery_domain::id::{OrderTableId, TableGroupId};
use servery_domain::order_table::OrderTable;

use crate::codec::{decode, decode_count};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`OrderTable`].
pub(crate) struct Wrapper(pub(crate) OrderTable);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let table_group_id: Option<String> = row.try_get("table_group_id")?;
        let number_of_guests: i64 = row.try_get("number_of_guests")?;
        let empty: bool = row.try_get("empty")?;

        Ok(Self(OrderTable {
            id: decode(&id)?,
            table_group_id: table_group_id
                .as_deref()
                .map(decode::<TableGroupId>)
                .transpose()?,
            number_of_guests: decode_count(number_of_guests)?,
            empty,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO order_tables (id, table_group_id, number_of_guests, empty) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM order_tables WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM order_tables ORDER BY rowid";
pub(crate) const SELECT_BY_TABLE_GROUP_ID: &str =
    "SELECT * FROM order_tables WHERE table_group_id = ? ORDER BY rowid";
const UPDATE: &str =
    "UPDATE order_tables SET table_group_id = ?, number_of_guests = ?, empty = ? WHERE id = ?";
const JOIN_GROUP: &str = "UPDATE order_tables SET table_group_id = ?, empty = ? \
     WHERE id = ? AND table_group_id IS NULL AND empty = 1";

/// Write the mutable columns of `table` on the given connection.
async fn update_on(
    conn: &mut SqliteConnection,
    table: &OrderTable,
) -> Result<(), StorageError> {
    sqlx::query(UPDATE)
        .bind(table.table_group_id.map(|id| id.to_string()))
        .bind(i64::from(table.number_of_guests))
        .bind(table.empty)
        .bind(table.id.to_string())
        .execute(conn)
        .await?;
    Ok(())
}

/// Attach `table` to its group, but only while the stored row is still empty
/// and ungrouped.
///
/// Returns `false` when the row was claimed or seated since it was read.
pub(crate) async fn join_group_on(
    conn: &mut SqliteConnection,
    table: &OrderTable,
) -> Result<bool, StorageError> {
    let result = sqlx::query(JOIN_GROUP)
        .bind(table.table_group_id.map(|id| id.to_string()))
        .bind(table.empty)
        .bind(table.id.to_string())
        .execute(conn)
        .await?;
    Ok(result.rows_affected() == 1)
}

/// `SQLite`-backed order table repository.
#[derive(Clone)]
pub struct SqliteOrderTableRepository {
    pool: SqlitePool,
}

impl SqliteOrderTableRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OrderTableRepository for SqliteOrderTableRepository {
    fn create(
        &self,
        table: OrderTable,
    ) -> impl Future<Output = Result<OrderTable, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(table.id.to_string())
                .bind(table.table_group_id.map(|id| id.to_string()))
                .bind(i64::from(table.number_of_guests))
                .bind(table.empty)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(table)
        }
    }

    fn get_by_id(
        &self,
        id: OrderTableId,
    ) -> impl Future<Output = Result<Option<OrderTable>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_ids(
        &self,
        ids: &[OrderTableId],
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let pool = self.pool.clone();
        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        async move {
            if ids.is_empty() {
                return Ok(Vec::new());
            }

            let mut query = QueryBuilder::<Sqlite>::new("SELECT * FROM order_tables WHERE id IN (");
            let mut separated = query.separated(", ");
            for id in ids {
                separated.push_bind(id);
            }
            separated.push_unseparated(")");

            let rows: Vec<Wrapper> = query
                .build_query_as()
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_table_group_id(
        &self,
        table_group_id: TableGroupId,
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_TABLE_GROUP_ID)
                .bind(table_group_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        table: OrderTable,
    ) -> impl Future<Output = Result<OrderTable, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;
            update_on(&mut conn, &table).await?;
            Ok(table)
        }
    }

    fn update_all(
        &self,
        tables: Vec<OrderTable>,
    ) -> impl Future<Output = Result<Vec<OrderTable>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            for table in &tables {
                update_on(&mut tx, table).await?;
            }
            tx.commit().await.map_err(StorageError::from)?;
            Ok(tables)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;

    async fn setup() -> SqliteOrderTableRepository {
        SqliteOrderTableRepository::new(memory_pool().await)
    }

    #[tokio::test]
    async fn should_create_and_retrieve_table() {
        let repo = setup().await;
        let table = OrderTable::new(3, false).unwrap();

        repo.create(table.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(table.id).await.unwrap(), Some(table));
    }

    #[tokio::test]
    async fn should_find_only_existing_ids() {
        let repo = setup().await;
        let first = OrderTable::new(0, true).unwrap();
        let second = OrderTable::new(0, true).unwrap();
        repo.create(first.clone()).await.unwrap();
        repo.create(second.clone()).await.unwrap();

        let found = repo
            .find_by_ids(&[first.id, OrderTableId::new(), second.id])
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.contains(&first));
        assert!(found.contains(&second));
        assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_update_guests_and_empty_flag() {
        let repo = setup().await;
        let mut table = OrderTable::new(2, false).unwrap();
        repo.create(table.clone()).await.unwrap();

        table.change_number_of_guests(6).unwrap();
        repo.update(table.clone()).await.unwrap();
        table.change_empty(true).unwrap();
        repo.update_all(vec![table.clone()]).await.unwrap();

        let stored = repo.get_by_id(table.id).await.unwrap().unwrap();
        assert_eq!(stored.number_of_guests, 6);
        assert!(stored.empty);
        assert_eq!(repo.get_all().await.unwrap(), vec![stored]);
    }
}
