//! `SQLite` implementation of [`TableGroupRepository`].
//!
//! Membership lives on `order_tables.table_group_id`; the `table_groups` row
//! only records when the group was formed.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use servery_app::ports::TableGroupRepository;
use servery_domain::error::{ConflictError, ServeryError};
use servery_domain::id::TableGroupId;
use servery_domain::order_table::OrderTable;
use servery_domain::table_group::TableGroup;

use crate::codec::{decode, decode_timestamp, encode_timestamp};
use crate::error::StorageError;
use crate::order_table_repo::{self, SELECT_BY_TABLE_GROUP_ID};

struct Wrapper(TableGroup);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(TableGroup {
            id: decode(&id)?,
            created_at: decode_timestamp(&created_at)?,
            order_table_ids: Vec::new(),
        }))
    }
}

const INSERT: &str = "INSERT INTO table_groups (id, created_at) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM table_groups WHERE id = ?";

/// `SQLite`-backed table group repository.
#[derive(Clone)]
pub struct SqliteTableGroupRepository {
    pool: SqlitePool,
}

impl SqliteTableGroupRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TableGroupRepository for SqliteTableGroupRepository {
    fn create(
        &self,
        table_group: TableGroup,
        members: Vec<OrderTable>,
    ) -> impl Future<Output = Result<TableGroup, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(table_group.id.to_string())
                .bind(encode_timestamp(table_group.created_at))
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            for table in &members {
                if !order_table_repo::join_group_on(&mut tx, table).await? {
                    return Err(ConflictError::OrderTableNotEmpty(table.id).into());
                }
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(table_group)
        }
    }

    fn get_by_id(
        &self,
        id: TableGroupId,
    ) -> impl Future<Output = Result<Option<TableGroup>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;
            let Some(Wrapper(mut table_group)) = row else {
                return Ok(None);
            };

            let members: Vec<order_table_repo::Wrapper> = sqlx::query_as(SELECT_BY_TABLE_GROUP_ID)
                .bind(id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            table_group.order_table_ids = members.into_iter().map(|w| w.0.id).collect();

            Ok(Some(table_group))
        }
    }
}
