//! `SQLite` implementation of [`MenuGroupRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use servery_app::ports::MenuGroupRepository;
use servery_domain::error::ServeryError;
use servery_domain::id::MenuGroupId;
use servery_domain::menu_group::MenuGroup;

use crate::codec::decode;
use crate::error::StorageError;

struct Wrapper(MenuGroup);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(MenuGroup {
            id: decode(&id)?,
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO menu_groups (id, name) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM menu_groups WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM menu_groups ORDER BY rowid";

/// `SQLite`-backed menu group repository.
#[derive(Clone)]
pub struct SqliteMenuGroupRepository {
    pool: SqlitePool,
}

impl SqliteMenuGroupRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MenuGroupRepository for SqliteMenuGroupRepository {
    fn create(
        &self,
        menu_group: MenuGroup,
    ) -> impl Future<Output = Result<MenuGroup, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(menu_group.id.to_string())
                .bind(&menu_group.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(menu_group)
        }
    }

    fn get_by_id(
        &self,
        id: MenuGroupId,
    ) -> impl Future<Output = Result<Option<MenuGroup>, ServeryError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuGroup>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
