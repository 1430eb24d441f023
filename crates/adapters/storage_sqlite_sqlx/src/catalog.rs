//! `SQLite` implementation of the [`Catalog`] lookup port.

use std::future::Future;

use sqlx::SqlitePool;

use servery_app::ports::Catalog;
use servery_domain::error::ServeryError;
use servery_domain::id::{MenuGroupId, MenuId, ProductId};
use servery_domain::money::Money;

use crate::codec::decode_money;
use crate::error::StorageError;

const EXISTS_MENU_GROUP: &str = "SELECT EXISTS (SELECT 1 FROM menu_groups WHERE id = ?)";
const EXISTS_MENU: &str = "SELECT EXISTS (SELECT 1 FROM menus WHERE id = ?)";
const SELECT_PRODUCT_PRICE: &str = "SELECT price FROM products WHERE id = ?";

/// Catalog lookups answered straight from the catalog tables.
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Create a new catalog using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn exists(&self, query: &'static str, id: String) -> Result<bool, ServeryError> {
        let exists: bool = sqlx::query_scalar(query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(exists)
    }
}

impl Catalog for SqliteCatalog {
    fn exists_menu_group(
        &self,
        id: MenuGroupId,
    ) -> impl Future<Output = Result<bool, ServeryError>> + Send {
        self.exists(EXISTS_MENU_GROUP, id.to_string())
    }

    fn exists_menu(&self, id: MenuId) -> impl Future<Output = Result<bool, ServeryError>> + Send {
        self.exists(EXISTS_MENU, id.to_string())
    }

    fn resolve_product_price(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Money>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let price: Option<String> = sqlx::query_scalar(SELECT_PRODUCT_PRICE)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let price = price
                .as_deref()
                .map(decode_money)
                .transpose()
                .map_err(StorageError::from)?;
            Ok(price)
        }
    }
}
