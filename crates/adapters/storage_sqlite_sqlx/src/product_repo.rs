//! `SQLite` implementation of [`ProductRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use servery_app::ports::ProductRepository;
use servery_domain::error::ServeryError;
use servery_domain::id::ProductId;
use servery_domain::product::Product;

use crate::codec::{decode, decode_money, encode_money};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Product`].
struct Wrapper(Product);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Product> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let price: String = row.try_get("price")?;

        Ok(Self(Product {
            id: decode(&id)?,
            name,
            price: decode_money(&price)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO products (id, name, price) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM products WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM products ORDER BY rowid";

/// `SQLite`-backed product repository.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn create(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(product.id.to_string())
                .bind(&product.name)
                .bind(encode_money(product.price))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(product)
        }
    }

    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ServeryError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;
    use rust_decimal::Decimal;
    use servery_domain::money::Money;

    fn product(name: &str, price: Decimal) -> Product {
        Product::builder()
            .name(name)
            .price(Money::new(price).unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_product_when_valid() {
        let repo = SqliteProductRepository::new(memory_pool().await);
        let created = product("Fried chicken", Decimal::new(1650, 2));

        repo.create(created.clone()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.price.to_string(), "16.50");
    }

    #[tokio::test]
    async fn should_return_none_when_product_not_found() {
        let repo = SqliteProductRepository::new(memory_pool().await);
        assert!(repo.get_by_id(ProductId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_products_in_insertion_order() {
        let repo = SqliteProductRepository::new(memory_pool().await);
        let first = product("Fried chicken", Decimal::from(16000));
        let second = product("Soda", Decimal::from(500));
        repo.create(first.clone()).await.unwrap();
        repo.create(second.clone()).await.unwrap();

        assert_eq!(repo.get_all().await.unwrap(), vec![first, second]);
    }
}
