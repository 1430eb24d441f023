//! `SQLite` implementation of [`MenuRepository`].
//!
//! A menu spans two tables: `menus` and its ordered `menu_products`.

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use servery_app::ports::MenuRepository;
use servery_domain::error::ServeryError;
use servery_domain::id::MenuId;
use servery_domain::menu::{Menu, MenuProduct};

use crate::codec::{decode, decode_count, decode_money, encode_count, encode_money};
use crate::error::StorageError;

/// Menu row without its products.
struct Wrapper(Menu);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let price: String = row.try_get("price")?;
        let menu_group_id: String = row.try_get("menu_group_id")?;

        Ok(Self(Menu {
            id: decode(&id)?,
            name,
            price: decode_money(&price)?,
            menu_group_id: decode(&menu_group_id)?,
            menu_products: Vec::new(),
        }))
    }
}

/// A `menu_products` row keyed by its menu.
struct ProductLine(MenuId, MenuProduct);

impl<'r> FromRow<'r, SqliteRow> for ProductLine {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let menu_id: String = row.try_get("menu_id")?;
        let product_id: String = row.try_get("product_id")?;
        let quantity: i64 = row.try_get("quantity")?;
        let price: String = row.try_get("price")?;

        Ok(Self(
            decode(&menu_id)?,
            MenuProduct::new(
                decode(&product_id)?,
                decode_count(quantity)?,
                decode_money(&price)?,
            ),
        ))
    }
}

const INSERT: &str = "INSERT INTO menus (id, name, price, menu_group_id) VALUES (?, ?, ?, ?)";
const INSERT_PRODUCT: &str = "INSERT INTO menu_products (menu_id, position, product_id, quantity, price) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM menus WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM menus ORDER BY rowid";
const SELECT_PRODUCTS_BY_MENU: &str =
    "SELECT * FROM menu_products WHERE menu_id = ? ORDER BY position";
const SELECT_ALL_PRODUCTS: &str = "SELECT * FROM menu_products ORDER BY menu_id, position";

/// `SQLite`-backed menu repository.
#[derive(Clone)]
pub struct SqliteMenuRepository {
    pool: SqlitePool,
}

impl SqliteMenuRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MenuRepository for SqliteMenuRepository {
    fn create(&self, menu: Menu) -> impl Future<Output = Result<Menu, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(menu.id.to_string())
                .bind(&menu.name)
                .bind(encode_money(menu.price))
                .bind(menu.menu_group_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            for (position, line) in (0_i64..).zip(&menu.menu_products) {
                sqlx::query(INSERT_PRODUCT)
                    .bind(menu.id.to_string())
                    .bind(position)
                    .bind(line.product_id.to_string())
                    .bind(encode_count(line.quantity).map_err(StorageError::from)?)
                    .bind(encode_money(line.price))
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(menu)
        }
    }

    fn get_by_id(
        &self,
        id: MenuId,
    ) -> impl Future<Output = Result<Option<Menu>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;
            let Some(Wrapper(mut menu)) = row else {
                return Ok(None);
            };

            let lines: Vec<ProductLine> = sqlx::query_as(SELECT_PRODUCTS_BY_MENU)
                .bind(id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            menu.menu_products = lines.into_iter().map(|line| line.1).collect();

            Ok(Some(menu))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Menu>, ServeryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;
            let lines: Vec<ProductLine> = sqlx::query_as(SELECT_ALL_PRODUCTS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let mut by_menu: HashMap<MenuId, Vec<MenuProduct>> = HashMap::new();
            for ProductLine(menu_id, product) in lines {
                by_menu.entry(menu_id).or_default().push(product);
            }

            Ok(rows
                .into_iter()
                .map(|Wrapper(mut menu)| {
                    menu.menu_products = by_menu.remove(&menu.id).unwrap_or_default();
                    menu
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;
    use crate::{SqliteMenuGroupRepository, SqliteProductRepository};
    use rust_decimal::Decimal;
    use servery_app::ports::{MenuGroupRepository, ProductRepository};
    use servery_domain::menu_group::MenuGroup;
    use servery_domain::money::Money;
    use servery_domain::product::Product;

    fn money(value: i64) -> Money {
        Money::new(Decimal::from(value)).unwrap()
    }

    async fn seed(pool: &SqlitePool) -> (MenuGroup, Product, Product) {
        let group = MenuGroup::new("Set meals").unwrap();
        SqliteMenuGroupRepository::new(pool.clone())
            .create(group.clone())
            .await
            .unwrap();
        let products = SqliteProductRepository::new(pool.clone());
        let chicken = Product::builder()
            .name("Fried chicken")
            .price(money(16000))
            .build()
            .unwrap();
        let soda = Product::builder()
            .name("Soda")
            .price(money(500))
            .build()
            .unwrap();
        products.create(chicken.clone()).await.unwrap();
        products.create(soda.clone()).await.unwrap();
        (group, chicken, soda)
    }

    #[tokio::test]
    async fn should_store_menu_with_products_in_order() {
        let pool = memory_pool().await;
        let (group, chicken, soda) = seed(&pool).await;
        let repo = SqliteMenuRepository::new(pool);
        let menu = Menu::builder(group.id)
            .name("Chicken set")
            .price(money(32000))
            .menu_product(MenuProduct::new(chicken.id, 2, chicken.price))
            .menu_product(MenuProduct::new(soda.id, 1, soda.price))
            .build()
            .unwrap();

        repo.create(menu.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(menu.id).await.unwrap(), Some(menu.clone()));
        assert_eq!(repo.get_all().await.unwrap(), vec![menu]);
    }

    #[tokio::test]
    async fn should_store_nothing_when_a_product_row_fails() {
        let pool = memory_pool().await;
        let (group, chicken, _) = seed(&pool).await;
        let repo = SqliteMenuRepository::new(pool);
        let menu = Menu::builder(group.id)
            .name("Broken set")
            .price(Money::ZERO)
            .menu_product(MenuProduct::new(chicken.id, 1, chicken.price))
            .menu_product(MenuProduct::new(
                servery_domain::id::ProductId::new(),
                1,
                money(1),
            ))
            .build()
            .unwrap();

        assert!(repo.create(menu.clone()).await.is_err());
        assert!(repo.get_by_id(menu.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_menu_not_found() {
        let repo = SqliteMenuRepository::new(memory_pool().await);
        assert!(repo.get_by_id(MenuId::new()).await.unwrap().is_none());
    }
}
