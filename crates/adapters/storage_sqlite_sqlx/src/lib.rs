//! # servery-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `servery-app::ports`
//! - Implement the [`Catalog`](servery_app::ports::Catalog) lookup port
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `servery-app` (for port traits) and `servery-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod codec;

pub mod catalog;
pub mod error;
pub mod menu_group_repo;
pub mod menu_repo;
pub mod order_repo;
pub mod order_table_repo;
pub mod pool;
pub mod product_repo;
pub mod table_group_repo;

pub use catalog::SqliteCatalog;
pub use menu_group_repo::SqliteMenuGroupRepository;
pub use menu_repo::SqliteMenuRepository;
pub use order_repo::SqliteOrderRepository;
pub use order_table_repo::SqliteOrderTableRepository;
pub use pool::{Config, Database};
pub use product_repo::SqliteProductRepository;
pub use table_group_repo::SqliteTableGroupRepository;
