//! Storage port: repository traits for the catalog.

use std::future::Future;

use servery_domain::error::ServeryError;
use servery_domain::id::{MenuGroupId, MenuId, ProductId};
use servery_domain::menu::Menu;
use servery_domain::menu_group::MenuGroup;
use servery_domain::product::Product;

/// Repository for persisting and querying [`Product`]s.
pub trait ProductRepository {
    /// Create a new product in storage.
    fn create(&self, product: Product)
    -> impl Future<Output = Result<Product, ServeryError>> + Send;

    /// Get a product by its unique identifier.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ServeryError>> + Send;

    /// Get all products.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ServeryError>> + Send;
}

/// Repository for persisting and querying [`MenuGroup`]s.
pub trait MenuGroupRepository {
    /// Create a new menu group in storage.
    fn create(
        &self,
        menu_group: MenuGroup,
    ) -> impl Future<Output = Result<MenuGroup, ServeryError>> + Send;

    /// Get a menu group by its unique identifier.
    fn get_by_id(
        &self,
        id: MenuGroupId,
    ) -> impl Future<Output = Result<Option<MenuGroup>, ServeryError>> + Send;

    /// Get all menu groups.
    fn get_all(&self) -> impl Future<Output = Result<Vec<MenuGroup>, ServeryError>> + Send;
}

/// Repository for persisting and querying [`Menu`]s together with their
/// menu products.
pub trait MenuRepository {
    /// Create a menu and all of its menu products in one unit of work.
    fn create(&self, menu: Menu) -> impl Future<Output = Result<Menu, ServeryError>> + Send;

    /// Get a menu by its unique identifier.
    fn get_by_id(
        &self,
        id: MenuId,
    ) -> impl Future<Output = Result<Option<Menu>, ServeryError>> + Send;

    /// Get all menus.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Menu>, ServeryError>> + Send;
}
