//! Menu service: registers menus and enforces the menu pricing rule.
//!
//! Creation resolves the referenced menu group and the current price of every
//! product through the [`Catalog`] port, snapshots those prices into the
//! menu's products, and only then validates and persists the menu.

use servery_domain::error::{NotFoundError, ServeryError};
use servery_domain::id::{MenuGroupId, MenuId, ProductId};
use servery_domain::menu::{Menu, MenuProduct};
use servery_domain::money::Money;

use crate::ports::{Catalog, MenuRepository};

/// A product line requested for a new menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMenuProduct {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Input of [`MenuService::create_menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenu {
    pub name: String,
    pub price: Money,
    pub menu_group_id: MenuGroupId,
    pub menu_products: Vec<NewMenuProduct>,
}

/// Application service for menus.
pub struct MenuService<R, C> {
    repo: R,
    catalog: C,
}

impl<R: MenuRepository, C: Catalog> MenuService<R, C> {
    /// Create a new service backed by the given repository and catalog.
    pub fn new(repo: R, catalog: C) -> Self {
        Self { repo, catalog }
    }

    /// Register a menu.
    ///
    /// # Errors
    ///
    /// - [`NotFoundError::MenuGroup`] when the menu group does not exist
    /// - [`NotFoundError::Product`] for the first product that does not exist
    /// - [`ServeryError::Validation`] when the name is empty or the price is
    ///   greater than the sum of its products
    /// - a storage error propagated from the repository or the catalog
    #[tracing::instrument(skip(self, new_menu), fields(menu_name = %new_menu.name))]
    pub async fn create_menu(&self, new_menu: NewMenu) -> Result<Menu, ServeryError> {
        if !self
            .catalog
            .exists_menu_group(new_menu.menu_group_id)
            .await?
        {
            return Err(NotFoundError::MenuGroup(new_menu.menu_group_id).into());
        }

        let mut builder = Menu::builder(new_menu.menu_group_id)
            .name(new_menu.name)
            .price(new_menu.price);
        for line in new_menu.menu_products {
            let price = self
                .catalog
                .resolve_product_price(line.product_id)
                .await?
                .ok_or(NotFoundError::Product(line.product_id))?;
            builder = builder.menu_product(MenuProduct::new(line.product_id, line.quantity, price));
        }
        let menu = builder.build()?;

        let created = self.repo.create(menu).await?;
        tracing::info!(menu_id = %created.id, price = %created.price, "menu created");
        Ok(created)
    }

    /// Look up a menu with its products.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Menu`] when no menu with `id` exists.
    pub async fn get_menu(&self, id: MenuId) -> Result<Menu, ServeryError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Menu(id).into())
    }

    /// List all menus with their products.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_menus(&self) -> Result<Vec<Menu>, ServeryError> {
        self.repo.get_all().await
    }
}
