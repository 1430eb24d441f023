//! Catalog port: existence and price lookups across module boundaries.
//!
//! Menus and orders need to know that the things they reference exist, but
//! must not depend on how the catalog is stored. Lookups are plain calls that
//! complete before the caller starts writing.

use std::future::Future;

use servery_domain::error::ServeryError;
use servery_domain::id::{MenuGroupId, MenuId, ProductId};
use servery_domain::money::Money;

/// Read-only view of the catalog.
pub trait Catalog {
    /// Whether a menu group with `id` exists.
    fn exists_menu_group(
        &self,
        id: MenuGroupId,
    ) -> impl Future<Output = Result<bool, ServeryError>> + Send;

    /// Whether a menu with `id` exists.
    fn exists_menu(&self, id: MenuId) -> impl Future<Output = Result<bool, ServeryError>> + Send;

    /// Current price of a product, or `None` if the product does not exist.
    fn resolve_product_price(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Money>, ServeryError>> + Send;
}
