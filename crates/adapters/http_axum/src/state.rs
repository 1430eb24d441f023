//! Shared application state for axum handlers.

use std::sync::Arc;

use servery_app::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};
use servery_app::services::menu_group_service::MenuGroupService;
use servery_app::services::menu_service::MenuService;
use servery_app::services::order_service::OrderService;
use servery_app::services::product_service::ProductService;
use servery_app::services::table_group_service::TableGroupService;
use servery_app::services::table_service::TableService;

/// The order service doubles as the order-completion lookup of the table
/// services, so it is shared rather than owned.
pub type SharedOrderService<OR, TR, C> = Arc<OrderService<OR, TR, C>>;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types and the catalog to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<PR, MGR, MR, TR, GR, OR, C> {
    /// Product registration.
    pub product_service: Arc<ProductService<PR>>,
    /// Menu group registration.
    pub menu_group_service: Arc<MenuGroupService<MGR>>,
    /// Menu registration and pricing.
    pub menu_service: Arc<MenuService<MR, C>>,
    /// Order placement and status lifecycle.
    pub order_service: SharedOrderService<OR, TR, C>,
    /// Table occupancy and guest count.
    pub table_service: Arc<TableService<TR, SharedOrderService<OR, TR, C>>>,
    /// Table grouping.
    pub table_group_service: Arc<TableGroupService<TR, GR, SharedOrderService<OR, TR, C>>>,
}

impl<PR, MGR, MR, TR, GR, OR, C> Clone for AppState<PR, MGR, MR, TR, GR, OR, C> {
    fn clone(&self) -> Self {
        Self {
            product_service: Arc::clone(&self.product_service),
            menu_group_service: Arc::clone(&self.menu_group_service),
            menu_service: Arc::clone(&self.menu_service),
            order_service: Arc::clone(&self.order_service),
            table_service: Arc::clone(&self.table_service),
            table_group_service: Arc::clone(&self.table_group_service),
        }
    }
}

impl<PR, MGR, MR, TR, GR, OR, C> AppState<PR, MGR, MR, TR, GR, OR, C>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Clone + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Clone + Send + Sync + 'static,
{
    /// Wire every service from the given port implementations.
    ///
    /// The table repository and the catalog are shared by several services
    /// and are cloned into each of them.
    pub fn new(
        products: PR,
        menu_groups: MGR,
        menus: MR,
        tables: TR,
        table_groups: GR,
        orders: OR,
        catalog: C,
    ) -> Self {
        let order_service = Arc::new(OrderService::new(orders, tables.clone(), catalog.clone()));
        Self {
            product_service: Arc::new(ProductService::new(products)),
            menu_group_service: Arc::new(MenuGroupService::new(menu_groups)),
            menu_service: Arc::new(MenuService::new(menus, catalog)),
            table_service: Arc::new(TableService::new(
                tables.clone(),
                Arc::clone(&order_service),
            )),
            table_group_service: Arc::new(TableGroupService::new(
                tables,
                table_groups,
                Arc::clone(&order_service),
            )),
            order_service,
        }
    }
}
