//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod menu_groups;
#[allow(clippy::missing_errors_doc)]
pub mod menus;
#[allow(clippy::missing_errors_doc)]
pub mod orders;
#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod table_groups;
#[allow(clippy::missing_errors_doc)]
pub mod tables;

use std::str::FromStr;

use axum::Router;
use axum::routing::{delete, get, post, put};

use servery_app::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};
use servery_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a path or body identifier, rejecting malformed values as a
/// validation error rather than a routing failure.
pub(crate) fn parse_id<T: FromStr>(value: &str) -> Result<T, ApiError> {
    T::from_str(value).map_err(|_| ValidationError::InvalidIdentifier(value.to_string()).into())
}

/// Build the `/api` sub-router.
pub fn routes<PR, MGR, MR, TR, GR, OR, C>() -> Router<AppState<PR, MGR, MR, TR, GR, OR, C>>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Send + Sync + 'static,
{
    Router::new()
        // Catalog
        .route(
            "/products",
            get(products::list::<PR, MGR, MR, TR, GR, OR, C>)
                .post(products::create::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/products/{id}",
            get(products::get::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/menu-groups",
            get(menu_groups::list::<PR, MGR, MR, TR, GR, OR, C>)
                .post(menu_groups::create::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/menu-groups/{id}",
            get(menu_groups::get::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/menus",
            get(menus::list::<PR, MGR, MR, TR, GR, OR, C>)
                .post(menus::create::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/menus/{id}",
            get(menus::get::<PR, MGR, MR, TR, GR, OR, C>),
        )
        // Tables
        .route(
            "/tables",
            get(tables::list::<PR, MGR, MR, TR, GR, OR, C>)
                .post(tables::create::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/tables/{id}/empty",
            put(tables::change_empty::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/tables/{id}/number-of-guests",
            put(tables::change_number_of_guests::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/table-groups",
            post(table_groups::create::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/table-groups/{id}",
            delete(table_groups::ungroup::<PR, MGR, MR, TR, GR, OR, C>),
        )
        // Orders
        .route(
            "/orders",
            get(orders::list::<PR, MGR, MR, TR, GR, OR, C>)
                .post(orders::create::<PR, MGR, MR, TR, GR, OR, C>),
        )
        .route(
            "/orders/{id}/order-status",
            put(orders::change_status::<PR, MGR, MR, TR, GR, OR, C>),
        )
}
