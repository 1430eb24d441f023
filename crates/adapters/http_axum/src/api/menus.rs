//! JSON REST handlers for menus.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Deserialize;

use servery_app::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};
use servery_app::services::menu_service::{NewMenu, NewMenuProduct};
use servery_domain::id::MenuId;
use servery_domain::menu::Menu;
use servery_domain::money::Money;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// One product line of a menu request.
#[derive(Deserialize)]
pub struct MenuProductRequest {
    pub product_id: String,
    pub quantity: u64,
}

/// Request body for registering a menu.
#[derive(Deserialize)]
pub struct CreateMenuRequest {
    #[serde(default)]
    pub name: String,
    pub price: Option<Decimal>,
    pub menu_group_id: String,
    #[serde(default)]
    pub menu_products: Vec<MenuProductRequest>,
}

impl CreateMenuRequest {
    fn into_new_menu(self) -> Result<NewMenu, ApiError> {
        let menu_products = self
            .menu_products
            .iter()
            .map(|line| {
                Ok(NewMenuProduct {
                    product_id: parse_id(&line.product_id)?,
                    quantity: line.quantity,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        Ok(NewMenu {
            name: self.name,
            price: Money::from_optional(self.price)?,
            menu_group_id: parse_id(&self.menu_group_id)?,
            menu_products,
        })
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Menu>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Menu>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Menu>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/menus`
pub async fn list<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Send + Sync + 'static,
{
    let menus = state.menu_service.list_menus().await?;
    Ok(ListResponse::Ok(Json(menus)))
}

/// `GET /api/menus/{id}`
pub async fn get<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Send + Sync + 'static,
{
    let menu_id: MenuId = parse_id(&id)?;
    let menu = state.menu_service.get_menu(menu_id).await?;
    Ok(GetResponse::Ok(Json(menu)))
}

/// `POST /api/menus`
pub async fn create<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Json(req): Json<CreateMenuRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Send + Sync + 'static,
{
    let created = state.menu_service.create_menu(req.into_new_menu()?).await?;
    Ok(CreateResponse::Created(Json(created)))
}
