//! JSON REST handlers for menu groups.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use servery_app::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};
use servery_domain::id::MenuGroupId;
use servery_domain::menu_group::MenuGroup;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a menu group.
#[derive(Deserialize)]
pub struct CreateMenuGroupRequest {
    #[serde(default)]
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<MenuGroup>>),
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
    Ok(Json<MenuGroup>),
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
    Created(Json<MenuGroup>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/menu-groups`
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
    let groups = state.menu_group_service.list_menu_groups().await?;
    Ok(ListResponse::Ok(Json(groups)))
}

/// `GET /api/menu-groups/{id}`
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
    let menu_group_id: MenuGroupId = parse_id(&id)?;
    let menu_group = state.menu_group_service.get_menu_group(menu_group_id).await?;
    Ok(GetResponse::Ok(Json(menu_group)))
}

/// `POST /api/menu-groups`
pub async fn create<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Json(req): Json<CreateMenuGroupRequest>,
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
    let group = MenuGroup::new(req.name)?;
    let created = state.menu_group_service.create_menu_group(group).await?;
    Ok(CreateResponse::Created(Json(created)))
}
