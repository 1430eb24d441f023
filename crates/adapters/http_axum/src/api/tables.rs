//! JSON REST handlers for order tables.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use servery_app::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};
use servery_domain::id::OrderTableId;
use servery_domain::order_table::OrderTable;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a table.
#[derive(Deserialize)]
pub struct CreateTableRequest {
    #[serde(default)]
    pub number_of_guests: i64,
    pub empty: bool,
}

/// Request body for seating or clearing a table.
#[derive(Deserialize)]
pub struct ChangeEmptyRequest {
    pub empty: bool,
}

/// Request body for changing the guest count.
#[derive(Deserialize)]
pub struct ChangeNumberOfGuestsRequest {
    pub number_of_guests: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<OrderTable>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<OrderTable>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoints.
pub enum UpdateResponse {
    Ok(Json<OrderTable>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/tables`
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
    let tables = state.table_service.list_tables().await?;
    Ok(ListResponse::Ok(Json(tables)))
}

/// `POST /api/tables`
pub async fn create<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Json(req): Json<CreateTableRequest>,
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
    let created = state
        .table_service
        .create_table(req.number_of_guests, req.empty)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/tables/:id/empty`
pub async fn change_empty<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Path(id): Path<String>,
    Json(req): Json<ChangeEmptyRequest>,
) -> Result<UpdateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Send + Sync + 'static,
{
    let table_id: OrderTableId = parse_id(&id)?;
    let updated = state
        .table_service
        .change_empty(table_id, req.empty)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `PUT /api/tables/:id/number-of-guests`
pub async fn change_number_of_guests<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Path(id): Path<String>,
    Json(req): Json<ChangeNumberOfGuestsRequest>,
) -> Result<UpdateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Send + Sync + 'static,
{
    let table_id: OrderTableId = parse_id(&id)?;
    let updated = state
        .table_service
        .change_number_of_guests(table_id, req.number_of_guests)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}
