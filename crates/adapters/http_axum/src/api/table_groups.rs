//! JSON REST handlers for table groups.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use servery_app::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};
use servery_app::services::table_group_service::GroupedTables;
use servery_domain::id::{OrderTableId, TableGroupId};
use servery_domain::order_table::OrderTable;
use servery_domain::time::Timestamp;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for grouping tables.
#[derive(Deserialize)]
pub struct CreateTableGroupRequest {
    #[serde(default)]
    pub order_table_ids: Vec<String>,
}

/// A table group with its members, in request order.
#[derive(Serialize)]
pub struct TableGroupResponse {
    pub id: TableGroupId,
    pub created_at: Timestamp,
    pub order_tables: Vec<OrderTable>,
}

impl From<GroupedTables> for TableGroupResponse {
    fn from(grouped: GroupedTables) -> Self {
        Self {
            id: grouped.table_group.id,
            created_at: grouped.table_group.created_at,
            order_tables: grouped.order_tables,
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<TableGroupResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the ungroup endpoint.
pub enum UngroupResponse {
    NoContent,
}

impl IntoResponse for UngroupResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/table-groups`
pub async fn create<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Json(req): Json<CreateTableGroupRequest>,
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
    let ids = req
        .order_table_ids
        .iter()
        .map(|id| parse_id::<OrderTableId>(id))
        .collect::<Result<Vec<_>, _>>()?;
    let grouped = state.table_group_service.create_table_group(ids).await?;
    Ok(CreateResponse::Created(Json(grouped.into())))
}

/// `DELETE /api/table-groups/:id`
pub async fn ungroup<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Path(id): Path<String>,
) -> Result<UngroupResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    MGR: MenuGroupRepository + Send + Sync + 'static,
    MR: MenuRepository + Send + Sync + 'static,
    TR: OrderTableRepository + Send + Sync + 'static,
    GR: TableGroupRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    C: Catalog + Send + Sync + 'static,
{
    let table_group_id: TableGroupId = parse_id(&id)?;
    state.table_group_service.ungroup(table_group_id).await?;
    Ok(UngroupResponse::NoContent)
}
