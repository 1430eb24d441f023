//! JSON REST handlers for orders.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use servery_app::ports::{
    Catalog, MenuGroupRepository, MenuRepository, OrderRepository, OrderTableRepository,
    ProductRepository, TableGroupRepository,
};
use servery_domain::id::{MenuId, OrderId, OrderTableId};
use servery_domain::order::{Order, OrderLineItem, OrderStatus};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// One line of an order request.
#[derive(Deserialize)]
pub struct OrderLineItemRequest {
    pub menu_id: String,
    pub quantity: u64,
}

/// Request body for placing an order.
#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub order_table_id: String,
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItemRequest>,
}

/// Request body for moving an order to another status.
#[derive(Deserialize)]
pub struct ChangeOrderStatusRequest {
    pub order_status: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Order>>),
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
    Created(Json<Order>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the status endpoint.
pub enum UpdateResponse {
    Ok(Json<Order>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/orders`
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
    let orders = state.order_service.list_orders().await?;
    Ok(ListResponse::Ok(Json(orders)))
}

/// `POST /api/orders`
pub async fn create<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Json(req): Json<CreateOrderRequest>,
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
    let order_table_id: OrderTableId = parse_id(&req.order_table_id)?;
    let line_items = req
        .order_line_items
        .iter()
        .map(|line| {
            let menu_id: MenuId = parse_id(&line.menu_id)?;
            Ok(OrderLineItem::new(menu_id, line.quantity)?)
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    let created = state
        .order_service
        .create_order(order_table_id, line_items)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/orders/:id/order-status`
pub async fn change_status<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Path(id): Path<String>,
    Json(req): Json<ChangeOrderStatusRequest>,
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
    let order_id: OrderId = parse_id(&id)?;
    let status = OrderStatus::from_str(&req.order_status)?;
    let updated = state
        .order_service
        .change_order_status(order_id, status)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}
