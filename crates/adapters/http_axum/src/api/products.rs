//! JSON REST handlers for products.

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
use servery_domain::id::ProductId;
use servery_domain::money::Money;
use servery_domain::product::Product;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a product.
#[derive(Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    pub price: Option<Decimal>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Product>>),
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
    Ok(Json<Product>),
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
    Created(Json<Product>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/products`
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
    let products = state.product_service.list_products().await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `GET /api/products/{id}`
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
    let product_id: ProductId = parse_id(&id)?;
    let product = state.product_service.get_product(product_id).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `POST /api/products`
pub async fn create<PR, MGR, MR, TR, GR, OR, C>(
    State(state): State<AppState<PR, MGR, MR, TR, GR, OR, C>>,
    Json(req): Json<CreateProductRequest>,
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
    let product = Product::builder()
        .name(req.name)
        .price(Money::from_optional(req.price)?)
        .build()?;
    let created = state.product_service.create_product(product).await?;
    Ok(CreateResponse::Created(Json(created)))
}
