//! Product handlers
//!
//! CRUD endpoints under `/productos`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::AppError;
use crate::AppState;

/// GET /productos
pub async fn list_products<PR>(
    State(state): State<AppState<PR>>,
) -> Result<Json<Vec<Product>>, AppError>
where
    PR: ProductRepository + 'static,
{
    let products = state.product_service.list().await?;
    Ok(Json(products))
}

/// POST /productos
///
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create_product<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<Product>, AppError>
where
    PR: ProductRepository + 'static,
{
    let Json(input) = payload?;
    let product = state.product_service.create(input).await?;
    Ok(Json(product))
}

/// GET /productos/:id
pub async fn get_product<PR>(
    State(state): State<AppState<PR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, AppError>
where
    PR: ProductRepository + 'static,
{
    let Path(id) = id?;
    let product = state.product_service.get_by_id(ProductId(id)).await?;
    Ok(Json(product))
}

/// PUT /productos/:id
///
/// Both `nombre` and `precio` are required and fully overwritten.
pub async fn update_product<PR>(
    State(state): State<AppState<PR>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<Product>, AppError>
where
    PR: ProductRepository + 'static,
{
    let Path(id) = id?;
    let Json(changes) = payload?;
    let product = state
        .product_service
        .update(ProductId(id), changes)
        .await?;
    Ok(Json(product))
}

/// DELETE /productos/:id
///
/// Responds with a plain-text confirmation.
pub async fn delete_product<PR>(
    State(state): State<AppState<PR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<String, AppError>
where
    PR: ProductRepository + 'static,
{
    let Path(id) = id?;
    state.product_service.delete(ProductId(id)).await
}
