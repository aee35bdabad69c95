// handler/marketplace.rs
use std::sync::Arc;

use axum::{
    extract::Query,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    dtos::productdtos::{
        CreateProductDto, ProductResponseDto, ProductsQueryDto, ProductsResponseDto,
    },
    error::HttpError,
    AppState,
};

pub fn marketplace_handler() -> Router {
    Router::new().route("/products", get(list_products).post(create_product))
}

pub async fn list_products(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<ProductsQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let products = app_state
        .product_service
        .fetch_user_products(&params.user_id)
        .await?;

    Ok(Json(ProductsResponseDto {
        status: "success".to_string(),
        products,
    }))
}

pub async fn create_product(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateProductDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let product = app_state.product_service.create_product(body).await?;

    Ok(Json(ProductResponseDto {
        status: "success".to_string(),
        product,
    }))
}
