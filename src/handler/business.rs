// handler/business.rs
use std::sync::Arc;

use axum::{
    extract::Query,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    dtos::businessdtos::{
        BusinessAccountResponseDto, BusinessProfileResponseDto, BusinessUserQueryDto,
        CreateBusinessAccountDto, UpdateBusinessAccountDto,
    },
    error::{HttpError, Response},
    AppState,
};

pub fn business_handler() -> Router {
    Router::new().route(
        "/",
        get(get_business_account)
            .post(create_business_account)
            .patch(update_business_account)
            .delete(delete_business_account),
    )
}

pub async fn get_business_account(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<BusinessUserQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let account = app_state
        .business_service
        .get_business_account(&params.user_id)
        .await?;

    Ok(Json(BusinessAccountResponseDto {
        status: "success".to_string(),
        account,
    }))
}

pub async fn create_business_account(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateBusinessAccountDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let profile = app_state
        .business_service
        .create_business_account(body)
        .await?;

    Ok(Json(BusinessProfileResponseDto {
        status: "success".to_string(),
        profile,
    }))
}

pub async fn update_business_account(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<BusinessUserQueryDto>,
    Json(body): Json<UpdateBusinessAccountDto>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = app_state
        .business_service
        .update_business_account(&params.user_id, body)
        .await?;

    Ok(Json(BusinessProfileResponseDto {
        status: "success".to_string(),
        profile,
    }))
}

pub async fn delete_business_account(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<BusinessUserQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .business_service
        .delete_business_account(&params.user_id)
        .await?;

    Ok(Json(Response {
        status: "success",
        message: "Business profile deleted successfully".to_string(),
    }))
}
