// handler/communities.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::{
    dtos::communitydtos::{
        AddMemberDto, CreatePostDto, MembersResponseDto, PostResponseDto, PostsResponseDto,
    },
    error::HttpError,
    AppState,
};

pub fn communities_handler() -> Router {
    Router::new()
        .route(
            "/:community_id/members",
            get(list_members).post(add_member),
        )
        .route("/:community_id/posts", get(list_posts).post(create_post))
}

pub async fn list_members(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(community_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let members = app_state
        .community_service
        .fetch_community_members(&community_id)
        .await?;

    Ok(Json(MembersResponseDto {
        status: "success".to_string(),
        members,
    }))
}

pub async fn add_member(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(community_id): Path<String>,
    Json(body): Json<AddMemberDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let member = app_state
        .community_service
        .add_member(&community_id, body)
        .await?;

    Ok(Json(json!({
        "status": "success",
        "member": member
    })))
}

pub async fn list_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(community_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let posts = app_state
        .community_service
        .fetch_community_posts(&community_id)
        .await?;

    Ok(Json(PostsResponseDto {
        status: "success".to_string(),
        posts,
    }))
}

pub async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(community_id): Path<String>,
    Json(body): Json<CreatePostDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let post = app_state
        .community_service
        .create_post(&community_id, body)
        .await?;

    Ok(Json(PostResponseDto {
        status: "success".to_string(),
        post,
    }))
}
