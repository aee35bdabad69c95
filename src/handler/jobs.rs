// handler/jobs.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::{
    dtos::jobdtos::{
        ApplicationListResponseDto, ApplicationsQueryDto, ApplyToJobDto, CreateJobDto,
        DeleteApplicationQueryDto, JobListResponseDto, JobResponseDto,
        UpdateApplicationStatusDto,
    },
    error::{ErrorMessage, HttpError, Response},
    AppState,
};

pub fn jobs_handler() -> Router {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/:job_id", delete(delete_job))
        .route("/applications", post(apply_to_job))
        .route(
            "/myJobs/applications",
            get(get_my_job_applications)
                .patch(update_application_status)
                .delete(delete_application),
        )
}

pub async fn list_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let jobs = app_state.job_service.fetch_jobs_with_questions().await?;

    Ok(Json(JobListResponseDto {
        status: "success".to_string(),
        jobs,
    }))
}

pub async fn create_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let job = app_state.job_service.create_job(body).await?;

    Ok(Json(JobResponseDto {
        status: "success".to_string(),
        job,
    }))
}

pub async fn delete_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    app_state.job_service.delete_job(&job_id).await?;

    Ok(Json(Response {
        status: "success",
        message: "Job deleted successfully".to_string(),
    }))
}

pub async fn apply_to_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<ApplyToJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let application = app_state.job_service.apply_to_job(body).await?;

    Ok(Json(json!({
        "status": "success",
        "application": application
    })))
}

/// `userId` XOR `jobId`: the first returns the user's jobs with their
/// applications, the second one job's applications. Anything else is a 400.
pub async fn get_my_job_applications(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<ApplicationsQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let response = match (params.user_id, params.job_id) {
        (Some(user_id), None) => {
            let jobs = app_state
                .job_service
                .fetch_user_jobs_with_questions(&user_id)
                .await?;

            Json(JobListResponseDto {
                status: "success".to_string(),
                jobs,
            })
            .into_response()
        }
        (None, Some(job_id)) => {
            let applications = app_state
                .job_service
                .fetch_job_applications(&job_id)
                .await?;

            Json(ApplicationListResponseDto {
                status: "success".to_string(),
                applications,
            })
            .into_response()
        }
        _ => {
            return Err(HttpError::bad_request(
                ErrorMessage::InvalidQueryParams.to_str(),
            ))
        }
    };

    Ok(response)
}

pub async fn update_application_status(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .job_service
        .update_application_status(&body.application_id, body.status)
        .await?;

    Ok(Json(Response {
        status: "success",
        message: "Application status updated successfully".to_string(),
    }))
}

pub async fn delete_application(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(params): Query<DeleteApplicationQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .job_service
        .delete_application(&params.application_id)
        .await?;

    Ok(Json(Response {
        status: "success",
        message: "Application deleted successfully".to_string(),
    }))
}
