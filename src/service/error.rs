// service/error.rs
use thiserror::Error;

use crate::error::HttpError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Job {0} not found")]
    JobNotFound(String),

    #[error("Application {0} not found")]
    ApplicationNotFound(String),

    #[error("Business profile not found for user {0}")]
    BusinessProfileNotFound(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::JobNotFound(_)
            | ServiceError::ApplicationNotFound(_)
            | ServiceError::BusinessProfileNotFound(_)
            | ServiceError::UserNotFound(_) => HttpError::not_found(error.to_string()),

            ServiceError::Validation(_) => HttpError::bad_request(error.to_string()),

            ServiceError::Database(_) | ServiceError::Mail(_) => {
                HttpError::server_error(error.to_string())
            }
        }
    }
}
