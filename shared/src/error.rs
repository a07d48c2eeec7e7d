use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    InvalidReference(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("an error occurred while running a database query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            e @ (AppError::InvalidReference(_) | AppError::ValidationError(_)) => {
                tracing::debug!(error.message = %e, "Rejected client request");
                StatusCode::BAD_REQUEST
            }
            e @ (AppError::SpecificOperationError(_) | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
