use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Anything the store raised while running a query. The cause is logged,
/// never shown to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    /// Raised by the in-memory store used in tests.
    #[cfg(test)]
    #[error("store failure: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Product not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            AppError::Store(cause) => {
                error!(error = %cause, "Store query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
