use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use goodstack_core::error::CatalogError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CatalogError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{"error": ..., "code": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A database error from sqlx (project handlers hit the pool directly).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Catalog(catalog) => match catalog {
                CatalogError::GoodNotFound { id, project_id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("good {id} not found in project {project_id}"),
                ),
                CatalogError::ProjectNotFound { id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("project {id} not found"),
                ),
                CatalogError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CatalogError::Storage(err) => {
                    tracing::error!(error = %err, "Storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                CatalogError::Cache(err) => {
                    tracing::error!(error = %err, "Cache error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map `validator` derive output to a 400 with the first message.
pub fn validation_error(errors: validator::ValidationErrors) -> AppError {
    AppError::Catalog(CatalogError::Validation(errors.to_string()))
}
