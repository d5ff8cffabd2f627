use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::db::models::EntityKind;

#[derive(Debug, ThisError)]
pub enum FolioError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    #[error("Mail provider is not configured")]
    MailerNotConfigured,

    #[error("Mail provider rejected the message with status {status}: {body}")]
    MailProviderStatus { status: StatusCode, body: String },

    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Unknown entity `{0}`")]
    UnknownEntity(String),

    #[error("Failed to {action} {kind}")]
    MutationFailed {
        action: &'static str,
        kind: EntityKind,
    },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),
}

impl FolioError {
    /// True when SQLite reports that the queried table does not exist.
    pub fn is_missing_table(&self) -> bool {
        match self {
            FolioError::DatabaseError(SqlxError::Database(db_err)) => {
                db_err.message().contains("no such table")
            }
            _ => false,
        }
    }
}

impl IntoResponse for FolioError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            FolioError::NotFound(kind) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("The requested {kind} does not exist."),
            ),
            FolioError::UnknownEntity(name) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Unknown entity `{name}`."),
            ),
            FolioError::MutationFailed { action, kind } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MUTATION_FAILED",
                format!("Failed to {action} {kind}."),
            ),
            FolioError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "invalid or missing admin key".to_string(),
            ),
            FolioError::InvalidBody(rejection) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", rejection.body_text())
            }
            FolioError::InvalidPath(rejection) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", rejection.body_text())
            }
            FolioError::MailerNotConfigured
            | FolioError::MailProviderStatus { .. }
            | FolioError::Reqwest(_)
            | FolioError::UrlParse(_) => (
                StatusCode::BAD_GATEWAY,
                "BAD_GATEWAY",
                "Upstream mail service is unavailable.".to_string(),
            ),
            FolioError::DatabaseError(_) | FolioError::Json(_) | FolioError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred.".to_string(),
            ),
        };
        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
