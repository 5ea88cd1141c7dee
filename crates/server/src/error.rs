use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("requested message doesn't exist")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Clone, Debug, Error)]
pub enum ValidationError {
    #[error("Missing body or username in request data.")]
    MissingFields,
    #[error("Missing body in update request.")]
    MissingBody,
    #[error("Message body cannot be empty.")]
    EmptyBody,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Sqlx(sqlx::Error::RowNotFound) | Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Message not found" }),
            ),
            Self::Sqlx(e) => {
                error!("received internal error for user request: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "errors": ["Could not process the message."] }),
                )
            }
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [e.to_string()] }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
