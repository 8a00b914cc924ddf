use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use service_core::error::AppError;
use thiserror::Error;

/// Errors surfaced by the user endpoints, each with its own wire shape.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Both name and age are required.")]
    MissingFields,

    #[error("user failed validation: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("failed to add user: {0}")]
    AddFailed(AppError),

    #[error("failed to fetch users: {0}")]
    FetchFailed(AppError),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        match self {
            ProfileError::MissingFields => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ProfileError::Invalid(err) => {
                tracing::error!(error = %err, "Rejected user record");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "err": "Internal Server Error" })),
                )
                    .into_response()
            }
            ProfileError::AddFailed(err) => {
                tracing::error!(error = %err, "Failed to add user");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "err": "Internal Server Error" })),
                )
                    .into_response()
            }
            ProfileError::FetchFailed(err) => {
                tracing::error!(error = %err, "Failed to fetch users");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "msg": "Something went wrong" })),
                )
                    .into_response()
            }
        }
    }
}
