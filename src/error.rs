use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mailer::SendError;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Token not found")]
    TokenNotFound,

    #[error("Email service not configured")]
    NotificationUnavailable,

    #[error("Email send failed: {0}")]
    NotificationSend(#[from] SendError),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::TokenNotFound => (
                StatusCode::NOT_FOUND,
                crate::constants::ERR_TOKEN_NOT_FOUND,
            ),
            AppError::NotificationUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Email service not configured. Please contact support.",
            ),
            AppError::NotificationSend(ref e) => {
                tracing::error!("Error sending verification email: {:?}", e);
                let message = match e {
                    SendError::Auth => {
                        "Email authentication failed. Please check mail credentials."
                    }
                    SendError::Connection => {
                        "Could not connect to email server. Please try again later."
                    }
                    SendError::Other(_) => "Failed to send verification email. Please try again.",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Unexpected(ref e) => {
                tracing::error!("Unexpected error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again.",
                )
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
