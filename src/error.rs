use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::mailer::MailError;

/// One violated form constraint, reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Invalid data format")]
    MalformedPayload,

    #[error("Email service temporarily unavailable")]
    Mail(#[from] MailError),

    #[error("Course {0} not found")]
    CourseNotFound(u32),

    #[error("Too many email requests from this IP, please try again later.")]
    RateLimited,

    #[error("Internal server error")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) | AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::CourseNotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Mail(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            AppError::Mail(source) => error!(error = %source, "email sending failed"),
            AppError::Internal(source) => error!(error = %source, "application error"),
            AppError::RateLimited => warn!("email rate limit exceeded"),
            _ => {}
        }

        let body = match self {
            AppError::Validation(errors) => json!({
                "success": false,
                "message": "Validation failed",
                "errors": errors,
            }),
            other => json!({
                "success": false,
                "message": other.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
