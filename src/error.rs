use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Only GET requests are allowed")]
    MethodNotAllowed,

    #[error("Readwise API token not configured")]
    TokenNotConfigured,

    #[error("Missing URL parameter")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrl,

    /// The upstream answered with a non-2xx status; the status is forwarded as-is.
    #[error("Readwise API error")]
    Upstream { status: u16, details: Value },

    /// The request went out but no response came back (timeout or connect failure).
    #[error("No response from Readwise API")]
    UpstreamUnreachable,

    /// The upstream request could not even be constructed or sent.
    #[error("Request setup error")]
    RequestSetup(String),
}

/// Error response structure: a fixed message plus optional details
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingUrl | Self::InvalidUrl => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::UpstreamUnreachable => StatusCode::SERVICE_UNAVAILABLE,
            Self::TokenNotConfigured | Self::RequestSetup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::Upstream { details, .. } => Some(details.clone()),
            Self::UpstreamUnreachable => Some(Value::String("Service may be down".to_string())),
            Self::RequestSetup(message) => Some(Value::String(message.clone())),
            _ => None,
        }
    }

    /// Convert to the error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
