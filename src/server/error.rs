// ============================================================================
// Server Errors
// Startup failures and calculator errors mapped to HTTP responses
// ============================================================================

use super::dto::CalcFailure;
use crate::numeric::CalcError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures while starting or running the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Message shown on the form page for a calculation error
pub fn form_message(error: CalcError) -> &'static str {
    match error {
        CalcError::InvalidNumber => "Please enter valid numbers.",
        CalcError::InvalidOperation => "Invalid operation",
        CalcError::DivisionByZero => "Cannot divide by zero",
        CalcError::CalculationFailed => "Calculation failed",
    }
}

/// JSON API rejection: always 400 with `{"ok": false, "error": ...}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError(pub CalcError);

impl From<CalcError> for ApiError {
    fn from(error: CalcError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(CalcFailure::new(self.0.to_string())),
        )
            .into_response()
    }
}
