//! Error envelope of the HTTP API.
//!
//! Every failure leaves the API as an [`ApiError`] body with a status code.
//! Body problems are the caller's fault (400); a run that fails after the
//! body was accepted is ours (500).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Body of every error response.
///
/// ```
/// use attendance_engine::api::ApiError;
///
/// let error = ApiError::missing_table("Holiday");
/// assert_eq!(error.code, "MISSING_TABLE");
/// assert!(error.details.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `MISSING_TABLE`.
    pub code: String,
    /// Message for people.
    pub message: String,
    /// Extra context, omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Error without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// A row of some table lacks a required field or has the wrong type.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// The body is not JSON at all.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// One of the six input tables is absent.
    pub fn missing_table(table: &str) -> Self {
        Self::new(
            "MISSING_TABLE",
            format!("Required input table is missing: {}", table),
        )
        .with_details(format!(
            "Send the '{}' table as an empty array when it has no rows",
            table
        ))
    }
}

/// An [`ApiError`] paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Body tables are checked by the extractor before the engine runs, so the
/// only engine failure `/process` can surface is a worker that did not
/// finish.
impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let code = match error {
            EngineError::CalculationError { .. } => "CALCULATION_ERROR",
            _ => "ENGINE_ERROR",
        };
        Self::internal(
            ApiError::new(code, "Attendance run failed").with_details(error.to_string()),
        )
    }
}
