//! Handler for the `/process` endpoint.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run;
use crate::error::EngineError;
use crate::models::RunReport;

use super::request::{ProcessRequest, table_for_field};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_handler))
        .with_state(state)
}

/// POST /process: runs the engine over the six posted tables and returns
/// the complete run report.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Attendance run requested");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_to_error(correlation_id, rejection))
                .into_response();
        }
    };

    match process(state, request).await {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %report.run_id,
                departments = report.departments.len(),
                "Attendance run returned"
            );
            Json(report).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Attendance run failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the engine on a blocking worker; the run is CPU-bound.
async fn process(state: AppState, request: ProcessRequest) -> Result<RunReport, EngineError> {
    let config = state.shared_config();
    let attendance_rows = request.attendance.len();
    let start_time = Instant::now();

    let report = tokio::task::spawn_blocking(move || run(&config, request.into()))
        .await
        .map_err(|err| EngineError::CalculationError {
            message: err.to_string(),
        })?;

    info!(
        attendance_rows,
        duration_us = start_time.elapsed().as_micros(),
        "Blocking run finished"
    );
    Ok(report)
}

/// Maps a body rejection to the error the caller sees.
///
/// A missing top-level table is a structural failure; any other shape
/// problem inside a row is a validation error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "Request tables rejected");

            match missing_field(&body_text).and_then(table_for_field) {
                Some(table) => ApiError::missing_table(table),
                None => ApiError::validation_error(body_text),
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Request body is not JSON");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        other => ApiError::malformed_json(other.body_text()),
    }
}

/// Extracts the field name from serde's "missing field `name`" message.
fn missing_field(body_text: &str) -> Option<&str> {
    let rest = &body_text[body_text.find("missing field `")? + "missing field `".len()..];
    rest.split('`').next()
}
