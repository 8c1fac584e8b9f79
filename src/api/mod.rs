//! HTTP API module for the Attendance Rule Engine.
//!
//! This module provides the REST endpoint that runs the engine over a
//! complete set of input tables and returns the run report as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProcessRequest;
pub use response::ApiError;
pub use state::AppState;
