//! HTTP API module for the Working Time Engine.
//!
//! This module provides the REST API endpoints for checking working-time
//! compliance and building compliance reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckRequest, ReportRequest, WorkerTimesheet};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
