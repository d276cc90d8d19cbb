//! HTTP API module for the mini-job engine.
//!
//! This module provides the REST API endpoints for calculating a month's
//! pay, evaluating the rolling-window threshold status and summarizing a
//! year of monthly inputs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, LedgerSummaryRequest, ThresholdStatusRequest};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
