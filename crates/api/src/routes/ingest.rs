//! Tracker ingestion endpoint

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use tabtally_domain::EventPayload;
use tracing::{debug, error};

use crate::context::AppContext;

/// Accept one session-close event from the browser tracker.
///
/// A body that does not parse as JSON is dropped and still answered with
/// `200`, and absent payload fields are stored as empty/zero. Only a store
/// failure produces an error status.
pub async fn ingest_event(State(ctx): State<Arc<AppContext>>, body: Bytes) -> StatusCode {
    let payload: EventPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            debug!(error = %err, "ignoring ingest request without a JSON body");
            return StatusCode::OK;
        }
    };

    match ctx.reports.record_event(payload).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            error!(error = %err, "failed to record activity event");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
