//! HTTP routes
//!
//! Three endpoints, mirroring the tracker's expectations: it POSTs
//! session-close events to `/`, users load the report page from `/`,
//! and the page script polls `/report/data` for fresh numbers.

pub mod ingest;
pub mod report;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::context::AppContext;

/// Build the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(report::report_page).post(ingest::ingest_event))
        .route("/report/data", get(report::report_data))
        .with_state(ctx)
}
