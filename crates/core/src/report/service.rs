//! Weekly report service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Local};
use tabtally_domain::{EventPayload, Result, WeeklyReport};
use tracing::debug;

use super::aggregator::aggregate;
use super::ports::EventStore;
use super::window::ReportWindow;

/// Weekly report service
///
/// Holds nothing but the store port; the current time and the event
/// snapshot are supplied per call, so the service carries no state across
/// requests.
pub struct ReportService {
    store: Arc<dyn EventStore>,
}

impl ReportService {
    /// Create a new report service
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Persist one inbound tracker payload as an activity event.
    ///
    /// Absent payload fields are stored as empty/zero; the payload is not
    /// validated beyond JSON shape.
    pub async fn record_event(&self, payload: EventPayload) -> Result<()> {
        let event = payload.into_event();
        debug!(domain = %event.domain, duration_ms = event.active_duration_ms, "recording activity event");
        self.store.append_event(event).await
    }

    /// Compute the weekly report for the window ending on `now`'s date.
    ///
    /// Each call fetches an independent event snapshot through the store's
    /// range query and aggregates it; concurrent callers never share state.
    pub async fn weekly_report(&self, now: DateTime<Local>) -> Result<WeeklyReport> {
        let window = ReportWindow::resolve(now);
        let events = self.store.events_in_range(window.start_ms(), window.end_ms()).await?;
        debug!(event_count = events.len(), "aggregating weekly report");
        Ok(aggregate(&events, window.days()))
    }
}
