//! Port interfaces for the report engine
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use tabtally_domain::{ActivityEvent, Result};

/// Trait for the append-only activity event store.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append one event to the store.
    async fn append_event(&self, event: ActivityEvent) -> Result<()>;

    /// Get all events whose close time lies in the closed interval
    /// `[start_ms, end_ms]` (epoch milliseconds), ordered by close time
    /// ascending.
    async fn events_in_range(&self, start_ms: i64, end_ms: i64) -> Result<Vec<ActivityEvent>>;
}
