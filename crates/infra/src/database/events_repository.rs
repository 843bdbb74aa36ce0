//! Activity event repository implementation using SQLite
//!
//! Provides the append-only event store behind the weekly report.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Row};
use tabtally_core::report::ports::EventStore;
use tabtally_domain::{ActivityEvent, Result as DomainResult, TabTallyError};
use tokio::task;

use super::manager::{DbConnection, DbManager};
use crate::errors::InfraError;

/// SQLite-backed implementation of `EventStore`
pub struct SqliteEventRepository {
    db: Arc<DbManager>,
}

impl SqliteEventRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventStore for SqliteEventRepository {
    async fn append_event(&self, event: ActivityEvent) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_event(&conn, &event).map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn events_in_range(
        &self,
        start_ms: i64,
        end_ms: i64,
    ) -> DomainResult<Vec<ActivityEvent>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<ActivityEvent>> {
            let conn = db.get_connection()?;
            query_events_in_range(&conn, start_ms, end_ms).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to an ActivityEvent
fn map_event_row(row: &Row<'_>) -> rusqlite::Result<ActivityEvent> {
    Ok(ActivityEvent {
        domain: row.get(0)?,
        close_ts_ms: row.get(1)?,
        active_duration_ms: row.get(2)?,
    })
}

/// Insert an activity event
fn insert_event(conn: &DbConnection, event: &ActivityEvent) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO activity_events (domain, close_ts_ms, active_duration_ms)
         VALUES (?1, ?2, ?3)",
        params![&event.domain, event.close_ts_ms, event.active_duration_ms],
    )?;
    Ok(())
}

/// Query events whose close time lies in the closed interval
fn query_events_in_range(
    conn: &DbConnection,
    start_ms: i64,
    end_ms: i64,
) -> rusqlite::Result<Vec<ActivityEvent>> {
    let mut stmt = conn.prepare(
        "SELECT domain, close_ts_ms, active_duration_ms
         FROM activity_events
         WHERE close_ts_ms >= ?1 AND close_ts_ms <= ?2
         ORDER BY close_ts_ms ASC",
    )?;

    let rows = stmt.query_map(params![start_ms, end_ms], map_event_row)?;
    rows.collect()
}

// =============================================================================
// Error Mapping
// =============================================================================

fn map_sql_error(err: rusqlite::Error) -> TabTallyError {
    InfraError::from(err).into()
}

fn map_join_error(err: task::JoinError) -> TabTallyError {
    TabTallyError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================
