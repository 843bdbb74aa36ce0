//! Application context - dependency injection container

use std::sync::Arc;

use tabtally_core::report::ports::EventStore;
use tabtally_core::ReportService;
use tabtally_domain::{AppConfig, Result};
use tabtally_infra::database::{DbManager, SqliteEventRepository};

/// Type alias for the event store port trait object
type DynEventStore = dyn EventStore + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: AppConfig,
    pub db: Arc<DbManager>,
    pub events: Arc<DynEventStore>,
    pub reports: Arc<ReportService>,
}

impl AppContext {
    /// Wire the full dependency graph from configuration.
    ///
    /// Opens the database, applies migrations, and verifies connectivity
    /// before any request is served.
    pub fn new(config: AppConfig) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;
        db.health_check()?;

        let events: Arc<DynEventStore> =
            Arc::new(SqliteEventRepository::new(Arc::clone(&db)));
        let reports = Arc::new(ReportService::new(Arc::clone(&events)));

        Ok(Self { config, db, events, reports })
    }
}
