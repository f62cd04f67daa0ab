//! Application context - dependency injection container

use std::sync::Arc;

use straycare_common::time::{Clock, SystemClock};
use straycare_core::DashboardService;
use straycare_domain::{Config, Result};
use straycare_infra::config::parse_timezone;
use straycare_infra::{
    seed_sample_data, DbManager, SqliteAdoptionRepository, SqliteReportRepository,
    SqliteVolunteerRepository,
};
use tracing::info;

use crate::utils::health::HealthStatus;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub dashboard: Arc<DashboardService>,
}

impl AppContext {
    /// Open the database, apply migrations, optionally seed, and wire the
    /// dashboard service on the system clock.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Same as [`AppContext::new`] with an explicit clock.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let timezone = parse_timezone(&config.dashboard.timezone)?;

        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        if config.dashboard.seed_sample_data {
            seed_sample_data(&db, clock.now())?;
        }

        let dashboard = DashboardService::new(
            Arc::new(SqliteReportRepository::new(Arc::clone(&db))),
            Arc::new(SqliteAdoptionRepository::new(Arc::clone(&db))),
            Arc::new(SqliteVolunteerRepository::new(Arc::clone(&db))),
        )
        .with_clock(clock)
        .with_timezone(timezone);

        info!(
            db_path = %db.path().display(),
            timezone = %timezone,
            "application context initialised"
        );

        Ok(Self { config, db, dashboard: Arc::new(dashboard) })
    }

    pub async fn health_check(&self) -> HealthStatus {
        let db = Arc::clone(&self.db);
        let database = tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(|err| err.to_string())
            .and_then(|result| result.map_err(|err| err.to_string()));

        HealthStatus::from_database(database)
    }
}
