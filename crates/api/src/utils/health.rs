//! Health report served by `/api/dashboard/health`

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const STATUS_OK: &str = "ok";
pub const STATUS_DEGRADED: &str = "degraded";
pub const DATABASE_UNAVAILABLE: &str = "unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `ok` or `degraded`
    pub status: String,
    /// `ok` or `unavailable`
    pub database: String,
}

impl HealthStatus {
    pub fn from_database(check: Result<(), String>) -> Self {
        match check {
            Ok(()) => Self { status: STATUS_OK.to_string(), database: STATUS_OK.to_string() },
            Err(err) => {
                warn!(error = %err, "database health check failed");
                Self {
                    status: STATUS_DEGRADED.to_string(),
                    database: DATABASE_UNAVAILABLE.to_string(),
                }
            }
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == STATUS_OK
    }
}
