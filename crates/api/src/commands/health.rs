//! Health check command

use crate::context::AppContext;
use crate::utils::health::HealthStatus;

/// Database connectivity, e.g. `{"status":"ok","database":"ok"}`.
pub async fn get_app_health(ctx: &AppContext) -> HealthStatus {
    ctx.health_check().await
}
