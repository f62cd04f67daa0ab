//! Command execution helpers
//!
//! Times a command and logs the outcome so the individual commands stay
//! one-liners.

use std::future::Future;
use std::time::Instant;

use straycare_domain::Result as DomainResult;

use crate::utils::logging::log_command_execution;

/// Execute a command with timing and structured logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn get_zone_statistics(ctx: &AppContext) -> DomainResult<ZoneTable> {
///     execute_logged("dashboard::get_zone_statistics", || async {
///         ctx.dashboard.get_zone_statistics().await
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(|err| err.label());
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);

    result
}
