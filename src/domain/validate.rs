//! Pre-persistence configuration checks.

use super::error::AppError;
use super::server_config::NormalizedConfig;
use super::version::Version;

/// Reject configurations that would silently misbehave against the installed
/// runtime. Callers must abort before persisting on error.
///
/// The runtime version is queried lazily: only the gzip gate needs it, so a
/// config without `enable_gzip` validates even when the engine is absent.
pub fn preflight(
    conf: &NormalizedConfig,
    runtime_version: impl FnOnce() -> Result<Version, AppError>,
) -> Result<(), AppError> {
    if conf.enable_gzip {
        let installed = runtime_version()?;
        if installed >= Version::from_segments(&[4, 1, 0]) {
            return Err(AppError::GzipDeprecated);
        }
    }

    if !conf.events.is_empty() && conf.swoole.task_worker_num.unwrap_or(0) <= 0 {
        return Err(AppError::TaskWorkersRequired);
    }

    Ok(())
}
