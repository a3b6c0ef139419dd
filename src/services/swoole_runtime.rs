use std::process::Command;

use crate::domain::{AppError, Version};
use crate::ports::RuntimeEngine;

/// Environment override consulted before probing the PHP toolchain.
pub const VERSION_ENV: &str = "LARAVELS_SWOOLE_VERSION";

/// Reports the installed Swoole extension version, either from the
/// `LARAVELS_SWOOLE_VERSION` override or by probing `php`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwooleRuntime;

impl RuntimeEngine for SwooleRuntime {
    fn version(&self) -> Result<Version, AppError> {
        if let Ok(value) = std::env::var(VERSION_ENV) {
            return Version::parse(&value).ok_or_else(|| {
                AppError::RuntimeUnavailable(format!("invalid {VERSION_ENV} value '{value}'"))
            });
        }

        let output = Command::new("php")
            .args(["-r", "echo swoole_version();"])
            .output()
            .map_err(|err| AppError::RuntimeUnavailable(err.to_string()))?;
        if !output.status.success() {
            return Err(AppError::RuntimeUnavailable(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let reported = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Version::parse(&reported).ok_or_else(|| {
            AppError::RuntimeUnavailable(format!("unparseable version '{reported}'"))
        })
    }
}
