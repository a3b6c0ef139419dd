use std::path::PathBuf;

use crate::domain::{AppError, FrameworkVariant, ServerConfig};

/// Access to the host project's paths and stored configuration.
///
/// Replaces the host framework's ambient `config()` / `base_path()` helpers
/// with an explicit capability passed into each command.
pub trait ProjectContext {
    /// Host framework flavor, resolved once at startup.
    fn variant(&self) -> FrameworkVariant;

    /// Effective project base path: the `laravel_base_path` config value
    /// when set, else the framework-provided default.
    fn resolve_base_path(&self) -> PathBuf;

    /// Path under the project's writable storage directory.
    fn resolve_storage_path(&self, relative: &str) -> PathBuf;

    /// Load the tool's configuration override file if the host has not
    /// already done so. Idempotent; a missing file is not an error.
    fn load_config(&mut self) -> Result<(), AppError>;

    /// The stored server configuration as authored by the user.
    fn server_config(&self) -> ServerConfig;
}
