use crate::domain::{AppError, Version};

/// Version reporting for the embedded runtime engine (Swoole).
pub trait RuntimeEngine {
    /// Installed engine version.
    fn version(&self) -> Result<Version, AppError>;
}
