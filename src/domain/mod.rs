pub mod app_config;
pub mod error;
pub mod manifest;
pub mod normalize;
pub mod server_config;
pub mod validate;
pub mod variant;
pub mod version;

pub use app_config::{DerivedAppConfig, PersistedArtifact};
pub use error::AppError;
pub use manifest::{ManifestEntry, Operation, publish_manifest};
pub use normalize::normalize;
pub use server_config::{
    CliOverrides, NormalizedConfig, NormalizedSwoole, ServerConfig, SwooleConfig,
};
pub use validate::preflight;
pub use variant::FrameworkVariant;
pub use version::Version;
