use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, FrameworkVariant, ServerConfig};
use crate::ports::ProjectContext;

/// Name of the tool's configuration override file in `<base>/config/`.
const CONFIG_FILE: &str = "laravels.toml";

/// Filesystem-backed project context rooted at the host project directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectContext {
    root: PathBuf,
    variant: FrameworkVariant,
    config: Option<ServerConfig>,
}

impl FilesystemProjectContext {
    /// Create a context for the given project root. Detects the framework
    /// variant once; the full variant loads configuration eagerly, matching
    /// the host framework's auto-loading.
    pub fn new(root: PathBuf) -> Result<Self, AppError> {
        let variant = detect_variant(&root);
        let mut ctx = Self { root, variant, config: None };
        if variant == FrameworkVariant::Full {
            ctx.load_config()?;
        }
        Ok(ctx)
    }

    /// Create a context for the current directory.
    pub fn current() -> Result<Self, AppError> {
        Self::new(std::env::current_dir()?)
    }

    fn config_path(&self) -> PathBuf {
        self.resolve_base_path().join("config").join(CONFIG_FILE)
    }
}

impl ProjectContext for FilesystemProjectContext {
    fn variant(&self) -> FrameworkVariant {
        self.variant
    }

    fn resolve_base_path(&self) -> PathBuf {
        let configured = self
            .config
            .as_ref()
            .and_then(|conf| conf.laravel_base_path.as_deref())
            .filter(|path| !path.is_empty());
        match configured {
            Some(path) => PathBuf::from(path),
            None => self.root.clone(),
        }
    }

    fn resolve_storage_path(&self, relative: &str) -> PathBuf {
        self.resolve_base_path().join("storage").join(relative)
    }

    fn load_config(&mut self) -> Result<(), AppError> {
        if self.config.is_some() {
            return Ok(());
        }
        let path = self.config_path();
        let config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            ServerConfig::default()
        };
        self.config = Some(config);
        Ok(())
    }

    fn server_config(&self) -> ServerConfig {
        self.config.clone().unwrap_or_default()
    }
}

/// Detect the host flavor from its composer manifest. A
/// `laravel/lumen-framework` requirement marks the minimal variant.
fn detect_variant(root: &Path) -> FrameworkVariant {
    let Ok(content) = fs::read_to_string(root.join("composer.json")) else {
        return FrameworkVariant::Full;
    };
    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&content) else {
        return FrameworkVariant::Full;
    };
    match manifest.get("require").and_then(|value| value.as_object()) {
        Some(require) if require.contains_key("laravel/lumen-framework") => {
            FrameworkVariant::Minimal
        }
        _ => FrameworkVariant::Full,
    }
}
