//! In-memory fakes for command unit tests.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, FrameworkVariant, ServerConfig, Version};
use crate::ports::{OverwritePrompt, ProjectContext, RuntimeEngine};

/// Project context with a fixed root, variant, and stored configuration.
pub(crate) struct StaticProject {
    root: PathBuf,
    variant: FrameworkVariant,
    config: ServerConfig,
}

impl StaticProject {
    pub(crate) fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf(), variant: FrameworkVariant::Full, config: ServerConfig::default() }
    }

    pub(crate) fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }
}

impl ProjectContext for StaticProject {
    fn variant(&self) -> FrameworkVariant {
        self.variant
    }

    fn resolve_base_path(&self) -> PathBuf {
        self.root.clone()
    }

    fn resolve_storage_path(&self, relative: &str) -> PathBuf {
        self.root.join("storage").join(relative)
    }

    fn load_config(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    fn server_config(&self) -> ServerConfig {
        self.config.clone()
    }
}

/// Runtime engine reporting a fixed version, or always failing.
pub(crate) struct FixedRuntime(Option<Version>);

impl FixedRuntime {
    pub(crate) fn at(version: &str) -> Self {
        Self(Some(Version::parse(version).expect("test version literal")))
    }

    pub(crate) fn unavailable() -> Self {
        Self(None)
    }
}

impl RuntimeEngine for FixedRuntime {
    fn version(&self) -> Result<Version, AppError> {
        self.0
            .clone()
            .ok_or_else(|| AppError::RuntimeUnavailable("no runtime in tests".into()))
    }
}

/// Prompt returning a canned answer.
pub(crate) struct ScriptedPrompt(String);

impl ScriptedPrompt {
    pub(crate) fn answering(answer: &str) -> Self {
        Self(answer.to_string())
    }
}

impl OverwritePrompt for ScriptedPrompt {
    fn ask(&self, _question: &str, default: &str) -> Result<String, AppError> {
        if self.0.is_empty() { Ok(default.to_string()) } else { Ok(self.0.clone()) }
    }
}

/// Prompt that must never be consulted.
pub(crate) struct UnreachablePrompt;

impl OverwritePrompt for UnreachablePrompt {
    fn ask(&self, question: &str, _default: &str) -> Result<String, AppError> {
        panic!("prompt should not be consulted: {question}");
    }
}
