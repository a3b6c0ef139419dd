//! Application-side configuration derived at preparation time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::server_config::NormalizedConfig;
use super::variant::FrameworkVariant;

/// The application's view of the configuration, computed from the normalized
/// server config plus the process environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedAppConfig {
    pub root_path: String,
    pub static_path: String,
    pub register_providers: Vec<String>,
    pub is_lumen: bool,
    #[serde(rename = "_SERVER")]
    pub server_snapshot: BTreeMap<String, String>,
    #[serde(rename = "_ENV")]
    pub env_snapshot: BTreeMap<String, String>,
}

impl DerivedAppConfig {
    /// Compute the derived view. Duplicate providers collapse to their first
    /// occurrence, preserving order.
    pub fn derive(
        server: &NormalizedConfig,
        variant: FrameworkVariant,
        server_snapshot: BTreeMap<String, String>,
        env_snapshot: BTreeMap<String, String>,
    ) -> Self {
        let mut register_providers: Vec<String> = Vec::new();
        for provider in &server.register_providers {
            if !register_providers.contains(provider) {
                register_providers.push(provider.clone());
            }
        }

        Self {
            root_path: server.laravel_base_path.clone(),
            static_path: server.swoole.document_root.clone(),
            register_providers,
            is_lumen: variant.is_minimal(),
            server_snapshot,
            env_snapshot,
        }
    }
}

/// The artifact written whole to `<storage>/laravels.json` and consumed once
/// at server-process startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedArtifact {
    pub server: NormalizedConfig,
    pub laravel: DerivedAppConfig,
}
