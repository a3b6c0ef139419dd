use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User-authored server configuration (`config/laravels.toml`).
///
/// Any field may be absent; `normalize` resolves the gaps. Keys this tool
/// does not interpret are carried through the flattened maps so they reach
/// the persisted artifact untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub enable_gzip: Option<bool>,
    pub laravel_base_path: Option<String>,
    pub process_prefix: Option<String>,
    pub ignore_check_pid: Option<bool>,
    /// Event class => listener classes. Dispatch runs on task workers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub register_providers: Vec<String>,
    #[serde(default)]
    pub swoole: SwooleConfig,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Runtime-engine section of the raw configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwooleConfig {
    pub document_root: Option<String>,
    pub daemonize: Option<bool>,
    pub pid_file: Option<String>,
    pub task_worker_num: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Per-invocation flags taking precedence over stored configuration.
///
/// Flags can only force `true`; a stored `false` with no flag stays `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub daemonize: bool,
    pub ignore_check_pid: bool,
}

/// `ServerConfig` with every defaultable field resolved.
///
/// Serializes as the `server` subtree of the persisted artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedConfig {
    pub enable_gzip: bool,
    pub laravel_base_path: String,
    pub process_prefix: String,
    pub ignore_check_pid: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub register_providers: Vec<String>,
    pub swoole: NormalizedSwoole,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSwoole {
    pub document_root: String,
    pub daemonize: bool,
    pub pid_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_worker_num: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
