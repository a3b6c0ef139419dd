//! Raw-to-normalized configuration resolution.

use std::path::Path;

use super::server_config::{CliOverrides, NormalizedConfig, NormalizedSwoole, ServerConfig};

/// Resolve every defaultable field of a raw configuration.
///
/// Precedence per field: CLI flag (daemonize / ignore_check_pid only), then
/// the stored value, then the computed default. A stored empty string counts
/// as unset for the path-like fields.
pub fn normalize(
    raw: ServerConfig,
    overrides: &CliOverrides,
    base_path: &Path,
    pid_file_default: &Path,
) -> NormalizedConfig {
    let laravel_base_path = non_empty(raw.laravel_base_path)
        .unwrap_or_else(|| base_path.to_string_lossy().into_owned());
    let process_prefix = non_empty(raw.process_prefix).unwrap_or_else(|| laravel_base_path.clone());
    let ignore_check_pid =
        if overrides.ignore_check_pid { true } else { raw.ignore_check_pid.unwrap_or(false) };

    let document_root = non_empty(raw.swoole.document_root)
        .unwrap_or_else(|| format!("{laravel_base_path}/public"));
    let daemonize = if overrides.daemonize { true } else { raw.swoole.daemonize.unwrap_or(false) };
    let pid_file = non_empty(raw.swoole.pid_file)
        .unwrap_or_else(|| pid_file_default.to_string_lossy().into_owned());

    NormalizedConfig {
        enable_gzip: raw.enable_gzip.unwrap_or(false),
        laravel_base_path,
        process_prefix,
        ignore_check_pid,
        events: raw.events,
        register_providers: raw.register_providers,
        swoole: NormalizedSwoole {
            document_root,
            daemonize,
            pid_file,
            task_worker_num: raw.swoole.task_worker_num,
            extra: raw.swoole.extra,
        },
        extra: raw.extra,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|field| !field.is_empty())
}
