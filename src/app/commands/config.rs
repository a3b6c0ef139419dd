//! The `config` action: load, normalize, validate, persist.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, CliOverrides, DerivedAppConfig, PersistedArtifact, normalize, preflight,
};
use crate::ports::{ProjectContext, RuntimeEngine};

/// File the server process reads once at startup.
const ARTIFACT_FILE: &str = "laravels.json";

/// Prepare and persist the merged configuration artifact, returning the
/// path it was written to. Validation failures abort before any write.
pub fn execute<C: ProjectContext, R: RuntimeEngine>(
    ctx: &mut AppContext<C, R>,
    overrides: &CliOverrides,
) -> Result<PathBuf, AppError> {
    ctx.project_mut().load_config()?;

    let raw = ctx.project().server_config();
    let base_path = ctx.project().resolve_base_path();
    let pid_default = ctx.project().resolve_storage_path("laravels.pid");
    let server = normalize(raw, overrides, &base_path, &pid_default);

    preflight(&server, || ctx.runtime().version())?;

    let laravel = DerivedAppConfig::derive(
        &server,
        ctx.project().variant(),
        server_snapshot(),
        env_snapshot(),
    );
    let artifact = PersistedArtifact { server, laravel };

    let path = ctx.project().resolve_storage_path(ARTIFACT_FILE);
    fs::write(&path, serde_json::to_string(&artifact)?)?;
    Ok(path)
}

/// Process environment at preparation time.
fn env_snapshot() -> BTreeMap<String, String> {
    std::env::vars().collect()
}

/// Request-context-like snapshot: the environment plus invocation facts.
fn server_snapshot() -> BTreeMap<String, String> {
    let mut snapshot = env_snapshot();
    let argv: Vec<String> = std::env::args().collect();
    snapshot.insert("argc".to_string(), argv.len().to_string());
    snapshot.insert("argv".to_string(), argv.join(" "));
    if let Ok(cwd) = std::env::current_dir() {
        snapshot.insert("PWD".to_string(), cwd.to_string_lossy().into_owned());
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::testing::{FixedRuntime, StaticProject};

    fn project_dir() -> TempDir {
        let dir = TempDir::new().expect("temp project dir");
        fs::create_dir_all(dir.path().join("storage")).expect("create storage dir");
        dir
    }

    #[test]
    fn writes_the_artifact_into_storage() {
        let dir = project_dir();
        let project = StaticProject::new(dir.path());
        let mut ctx = AppContext::new(project, FixedRuntime::at("4.8.13"));

        let path =
            execute(&mut ctx, &CliOverrides::default()).expect("config preparation succeeds");
        assert_eq!(path, dir.path().join("storage/laravels.json"));

        let artifact: PersistedArtifact =
            serde_json::from_str(&fs::read_to_string(&path).expect("read artifact"))
                .expect("artifact parses");
        assert_eq!(artifact.server.laravel_base_path, dir.path().to_string_lossy());
        assert_eq!(artifact.laravel.root_path, artifact.server.laravel_base_path);
        assert!(artifact.laravel.server_snapshot.contains_key("argv"));
        assert!(!artifact.laravel.env_snapshot.is_empty());
    }

    #[test]
    fn artifact_is_rewritten_whole_on_each_invocation() {
        let dir = project_dir();
        let artifact_path = dir.path().join("storage/laravels.json");
        fs::write(&artifact_path, "not json at all").expect("seed stale artifact");

        let mut ctx = AppContext::new(StaticProject::new(dir.path()), FixedRuntime::at("4.8.13"));
        execute(&mut ctx, &CliOverrides::default()).expect("config preparation succeeds");

        serde_json::from_str::<PersistedArtifact>(
            &fs::read_to_string(&artifact_path).expect("read artifact"),
        )
        .expect("stale content fully replaced");
    }

    #[test]
    fn validation_failure_leaves_no_artifact() {
        let dir = project_dir();
        let project = StaticProject::new(dir.path()).with_config(
            toml::from_str("enable_gzip = true").expect("test config parses"),
        );
        let mut ctx = AppContext::new(project, FixedRuntime::at("4.8.13"));

        let err = execute(&mut ctx, &CliOverrides::default()).expect_err("gzip gate fires");
        assert!(matches!(err, AppError::GzipDeprecated));
        assert!(!dir.path().join("storage/laravels.json").exists());
    }

    #[test]
    fn cli_flags_reach_the_persisted_server_config() {
        let dir = project_dir();
        let mut ctx = AppContext::new(StaticProject::new(dir.path()), FixedRuntime::at("4.8.13"));
        let overrides = CliOverrides { daemonize: true, ignore_check_pid: true };

        let path = execute(&mut ctx, &overrides).expect("config preparation succeeds");
        let artifact: PersistedArtifact =
            serde_json::from_str(&fs::read_to_string(&path).expect("read artifact"))
                .expect("artifact parses");
        assert!(artifact.server.swoole.daemonize);
        assert!(artifact.server.ignore_check_pid);
    }
}
