//! The `publish` action: install bootstrap artifacts into the project tree.

use std::fs;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, ManifestEntry, Operation, publish_manifest};
use crate::ports::{OverwritePrompt, ProjectContext, RuntimeEngine};
use crate::services::assets;

/// One status line of a publish run.
#[derive(Debug, Clone)]
pub struct PublishedFile {
    pub operation: Operation,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Install the fixed manifest. An existing config template is only replaced
/// after an affirmative answer; any other answer skips that entry while the
/// launcher scripts are still installed.
pub fn execute<C: ProjectContext, R: RuntimeEngine>(
    ctx: &mut AppContext<C, R>,
    prompt: &dyn OverwritePrompt,
) -> Result<Vec<PublishedFile>, AppError> {
    ctx.project_mut().load_config()?;

    let base_path = ctx.project().resolve_base_path();
    let stage_root = ctx.project().resolve_storage_path("laravels");
    assets::stage_assets(&stage_root)?;

    let mut manifest = publish_manifest(&stage_root, &base_path);
    let config_destination = manifest[0].destination.clone();
    if config_destination.exists() {
        let question = format!(
            "{} already exists, do you want to override it ? Y/N",
            config_destination.display()
        );
        let answer = prompt.ask(&question, "N")?;
        if !answer.eq_ignore_ascii_case("y") {
            manifest.remove(0);
        }
    }

    let mut published = Vec::with_capacity(manifest.len());
    for entry in manifest {
        let operation = install(&entry)?;
        published.push(PublishedFile {
            operation,
            source: entry.source,
            destination: entry.destination,
        });
    }
    Ok(published)
}

/// Install a single entry: ensure the parent directory, drop any existing
/// destination, link or copy, then set the permission bits.
fn install(entry: &ManifestEntry) -> Result<Operation, AppError> {
    if let Some(parent) = entry.destination.parent() {
        fs::create_dir_all(parent)?;
    }
    if entry.destination.exists() {
        fs::remove_file(&entry.destination)?;
    }

    let operation =
        if entry.prefer_link && fs::hard_link(&entry.source, &entry.destination).is_ok() {
            Operation::Linked
        } else {
            fs::copy(&entry.source, &entry.destination)?;
            Operation::Copied
        };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&entry.destination)?.permissions();
        perms.set_mode(entry.mode);
        fs::set_permissions(&entry.destination, perms)?;
    }

    Ok(operation)
}
