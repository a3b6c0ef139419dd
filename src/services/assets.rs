//! Embedded publishable assets.

use std::fs;
use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Write the embedded assets under `stage_root`, overwriting any previous
/// stage so the tree always matches this binary.
///
/// Staging lives inside the project's storage directory, which keeps the
/// publish hard links on a single filesystem.
pub fn stage_assets(stage_root: &Path) -> Result<(), AppError> {
    write_entries(&ASSETS_DIR, stage_root)
}

fn write_entries(dir: &'static Dir, stage_root: &Path) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = stage_root.join(file.path());
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, file.contents())?;
            }
            DirEntry::Dir(subdir) => write_entries(subdir, stage_root)?,
        }
    }
    Ok(())
}
