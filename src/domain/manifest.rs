//! The fixed publish manifest.

use std::path::{Path, PathBuf};

/// How a manifest entry was installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Linked,
    Copied,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Linked => "Linked",
            Operation::Copied => "Copied",
        }
    }
}

/// One file to install during publishing.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mode: u32,
    pub prefer_link: bool,
}

/// The fixed ordered publish list: the config template first (so the
/// overwrite prompt can drop it), then the two launcher scripts.
pub fn publish_manifest(assets_root: &Path, base_path: &Path) -> Vec<ManifestEntry> {
    vec![
        ManifestEntry {
            source: assets_root.join("config/laravels.php"),
            destination: base_path.join("config/laravels.php"),
            mode: 0o644,
            prefer_link: false,
        },
        ManifestEntry {
            source: assets_root.join("bin/laravels"),
            destination: base_path.join("bin/laravels"),
            mode: 0o755,
            prefer_link: true,
        },
        ManifestEntry {
            source: assets_root.join("bin/fswatch"),
            destination: base_path.join("bin/fswatch"),
            mode: 0o755,
            prefer_link: true,
        },
    ]
}
