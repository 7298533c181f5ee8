//! Build the ordered list of archives to scan.

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::ArchiveRef;
use crate::config::McidConfig;

/// What to scan: an optional base archive and an optional mods folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRequest {
    pub base_archive: Option<PathBuf>,
    pub collection_dir: Option<PathBuf>,
}

impl ScanRequest {
    pub fn is_empty(&self) -> bool {
        self.base_archive.is_none() && self.collection_dir.is_none()
    }
}

/// Archives in scan order: base first, then collection archives by file name.
#[derive(Debug, Clone, Default)]
pub struct ScanPlan {
    pub archives: Vec<ArchiveRef>,
}

impl ScanPlan {
    pub fn build(request: &ScanRequest, cfg: &McidConfig) -> Self {
        let mut archives = Vec::new();
        if let Some(base) = &request.base_archive {
            archives.push(ArchiveRef::new(base, cfg.base_namespace.as_str()));
        }
        if let Some(dir) = &request.collection_dir {
            archives.extend(collection_archives(dir, cfg));
        }
        Self { archives }
    }

    pub fn len(&self) -> usize {
        self.archives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }
}

/// Direct children of `dir` ending in the archive extension, sorted by name.
/// An unreadable directory contributes nothing.
fn collection_archives(dir: &Path, cfg: &McidConfig) -> Vec<ArchiveRef> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("cannot list mods folder {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut found = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("error listing {}: {}", dir.display(), e);
                continue;
            }
        };
        let file_name = entry.file_name();
        // Lossy decoding keeps the ASCII suffix intact, so non-UTF-8 jars
        // still match; the real path is kept for opening.
        let name = file_name.to_string_lossy().into_owned();
        if name.ends_with(cfg.archive_extension.as_str()) {
            found.push((file_name, name, entry.path()));
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));

    let policy = cfg.namespace_policy();
    found
        .into_iter()
        .map(|(_, name, path)| {
            let namespace = policy.namespace_for(&name, &cfg.archive_extension);
            ArchiveRef::new(path, namespace)
        })
        .collect()
}
