//! Per-archive scanning: read the ZIP central directory and collect item ids.
//!
//! Failures never escape this module as errors. A corrupt or unreadable
//! archive produces [`ArchiveOutcome::Failed`] so one bad mod cannot abort a
//! scan of the whole folder.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::identifier::{Identifier, IdentifierSet};

/// An archive to scan together with the namespace its ids are filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRef {
    pub path: PathBuf,
    pub namespace: String,
}

impl ArchiveRef {
    pub fn new(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
        }
    }

    pub fn scan(&self) -> ArchiveOutcome {
        scan_archive(&self.path, &self.namespace)
    }
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read archive {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ZipError,
    },
}

/// Result of scanning one archive.
#[derive(Debug)]
pub enum ArchiveOutcome {
    Scanned(IdentifierSet),
    Failed(ArchiveError),
}

impl ArchiveOutcome {
    /// Identifiers contributed by this archive (empty when it failed).
    pub fn identifiers(&self) -> &IdentifierSet {
        static EMPTY: IdentifierSet = IdentifierSet::new();
        match self {
            ArchiveOutcome::Scanned(ids) => ids,
            ArchiveOutcome::Failed(_) => &EMPTY,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ArchiveOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&ArchiveError> {
        match self {
            ArchiveOutcome::Scanned(_) => None,
            ArchiveOutcome::Failed(err) => Some(err),
        }
    }
}

/// Scan one archive, filing every item model under `namespace`.
///
/// Logs and absorbs open/read failures. The archive handle is dropped before
/// this returns.
pub fn scan_archive(path: &Path, namespace: &str) -> ArchiveOutcome {
    match read_identifiers(path, namespace) {
        Ok(ids) => {
            tracing::debug!(
                "scanned {} (namespace={}): {} ids",
                path.display(),
                namespace,
                ids.len()
            );
            ArchiveOutcome::Scanned(ids)
        }
        Err(err) => {
            tracing::warn!("skipping archive: {}", err);
            ArchiveOutcome::Failed(err)
        }
    }
}

fn read_identifiers(path: &Path, namespace: &str) -> Result<IdentifierSet, ArchiveError> {
    let file = File::open(path).map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let archive = ZipArchive::new(file).map_err(|source| ArchiveError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(archive
        .file_names()
        .filter_map(|name| Identifier::from_entry(namespace, name))
        .collect())
}
