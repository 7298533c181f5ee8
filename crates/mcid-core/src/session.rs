//! Remembered input paths (last vanilla jar and mods folder).
//!
//! Stored as `~/.local/state/mcid/last_dirs.json`. The session is a plain
//! value: the CLI loads it, merges it with explicit arguments to build a
//! [`ScanRequest`], and writes it back after a scan.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scan::ScanRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub vanilla_jar: Option<PathBuf>,
    #[serde(default)]
    pub mods_folder: Option<PathBuf>,
}

pub fn session_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcid")?;
    Ok(xdg_dirs.get_state_home().join("mcid").join("last_dirs.json"))
}

impl Session {
    /// Load from `path`; a missing file is an empty session.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(path).with_context(|| format!("read session {}", path.display()))?;
        let session = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse session {}", path.display()))?;
        Ok(session)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("write session {}", path.display()))?;
        tracing::debug!("saved session to {}", path.display());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.vanilla_jar.is_none() && self.mods_folder.is_none()
    }

    /// Request from explicit arguments, falling back to remembered paths.
    pub fn request(&self, base: Option<PathBuf>, collection: Option<PathBuf>) -> ScanRequest {
        ScanRequest {
            base_archive: base.or_else(|| self.vanilla_jar.clone()),
            collection_dir: collection.or_else(|| self.mods_folder.clone()),
        }
    }

    /// Remember the paths a request used; unset fields keep their old value.
    pub fn remember(&mut self, request: &ScanRequest) {
        if let Some(base) = &request.base_archive {
            self.vanilla_jar = Some(base.clone());
        }
        if let Some(dir) = &request.collection_dir {
            self.mods_folder = Some(dir.clone());
        }
    }
}
