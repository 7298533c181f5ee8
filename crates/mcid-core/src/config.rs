use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::namespace::{NamespacePolicy, NamespaceRule};

/// Global configuration loaded from `~/.config/mcid/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct McidConfig {
    /// Namespace for ids found in the base (vanilla) archive.
    pub base_namespace: String,
    /// File-name suffix that marks an archive in the mods folder.
    pub archive_extension: String,
    /// How a mod archive's file name becomes its namespace.
    pub namespace_rule: NamespaceRule,
    /// Persist the last used jar/folder after each scan.
    pub remember_paths: bool,
    /// Exact archive file name -> namespace, checked before `namespace_rule`.
    pub namespace_overrides: BTreeMap<String, String>,
}

impl Default for McidConfig {
    fn default() -> Self {
        Self {
            base_namespace: "minecraft".to_string(),
            archive_extension: ".jar".to_string(),
            namespace_rule: NamespaceRule::default(),
            remember_paths: true,
            namespace_overrides: BTreeMap::new(),
        }
    }
}

impl McidConfig {
    pub fn namespace_policy(&self) -> NamespacePolicy {
        NamespacePolicy {
            rule: self.namespace_rule,
            overrides: self.namespace_overrides.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcid")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<McidConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<McidConfig> {
    if !path.exists() {
        let default_cfg = McidConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: McidConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
