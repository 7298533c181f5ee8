//! Namespace derivation for collection archives.
//!
//! Mod jars carry no namespace we can trust without parsing their metadata, so
//! the namespace is guessed from the file name. The guess is configurable:
//! pick a rule, and pin individual file names with overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How to turn an archive file stem into a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceRule {
    /// Stem up to the first `-` (`mymod-1.0.jar` -> `mymod`).
    #[default]
    FirstDash,
    /// The whole stem (`my-mod.jar` -> `my-mod`).
    WholeStem,
}

impl NamespaceRule {
    pub fn apply<'a>(&self, stem: &'a str) -> &'a str {
        match self {
            NamespaceRule::FirstDash => stem.split('-').next().unwrap_or(stem),
            NamespaceRule::WholeStem => stem,
        }
    }
}

/// Rule plus per-file overrides (exact file name -> namespace).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespacePolicy {
    pub rule: NamespaceRule,
    pub overrides: BTreeMap<String, String>,
}

impl NamespacePolicy {
    /// Namespace for the archive `file_name`; `extension` is stripped first.
    pub fn namespace_for(&self, file_name: &str, extension: &str) -> String {
        if let Some(ns) = self.overrides.get(file_name) {
            return ns.clone();
        }
        let stem = file_name.strip_suffix(extension).unwrap_or(file_name);
        self.rule.apply(stem).to_string()
    }
}
