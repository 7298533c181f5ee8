//! Item identifiers extracted from archive entry paths.
//!
//! An entry qualifies when it lives under `assets/`, ends in `.json`, and has
//! both a `models` and an `item` path segment. The file stem becomes the item
//! name; stems containing digits are numbered variants and are dropped.

use std::collections::BTreeSet;
use std::fmt;

const ASSETS_PREFIX: &str = "assets/";
const MODEL_SUFFIX: &str = ".json";

/// A `namespace:name` identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

/// Unique identifiers in ascending code-point order.
pub type IdentifierSet = BTreeSet<Identifier>;

impl Identifier {
    /// Builds the identifier for `entry_path` inside an archive whose default
    /// namespace is `namespace`, or `None` if the entry is not an item model.
    pub fn from_entry(namespace: &str, entry_path: &str) -> Option<Self> {
        let stem = item_stem(entry_path)?;
        Some(Self(format!("{namespace}:{stem}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True if the entry path names an item model file.
pub fn qualifies(entry_path: &str) -> bool {
    if !entry_path.starts_with(ASSETS_PREFIX) || !entry_path.ends_with(MODEL_SUFFIX) {
        return false;
    }
    let mut has_models = false;
    let mut has_item = false;
    for segment in entry_path.split('/') {
        match segment {
            "models" => has_models = true,
            "item" => has_item = true,
            _ => {}
        }
    }
    has_models && has_item
}

/// Item name for a qualifying entry: last segment minus `.json`.
/// Returns `None` for non-qualifying entries and for stems with ASCII digits.
pub fn item_stem(entry_path: &str) -> Option<&str> {
    if !qualifies(entry_path) {
        return None;
    }
    let file_name = entry_path.rsplit('/').next().unwrap_or(entry_path);
    let stem = file_name.strip_suffix(MODEL_SUFFIX)?;
    if stem.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(stem)
}
