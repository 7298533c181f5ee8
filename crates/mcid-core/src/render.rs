//! Output rendering: sorted ids, one per line, and saving them to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::identifier::{Identifier, IdentifierSet};

/// Newline-joined ids in ascending order, no trailing newline.
pub fn render(ids: &IdentifierSet) -> String {
    ids.iter()
        .map(Identifier::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `text` to `path` verbatim, replacing any existing file.
pub fn save(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("save ids to {}", path.display()))?;
    tracing::info!("saved {} bytes of ids to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[(&str, &str)]) -> IdentifierSet {
        ids.iter()
            .filter_map(|(ns, stem)| {
                Identifier::from_entry(ns, &format!("assets/{ns}/models/item/{stem}.json"))
            })
            .collect()
    }

    #[test]
    fn render_sorts_and_joins() {
        let ids = set(&[("mymod", "gem"), ("minecraft", "stick"), ("minecraft", "bow")]);
        assert_eq!(render(&ids), "minecraft:bow\nminecraft:stick\nmymod:gem");
    }

    #[test]
    fn render_empty_is_empty_string() {
        assert_eq!(render(&IdentifierSet::new()), "");
    }

    #[test]
    fn save_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        let text = render(&set(&[("a", "x"), ("b", "y")]));
        save(&path, &text).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        fs::write(&path, "old content that is much longer than the new one").unwrap();
        save(&path, "a:b").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a:b");
    }

    #[test]
    fn save_to_missing_dir_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("ids.txt");
        let err = save(&path, "a:b").unwrap_err();
        assert!(format!("{err:#}").contains("ids.txt"));
    }
}
