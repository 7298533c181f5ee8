//! `mcid paths` / `mcid clear-paths` – inspect or reset remembered paths.

use anyhow::{Context, Result};
use mcid_core::session::Session;
use std::fs;
use std::path::Path;

/// Load remembered paths; an unreadable file is reported on stderr and
/// treated as empty (the next remembering scan replaces it).
pub fn load_session(session_path: &Path) -> Session {
    Session::load_from(session_path).unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable session: {:#}", e);
        eprintln!("warning: ignoring unreadable remembered paths: {:#}", e);
        Session::default()
    })
}

pub fn run_paths(session_path: &Path) -> Result<()> {
    let session = load_session(session_path);
    let show = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    println!("{:<12} {}", "vanilla_jar", show(&session.vanilla_jar));
    println!("{:<12} {}", "mods_folder", show(&session.mods_folder));
    Ok(())
}

pub fn run_clear_paths(session_path: &Path) -> Result<()> {
    if session_path.exists() {
        fs::remove_file(session_path)
            .with_context(|| format!("remove {}", session_path.display()))?;
        println!("Forgot remembered paths.");
    } else {
        println!("No remembered paths.");
    }
    Ok(())
}
