//! `mcid scan` – extract ids from the vanilla jar and mods folder.

use anyhow::Result;
use mcid_core::config::McidConfig;
use mcid_core::render;
use mcid_core::scan::{self, ScanProgress};
use mcid_core::session::Session;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ScanArgs {
    pub vanilla_jar: Option<PathBuf>,
    pub mods_folder: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
    pub remember: bool,
}

pub fn run_scan(
    cfg: &McidConfig,
    session: &mut Session,
    session_path: &Path,
    args: ScanArgs,
) -> Result<()> {
    let request = session.request(args.vanilla_jar, args.mods_folder);
    if request.is_empty() {
        eprintln!("Nothing to scan: pass --vanilla-jar and/or --mods-folder.");
    }

    let quiet = args.quiet;
    let report = scan::scan(&request, cfg, |p| {
        if !quiet {
            eprintln!("{}", progress_line(&p));
        }
    });

    for failed in report.failed() {
        if let Some(err) = failed.outcome.error() {
            eprintln!("warning: {err}");
        }
    }

    if args.remember && !request.is_empty() {
        session.remember(&request);
        if let Err(e) = session.save_to(session_path) {
            tracing::warn!("could not remember paths: {:#}", e);
        }
    }

    let text = report.render();
    match args.output {
        Some(path) => {
            render::save(&path, &text)?;
            println!(
                "Saved {} id(s) to {}",
                report.identifiers.len(),
                path.display()
            );
        }
        None => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }
    Ok(())
}

fn progress_line(p: &ScanProgress<'_>) -> String {
    match p.archive {
        Some(path) => format!(
            "[{}/{}] {:>3}% {}",
            p.processed,
            p.total,
            p.percent(),
            path.display()
        ),
        None => format!("[{}/{}] {:>3}% nothing to scan", p.processed, p.total, p.percent()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_formats_archive() {
        let p = ScanProgress {
            processed: 1,
            total: 3,
            archive: Some(Path::new("/mods/a-1.jar")),
        };
        assert_eq!(progress_line(&p), "[1/3]  33% /mods/a-1.jar");
    }

    #[test]
    fn progress_line_empty_plan() {
        let p = ScanProgress {
            processed: 0,
            total: 0,
            archive: None,
        };
        assert_eq!(progress_line(&p), "[0/0] 100% nothing to scan");
    }

    #[test]
    fn run_scan_saves_output_and_remembers_paths() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ids.txt");
        let session_path = dir.path().join("state").join("last_dirs.json");
        let mods = dir.path().join("mods");
        std::fs::create_dir(&mods).unwrap();

        let mut session = Session::default();
        let args = ScanArgs {
            vanilla_jar: None,
            mods_folder: Some(mods.clone()),
            output: Some(out.clone()),
            quiet: true,
            remember: true,
        };
        run_scan(&McidConfig::default(), &mut session, &session_path, args).unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "");
        assert_eq!(session.mods_folder, Some(mods.clone()));
        let saved = Session::load_from(&session_path).unwrap();
        assert_eq!(saved.mods_folder, Some(mods));
        assert!(saved.vanilla_jar.is_none());
    }

    #[test]
    fn run_scan_without_remember_leaves_session_alone() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("last_dirs.json");
        let mut session = Session::default();
        let args = ScanArgs {
            vanilla_jar: Some(dir.path().join("missing.jar")),
            mods_folder: None,
            output: Some(dir.path().join("ids.txt")),
            quiet: true,
            remember: false,
        };
        run_scan(&McidConfig::default(), &mut session, &session_path, args).unwrap();
        assert!(session.is_empty());
        assert!(!session_path.exists());
    }
}
