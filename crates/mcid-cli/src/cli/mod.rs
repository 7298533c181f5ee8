//! CLI for the MCID item identifier extractor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mcid_core::config;
use mcid_core::session;
use std::path::PathBuf;

use commands::{load_session, run_clear_paths, run_paths, run_scan, ScanArgs};

/// Top-level CLI for MCID.
#[derive(Debug, Parser)]
#[command(name = "mcid")]
#[command(about = "MCID: extract item ids from a vanilla jar and a mods folder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan the vanilla jar and mods folder and print the sorted item ids.
    Scan {
        /// Vanilla client jar (ids are filed under the base namespace). Defaults to the last one used.
        #[arg(long, value_name = "PATH")]
        vanilla_jar: Option<PathBuf>,

        /// Folder whose *.jar files are scanned as mods. Defaults to the last one used.
        #[arg(long, value_name = "DIR")]
        mods_folder: Option<PathBuf>,

        /// Save the ids to this file (overwritten) instead of printing them.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not print progress to stderr.
        #[arg(long, short)]
        quiet: bool,

        /// Do not remember the paths used for this scan.
        #[arg(long)]
        forget: bool,
    },

    /// Show the remembered vanilla jar and mods folder.
    Paths,

    /// Forget the remembered vanilla jar and mods folder.
    ClearPaths,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let session_path = session::session_path()?;

        match cli.command {
            CliCommand::Scan {
                vanilla_jar,
                mods_folder,
                output,
                quiet,
                forget,
            } => {
                let mut session = load_session(&session_path);
                let args = ScanArgs {
                    vanilla_jar,
                    mods_folder,
                    output,
                    quiet,
                    remember: cfg.remember_paths && !forget,
                };
                run_scan(&cfg, &mut session, &session_path, args)?;
            }
            CliCommand::Paths => run_paths(&session_path)?,
            CliCommand::ClearPaths => run_clear_paths(&session_path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
