//! Tests for `mcid scan` argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_scan_defaults() {
    match parse(&["mcid", "scan"]) {
        CliCommand::Scan {
            vanilla_jar,
            mods_folder,
            output,
            quiet,
            forget,
        } => {
            assert!(vanilla_jar.is_none());
            assert!(mods_folder.is_none());
            assert!(output.is_none());
            assert!(!quiet);
            assert!(!forget);
        }
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_scan_all_flags() {
    match parse(&[
        "mcid",
        "scan",
        "--vanilla-jar",
        "/games/1.20.1.jar",
        "--mods-folder",
        "/games/mods",
        "-o",
        "ids.txt",
        "--quiet",
        "--forget",
    ]) {
        CliCommand::Scan {
            vanilla_jar,
            mods_folder,
            output,
            quiet,
            forget,
        } => {
            assert_eq!(vanilla_jar, Some(PathBuf::from("/games/1.20.1.jar")));
            assert_eq!(mods_folder, Some(PathBuf::from("/games/mods")));
            assert_eq!(output, Some(PathBuf::from("ids.txt")));
            assert!(quiet);
            assert!(forget);
        }
        _ => panic!("expected Scan with flags"),
    }
}

#[test]
fn cli_parse_scan_short_quiet() {
    match parse(&["mcid", "scan", "-q", "--mods-folder", "mods"]) {
        CliCommand::Scan {
            quiet, mods_folder, ..
        } => {
            assert!(quiet);
            assert_eq!(mods_folder, Some(PathBuf::from("mods")));
        }
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_scan_rejects_positional() {
    assert!(Cli::try_parse_from(["mcid", "scan", "client.jar"]).is_err());
}
