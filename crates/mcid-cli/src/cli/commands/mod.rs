//! CLI command handlers. Each command is in its own file.

mod paths;
mod scan;

pub use paths::{load_session, run_clear_paths, run_paths};
pub use scan::{run_scan, ScanArgs};
