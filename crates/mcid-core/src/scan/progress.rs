//! Progress reporting for a scan (archives done out of archives planned).

use std::path::Path;

/// Snapshot emitted after each archive (CLI-friendly).
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress<'a> {
    /// Archives finished so far, including the one just scanned.
    pub processed: usize,
    /// Archives in the plan: base archive (if any) plus collection archives.
    pub total: usize,
    /// Archive just finished; `None` for the single event of an empty plan.
    pub archive: Option<&'a Path>,
}

impl ScanProgress<'_> {
    /// Whole percent, rounded down so 100 is only reached on the last archive.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (self.processed.min(self.total) * 100 / self.total) as u8
    }
}
