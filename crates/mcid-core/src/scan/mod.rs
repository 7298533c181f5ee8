//! Scan orchestration: plan archives, scan them in order, merge the ids.
//!
//! Strictly sequential. Progress is reported after every archive in plan
//! order, so observers see a monotonically increasing count that reaches the
//! total only once the last archive is done.

mod plan;
mod progress;

pub use plan::{ScanPlan, ScanRequest};
pub use progress::ScanProgress;

use crate::archive::{ArchiveOutcome, ArchiveRef};
use crate::config::McidConfig;
use crate::identifier::IdentifierSet;

/// One scanned archive and what came of it.
#[derive(Debug)]
pub struct ArchiveReport {
    pub archive: ArchiveRef,
    pub outcome: ArchiveOutcome,
}

/// Merged result of a scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub identifiers: IdentifierSet,
    /// Per-archive outcomes in scan order.
    pub archives: Vec<ArchiveReport>,
}

impl ScanReport {
    pub fn failed(&self) -> impl Iterator<Item = &ArchiveReport> {
        self.archives.iter().filter(|r| r.outcome.is_failed())
    }

    /// Sorted, newline-joined ids.
    pub fn render(&self) -> String {
        crate::render::render(&self.identifiers)
    }
}

/// Scan everything named by `request`.
pub fn scan<F>(request: &ScanRequest, cfg: &McidConfig, on_progress: F) -> ScanReport
where
    F: FnMut(ScanProgress<'_>),
{
    let plan = ScanPlan::build(request, cfg);
    run_plan(plan, on_progress)
}

/// Scan a prebuilt plan.
pub fn run_plan<F>(plan: ScanPlan, mut on_progress: F) -> ScanReport
where
    F: FnMut(ScanProgress<'_>),
{
    let total = plan.len();
    tracing::info!("scanning {} archive(s)", total);

    let mut report = ScanReport::default();
    if total == 0 {
        on_progress(ScanProgress {
            processed: 0,
            total: 0,
            archive: None,
        });
        return report;
    }

    for (i, archive) in plan.archives.into_iter().enumerate() {
        let outcome = archive.scan();
        report
            .identifiers
            .extend(outcome.identifiers().iter().cloned());
        on_progress(ScanProgress {
            processed: i + 1,
            total,
            archive: Some(&archive.path),
        });
        report.archives.push(ArchiveReport { archive, outcome });
    }

    tracing::info!(
        "scan finished: {} ids from {} archive(s), {} failed",
        report.identifiers.len(),
        total,
        report.failed().count()
    );
    report
}
