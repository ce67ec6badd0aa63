/// Scan results and their presentation.
///
/// [`ScanReport`] is produced once by [`crate::scanner::scan`] and is
/// read-only afterwards. [`text`] renders it for a terminal, [`json`] for
/// other tools.
pub mod json;
pub mod text;

use crate::analysis::{
    CategoryStats, ClassificationCounts, FileCategory, LargeFile, PermissionAnomaly,
};
use crate::model::Anomaly;
use crate::scanner::{ScanConfig, ScanWarning};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

pub use json::to_json;
pub use text::{render_text, TextReport};

/// The complete result of one scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Settings the scan ran with, root included.
    pub config: ScanConfig,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// Regular files folded into the statistics.
    pub total_files: u64,
    pub total_size: u64,
    pub dirs_visited: u64,
    /// Sockets, FIFOs, devices and unfollowed symlinks passed over.
    pub special_skipped: u64,
    /// One entry per [`FileCategory`], in [`FileCategory::ALL`] order.
    pub categories: Vec<CategoryStats>,
    /// How each counted file got its category.
    pub classification: ClassificationCounts,
    /// Largest files at or above the threshold, largest first.
    pub large_files: Vec<LargeFile>,
    /// All files at or above the threshold, including those beyond
    /// `max_large_files`.
    pub large_file_count: u64,
    pub permission_anomalies: Vec<PermissionAnomaly>,
    pub warnings: Vec<ScanWarning>,
}

impl ScanReport {
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Totals for one category.
    pub fn category(&self, category: FileCategory) -> &CategoryStats {
        &self.categories[category.index()]
    }

    /// Categories ordered by total size, largest first. Equal sizes keep
    /// [`FileCategory::ALL`] order.
    pub fn categories_by_size(&self) -> Vec<&CategoryStats> {
        let mut sorted: Vec<&CategoryStats> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.total_size.cmp(&a.total_size));
        sorted
    }

    /// Share of the scanned bytes held by `stats`, in percent.
    pub fn percent_of_total(&self, stats: &CategoryStats) -> f64 {
        if self.total_size == 0 {
            0.0
        } else {
            stats.total_size as f64 / self.total_size as f64 * 100.0
        }
    }

    /// Large files the report knows about but could not list.
    pub fn unlisted_large_files(&self) -> u64 {
        self.large_file_count
            .saturating_sub(self.large_files.len() as u64)
    }

    /// Files carrying `anomaly`, in scan order.
    pub fn files_with(&self, anomaly: Anomaly) -> impl Iterator<Item = &Path> {
        self.permission_anomalies
            .iter()
            .filter(move |p| p.anomalies.contains(anomaly))
            .map(|p| p.path.as_path())
    }

    /// `path` relative to the scan root, for display.
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        match path.strip_prefix(self.root()) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => path,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_report;
    use super::*;

    #[test]
    fn categories_sorted_by_size() {
        let report = sample_report();
        let sorted = report.categories_by_size();
        assert_eq!(sorted[0].category, FileCategory::Other);
        assert_eq!(sorted[1].category, FileCategory::Text);
        // Empty categories keep declaration order after the non-empty ones.
        assert_eq!(sorted[2].category, FileCategory::Image);
        assert_eq!(sorted.len(), FileCategory::ALL.len());
    }

    #[test]
    fn percentages() {
        let report = sample_report();
        let other = report.category(FileCategory::Other);
        let pct = report.percent_of_total(other);
        assert!(pct > 99.0 && pct < 100.0);
        assert_eq!(report.percent_of_total(report.category(FileCategory::Video)), 0.0);
    }

    #[test]
    fn display_path_is_relative_to_root() {
        let report = sample_report();
        assert_eq!(
            report.display_path(Path::new("/data/sub/big.bin")),
            Path::new("sub/big.bin")
        );
        assert_eq!(
            report.display_path(Path::new("/elsewhere/x")),
            Path::new("/elsewhere/x")
        );
    }

    #[test]
    fn anomaly_lookup() {
        let report = sample_report();
        assert_eq!(report.files_with(Anomaly::SetuidSet).count(), 1);
        assert_eq!(report.files_with(Anomaly::SetgidSet).count(), 0);
        assert_eq!(report.unlisted_large_files(), 3);
    }
}
