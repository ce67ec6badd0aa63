/// Scan-time aggregation — folds file records into summary statistics.
///
/// Append-only: every call to [`Aggregator::fold`] adds one file to the
/// category totals, the per-method classification counts, the large-file
/// tracker and (if it has any anomalies) the anomaly list. A file that is never folded contributes nothing.
use super::file_types::{CategoryStats, FileCategory};
use super::top_files::{LargeFile, LargeFileTracker};
use crate::model::{AnomalySet, ClassifiedBy, FileRecord};
use serde::Serialize;
use std::path::PathBuf;

/// A file whose permission bits raised one or more anomaly tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionAnomaly {
    pub path: PathBuf,
    pub anomalies: AnomalySet,
}

/// How many files each classification method decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationCounts {
    pub signature: u64,
    pub extension: u64,
    pub fallback: u64,
}

impl ClassificationCounts {
    pub fn record(&mut self, method: ClassifiedBy) {
        match method {
            ClassifiedBy::Signature(_) => self.signature += 1,
            ClassifiedBy::Extension => self.extension += 1,
            ClassifiedBy::Fallback => self.fallback += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.signature + self.extension + self.fallback
    }
}

/// Running totals for one scan.
#[derive(Debug)]
pub struct Aggregator {
    size_threshold: u64,
    /// One entry per category, indexed by [`FileCategory::index`].
    categories: Vec<CategoryStats>,
    classification: ClassificationCounts,
    large_files: LargeFileTracker,
    anomalies: Vec<PermissionAnomaly>,
    total_files: u64,
    total_size: u64,
}

/// Final aggregation results, handed to the report.
#[derive(Debug)]
pub struct Aggregate {
    pub categories: Vec<CategoryStats>,
    pub classification: ClassificationCounts,
    pub large_files: Vec<LargeFile>,
    /// Files at or above the threshold, including those that did not fit
    /// in the tracker.
    pub large_file_count: u64,
    pub permission_anomalies: Vec<PermissionAnomaly>,
    pub total_files: u64,
    pub total_size: u64,
}

impl Aggregator {
    /// Files of `size_threshold` bytes or more are offered to a tracker
    /// holding at most `max_large_files` entries.
    pub fn new(size_threshold: u64, max_large_files: usize) -> Self {
        Self {
            size_threshold,
            categories: FileCategory::ALL
                .iter()
                .map(|&c| CategoryStats::new(c))
                .collect(),
            classification: ClassificationCounts::default(),
            large_files: LargeFileTracker::new(max_large_files),
            anomalies: Vec::new(),
            total_files: 0,
            total_size: 0,
        }
    }

    /// Fold one file into the totals.
    pub fn fold(&mut self, record: FileRecord) {
        self.total_files += 1;
        self.total_size = self.total_size.saturating_add(record.size);
        self.categories[record.category.index()].record(record.size);
        self.classification.record(record.classified_by);

        if !record.anomalies.is_empty() {
            self.anomalies.push(PermissionAnomaly {
                path: record.path.clone(),
                anomalies: record.anomalies,
            });
        }

        if record.size >= self.size_threshold {
            self.large_files.offer(LargeFile {
                path: record.path,
                size: record.size,
                category: record.category,
                classified_by: record.classified_by,
                modified: record.modified,
            });
        }
    }

    pub fn total_files(&self) -> u64 {
        self.total_files
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn category(&self, category: FileCategory) -> &CategoryStats {
        &self.categories[category.index()]
    }

    pub fn finish(self) -> Aggregate {
        let large_file_count = self.large_files.offered();
        Aggregate {
            categories: self.categories,
            classification: self.classification,
            large_files: self.large_files.into_entries(),
            large_file_count,
            permission_anomalies: self.anomalies,
            total_files: self.total_files,
            total_size: self.total_size,
        }
    }
}
