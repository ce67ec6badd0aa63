/// Scanner module — validates a scan request and drives the traversal.
///
/// A scan is one synchronous pass: the root is checked up front (a missing
/// or unreadable root is the only fatal outcome), then [`walk`] visits every
/// regular file, classifying and folding each one before moving to the next.
/// Everything the pass accumulates lives on the stack of [`scan`] and is
/// handed back as a [`ScanReport`].
pub mod walk;
pub mod warnings;

use crate::error::ScanError;
use crate::report::ScanReport;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub use warnings::{ScanWarning, WarningKind};

/// Default large-file threshold: 1 MiB.
pub const DEFAULT_SIZE_THRESHOLD: u64 = 1024 * 1024;

/// Default number of large files kept in the report.
pub const DEFAULT_MAX_LARGE_FILES: usize = 10;

/// Everything that parameterises a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanConfig {
    /// Directory to analyse.
    pub root: PathBuf,
    /// Files of this many bytes or more count as large.
    pub size_threshold: u64,
    /// Capacity of the large-file list.
    pub max_large_files: usize,
    /// Read file prefixes for magic-byte detection.
    pub use_signatures: bool,
    /// Descend through symlinks (loop-checked) instead of skipping them.
    pub follow_links: bool,
}

impl ScanConfig {
    /// Defaults: 1 MiB threshold, 10 large files, signatures on, symlinks
    /// not followed.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            max_large_files: DEFAULT_MAX_LARGE_FILES,
            use_signatures: true,
            follow_links: false,
        }
    }

    pub fn with_size_threshold(mut self, bytes: u64) -> Self {
        self.size_threshold = bytes;
        self
    }

    pub fn with_max_large_files(mut self, n: usize) -> Self {
        self.max_large_files = n;
        self
    }

    pub fn with_signatures(mut self, enabled: bool) -> Self {
        self.use_signatures = enabled;
        self
    }

    pub fn with_follow_links(mut self, enabled: bool) -> Self {
        self.follow_links = enabled;
        self
    }

    /// Reject settings no scan can honour.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.max_large_files == 0 {
            return Err(ScanError::ZeroMaxLargeFiles);
        }
        Ok(())
    }
}

/// Run a complete scan.
///
/// Fails only if the configuration is invalid or the root is missing, not a
/// directory, or cannot be listed. Everything that goes wrong below the root
/// is recorded in [`ScanReport::warnings`].
pub fn scan(config: &ScanConfig) -> Result<ScanReport, ScanError> {
    config.validate()?;
    check_root(&config.root)?;

    let started_at = Utc::now();
    let start = Instant::now();
    info!(
        "Starting scan of {} (signatures {}, threshold {} bytes)",
        config.root.display(),
        if config.use_signatures { "on" } else { "off" },
        config.size_threshold
    );

    let outcome = walk::walk_tree(config);
    let duration = start.elapsed();
    let aggregate = outcome.aggregator.finish();

    info!(
        "Scan complete: {} files, {} dirs, {} warnings in {:?}",
        aggregate.total_files,
        outcome.dirs_visited,
        outcome.warnings.len(),
        duration
    );

    Ok(ScanReport {
        config: config.clone(),
        started_at,
        duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        total_files: aggregate.total_files,
        total_size: aggregate.total_size,
        dirs_visited: outcome.dirs_visited,
        special_skipped: outcome.special_skipped,
        categories: aggregate.categories,
        classification: aggregate.classification,
        large_files: aggregate.large_files,
        large_file_count: aggregate.large_file_count,
        permission_anomalies: aggregate.permission_anomalies,
        warnings: outcome.warnings,
    })
}

/// The root must exist, be a directory, and be listable.
fn check_root(root: &Path) -> Result<(), ScanError> {
    let meta = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ScanError::RootNotFound {
            path: root.to_path_buf(),
        },
        _ => ScanError::RootInaccessible {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root).map_err(|source| ScanError::RootInaccessible {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}
