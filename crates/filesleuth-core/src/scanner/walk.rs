/// Sequential directory walker using `walkdir`.
///
/// Visits entries in file-name order so repeated scans of the same tree
/// produce identical reports (including large-file tie order). Each regular
/// file goes through stat → classify → permission check → fold before the
/// next entry is pulled from the walker.
///
/// Symlinks are skipped unless `follow_links` is set. When they are
/// followed, `walkdir` tracks the ancestor chain and reports a link that
/// points back into it as an error instead of descending, so a loop can
/// never recurse.
use super::warnings::{ScanWarning, WarningKind};
use super::ScanConfig;
use crate::analysis::{Aggregator, FileClassifier};
use crate::model::FileRecord;
use crate::platform::check_metadata;
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Emit a debug progress line every this many files.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Everything a walk produced.
#[derive(Debug)]
pub struct WalkOutcome {
    pub aggregator: Aggregator,
    pub warnings: Vec<ScanWarning>,
    /// Directories entered below the root.
    pub dirs_visited: u64,
    /// Sockets, FIFOs, devices and unfollowed symlinks.
    pub special_skipped: u64,
}

impl WalkOutcome {
    fn new(config: &ScanConfig) -> Self {
        Self {
            aggregator: Aggregator::new(config.size_threshold, config.max_large_files),
            warnings: Vec::new(),
            dirs_visited: 0,
            special_skipped: 0,
        }
    }

    /// Classify, check and fold one regular file already stat'ed as `meta`.
    /// A failed prefix read leaves the file counted, by extension only.
    fn visit_file(&mut self, classifier: &FileClassifier, path: PathBuf, meta: &Metadata) {
        let size = meta.len();
        let classification = classifier.classify(&path, size);
        if let Some(err) = &classification.prefix_error {
            self.warnings.push(record_warning(
                &path,
                WarningKind::SignatureUnreadable,
                err.to_string(),
            ));
        }
        let anomalies = check_metadata(meta, &path);
        let modified = meta.modified().ok().map(DateTime::<Utc>::from);

        self.aggregator.fold(FileRecord {
            path,
            size,
            category: classification.category,
            classified_by: classification.classified_by,
            anomalies,
            modified,
        });
    }
}

/// Walk `config.root` and fold every regular file into a fresh aggregator.
///
/// Assumes the root has already been validated by the caller.
pub fn walk_tree(config: &ScanConfig) -> WalkOutcome {
    let classifier = FileClassifier::new(config.use_signatures);
    let mut outcome = WalkOutcome::new(config);

    let walker = WalkDir::new(&config.root)
        .follow_links(config.follow_links)
        .sort_by_file_name();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                outcome.warnings.push(walk_error_warning(&err, config));
                continue;
            }
        };

        // The root itself was validated up front.
        if entry.depth() == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            outcome.dirs_visited += 1;
            continue;
        }
        if !file_type.is_file() {
            debug!("Skipping non-regular entry {}", entry.path().display());
            outcome.special_skipped += 1;
            continue;
        }

        // Stat for size, mode and mtime. The file may be gone by now.
        match entry.metadata() {
            Ok(meta) => outcome.visit_file(&classifier, entry.into_path(), &meta),
            Err(err) => {
                outcome.warnings.push(record_warning(
                    entry.path(),
                    WarningKind::FileSkipped,
                    err.to_string(),
                ));
                continue;
            }
        }

        let files = outcome.aggregator.total_files();
        if files.is_multiple_of(PROGRESS_INTERVAL) {
            debug!("{files} files scanned so far");
        }
    }

    outcome
}

/// Turn a `walkdir` error into a warning. These come from listing a
/// directory, from stat'ing a followed symlink, or from loop detection.
fn walk_error_warning(err: &walkdir::Error, config: &ScanConfig) -> ScanWarning {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.root.clone());

    let kind = if err.loop_ancestor().is_some() {
        WarningKind::SymlinkLoop
    } else if path.is_dir() {
        WarningKind::DirectorySkipped
    } else {
        WarningKind::FileSkipped
    };

    let message = match err.io_error() {
        Some(io_err) => io_err.to_string(),
        None => err.to_string(),
    };
    record_warning(&path, kind, message)
}

fn record_warning(path: &Path, kind: WarningKind, message: String) -> ScanWarning {
    warn!("{kind}: {}: {message}", path.display());
    ScanWarning::new(path, kind, message)
}
