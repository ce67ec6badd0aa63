/// Top-N largest files, maintained incrementally during a scan.
///
/// The tracker is a sorted, bounded `Vec`. Capacities are small (tens of
/// entries) so a binary-search insert plus a pop beats a heap here, and
/// the list is always ready to print without a final sort.
use super::file_types::FileCategory;
use crate::model::ClassifiedBy;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A single entry in the "largest files" results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargeFile {
    /// Full path as produced by the traversal.
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    pub category: FileCategory,
    pub classified_by: ClassifiedBy,
    pub modified: Option<DateTime<Utc>>,
}

/// Bounded list of the largest files offered so far, sorted by size
/// descending.
///
/// Ties keep insertion order: an entry of equal size ranks after the ones
/// already present, and once the tracker is full a newcomer must be
/// strictly larger than the current smallest entry to get in.
#[derive(Debug, Clone)]
pub struct LargeFileTracker {
    capacity: usize,
    entries: Vec<LargeFile>,
    offered: u64,
}

impl LargeFileTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            offered: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many files have been offered, admitted or not.
    pub fn offered(&self) -> u64 {
        self.offered
    }

    /// Current entries, largest first.
    pub fn entries(&self) -> &[LargeFile] {
        &self.entries
    }

    /// Offer a file. Returns `true` if it is now among the tracked entries.
    pub fn offer(&mut self, file: LargeFile) -> bool {
        self.offered += 1;
        if self.capacity == 0 {
            return false;
        }
        if self.entries.len() == self.capacity {
            match self.entries.last() {
                Some(smallest) if file.size <= smallest.size => return false,
                _ => {}
            }
        }

        let pos = self.entries.partition_point(|e| e.size >= file.size);
        self.entries.insert(pos, file);
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
        true
    }

    /// Consume the tracker, returning the entries largest first.
    pub fn into_entries(self) -> Vec<LargeFile> {
        self.entries
    }
}
