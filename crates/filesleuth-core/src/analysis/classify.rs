/// File classification — one category per file from its name and bytes.
///
/// Precedence:
/// 1. A conclusive signature match (signatures enabled, file non-empty).
/// 2. A known extension.
/// 3. A text-only signature match (byte-order mark or printable bytes).
/// 4. `Other`.
use super::file_types::{categorise_path, FileCategory};
use super::signatures::{detect_signature, read_prefix};
use crate::model::ClassifiedBy;
use std::io;
use std::path::Path;

/// The classifier's decision for one file.
#[derive(Debug)]
pub struct Classification {
    pub category: FileCategory,
    pub classified_by: ClassifiedBy,
    /// Set when signatures were enabled but the prefix could not be read.
    /// The category then comes from the extension alone.
    pub prefix_error: Option<io::Error>,
}

/// Decides a file's category. Holds only the signature switch, so it is
/// cheap to copy into whatever drives the traversal.
#[derive(Debug, Clone, Copy)]
pub struct FileClassifier {
    use_signatures: bool,
}

impl FileClassifier {
    pub fn new(use_signatures: bool) -> Self {
        Self { use_signatures }
    }

    /// Classify the file at `path` whose size is already known from `stat`.
    ///
    /// Reads at most a small prefix of the file, and only when signatures
    /// are enabled and the file is non-empty. Never fails: read errors are
    /// handed back in [`Classification::prefix_error`].
    pub fn classify(&self, path: &Path, size: u64) -> Classification {
        if !self.use_signatures || size == 0 {
            let (category, classified_by) = decide(path, None);
            return Classification {
                category,
                classified_by,
                prefix_error: None,
            };
        }

        match read_prefix(path) {
            Ok(prefix) => {
                let (category, classified_by) = decide(path, Some(prefix.as_slice()));
                Classification {
                    category,
                    classified_by,
                    prefix_error: None,
                }
            }
            Err(err) => {
                let (category, classified_by) = decide(path, None);
                Classification {
                    category,
                    classified_by,
                    prefix_error: Some(err),
                }
            }
        }
    }
}

/// Combine the extension table with an optional file prefix.
fn decide(path: &Path, prefix: Option<&[u8]>) -> (FileCategory, ClassifiedBy) {
    let signature = prefix.and_then(detect_signature);

    if let Some(sig) = signature.filter(|s| s.is_conclusive()) {
        return (sig.category(), ClassifiedBy::Signature(sig));
    }

    let by_extension = categorise_path(path);
    if by_extension != FileCategory::Other {
        return (by_extension, ClassifiedBy::Extension);
    }

    match signature {
        Some(sig) => (sig.category(), ClassifiedBy::Signature(sig)),
        None => (FileCategory::Other, ClassifiedBy::Fallback),
    }
}
