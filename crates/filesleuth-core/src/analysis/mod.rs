/// Analysis modules — classification and scan-time aggregation.

pub mod aggregate;
pub mod classify;
pub mod file_types;
pub mod signatures;
pub mod top_files;

pub use aggregate::{Aggregate, Aggregator, ClassificationCounts, PermissionAnomaly};
pub use classify::{Classification, FileClassifier};
pub use file_types::{categorise_extension, categorise_path, CategoryStats, FileCategory};
pub use signatures::{detect_signature, read_prefix, sniff_file, FileSignature};
pub use top_files::{LargeFile, LargeFileTracker};
