/// FileSleuth Core — directory scanning, classification and reporting.
///
/// This crate contains all analysis logic with no terminal or CLI
/// dependencies. The binary crate only parses arguments, calls
/// [`scanner::scan`], and prints the resulting [`report::ScanReport`].
///
/// # Modules
///
/// - [`model`] — Per-file records, anomaly tags, and size formatting/parsing.
/// - [`scanner`] — Root validation and the sequential directory walk.
/// - [`analysis`] — Signature detection, categorisation, and aggregation.
/// - [`platform`] — Unix permission-bit checks.
/// - [`report`] — The final report and its text/JSON renderings.
/// - [`error`] — Fatal scan errors.
pub mod analysis;
pub mod error;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;

pub use error::ScanError;
pub use report::ScanReport;
pub use scanner::{scan, ScanConfig};
