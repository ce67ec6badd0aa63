/// Data model for FileSleuth scans.
///
/// Re-exports the per-file record, anomaly tags, and size helpers.
pub mod record;
pub mod size;

pub use record::{Anomaly, AnomalySet, ClassifiedBy, FileRecord};
pub use size::{format_count, format_size, parse_size, ParseSizeError};
