/// Machine-readable report output.
use super::ScanReport;

/// Serialise the report as pretty-printed JSON.
pub fn to_json(report: &ScanReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
