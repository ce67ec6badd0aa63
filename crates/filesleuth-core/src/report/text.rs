/// Plain-text report for terminals.
use super::ScanReport;
use crate::model::{format_count, format_size, Anomaly};
use std::fmt;

/// Paths listed per anomaly tag before the rest are summarised.
const MAX_PATHS_PER_ANOMALY: usize = 5;
/// Warnings listed before the rest are summarised.
const MAX_WARNINGS_SHOWN: usize = 10;

const HEAVY_RULE: &str = "==================================================";
const WIDE_RULE: &str = "--------------------------------------------------";
const NARROW_RULE: &str = "------------------------------";

/// Display adapter: `format!("{}", TextReport(&report))`.
pub struct TextReport<'a>(pub &'a ScanReport);

/// Render the whole report as a string.
pub fn render_text(report: &ScanReport) -> String {
    TextReport(report).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write_summary(f, report)?;
        write_categories(f, report)?;
        write_large_files(f, report)?;
        write_anomalies(f, report)?;
        write_warnings(f, report)
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, report: &ScanReport) -> fmt::Result {
    writeln!(f, "{HEAVY_RULE}")?;
    writeln!(f, "FILE SYSTEM ANALYSIS REPORT")?;
    writeln!(f, "{HEAVY_RULE}")?;
    writeln!(f, "Root: {}", report.root().display())?;
    writeln!(
        f,
        "Total files analyzed: {}",
        format_count(report.total_files)
    )?;
    writeln!(f, "Total size: {}", format_size(report.total_size))?;
    writeln!(
        f,
        "Directories: {}  Special files skipped: {}  Scan time: {} ms",
        format_count(report.dirs_visited),
        format_count(report.special_skipped),
        report.duration_ms
    )?;
    let methods = &report.classification;
    writeln!(
        f,
        "Classified by: {} signature, {} extension, {} unrecognised (signatures {})",
        format_count(methods.signature),
        format_count(methods.extension),
        format_count(methods.fallback),
        if report.config.use_signatures { "on" } else { "off" }
    )
}

fn write_categories(f: &mut fmt::Formatter<'_>, report: &ScanReport) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "FILE TYPE CATEGORIES:")?;
    writeln!(f, "{NARROW_RULE}")?;
    for stats in report.categories_by_size() {
        writeln!(
            f,
            "{:<12}: {:>8} files, {:>10} ({:>5.1}%)",
            stats.category.label(),
            format_count(stats.file_count),
            format_size(stats.total_size),
            report.percent_of_total(stats)
        )?;
    }
    Ok(())
}

fn write_large_files(f: &mut fmt::Formatter<'_>, report: &ScanReport) -> fmt::Result {
    writeln!(f)?;
    writeln!(
        f,
        "LARGE FILES (>= {}):",
        format_size(report.config.size_threshold)
    )?;
    writeln!(f, "{WIDE_RULE}")?;
    if report.large_files.is_empty() {
        return writeln!(f, "No large files found");
    }
    for file in &report.large_files {
        writeln!(
            f,
            "{:>10}  {}  [{}: {}]",
            format_size(file.size),
            report.display_path(&file.path).display(),
            file.category,
            file.classified_by
        )?;
    }
    let unlisted = report.unlisted_large_files();
    if unlisted > 0 {
        writeln!(f)?;
        writeln!(f, "... and {} more large files", format_count(unlisted))?;
    }
    Ok(())
}

fn write_anomalies(f: &mut fmt::Formatter<'_>, report: &ScanReport) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "PERMISSION ISSUES:")?;
    writeln!(f, "{NARROW_RULE}")?;
    if report.permission_anomalies.is_empty() {
        return writeln!(f, "No files with unusual permissions found");
    }
    for anomaly in Anomaly::ALL {
        let paths: Vec<_> = report.files_with(anomaly).collect();
        if paths.is_empty() {
            continue;
        }
        writeln!(f, "{anomaly} ({}):", paths.len())?;
        for path in paths.iter().take(MAX_PATHS_PER_ANOMALY) {
            writeln!(f, "  {}", report.display_path(path).display())?;
        }
        if paths.len() > MAX_PATHS_PER_ANOMALY {
            writeln!(f, "  ... and {} more", paths.len() - MAX_PATHS_PER_ANOMALY)?;
        }
    }
    Ok(())
}

fn write_warnings(f: &mut fmt::Formatter<'_>, report: &ScanReport) -> fmt::Result {
    if report.warnings.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "WARNINGS:")?;
    writeln!(f, "{NARROW_RULE}")?;
    for warning in report.warnings.iter().take(MAX_WARNINGS_SHOWN) {
        writeln!(
            f,
            "  [{}] {}: {}",
            warning.kind,
            report.display_path(&warning.path).display(),
            warning.message
        )?;
    }
    if report.warnings.len() > MAX_WARNINGS_SHOWN {
        writeln!(
            f,
            "  ... and {} more warnings",
            report.warnings.len() - MAX_WARNINGS_SHOWN
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn contains_every_section() {
        let out = render_text(&sample_report());
        for heading in [
            "FILE SYSTEM ANALYSIS REPORT",
            "Total files analyzed: 3",
            "FILE TYPE CATEGORIES:",
            "LARGE FILES (>= 1.0 MB):",
            "PERMISSION ISSUES:",
            "WARNINGS:",
        ] {
            assert!(out.contains(heading), "missing {heading:?} in:\n{out}");
        }
    }

    #[test]
    fn large_files_use_relative_paths_and_overflow_note() {
        let out = render_text(&sample_report());
        assert!(out.contains("    3.0 MB  sub/big.bin"), "{out}");
        assert!(out.contains("... and 3 more large files"), "{out}");
    }

    #[test]
    fn summary_shows_methods_and_skipped_entries() {
        let out = render_text(&sample_report());
        assert!(out.contains("Special files skipped: 2"), "{out}");
        assert!(
            out.contains("Classified by: 0 signature, 2 extension, 1 unrecognised (signatures on)"),
            "{out}"
        );
        assert!(out.contains("sub/big.bin  [Other: unrecognised]"), "{out}");
    }

    /// A file with two tags is listed under both.
    #[test]
    fn anomalies_grouped_by_tag() {
        let out = render_text(&sample_report());
        assert!(out.contains("world-writable (1):\n  notes.txt"), "{out}");
        assert!(out.contains("setuid-set (1):\n  notes.txt"), "{out}");
        assert!(!out.contains("setgid-set"), "{out}");
    }

    #[test]
    fn every_category_has_a_line() {
        let out = render_text(&sample_report());
        for label in ["Text", "Image", "Executable", "Archive", "Other"] {
            assert!(
                out.lines().any(|l| l.starts_with(label)),
                "no line for {label}"
            );
        }
    }

    #[test]
    fn empty_sections_say_so() {
        let mut report = sample_report();
        report.large_files.clear();
        report.large_file_count = 0;
        report.permission_anomalies.clear();
        report.warnings.clear();

        let out = render_text(&report);
        assert!(out.contains("No large files found"));
        assert!(out.contains("No files with unusual permissions found"));
        assert!(!out.contains("WARNINGS"));
    }

    #[test]
    fn warnings_are_capped() {
        let mut report = sample_report();
        let template = report.warnings[0].clone();
        report.warnings = vec![template; 13];

        let out = render_text(&report);
        assert!(out.contains("... and 3 more warnings"));
        assert_eq!(out.matches("[directory-skipped]").count(), 10);
    }
}
