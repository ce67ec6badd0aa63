//! Command-line definition.

use clap::{ArgAction, Parser};
use filesleuth_core::model::parse_size;
use filesleuth_core::ScanConfig;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// FileSleuth — classify files by type, total sizes per category, flag
/// risky permissions and list the largest files under a directory.
#[derive(Debug, Parser)]
#[command(name = "filesleuth", version, about)]
pub struct Cli {
    /// Directory to analyse.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Files at or above this size are listed as large (e.g. 500K, 10M, 1.5G).
    #[arg(short = 's', long, value_name = "SIZE", default_value = "1M", value_parser = parse_size)]
    pub size_threshold: u64,

    /// Classify by file extension only; never read file contents.
    #[arg(long)]
    pub no_signatures: bool,

    /// How many large files to list.
    #[arg(long, value_name = "N", default_value = "10")]
    pub max_large_files: NonZeroUsize,

    /// Descend through symbolic links (loops are detected and skipped).
    #[arg(long)]
    pub follow_links: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig::new(&self.root)
            .with_size_threshold(self.size_threshold)
            .with_max_large_files(self.max_large_files.get())
            .with_signatures(!self.no_signatures)
            .with_follow_links(self.follow_links)
    }

    /// Default log directive when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("filesleuth").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&["/tmp"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.size_threshold, 1024 * 1024);
        assert_eq!(config.max_large_files, 10);
        assert!(config.use_signatures);
        assert!(!config.follow_links);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn threshold_units() {
        let cli = parse(&["/tmp", "-s", "10M"]).unwrap();
        assert_eq!(cli.size_threshold, 10 * 1024 * 1024);
        let cli = parse(&["/tmp", "--size-threshold", "1.5k"]).unwrap();
        assert_eq!(cli.size_threshold, 1536);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["/tmp", "-s", "ten"]).is_err());
        assert!(parse(&["/tmp", "--max-large-files", "0"]).is_err());
        assert!(parse(&["/tmp", "--max-large-files", "-3"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn flags_map_to_config() {
        let cli = parse(&["/tmp", "--no-signatures", "--follow-links", "--max-large-files", "3"])
            .unwrap();
        let config = cli.to_config();
        assert!(!config.use_signatures);
        assert!(config.follow_links);
        assert_eq!(config.max_large_files, 3);
    }

    #[test]
    fn verbosity() {
        assert_eq!(parse(&["/tmp", "-v"]).unwrap().log_level(), "info");
        assert_eq!(parse(&["/tmp", "-vvv"]).unwrap().log_level(), "debug");
        assert_eq!(parse(&["/tmp", "-q"]).unwrap().log_level(), "error");
        assert!(parse(&["/tmp", "-q", "-v"]).is_err());
    }
}
