//! FileSleuth — file system analyser.
//!
//! Thin binary entry point. All scanning and reporting logic lives in the
//! `filesleuth-core` crate; this file only parses arguments, sets up
//! logging and prints the report.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use filesleuth_core::report::{render_text, to_json};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    // RUST_LOG wins over -v/-q when set.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("FileSleuth starting");

    let config = cli.to_config();
    let report = filesleuth_core::scan(&config)?;

    if cli.json {
        let json = to_json(&report).context("failed to serialise report")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
