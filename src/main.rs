//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `offer_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use offer_report::initialization::init_logger_with;
use offer_report::{run_providers, run_title, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let http = cli.http_config();
    let outcome = match cli.command {
        Command::Title(args) => run_title(args.into_config(http)).await.map(|report| {
            println!(
                "✅ Wrote {} offer{} in {} group{} from {} locale{} to {} in {:.1}s",
                report.kept,
                if report.kept == 1 { "" } else { "s" },
                report.groups,
                if report.groups == 1 { "" } else { "s" },
                report.locales,
                if report.locales == 1 { "" } else { "s" },
                report.output_path.display(),
                report.elapsed_seconds
            );
        }),
        Command::Providers(args) => run_providers(args.into_config(http)).await.map(|report| {
            for line in report.lines() {
                println!("{line}");
            }
        }),
    };

    if let Err(e) = outcome {
        eprintln!("offer_report error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
