//! chess-walker - Bounded chess-player graph walker
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use chess_walker::client::HttpFetcher;
use chess_walker::config::{CliArgs, WalkConfig};
use chess_walker::progress::{
    print_final_summary, print_header, print_mode_summary, ProgressReporter,
};
use chess_walker::walker::WalkCoordinator;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    // Validate and create config
    let config = WalkConfig::from_args(args).context("Invalid configuration")?;

    // Print header
    if config.show_progress {
        print_header(&config);
    }

    // Build the HTTP client once; every request reuses it
    let fetcher = HttpFetcher::new(&config).context("Failed to create HTTP client")?;

    // Create progress reporter
    let progress = if config.show_progress {
        Some(ProgressReporter::new())
    } else {
        None
    };

    if let Some(ref p) = progress {
        p.set_status("Contacting chess data service...");
    }

    // Run the walk
    let coordinator = WalkCoordinator::new(config.clone());
    let report = coordinator.run_with(
        &fetcher,
        |snapshot| {
            if let Some(ref p) = progress {
                p.update(snapshot);
            }
        },
        |result| {
            if let Some(ref p) = progress {
                p.suspend(|| print_mode_summary(result));
            } else {
                print_mode_summary(result);
            }
        },
    );

    // Finish progress
    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    // Print summary
    print_final_summary(&report);

    // Write the JSON report if requested
    if let Some(path) = &config.report_path {
        report
            .save(path)
            .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
        info!(path = %path.display(), "Run report written");
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("chess_walker=debug,warn")
    } else {
        EnvFilter::new("chess_walker=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
