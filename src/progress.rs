//! Progress reporting for the chess walker
//!
//! Provides the live spinner shown during traversals and the styled console
//! summaries printed after each mode and at the end of the run. All printing
//! lives here; the walk core only logs.

use crate::config::WalkConfig;
use crate::walker::{ModeResult, RatingBand, TraversalProgress, WalkReport, NUM_BANDS};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter that displays traversal status
pub struct ProgressReporter {
    /// Progress bar
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the progress display
    pub fn update(&self, progress: &TraversalProgress) {
        let msg = format!(
            "Mode: {} | Processed: {} | Attempted: {} | Frontier: {} | Rate: {:.1}/s",
            progress.mode,
            progress.processed,
            progress.attempted,
            progress.frontier_len,
            progress.users_per_second(),
        );

        self.bar.set_message(msg);
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Run `f` with the spinner hidden, e.g. to print a mode summary mid-run
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a header at the start of the walk
pub fn print_header(config: &WalkConfig) {
    let modes = config
        .modes
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let seeds = config
        .seeds
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    println!();
    println!(
        "{} {}",
        style("chess-walker").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Endpoint:").bold(), config.endpoint);
    println!("  {} {}", style("Modes:").bold(), modes);
    println!(
        "  {} {} users per mode",
        style("Budget:").bold(),
        config.budget
    );
    println!("  {} {}", style("Seeds:").bold(), seeds);
    println!();
}

/// Print the summary for one completed mode
pub fn print_mode_summary(result: &ModeResult) {
    let stats = &result.stats;

    println!();
    println!(
        "{} {}",
        style("Mode complete:").green().bold(),
        style(result.mode.to_string()).bold()
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Attempted:").bold(), stats.attempted);
    println!("  {} {}", style("Processed:").bold(), stats.processed);
    println!(
        "  {} {:.1}%",
        style("Success:").bold(),
        stats.success_ratio() * 100.0
    );
    println!(
        "  {} {:.1}s",
        style("Duration:").bold(),
        result.duration.as_secs_f64()
    );
    println!(
        "  {} {}",
        style("Bands:").bold(),
        band_histogram(&result.band_counts)
    );
    if result.out_of_range_count() > 0 {
        println!(
            "  {} {}",
            style("Out of range:").yellow().bold(),
            result.out_of_range_count()
        );
    }
}

/// Print the final summary for the whole run
pub fn print_final_summary(report: &WalkReport) {
    println!();
    println!("{}", style("Walk Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Modes:").bold(), report.results.len());
    println!(
        "  {} {}",
        style("Attempted:").bold(),
        report.total_attempted()
    );
    println!(
        "  {} {}",
        style("Processed:").bold(),
        report.total_processed()
    );
    println!(
        "  {} {:.1}s",
        style("Duration:").bold(),
        report.duration.as_secs_f64()
    );
    println!();
}

/// One line of band counts: "0-400: 2 | 400-800: 5 | ..."
fn band_histogram(counts: &[u64; NUM_BANDS]) -> String {
    RatingBand::all()
        .map(|band| format!("{}: {}", band, counts[band.index()]))
        .collect::<Vec<_>>()
        .join(" | ")
}
