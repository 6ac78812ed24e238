//! Walk coordinator - runs the configured modes in order
//!
//! The coordinator is responsible for:
//! - Building a fresh walker per mode (frontier, visited set and tracker
//!   never carry over)
//! - Running the modes strictly sequentially, in configured order
//! - Assembling the run report and writing its JSON summary

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::client::{ChessDataFetcher, GameMode};
use crate::config::WalkConfig;
use crate::error::Result;
use crate::walker::bands::NUM_BANDS;
use crate::walker::traversal::{ModeResult, ModeWalker, TraversalProgress};

/// Runs one traversal per configured mode
pub struct WalkCoordinator {
    config: WalkConfig,
}

impl WalkCoordinator {
    /// Create a new walk coordinator
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// The configuration this coordinator runs with
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Run every configured mode and collect the report
    pub fn run<F: ChessDataFetcher>(&self, fetcher: &F) -> WalkReport {
        self.run_with(fetcher, |_| {}, |_| {})
    }

    /// Run with observation hooks
    ///
    /// `on_progress` fires once per traversal iteration, `on_mode_complete`
    /// after each mode finishes. Fetch failures are absorbed per user inside
    /// the traversal, so the run itself cannot fail.
    pub fn run_with<F, P, M>(
        &self,
        fetcher: &F,
        mut on_progress: P,
        mut on_mode_complete: M,
    ) -> WalkReport
    where
        F: ChessDataFetcher,
        P: FnMut(&TraversalProgress),
        M: FnMut(&ModeResult),
    {
        let start = Instant::now();
        let started_at: DateTime<Utc> = Utc::now();

        info!(
            modes = self.config.modes.len(),
            seeds = self.config.seeds.len(),
            budget = self.config.budget,
            endpoint = %self.config.endpoint,
            "Starting walk"
        );

        let mut results = Vec::with_capacity(self.config.modes.len());
        for &mode in &self.config.modes {
            let walker = ModeWalker::new(mode, &self.config);
            let result = walker.run_with_progress(fetcher, &mut on_progress);

            info!(
                mode = %mode,
                attempted = result.stats.attempted,
                processed = result.stats.processed,
                duration_secs = result.duration.as_secs_f64(),
                "Mode complete"
            );
            on_mode_complete(&result);
            results.push(result);
        }

        let report = WalkReport {
            results,
            started_at,
            duration: start.elapsed(),
        };

        info!(
            attempted = report.total_attempted(),
            processed = report.total_processed(),
            duration_secs = report.duration.as_secs_f64(),
            "Walk complete"
        );

        report
    }
}

/// Result of a completed walk, one entry per mode
#[derive(Debug, Clone)]
pub struct WalkReport {
    /// Per-mode results, in run order
    pub results: Vec<ModeResult>,

    /// When the walk started
    pub started_at: DateTime<Utc>,

    /// Time taken for the whole walk
    pub duration: Duration,
}

impl WalkReport {
    /// Candidates selected across all modes
    pub fn total_attempted(&self) -> u64 {
        self.results.iter().map(|r| r.stats.attempted).sum()
    }

    /// Users processed across all modes
    pub fn total_processed(&self) -> u64 {
        self.results.iter().map(|r| r.stats.processed).sum()
    }

    /// Result for one mode, if it was part of the run
    pub fn mode_result(&self, mode: GameMode) -> Option<&ModeResult> {
        self.results.iter().find(|r| r.mode == mode)
    }

    /// Write a pretty-printed JSON summary of the run
    ///
    /// Raw responses are not included, only per-mode counts and timings.
    pub fn save(&self, path: &Path) -> Result<()> {
        let doc = ReportDoc::from(self);
        let json = serde_json::to_string_pretty(&doc)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Serialized form of a run report
#[derive(Debug, Serialize)]
struct ReportDoc {
    started_at: String,
    finished_at: String,
    duration_secs: f64,
    total_attempted: u64,
    total_processed: u64,
    modes: Vec<ModeReportDoc>,
}

#[derive(Debug, Serialize)]
struct ModeReportDoc {
    mode: GameMode,
    attempted: u64,
    processed: u64,
    band_counts: [u64; NUM_BANDS],
    out_of_range: u64,
    duration_secs: f64,
    average_times: Vec<f64>,
}

impl From<&WalkReport> for ReportDoc {
    fn from(report: &WalkReport) -> Self {
        let finished_at = report.started_at
            + chrono::Duration::from_std(report.duration).unwrap_or_else(|_| chrono::Duration::zero());

        Self {
            started_at: report.started_at.to_rfc3339(),
            finished_at: finished_at.to_rfc3339(),
            duration_secs: report.duration.as_secs_f64(),
            total_attempted: report.total_attempted(),
            total_processed: report.total_processed(),
            modes: report
                .results
                .iter()
                .map(|r| ModeReportDoc {
                    mode: r.mode,
                    attempted: r.stats.attempted,
                    processed: r.stats.processed,
                    band_counts: r.band_counts,
                    out_of_range: r.out_of_range_count(),
                    duration_secs: r.duration.as_secs_f64(),
                    average_times: r.responses.iter().map(|resp| resp.average_time).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ChessDataResponse, UserRating};
    use crate::error::FetchResult;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records which (mode, user) pairs were fetched, in order.
    #[derive(Default)]
    struct RecordingFetcher {
        opponents: HashMap<String, Vec<UserRating>>,
        calls: RefCell<Vec<(GameMode, String)>>,
    }

    impl RecordingFetcher {
        fn respond(mut self, name: &str, opponents: &[(&str, i32)]) -> Self {
            self.opponents.insert(
                name.to_string(),
                opponents
                    .iter()
                    .map(|&(n, r)| UserRating::new(n, r))
                    .collect(),
            );
            self
        }
    }

    impl ChessDataFetcher for RecordingFetcher {
        fn fetch(&self, user: &UserRating, mode: GameMode) -> FetchResult<ChessDataResponse> {
            self.calls.borrow_mut().push((mode, user.name.clone()));
            Ok(ChessDataResponse {
                average_time: 2.0,
                opponents: self
                    .opponents
                    .get(user.name.as_str())
                    .cloned()
                    .unwrap_or_default(),
            })
        }
    }

    fn two_mode_config() -> WalkConfig {
        let mut config = WalkConfig::default();
        config.modes = vec![GameMode::Blitz, GameMode::Rapid];
        config.seeds = vec![UserRating::new("a", 1000)];
        config.budget = 50;
        config
    }

    #[test]
    fn test_modes_run_in_order_with_fresh_state() {
        let fetcher = RecordingFetcher::default()
            .respond("a", &[("b", 1500)])
            .respond("b", &[]);
        let coordinator = WalkCoordinator::new(two_mode_config());

        let report = coordinator.run(&fetcher);

        // Each mode fetched the same users again: nothing leaked across modes
        assert_eq!(
            fetcher.calls.borrow().clone(),
            vec![
                (GameMode::Blitz, "a".to_string()),
                (GameMode::Blitz, "b".to_string()),
                (GameMode::Rapid, "a".to_string()),
                (GameMode::Rapid, "b".to_string()),
            ]
        );

        assert_eq!(report.results.len(), 2);
        for result in &report.results {
            assert_eq!(result.stats.processed, 2);
            assert_eq!(result.band_counts[2], 1);
            assert_eq!(result.band_counts[3], 1);
        }
    }

    #[test]
    fn test_mode_result_lookup_and_totals() {
        let fetcher = RecordingFetcher::default().respond("a", &[]);
        let coordinator = WalkCoordinator::new(two_mode_config());

        let report = coordinator.run(&fetcher);

        assert!(report.mode_result(GameMode::Blitz).is_some());
        assert!(report.mode_result(GameMode::Rapid).is_some());
        assert!(report.mode_result(GameMode::Bullet).is_none());
        assert_eq!(report.total_attempted(), 2);
        assert_eq!(report.total_processed(), 2);
    }

    #[test]
    fn test_mode_complete_callback_order() {
        let fetcher = RecordingFetcher::default().respond("a", &[]);
        let coordinator = WalkCoordinator::new(two_mode_config());

        let seen = RefCell::new(Vec::new());
        coordinator.run_with(
            &fetcher,
            |_| {},
            |result| seen.borrow_mut().push(result.mode),
        );

        assert_eq!(seen.into_inner(), vec![GameMode::Blitz, GameMode::Rapid]);
    }

    #[test]
    fn test_report_save_writes_json_summary() {
        let fetcher = RecordingFetcher::default().respond("a", &[]);
        let coordinator = WalkCoordinator::new(two_mode_config());
        let report = coordinator.run(&fetcher);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.json");
        report.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["total_processed"], 2);
        assert_eq!(doc["modes"].as_array().unwrap().len(), 2);
        assert_eq!(doc["modes"][0]["mode"], "blitz");
        assert_eq!(
            doc["modes"][0]["band_counts"].as_array().unwrap().len(),
            NUM_BANDS
        );
        assert!(doc["started_at"].as_str().is_some());
    }
}
