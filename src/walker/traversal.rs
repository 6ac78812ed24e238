//! Single-mode traversal
//!
//! One `ModeWalker` owns everything a mode's walk touches: the frontier, the
//! visited set, the rating tracker, the collected responses, and the
//! counters. Nothing is shared between modes; the coordinator builds a fresh
//! walker for each one.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::client::{ChessDataFetcher, ChessDataResponse, GameMode};
use crate::config::WalkConfig;
use crate::walker::bands::{RatingTracker, NUM_BANDS};
use crate::walker::frontier::Frontier;

/// Counters for one mode's traversal
#[derive(Debug, Clone, Copy, Default)]
pub struct TraversalStats {
    /// Loop iterations that selected a candidate, duplicates included
    pub attempted: u64,

    /// Users fetched successfully
    pub processed: u64,
}

impl TraversalStats {
    /// Processed share of attempts
    ///
    /// Failed fetches and duplicate discards both depress this; it is the
    /// walk's authoritative outcome measure.
    pub fn success_ratio(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        self.processed as f64 / self.attempted as f64
    }
}

/// Snapshot handed to progress callbacks once per loop iteration
#[derive(Debug, Clone)]
pub struct TraversalProgress {
    /// Mode being walked
    pub mode: GameMode,

    /// Candidates selected so far
    pub attempted: u64,

    /// Users processed so far
    pub processed: u64,

    /// Candidates still queued
    pub frontier_len: usize,

    /// Names in the visited set
    pub visited: usize,

    /// Time since the mode started
    pub elapsed: Duration,
}

impl TraversalProgress {
    /// Calculate processed users per second
    pub fn users_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.processed as f64 / secs
        } else {
            0.0
        }
    }
}

/// Everything one finished mode produced
#[derive(Debug, Clone)]
pub struct ModeResult {
    /// Mode that was walked
    pub mode: GameMode,

    /// Responses for each processed user, in processing order
    pub responses: Vec<ChessDataResponse>,

    /// Attempt and processed counters
    pub stats: TraversalStats,

    /// Processed-user counts per rating band
    pub band_counts: [u64; NUM_BANDS],

    /// Time the mode took
    pub duration: Duration,
}

impl ModeResult {
    /// Processed users whose rating fell outside every tracked band
    pub fn out_of_range_count(&self) -> u64 {
        self.stats.processed - self.band_counts.iter().sum::<u64>()
    }
}

/// Walks the player graph for a single game mode
pub struct ModeWalker {
    mode: GameMode,
    budget: u64,
    frontier: Frontier,
    visited: HashSet<String>,
    tracker: RatingTracker,
    responses: Vec<ChessDataResponse>,
    stats: TraversalStats,
}

impl ModeWalker {
    /// Create a fresh walker seeded from the configuration
    pub fn new(mode: GameMode, config: &WalkConfig) -> Self {
        Self {
            mode,
            budget: u64::from(config.budget),
            frontier: Frontier::with_seeds(&config.seeds),
            visited: HashSet::new(),
            tracker: RatingTracker::new(),
            responses: Vec::new(),
            stats: TraversalStats::default(),
        }
    }

    /// Run the traversal to completion
    pub fn run<F: ChessDataFetcher>(self, fetcher: &F) -> ModeResult {
        self.run_with_progress(fetcher, |_| {})
    }

    /// Run the traversal, invoking `progress` once per loop iteration
    ///
    /// The walk ends when the frontier is exhausted or the processed count
    /// exceeds the budget. The bound is checked before each fetch, so up to
    /// budget + 1 users can be processed; downstream datasets depend on that
    /// historical behavior, so it must not be tightened.
    pub fn run_with_progress<F, P>(mut self, fetcher: &F, mut progress: P) -> ModeResult
    where
        F: ChessDataFetcher,
        P: FnMut(&TraversalProgress),
    {
        let start = Instant::now();
        info!(
            mode = %self.mode,
            seeds = self.frontier.len(),
            budget = self.budget,
            "Starting traversal"
        );

        while !self.frontier.is_empty() {
            if self.stats.processed > self.budget {
                info!(mode = %self.mode, "Budget reached, stopping traversal");
                break;
            }

            self.stats.attempted += 1;
            let candidate = self.tracker.select_next(&mut self.frontier);

            if self.visited.contains(candidate.name.as_str()) {
                debug!(mode = %self.mode, user = %candidate.name, "Already visited, discarding");
                progress(&self.snapshot(start.elapsed()));
                continue;
            }

            info!(mode = %self.mode, user = %candidate, "Processing user");
            match fetcher.fetch(&candidate, self.mode) {
                Ok(response) => {
                    let opponents = response.opponents.clone();
                    self.responses.push(response);
                    self.stats.processed += 1;
                    if self.tracker.record(candidate.rating).is_none() {
                        debug!(
                            mode = %self.mode,
                            user = %candidate,
                            "Rating outside tracked bands"
                        );
                    }
                    self.frontier.extend(opponents);
                    info!(mode = %self.mode, user = %candidate.name, "Processed user");
                }
                Err(err) => {
                    warn!(
                        mode = %self.mode,
                        user = %candidate.name,
                        error = %err,
                        "Fetch failed, skipping user"
                    );
                }
            }
            // Failed users go in too; they are never retried.
            self.visited.insert(candidate.name);

            progress(&self.snapshot(start.elapsed()));
        }

        let duration = start.elapsed();
        info!(
            mode = %self.mode,
            attempted = self.stats.attempted,
            processed = self.stats.processed,
            duration_secs = duration.as_secs_f64(),
            "Traversal complete"
        );

        ModeResult {
            mode: self.mode,
            responses: self.responses,
            stats: self.stats,
            band_counts: self.tracker.counts(),
            duration,
        }
    }

    fn snapshot(&self, elapsed: Duration) -> TraversalProgress {
        TraversalProgress {
            mode: self.mode,
            attempted: self.stats.attempted,
            processed: self.stats.processed,
            frontier_len: self.frontier.len(),
            visited: self.visited.len(),
            elapsed,
        }
    }
}
