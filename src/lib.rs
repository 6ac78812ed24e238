//! chess-walker - Bounded chess-player graph walker
//!
//! Walks the graph of chess players reachable from a set of seed users, one
//! traversal per game mode (blitz, rapid, bullet). Each player is fetched
//! from the chess data service, which ingests the fetched games as a side
//! effect; the opponents in the response feed the frontier of the walk.
//!
//! # Features
//!
//! - **Rating-balanced selection**: processed players are counted in six
//!   400-point rating bands, and the frontier is always polled for the
//!   least-represented band first.
//!
//! - **Bounded, fault-tolerant walks**: each mode processes at most a
//!   configured budget of users; a failed fetch skips that one user and
//!   the walk keeps going.
//!
//! - **Fully isolated modes**: every mode gets a fresh frontier, visited
//!   set and band tracker, run strictly one after another.
//!
//! - **No local storage**: the service owns the data; the walker emits
//!   logs, console summaries and an optional JSON run report.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     Chess Data Service                     │
//! │               POST /fetch-chess-data (JSON)                │
//! └──────────────────────────────┬─────────────────────────────┘
//!                                │ average time + opponents
//!                                ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │                      WalkCoordinator                       │
//! │              (one ModeWalker per game mode)                │
//! │                                                            │
//! │   Frontier ──▶ select_next ──▶ fetch ──▶ visited set       │
//! │      ▲         (RatingTracker)   │                         │
//! │      └──────── opponents ◀───────┘                         │
//! │                                                            │
//! │   ModeResult per mode ──▶ WalkReport (console + JSON)      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```bash
//! # Walk all three modes from the built-in seeds
//! chess-walker
//!
//! # Blitz only, 20 users, with a JSON summary
//! chess-walker --mode blitz --budget 20 --report walk.json
//!
//! # Custom seeds against a remote service
//! chess-walker --endpoint https://chess.example.com/fetch-chess-data \
//!     --seed magnus-fan:2350 --seed club-player:1400
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod progress;
pub mod walker;

pub use client::{ChessDataFetcher, ChessDataResponse, GameMode, HttpFetcher, UserRating};
pub use config::{CliArgs, WalkConfig};
pub use error::{FetchError, Result, WalkerError};
pub use walker::{ModeResult, ModeWalker, WalkCoordinator, WalkReport};
