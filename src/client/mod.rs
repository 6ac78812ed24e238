//! Chess data service client
//!
//! The traversal core talks to the service only through [`ChessDataFetcher`],
//! so tests can substitute scripted fakes. [`HttpFetcher`] is the production
//! implementation over a blocking reqwest client.

pub mod http;
pub mod types;

pub use http::HttpFetcher;
pub use types::{ChessDataRequest, ChessDataResponse, GameMode, UserRating, COLOR_BOTH};

use crate::error::FetchResult;

/// Boundary between the walk and the remote chess data service.
pub trait ChessDataFetcher {
    /// Fetch one player's recent-game summary for the given mode.
    ///
    /// Each successful call also makes the service ingest the fetched games
    /// on its side; the walker itself stores nothing.
    fn fetch(&self, user: &UserRating, mode: GameMode) -> FetchResult<ChessDataResponse>;
}
