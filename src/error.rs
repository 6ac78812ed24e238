//! Error types for chess-walker
//!
//! This module defines the error hierarchy that covers:
//! - Fetch errors against the chess data service (transport, status, decode)
//! - Configuration and CLI errors
//! - Report writing errors
//!
//! A fetch failure only ever affects the one user being fetched: the
//! traversal marks that user visited and keeps going, so `FetchError`
//! reaches the top level only when building the HTTP client itself fails.

use thiserror::Error;

/// Top-level error type for the chess-walker application
#[derive(Error, Debug)]
pub enum WalkerError {
    /// Fetch-related errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Run report serialization errors
    #[error("Failed to encode run report: {0}")]
    Report(#[from] serde_json::Error),

    /// I/O errors (report file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single request against the chess data service
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, TLS failure), or the client itself could not be built
    #[error("Request to chess data service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Chess data service returned {status} for user '{username}'")]
    Status {
        username: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON document
    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Endpoint URL failed to parse or has an unsupported scheme
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Per-mode user budget out of range
    #[error("Invalid budget {value}: must be between 1 and {max}")]
    InvalidBudget { value: u32, max: u32 },

    /// Games-per-request out of range
    #[error("Invalid games count {value}: must be between 1 and {max}")]
    InvalidGamesCount { value: u32, max: u32 },

    /// Request timeout out of range
    #[error("Invalid timeout {value}s: must be between 1 and {max} seconds")]
    InvalidTimeout { value: u64, max: u64 },

    /// Seed argument failed to parse
    #[error("Invalid seed '{value}': {reason}")]
    InvalidSeed { value: String, reason: String },

    /// Unrecognized game mode name
    #[error("Unknown game mode '{value}': expected blitz, rapid, or bullet")]
    UnknownMode { value: String },

    /// The same mode was requested twice
    #[error("Game mode '{mode}' listed more than once")]
    DuplicateMode { mode: String },
}

/// Result type alias for WalkerError
pub type Result<T> = std::result::Result<T, WalkerError>;

/// Result type alias for FetchError
pub type FetchResult<T> = std::result::Result<T, FetchError>;
