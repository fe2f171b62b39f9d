//! Error types for the market core and its feed.
//!
//! Missing data is not an error: queries for a commodity, station or pair
//! that was never observed return `None`. The variants here are the failures
//! a caller has to handle; none of them touch store state.

use thiserror::Error;

/// Failures of query and planning operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarketError {
    /// A system name is absent from the star graph
    #[error("unknown star system: {0}")]
    UnknownSystem(String),

    /// Jump range must be positive (and not NaN)
    #[error("invalid jump range {0}: must be greater than zero")]
    InvalidJumpRange(f64),

    /// The greedy planner found no next hop
    #[error("no route from {from} to {to} with a jump range of {jump_range} ly")]
    NoRouteFound {
        from: String,
        to: String,
        jump_range: f64,
    },

    /// Ranking depth outside the supported range
    #[error("ranking depth {0} outside supported range 1..={}", crate::config::MAX_RANKING_DEPTH)]
    InvalidRankingDepth(usize),
}

/// Result alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Reasons the feed rejects an incoming message before it reaches the store.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported message type {0:?}")]
    UnsupportedType(String),

    #[error("missing field {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error("malformed star table: {0}")]
    StarTable(String),
}
