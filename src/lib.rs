//! # Galaxy Market
//!
//! Market-data core for a galactic trading game.
//!
//! ## Architecture
//!
//! The core consists of:
//! - **Types**: Core data structures (Quote, TradeRoute, fixed-point prices)
//! - **Market**: Bounded best-K rankings per commodity plus a station price index
//! - **Galaxy**: Star chart and greedy jump-path planner
//! - **Engine**: Profit search across the market and delivery planning
//! - **Feed**: Decoding of live frames and replay of recorded history
//!
//! ## Design Principles
//!
//! 1. **Bounded Memory**: Each ranking keeps at most K quotes (K in 1..=100)
//! 2. **No Floating Point Prices**: Prices use fixed-point arithmetic (10^8 scaling)
//! 3. **Single Writer, Many Readers**: One feed writer and concurrent queries behind one lock
//! 4. **Synchronous Execution**: No async anywhere; queries are bounded by K
//!
//! ## Example
//!
//! ```
//! use galaxy_market::{MarketStore, Quote};
//! use galaxy_market::types::price::credits;
//!
//! let mut store = MarketStore::default();
//! store.record(Quote::new("gold", "Eranin (Azeban City)", credits(10), 0, 5, 0));
//!
//! assert_eq!(store.best_supply("gold").unwrap().buy_price, credits(10));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Quote, TradeRoute, price helpers
pub mod types;

/// Market store: per-commodity rankings and the station index
pub mod market;

/// Star chart and jump planning
pub mod galaxy;

/// Route engine: best trades and deliveries
pub mod engine;

/// Feed decoding and replay
pub mod feed;

/// Text rendering of query results
pub mod report;

pub mod config;
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::MarketConfig;
pub use engine::RouteEngine;
pub use error::{FeedError, MarketError};
pub use galaxy::{Coordinates, StarGraph};
pub use market::{MarketStore, SharedMarketStore};
pub use types::{Quote, TradeRoute};
