//! Route engine module.
//!
//! ## Design Principles
//!
//! The route engine is designed for:
//!
//! 1. **Consistency**: Each query reads one snapshot of the store under a single lock
//! 2. **Fixed-Point Prices**: Profits are computed on integer prices
//! 3. **Synchronous Execution**: Queries run to completion, bounded by K per commodity
//!
//! ## Selection Rules
//!
//! - **Source**: commodities for sale at the station within the credit limit
//! - **Destination**: the best demand quote for each such commodity
//! - **Winner**: strictly greatest positive profit, first found on ties
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use galaxy_market::engine::RouteEngine;
//! use galaxy_market::galaxy::{Coordinates, StarGraph};
//! use galaxy_market::market::SharedMarketStore;
//! use galaxy_market::types::Quote;
//! use galaxy_market::types::price::credits;
//!
//! let galaxy = StarGraph::from_systems([
//!     ("P", Coordinates::new(0.0, 0.0, 0.0)),
//!     ("R", Coordinates::new(12.0, 0.0, 0.0)),
//! ]);
//! let engine = RouteEngine::new(SharedMarketStore::default(), Arc::new(galaxy));
//!
//! engine.market().record(Quote::new("gold", "P", credits(10), 0, 5, 0));
//! engine.market().record(Quote::new("gold", "R", 0, credits(50), 0, 20));
//!
//! let trade = engine.best_trade("P", credits(100), 5.0).unwrap().unwrap();
//! assert_eq!(trade.profit, credits(40));
//! assert_eq!(trade.jumps, Some(3));
//! ```

pub mod route_engine;

pub use route_engine::{LocalOffer, RouteEngine};
