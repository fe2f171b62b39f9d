//! Core data types for the market core
//!
//! ## Types
//!
//! - [`Quote`]: One station's prices and quantities for a commodity
//! - [`TradeRoute`]: A profit-maximizing trade and its delivery distance
//!
//! ## Fixed-Point Arithmetic
//!
//! All prices are stored as `u64` scaled by 10^8 (see [`price`]).
//! Example: 2845.5 credits is stored as 284_550_000_000u64

mod quote;
mod trade_route;
pub mod price;

// Re-export all types at module level
pub use quote::Quote;
pub use trade_route::{jump_count, TradeRoute};
