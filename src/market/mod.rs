//! Market module: ranked quotes per commodity.
//!
//! ## Components
//!
//! - [`Ranking`]: Bounded best-K quotes for one commodity, one per station,
//!   specialised as [`SupplyRanking`] and [`DemandRanking`]
//! - [`MarketStore`]: Rankings for every commodity plus the station price index
//! - [`SharedMarketStore`]: Lock-protected handle shared by the feed and queries
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Record quote | O(log K) |
//! | Best supply/demand | O(1)* |
//! | Local price | O(1) |
//!
//! *First entry of a K-sized BTreeMap
//!
//! ## Example
//!
//! ```
//! use galaxy_market::market::SharedMarketStore;
//! use galaxy_market::types::Quote;
//! use galaxy_market::types::price::credits;
//!
//! let store = SharedMarketStore::default();
//! store.record(Quote::new("gold", "P", credits(10), 0, 5, 0));
//! store.record(Quote::new("gold", "Q", credits(8), 0, 3, 0));
//!
//! assert_eq!(store.best_supply("gold").unwrap().station, "Q");
//! ```

pub mod ranking;
pub mod store;
pub mod shared;

pub use ranking::{DemandKey, DemandRanking, RankChange, RankKey, Ranking, SupplyKey, SupplyRanking};
pub use shared::SharedMarketStore;
pub use store::{CommodityBook, MarketStore, StationPrice};
