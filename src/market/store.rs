//! Ranked market store.
//!
//! Per commodity, the store keeps a [`SupplyRanking`] and a [`DemandRanking`].
//! Next to the rankings it keeps an unbounded station index holding the most
//! recent prices for every (station, commodity) pair ever observed, so the
//! price at a given station is available even when that station is not in
//! any ranking.
//!
//! `MarketStore` itself is single-threaded (`&mut self` to record); share it
//! through [`SharedMarketStore`](crate::market::SharedMarketStore).

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::MarketConfig;
use crate::error::Result;
use crate::market::ranking::{DemandRanking, SupplyRanking};
use crate::types::Quote;

/// Latest prices observed for one (station, commodity) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationPrice {
    /// Buy price; [`UNAVAILABLE`](crate::types::price::UNAVAILABLE) if not for sale
    pub buy_price: u64,
    pub sell_price: u64,
    pub supply: u64,
    pub demand: u64,
}

impl StationPrice {
    /// Whether the commodity can be bought at the station
    #[inline]
    pub fn is_for_sale(&self) -> bool {
        crate::types::price::is_available(self.buy_price)
    }
}

impl From<&Quote> for StationPrice {
    fn from(quote: &Quote) -> Self {
        Self {
            buy_price: quote.buy_price,
            sell_price: quote.sell_price,
            supply: quote.supply,
            demand: quote.demand,
        }
    }
}

/// Supply and demand rankings of one commodity.
#[derive(Debug, Clone)]
pub struct CommodityBook {
    pub supply: SupplyRanking,
    pub demand: DemandRanking,
}

impl CommodityBook {
    fn new(depth: usize) -> Self {
        Self {
            supply: SupplyRanking::new(depth),
            demand: DemandRanking::new(depth),
        }
    }
}

/// In-memory market state rebuilt from the quote stream.
#[derive(Debug, Clone)]
pub struct MarketStore {
    /// Ranking depth (K)
    depth: usize,

    /// Commodity => rankings
    books: HashMap<String, CommodityBook>,

    /// Station => commodity => latest prices
    stations: HashMap<String, HashMap<String, StationPrice>>,

    /// Number of quotes recorded so far
    recorded: u64,
}

impl Default for MarketStore {
    fn default() -> Self {
        Self::with_depth(crate::config::DEFAULT_RANKING_DEPTH)
    }
}

impl MarketStore {
    /// Create an empty store from a validated configuration
    pub fn new(config: &MarketConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_depth(config.ranking_depth))
    }

    fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            books: HashMap::new(),
            stations: HashMap::new(),
            recorded: 0,
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of quotes recorded
    #[inline]
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Record a quote
    ///
    /// 1. A zero buy price is normalized to "unavailable".
    /// 2. The quote is applied to the commodity's supply and demand rankings;
    ///    each ranking admits it only with a positive quantity and otherwise
    ///    drops the station's stale entry. Overflowing rankings evict their
    ///    worst entry.
    /// 3. The station index is updated unconditionally.
    pub fn record(&mut self, quote: Quote) {
        let quote = quote.normalized();
        trace!(
            commodity = %quote.commodity,
            station = %quote.station,
            buy = quote.buy_price,
            sell = quote.sell_price,
            "recording quote"
        );

        let depth = self.depth;
        let book = self
            .books
            .entry(quote.commodity.clone())
            .or_insert_with(|| CommodityBook::new(depth));

        let supply_change = book.supply.upsert(quote.clone());
        if let Some(evicted) = supply_change.evicted {
            debug!(commodity = %quote.commodity, station = %evicted.station, "evicted from supply ranking");
        }
        let demand_change = book.demand.upsert(quote.clone());
        if let Some(evicted) = demand_change.evicted {
            debug!(commodity = %quote.commodity, station = %evicted.station, "evicted from demand ranking");
        }

        let price = StationPrice::from(&quote);
        let Quote {
            commodity, station, ..
        } = quote;
        self.stations
            .entry(station)
            .or_default()
            .insert(commodity, price);

        self.recorded += 1;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Quote with the lowest buy price for a commodity
    ///
    /// Quotes that are not for sale rank last, so this only returns one when
    /// no priced alternative is ranked.
    pub fn best_supply(&self, commodity: &str) -> Option<&Quote> {
        self.books.get(commodity)?.supply.best()
    }

    /// Quote with the highest sell price for a commodity
    pub fn best_demand(&self, commodity: &str) -> Option<&Quote> {
        self.books.get(commodity)?.demand.best()
    }

    /// Latest prices of a commodity at a station
    pub fn local_price(&self, station: &str, commodity: &str) -> Option<StationPrice> {
        self.stations.get(station)?.get(commodity).copied()
    }

    /// All commodities observed at a station with their latest prices
    pub fn station_prices(&self, station: &str) -> Option<&HashMap<String, StationPrice>> {
        self.stations.get(station)
    }

    pub fn book(&self, commodity: &str) -> Option<&CommodityBook> {
        self.books.get(commodity)
    }

    /// Commodities with at least one recorded quote, sorted
    pub fn commodities(&self) -> Vec<&str> {
        let mut commodities: Vec<&str> = self.books.keys().map(String::as_str).collect();
        commodities.sort_unstable();
        commodities
    }

    /// Stations with at least one recorded quote, sorted
    pub fn stations(&self) -> Vec<&str> {
        let mut stations: Vec<&str> = self.stations.keys().map(String::as_str).collect();
        stations.sort_unstable();
        stations
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
