//! Bounded per-commodity quote rankings.
//!
//! ## Architecture
//!
//! A ranking keeps the best `depth` quotes for one commodity, one per station:
//!
//! - **Slab**: Pre-allocated storage for the ranked quotes (`depth + 1` slots)
//! - **BTreeMap**: Rank key to slab key, ordered best first
//! - **HashMap**: Station to slab key for O(1) upsert
//!
//! ## Ordering
//!
//! The ordering lives in the key type, so supply and demand rankings are
//! distinct types rather than one container with a runtime flag:
//!
//! - [`SupplyRanking`]: ascending buy price (best = cheapest to buy)
//! - [`DemandRanking`]: descending sell price (best = highest paying)
//!
//! Equal prices are ordered by station name.
//!
//! ## Example
//!
//! ```
//! use galaxy_market::market::SupplyRanking;
//! use galaxy_market::types::Quote;
//! use galaxy_market::types::price::credits;
//!
//! let mut ranking = SupplyRanking::new(2);
//! ranking.upsert(Quote::new("gold", "P", credits(10), 0, 5, 0));
//! ranking.upsert(Quote::new("gold", "Q", credits(8), 0, 3, 0));
//! ranking.upsert(Quote::new("gold", "R", credits(12), 0, 1, 0));
//!
//! assert_eq!(ranking.len(), 2);
//! assert_eq!(ranking.best().map(|q| q.station.as_str()), Some("Q"));
//! assert!(!ranking.contains_station("R"));
//! ```

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use slab::Slab;

use crate::types::Quote;

// ============================================================================
// Rank keys
// ============================================================================

/// Ordering and admission rule of a ranking.
///
/// Smaller keys rank better; the largest key is evicted first.
pub trait RankKey: Ord + Clone + fmt::Debug {
    /// Build the key a quote is ranked under
    fn for_quote(quote: &Quote) -> Self;

    /// Whether the quote belongs in this ranking at all
    fn admits(quote: &Quote) -> bool;
}

/// Supply rank: cheapest buy price first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SupplyKey {
    buy_price: u64,
    station: String,
}

impl RankKey for SupplyKey {
    fn for_quote(quote: &Quote) -> Self {
        Self {
            buy_price: quote.buy_price,
            station: quote.station.clone(),
        }
    }

    fn admits(quote: &Quote) -> bool {
        quote.has_supply()
    }
}

/// Demand rank: highest sell price first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DemandKey {
    sell_price: Reverse<u64>,
    station: String,
}

impl RankKey for DemandKey {
    fn for_quote(quote: &Quote) -> Self {
        Self {
            sell_price: Reverse(quote.sell_price),
            station: quote.station.clone(),
        }
    }

    fn admits(quote: &Quote) -> bool {
        quote.has_demand()
    }
}

/// Best-K quotes by lowest buy price
pub type SupplyRanking = Ranking<SupplyKey>;

/// Best-K quotes by highest sell price
pub type DemandRanking = Ranking<DemandKey>;

// ============================================================================
// Ranking
// ============================================================================

/// Outcome of applying one quote to a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankChange {
    /// The station's previous entry, if the quote replaced or removed one
    pub replaced: Option<Quote>,

    /// Entry pushed out because the ranking exceeded its depth
    pub evicted: Option<Quote>,
}

/// A bounded ranking holding at most `depth` quotes, one per station.
#[derive(Debug, Clone)]
pub struct Ranking<K: RankKey> {
    /// Ranked quotes
    quotes: Slab<Quote>,

    /// Rank order (best first), values are slab keys
    order: BTreeMap<K, usize>,

    /// Station to slab key mapping
    stations: HashMap<String, usize>,

    /// Maximum number of entries (K)
    depth: usize,
}

impl<K: RankKey> Ranking<K> {
    /// Create an empty ranking
    ///
    /// # Arguments
    ///
    /// * `depth` - Maximum number of entries; must be at least 1
    pub fn new(depth: usize) -> Self {
        debug_assert!(depth > 0, "ranking depth must be positive");
        Self {
            quotes: Slab::with_capacity(depth + 1),
            order: BTreeMap::new(),
            stations: HashMap::with_capacity(depth + 1),
            depth,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Maximum number of entries
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Apply a quote to the ranking
    ///
    /// - An admitted quote replaces the station's existing entry (if any) or
    ///   is added; the worst entry is then evicted if the ranking holds more
    ///   than `depth` quotes.
    /// - A quote that is not admitted (no supply / no demand) removes the
    ///   station's existing entry.
    ///
    /// # Returns
    ///
    /// What was replaced and what was evicted
    pub fn upsert(&mut self, quote: Quote) -> RankChange {
        let replaced = self.remove(&quote.station);

        if !K::admits(&quote) {
            return RankChange {
                replaced,
                evicted: None,
            };
        }

        let key = K::for_quote(&quote);
        let station = quote.station.clone();
        let slot = self.quotes.insert(quote);
        self.order.insert(key, slot);
        self.stations.insert(station, slot);

        let evicted = if self.order.len() > self.depth {
            self.pop_worst()
        } else {
            None
        };

        RankChange { replaced, evicted }
    }

    /// Remove a station's entry
    ///
    /// # Returns
    ///
    /// The removed quote, or None if the station is not ranked
    pub fn remove(&mut self, station: &str) -> Option<Quote> {
        let slot = self.stations.remove(station)?;
        let quote = self.quotes.remove(slot);
        self.order.remove(&K::for_quote(&quote));
        Some(quote)
    }

    fn pop_worst(&mut self) -> Option<Quote> {
        let (_, slot) = self.order.pop_last()?;
        let quote = self.quotes.remove(slot);
        self.stations.remove(&quote.station);
        Some(quote)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Best ranked quote
    #[inline]
    pub fn best(&self) -> Option<&Quote> {
        self.order.values().next().map(|slot| &self.quotes[*slot])
    }

    /// Worst ranked quote (next to be evicted)
    #[inline]
    pub fn worst(&self) -> Option<&Quote> {
        self.order.values().next_back().map(|slot| &self.quotes[*slot])
    }

    /// The station's ranked quote, if it is in the ranking
    pub fn get(&self, station: &str) -> Option<&Quote> {
        self.stations.get(station).map(|slot| &self.quotes[*slot])
    }

    #[inline]
    pub fn contains_station(&self, station: &str) -> bool {
        self.stations.contains_key(station)
    }

    /// Quotes in rank order, best first
    pub fn iter(&self) -> impl Iterator<Item = &Quote> + '_ {
        self.order.values().map(|slot| &self.quotes[*slot])
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
