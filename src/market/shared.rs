//! Thread-safe handle around [`MarketStore`].
//!
//! ## Concurrency
//!
//! One coarse `parking_lot::RwLock` covers the whole store:
//!
//! - `record` holds the write lock for the full update, so readers never see
//!   a ranking above its depth or a half-applied station index entry.
//! - Every query holds the read lock for its full duration; readers run in
//!   parallel with each other.
//!
//! Handles are cheap to clone; all clones share the same store.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::MarketConfig;
use crate::error::Result;
use crate::market::store::{MarketStore, StationPrice};
use crate::types::Quote;

/// Cloneable, lock-protected market store.
#[derive(Debug, Clone, Default)]
pub struct SharedMarketStore {
    inner: Arc<RwLock<MarketStore>>,
}

impl SharedMarketStore {
    pub fn new(config: &MarketConfig) -> Result<Self> {
        Ok(Self::from_store(MarketStore::new(config)?))
    }

    pub fn from_store(store: MarketStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Record a quote under the write lock
    pub fn record(&self, quote: Quote) {
        self.inner.write().record(quote);
    }

    /// Record a batch of quotes, taking the write lock once per quote
    pub fn record_all<I>(&self, quotes: I) -> u64
    where
        I: IntoIterator<Item = Quote>,
    {
        let mut recorded = 0;
        for quote in quotes {
            self.record(quote);
            recorded += 1;
        }
        recorded
    }

    pub fn best_supply(&self, commodity: &str) -> Option<Quote> {
        self.inner.read().best_supply(commodity).cloned()
    }

    pub fn best_demand(&self, commodity: &str) -> Option<Quote> {
        self.inner.read().best_demand(commodity).cloned()
    }

    pub fn local_price(&self, station: &str, commodity: &str) -> Option<StationPrice> {
        self.inner.read().local_price(station, commodity)
    }

    /// Run a multi-step query against one consistent view of the store
    pub fn read<R>(&self, f: impl FnOnce(&MarketStore) -> R) -> R {
        f(&self.inner.read())
    }
}
