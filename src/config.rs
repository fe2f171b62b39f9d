//! Market core configuration.

use crate::error::{MarketError, Result};

/// Default number of quotes kept per commodity ranking
pub const DEFAULT_RANKING_DEPTH: usize = 5;

/// Largest supported ranking depth
pub const MAX_RANKING_DEPTH: usize = 100;

/// Tunables for the store and the route planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    /// Quotes kept per commodity in each of the supply and demand rankings (K)
    pub ranking_depth: usize,

    /// Guard on route planner stepping stones; `None` uses the number of charted systems
    pub max_route_steps: Option<usize>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            ranking_depth: DEFAULT_RANKING_DEPTH,
            max_route_steps: None,
        }
    }
}

impl MarketConfig {
    pub fn with_ranking_depth(ranking_depth: usize) -> Self {
        Self {
            ranking_depth,
            ..Self::default()
        }
    }

    /// Check that every value is in its supported range
    pub fn validate(&self) -> Result<()> {
        if self.ranking_depth == 0 || self.ranking_depth > MAX_RANKING_DEPTH {
            return Err(MarketError::InvalidRankingDepth(self.ranking_depth));
        }
        Ok(())
    }
}
