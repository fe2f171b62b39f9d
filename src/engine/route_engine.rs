//! Profit search over the market store.
//!
//! ## Rules
//!
//! - Only commodities genuinely for sale at the source station and priced at
//!   or below the credit limit are candidates.
//! - A candidate's profit is the best demand price anywhere minus the local
//!   buy price; commodities without demand contribute nothing.
//! - The strictly greatest positive profit wins; on ties the first candidate
//!   found is kept (station index order, which is unspecified).
//!
//! Each call works on one consistent view of the store (a single read lock).

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::MarketConfig;
use crate::error::Result;
use crate::galaxy::{system_of, validate_jump_range, StarGraph};
use crate::market::{MarketStore, SharedMarketStore};
use crate::types::{jump_count, Quote, TradeRoute};

/// A commodity that can be bought at a station within a credit limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOffer {
    pub commodity: String,
    pub buy_price: u64,
}

/// Answers "what should I buy here, and where do I take it?".
#[derive(Debug, Clone)]
pub struct RouteEngine {
    market: SharedMarketStore,
    galaxy: Arc<StarGraph>,
    max_route_steps: Option<usize>,
}

impl RouteEngine {
    pub fn new(market: SharedMarketStore, galaxy: Arc<StarGraph>) -> Self {
        Self {
            market,
            galaxy,
            max_route_steps: None,
        }
    }

    /// Apply the planner guard from the configuration
    pub fn with_config(mut self, config: &MarketConfig) -> Self {
        self.max_route_steps = config.max_route_steps;
        self
    }

    pub fn market(&self) -> &SharedMarketStore {
        &self.market
    }

    pub fn galaxy(&self) -> &StarGraph {
        &self.galaxy
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Commodities for sale at `station` costing at most `credit_limit`
    ///
    /// Quotes that are not for sale (buy price 0 on the feed) never qualify.
    /// The result is sorted by commodity.
    pub fn affordable_local_commodities(&self, station: &str, credit_limit: u64) -> Vec<LocalOffer> {
        self.market.read(|store| {
            let mut offers = affordable(store, station, credit_limit);
            offers.sort_unstable_by(|a, b| a.commodity.cmp(&b.commodity));
            offers
        })
    }

    /// The most profitable trade starting at `station`
    ///
    /// # Arguments
    ///
    /// * `station` - Station to buy at
    /// * `credit_limit` - Maximum unit price (fixed-point)
    /// * `jump_range` - Ship jump range in light years, must be positive
    ///
    /// # Returns
    ///
    /// * `Ok(Some(route))` - Best trade with its distance and jump count
    /// * `Ok(None)` - Nothing affordable here sells anywhere at a profit
    /// * `Err(InvalidJumpRange)` - Rejected before looking at the store
    pub fn best_trade(&self, station: &str, credit_limit: u64, jump_range: f64) -> Result<Option<TradeRoute>> {
        validate_jump_range(jump_range)?;
        let route = self
            .market
            .read(|store| best_trade_in(store, &self.galaxy, station, credit_limit, jump_range));

        match &route {
            Some(route) => debug!(
                station,
                commodity = %route.commodity,
                destination = %route.destination_station,
                profit = route.profit,
                "best trade"
            ),
            None => debug!(station, "no profitable trade"),
        }
        Ok(route)
    }

    /// Best trade from every known station, sorted by station
    pub fn best_trades(&self, credit_limit: u64, jump_range: f64) -> Result<Vec<(String, Option<TradeRoute>)>> {
        validate_jump_range(jump_range)?;
        let trades: Vec<(String, Option<TradeRoute>)> = self.market.read(|store| {
            store
                .stations()
                .into_iter()
                .map(|station| {
                    let route = best_trade_in(store, &self.galaxy, station, credit_limit, jump_range);
                    (station.to_string(), route)
                })
                .collect()
        });

        info!(
            stations = trades.len(),
            profitable = trades.iter().filter(|(_, route)| route.is_some()).count(),
            "computed best trades"
        );
        Ok(trades)
    }

    /// Jump path between the systems of a trade's source and destination
    pub fn plan_delivery(&self, trade: &TradeRoute, jump_range: f64) -> Result<Vec<String>> {
        self.galaxy.route_with_limit(
            system_of(&trade.source_station),
            system_of(&trade.destination_station),
            jump_range,
            self.max_route_steps,
        )
    }

    /// Jump path between two systems
    pub fn route(&self, from: &str, to: &str, jump_range: f64) -> Result<Vec<String>> {
        self.galaxy
            .route_with_limit(from, to, jump_range, self.max_route_steps)
    }
}

fn affordable(store: &MarketStore, station: &str, credit_limit: u64) -> Vec<LocalOffer> {
    store
        .station_prices(station)
        .map(|prices| {
            prices
                .iter()
                .filter(|(_, price)| price.is_for_sale() && price.buy_price <= credit_limit)
                .map(|(commodity, price)| LocalOffer {
                    commodity: commodity.clone(),
                    buy_price: price.buy_price,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn best_trade_in(
    store: &MarketStore,
    galaxy: &StarGraph,
    station: &str,
    credit_limit: u64,
    jump_range: f64,
) -> Option<TradeRoute> {
    let mut best: Option<(LocalOffer, &Quote, u64)> = None;

    for offer in affordable(store, station, credit_limit) {
        let Some(demand) = store.best_demand(&offer.commodity) else {
            continue;
        };
        let Some(profit) = demand.sell_price.checked_sub(offer.buy_price) else {
            continue;
        };
        if profit == 0 || best.as_ref().is_some_and(|(_, _, best)| profit <= *best) {
            continue;
        }
        best = Some((offer, demand, profit));
    }

    let (offer, demand, profit) = best?;
    let (distance, jumps) = match galaxy.distance(system_of(station), demand.system()) {
        Ok(distance) => (Some(distance), Some(jump_count(distance, jump_range))),
        Err(err) => {
            debug!(%err, "trade distance unavailable");
            (None, None)
        }
    };

    Some(TradeRoute {
        commodity: offer.commodity,
        source_station: station.to_string(),
        buy_price: offer.buy_price,
        destination_station: demand.station.clone(),
        sell_price: demand.sell_price,
        profit,
        distance,
        jumps,
        jump_range,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;
    use crate::galaxy::Coordinates;
    use crate::types::price::credits;

    fn galaxy() -> Arc<StarGraph> {
        Arc::new(StarGraph::from_systems([
            ("P", Coordinates::new(0.0, 0.0, 0.0)),
            ("R", Coordinates::new(12.0, 0.0, 0.0)),
            ("S", Coordinates::new(0.0, 3.0, 4.0)),
        ]))
    }

    fn engine() -> RouteEngine {
        RouteEngine::new(SharedMarketStore::default(), galaxy())
    }

    fn record(engine: &RouteEngine, commodity: &str, station: &str, buy: u64, sell: u64, supply: u64, demand: u64) {
        engine
            .market()
            .record(Quote::new(commodity, station, credits(buy), credits(sell), supply, demand));
    }

    #[test]
    fn test_best_trade_profit_and_jumps() {
        let engine = engine();
        record(&engine, "gold", "P", 10, 0, 5, 0);
        record(&engine, "gold", "R", 0, 50, 0, 20);

        let route = engine.best_trade("P", credits(100), 5.0).unwrap().unwrap();

        assert_eq!(route.commodity, "gold");
        assert_eq!(route.source_station, "P");
        assert_eq!(route.destination_station, "R");
        assert_eq!(route.buy_price, credits(10));
        assert_eq!(route.sell_price, credits(50));
        assert_eq!(route.profit, credits(40));
        assert_eq!(route.distance, Some(12.0));
        assert_eq!(route.jumps, Some(3));
    }

    #[test]
    fn test_best_trade_nothing_affordable() {
        let engine = engine();
        record(&engine, "gold", "P", 500, 0, 5, 0);
        record(&engine, "gold", "R", 0, 900, 0, 20);

        assert_eq!(engine.best_trade("P", credits(100), 5.0).unwrap(), None);
        assert_eq!(engine.best_trade("Unknown", credits(100), 5.0).unwrap(), None);
    }

    #[test]
    fn test_best_trade_requires_demand() {
        let engine = engine();
        record(&engine, "gold", "P", 10, 0, 5, 0);

        assert_eq!(engine.best_trade("P", credits(100), 5.0).unwrap(), None);
    }

    #[test]
    fn test_best_trade_ignores_losses() {
        let engine = engine();
        record(&engine, "gold", "P", 60, 0, 5, 0);
        record(&engine, "gold", "R", 0, 50, 0, 20);
        record(&engine, "tea", "P", 20, 0, 5, 0);
        record(&engine, "tea", "R", 0, 20, 0, 20);

        assert_eq!(engine.best_trade("P", credits(100), 5.0).unwrap(), None);
    }

    #[test]
    fn test_best_trade_picks_highest_profit() {
        let engine = engine();
        record(&engine, "gold", "P", 10, 0, 5, 0);
        record(&engine, "gold", "R", 0, 50, 0, 20);
        record(&engine, "silver", "P", 5, 0, 5, 0);
        record(&engine, "silver", "S", 0, 80, 0, 20);

        let route = engine.best_trade("P", credits(100), 2.0).unwrap().unwrap();

        assert_eq!(route.commodity, "silver");
        assert_eq!(route.profit, credits(75));
        assert_eq!(route.distance, Some(5.0));
        assert_eq!(route.jumps, Some(3));
    }

    #[test]
    fn test_best_trade_skips_unavailable_local_price() {
        let engine = engine();
        record(&engine, "gold", "P", 0, 0, 5, 0);
        record(&engine, "gold", "R", 0, 50, 0, 20);

        assert!(engine.affordable_local_commodities("P", u64::MAX).is_empty());
        assert_eq!(engine.best_trade("P", u64::MAX, 5.0).unwrap(), None);
    }

    #[test]
    fn test_best_trade_rejects_jump_range() {
        let engine = engine();
        record(&engine, "gold", "P", 10, 0, 5, 0);

        assert_eq!(engine.best_trade("P", credits(100), 0.0), Err(MarketError::InvalidJumpRange(0.0)));
        assert_eq!(engine.best_trade("P", credits(100), -1.0), Err(MarketError::InvalidJumpRange(-1.0)));
    }

    #[test]
    fn test_best_trade_unlimited_jump_range() {
        let engine = engine();
        record(&engine, "gold", "P", 10, 0, 5, 0);
        record(&engine, "gold", "R", 0, 50, 0, 20);

        let route = engine.best_trade("P", credits(100), f64::INFINITY).unwrap().unwrap();

        assert_eq!(route.distance, Some(12.0));
        assert_eq!(route.jumps, Some(1));
        assert_eq!(engine.route("P", "R", f64::INFINITY).unwrap(), vec!["P", "R"]);
        assert!(engine.best_trades(credits(100), f64::INFINITY).is_ok());
        assert!(matches!(
            engine.best_trade("P", credits(100), f64::NAN),
            Err(MarketError::InvalidJumpRange(_))
        ));
        assert_eq!(
            engine.best_trade("P", credits(100), f64::NEG_INFINITY),
            Err(MarketError::InvalidJumpRange(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_best_trade_uncharted_destination() {
        let engine = engine();
        record(&engine, "gold", "P (Port)", 10, 0, 5, 0);
        record(&engine, "gold", "Nowhere (Dock)", 0, 50, 0, 20);

        let route = engine.best_trade("P (Port)", credits(100), 5.0).unwrap().unwrap();

        assert_eq!(route.profit, credits(40));
        assert_eq!(route.distance, None);
        assert_eq!(route.jumps, None);
    }

    #[test]
    fn test_affordable_local_commodities() {
        let engine = engine();
        record(&engine, "gold", "P", 10, 0, 5, 0);
        record(&engine, "tea", "P", 3, 0, 5, 0);
        record(&engine, "wine", "P", 150, 0, 5, 0);
        record(&engine, "gold", "R", 1, 0, 5, 0);

        let offers = engine.affordable_local_commodities("P", credits(100));

        assert_eq!(
            offers,
            vec![
                LocalOffer { commodity: "gold".into(), buy_price: credits(10) },
                LocalOffer { commodity: "tea".into(), buy_price: credits(3) },
            ]
        );
    }

    #[test]
    fn test_credit_limit_is_inclusive() {
        let engine = engine();
        record(&engine, "gold", "P", 100, 0, 5, 0);

        assert_eq!(engine.affordable_local_commodities("P", credits(100)).len(), 1);
        assert!(engine.affordable_local_commodities("P", credits(99)).is_empty());
    }

    #[test]
    fn test_best_trades_per_station() {
        let engine = engine();
        record(&engine, "gold", "P", 10, 0, 5, 0);
        record(&engine, "gold", "R", 0, 50, 0, 20);

        let trades = engine.best_trades(credits(100), 5.0).unwrap();

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].0, "P");
        assert_eq!(trades[0].1.as_ref().unwrap().profit, credits(40));
        assert_eq!(trades[1], ("R".to_string(), None));
    }

    #[test]
    fn test_plan_delivery() {
        let engine = RouteEngine::new(
            SharedMarketStore::default(),
            Arc::new(StarGraph::from_systems([
                ("P", Coordinates::new(0.0, 0.0, 0.0)),
                ("Q", Coordinates::new(6.0, 0.0, 0.0)),
                ("R", Coordinates::new(12.0, 0.0, 0.0)),
            ])),
        );
        record(&engine, "gold", "P (Port)", 10, 0, 5, 0);
        record(&engine, "gold", "R (Dock)", 0, 50, 0, 20);

        let trade = engine.best_trade("P (Port)", credits(100), 6.0).unwrap().unwrap();
        let path = engine.plan_delivery(&trade, 6.0).unwrap();

        assert_eq!(trade.jumps, Some(2));
        assert_eq!(path, vec!["P", "Q", "R"]);
    }
}
