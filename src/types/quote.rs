//! Market quote: one station's prices and quantities for a commodity.
//!
//! Quotes are immutable observations. A later quote for the same
//! station/commodity pair supersedes the earlier one; nothing is ever
//! updated in place.

use crate::types::price::{self, UNAVAILABLE};

/// One observation of a commodity's tradability at a station.
///
/// Prices are fixed-point (scaled by 10^8), quantities are unit counts.
///
/// ## Example
///
/// ```
/// use galaxy_market::types::Quote;
/// use galaxy_market::types::price::{credits, UNAVAILABLE};
///
/// let quote = Quote::new("gold", "Eranin (Azeban City)", 0, credits(9_400), 0, 1_200);
/// assert_eq!(quote.clone().normalized().buy_price, UNAVAILABLE);
/// assert_eq!(quote.system(), "Eranin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quote {
    /// Commodity identifier, e.g. "gold"
    pub commodity: String,

    /// Station identifier, "System (Station Label)"
    pub station: String,

    /// Price to acquire one unit at the station
    /// [`UNAVAILABLE`] once normalized if the station does not sell it
    pub buy_price: u64,

    /// Price the station pays for one unit
    pub sell_price: u64,

    /// Units available for purchase
    pub supply: u64,

    /// Unmet demand in units
    pub demand: u64,
}

impl Quote {
    /// Create a new quote
    ///
    /// # Arguments
    ///
    /// * `commodity` - Commodity identifier
    /// * `station` - Station identifier
    /// * `buy_price` - Price to buy at the station (fixed-point, 0 = not for sale)
    /// * `sell_price` - Price to sell at the station (fixed-point)
    /// * `supply` - Units in stock
    /// * `demand` - Units wanted
    pub fn new(
        commodity: impl Into<String>,
        station: impl Into<String>,
        buy_price: u64,
        sell_price: u64,
        supply: u64,
        demand: u64,
    ) -> Self {
        Self {
            commodity: commodity.into(),
            station: station.into(),
            buy_price,
            sell_price,
            supply,
            demand,
        }
    }

    /// Replace a zero buy price with [`UNAVAILABLE`]
    pub fn normalized(mut self) -> Self {
        if self.buy_price == 0 {
            self.buy_price = UNAVAILABLE;
        }
        self
    }

    /// Whether the station actually sells this commodity
    #[inline]
    pub fn is_for_sale(&self) -> bool {
        self.buy_price != 0 && price::is_available(self.buy_price)
    }

    #[inline]
    pub fn has_supply(&self) -> bool {
        self.supply > 0
    }

    #[inline]
    pub fn has_demand(&self) -> bool {
        self.demand > 0
    }

    /// Star system embedded in the station identifier
    pub fn system(&self) -> &str {
        crate::galaxy::system_of(&self.station)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
