//! Result of a profit search: what to buy here and where to deliver it.

/// The most profitable single-destination trade from a station.
///
/// Prices and profit are fixed-point (scaled by 10^8). `distance` and
/// `jumps` are `None` when either end of the trade lies in a system that is
/// not charted in the star graph.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRoute {
    /// Commodity to carry
    pub commodity: String,

    /// Station to buy at
    pub source_station: String,

    /// Price paid at the source station
    pub buy_price: u64,

    /// Station paying the best price for the commodity
    pub destination_station: String,

    /// Price received at the destination station
    pub sell_price: u64,

    /// `sell_price - buy_price`, always positive
    pub profit: u64,

    /// Straight-line distance between the two systems, in light years
    pub distance: Option<f64>,

    /// Minimum number of jumps at `jump_range`
    pub jumps: Option<u32>,

    /// Jump range the route was computed for
    pub jump_range: f64,
}

impl TradeRoute {
    /// Same-system deliveries need no jumps.
    pub fn is_local(&self) -> bool {
        matches!(self.distance, Some(d) if d == 0.0)
    }
}

/// Minimum number of jumps needed to cover `distance` at `jump_range`.
///
/// `ceil(distance / jump_range)`, except that any positive distance takes at
/// least one jump (relevant for an unlimited jump range).
///
/// ```
/// use galaxy_market::types::jump_count;
///
/// assert_eq!(jump_count(12.0, 5.0), 3);
/// assert_eq!(jump_count(10.0, 5.0), 2);
/// assert_eq!(jump_count(0.0, 5.0), 0);
/// assert_eq!(jump_count(12.0, f64::INFINITY), 1);
/// ```
pub fn jump_count(distance: f64, jump_range: f64) -> u32 {
    if distance <= 0.0 {
        return 0;
    }
    let jumps = (distance / jump_range).ceil();
    if jumps < 1.0 {
        1
    } else if jumps >= u32::MAX as f64 {
        u32::MAX
    } else {
        jumps as u32
    }
}
