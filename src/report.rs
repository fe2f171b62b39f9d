//! Plain-text rendering of query results.
//!
//! The core returns data only; this module is the thin layer that turns it
//! into the lines a player reads.

use crate::market::MarketStore;
use crate::types::price::from_fixed_trimmed;
use crate::types::{Quote, TradeRoute};

/// One line for the best place to buy a commodity
pub fn best_buy_line(commodity: &str, quote: &Quote) -> String {
    let price = if quote.is_for_sale() {
        format!("{} CR", from_fixed_trimmed(quote.buy_price))
    } else {
        "N/A".to_string()
    };
    format!(
        "{}: best place to buy from: {}, for {} (supply {})",
        commodity, quote.station, price, quote.supply
    )
}

/// One line for the best place to sell a commodity
pub fn best_sell_line(commodity: &str, quote: &Quote) -> String {
    format!(
        "{}: best place to sell to: {}, for {} CR (demand {})",
        commodity,
        quote.station,
        from_fixed_trimmed(quote.sell_price),
        quote.demand
    )
}

/// Best buying place of every commodity, sorted by commodity
pub fn buy_report(store: &MarketStore) -> String {
    store
        .commodities()
        .into_iter()
        .filter_map(|commodity| store.best_supply(commodity).map(|quote| best_buy_line(commodity, quote) + "\n"))
        .collect()
}

/// Best selling place of every commodity, sorted by commodity
pub fn sell_report(store: &MarketStore) -> String {
    store
        .commodities()
        .into_iter()
        .filter_map(|commodity| store.best_demand(commodity).map(|quote| best_sell_line(commodity, quote) + "\n"))
        .collect()
}

/// Two lines describing a trade, or a notice that there is none
pub fn trade_lines(route: Option<&TradeRoute>) -> String {
    let Some(route) = route else {
        return "no profitable trade\n".to_string();
    };

    let trade = format!(
        "buy {} for {} and sell to {} for {}, profit {}",
        route.commodity,
        from_fixed_trimmed(route.buy_price),
        route.destination_station,
        from_fixed_trimmed(route.sell_price),
        from_fixed_trimmed(route.profit),
    );
    let distance = match (route.distance, route.jumps) {
        (Some(distance), Some(jumps)) => {
            format!("jumps {}, range {}, distance {:.2}", jumps, route.jump_range, distance)
        }
        _ => "distance unknown (uncharted system)".to_string(),
    };
    format!("{trade}\n{distance}\n")
}

/// Best trade per station, one block per station
pub fn best_trades_report(trades: &[(String, Option<TradeRoute>)]) -> String {
    trades
        .iter()
        .map(|(station, route)| {
            format!(
                "======== buying from {} =======\n{}\n",
                station,
                trade_lines(route.as_ref())
            )
        })
        .collect()
}

/// A jump path as "A -> B -> C (2 jumps)"
pub fn route_line(path: &[String]) -> String {
    format!("{} ({} jumps)", path.join(" -> "), path.len().saturating_sub(1))
}
