//! Stress tests for the Galaxy Market store.
//!
//! These tests verify:
//! 1. Ranking invariants hold after long random quote streams
//! 2. The station index always reflects the last write
//! 3. One writer and several readers can share the store
//! 4. Results are deterministic for a given quote sequence
//!
//! ## Running Stress Tests
//!
//! ```bash
//! # Run all stress tests (release mode recommended)
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use galaxy_market::market::MarketStore;
use galaxy_market::types::price::{credits, UNAVAILABLE};
use galaxy_market::{MarketConfig, Quote, SharedMarketStore};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of quotes for the sequential stress test
const STRESS_QUOTE_COUNT: usize = 200_000;

const COMMODITY_COUNT: usize = 24;
const STATION_COUNT: usize = 300;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate deterministic quotes for stress testing.
///
/// Uses a seeded RNG for reproducibility. Same seed = same quotes.
/// Roughly a quarter of the quotes carry a zero buy price, and quantities
/// are zero often enough to exercise removals.
fn generate_deterministic_quotes(count: usize, seed: u64) -> Vec<Quote> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut quotes = Vec::with_capacity(count);

    for _ in 0..count {
        let commodity = format!("commodity-{}", rng.gen_range(0..COMMODITY_COUNT));
        let station = format!("System {} (Port {})", rng.gen_range(0..STATION_COUNT / 3), rng.gen_range(0..3));

        let buy_price = if rng.gen_bool(0.25) {
            0
        } else {
            rng.gen_range(credits(1)..=credits(5_000))
        };
        let sell_price = rng.gen_range(0..=credits(6_000));
        let supply = if rng.gen_bool(0.3) { 0 } else { rng.gen_range(1..=10_000) };
        let demand = if rng.gen_bool(0.3) { 0 } else { rng.gen_range(1..=10_000) };

        quotes.push(Quote::new(commodity, station, buy_price, sell_price, supply, demand));
    }

    quotes
}

/// Check every ranking of the store.
///
/// - at most K entries
/// - sorted best first
/// - only admitted quotes
/// - each ranked quote is the latest quote seen for its station
fn assert_ranking_invariants(store: &MarketStore, latest: &HashMap<(String, String), Quote>) {
    let depth = store.depth();

    for commodity in store.commodities() {
        let book = store.book(commodity).expect("listed commodity has a book");

        assert!(book.supply.len() <= depth);
        assert!(book.demand.len() <= depth);

        let supply: Vec<&Quote> = book.supply.iter().collect();
        for pair in supply.windows(2) {
            assert!(pair[0].buy_price <= pair[1].buy_price, "supply out of order");
        }
        let demand: Vec<&Quote> = book.demand.iter().collect();
        for pair in demand.windows(2) {
            assert!(pair[0].sell_price >= pair[1].sell_price, "demand out of order");
        }

        for quote in supply.iter().chain(demand.iter()) {
            let key = (quote.station.clone(), quote.commodity.clone());
            assert_eq!(Some(*quote), latest.get(&key), "ranked quote is stale");
        }
        assert!(supply.iter().all(|quote| quote.supply > 0));
        assert!(demand.iter().all(|quote| quote.demand > 0));
    }
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Record a long random stream and check every invariant at the end.
#[test]
fn stress_random_quote_stream() {
    println!("\n=== STRESS TEST: {} Random Quotes ===\n", STRESS_QUOTE_COUNT);

    let quotes = generate_deterministic_quotes(STRESS_QUOTE_COUNT, 42);
    let mut store = MarketStore::default();
    let mut latest: HashMap<(String, String), Quote> = HashMap::new();

    let start = Instant::now();
    for quote in quotes {
        latest.insert((quote.station.clone(), quote.commodity.clone()), quote.clone().normalized());
        store.record(quote);
    }
    let elapsed = start.elapsed();
    println!(
        "  Recorded in {:.2?} ({:.0} quotes/sec)",
        elapsed,
        STRESS_QUOTE_COUNT as f64 / elapsed.as_secs_f64()
    );

    assert_eq!(store.recorded(), STRESS_QUOTE_COUNT as u64);
    assert_eq!(store.commodities().len(), COMMODITY_COUNT);
    assert_ranking_invariants(&store, &latest);

    // Station index: last write wins, zero buy price reported unavailable
    for ((station, commodity), quote) in &latest {
        let price = store.local_price(station, commodity).expect("observed pair is indexed");
        assert_eq!(price.buy_price, quote.buy_price);
        assert_eq!(price.sell_price, quote.sell_price);
        assert_eq!(price.is_for_sale(), quote.buy_price != UNAVAILABLE);
    }
}

/// Different depths all keep their invariants.
#[test]
fn stress_ranking_depths() {
    let quotes = generate_deterministic_quotes(20_000, 7);

    for depth in [1, 2, 5, 17, 100] {
        let mut store = MarketStore::new(&MarketConfig::with_ranking_depth(depth)).unwrap();
        let mut latest = HashMap::new();
        for quote in &quotes {
            latest.insert((quote.station.clone(), quote.commodity.clone()), quote.clone().normalized());
            store.record(quote.clone());
        }
        assert_ranking_invariants(&store, &latest);
    }
}

/// Recording a quote twice leaves the rankings as after the first time.
#[test]
fn stress_idempotent_replay() {
    let quotes = generate_deterministic_quotes(20_000, 99);

    let mut once = MarketStore::default();
    let mut twice = MarketStore::default();
    for quote in quotes {
        once.record(quote.clone());
        twice.record(quote.clone());
        twice.record(quote);
    }

    for commodity in once.commodities() {
        let a = once.book(commodity).unwrap();
        let b = twice.book(commodity).unwrap();
        assert!(a.supply.iter().eq(b.supply.iter()), "supply differs for {commodity}");
        assert!(a.demand.iter().eq(b.demand.iter()), "demand differs for {commodity}");
    }
}

/// One writer replays quotes while readers query; the final state matches
/// a sequential replay of the same quotes.
#[test]
fn stress_concurrent_writer_and_readers() {
    const READERS: usize = 4;
    let quotes = generate_deterministic_quotes(50_000, 1234);

    let shared = SharedMarketStore::default();
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|reader| {
            let store = shared.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(reader as u64);
                let mut reads = 0u64;
                while !done.load(Ordering::Acquire) {
                    let commodity = format!("commodity-{}", rng.gen_range(0..COMMODITY_COUNT));
                    store.read(|store| {
                        if let Some(book) = store.book(&commodity) {
                            assert!(book.supply.len() <= store.depth());
                            assert!(book.demand.len() <= store.depth());
                            if let (Some(best), Some(worst)) = (book.supply.best(), book.supply.worst()) {
                                assert!(best.buy_price <= worst.buy_price);
                            }
                        }
                    });
                    reads += 1;
                }
                reads
            })
        })
        .collect();

    let writer = {
        let store = shared.clone();
        let quotes = quotes.clone();
        thread::spawn(move || store.record_all(quotes))
    };

    let written = writer.join().unwrap();
    done.store(true, Ordering::Release);
    let reads: u64 = readers.into_iter().map(|reader| reader.join().unwrap()).sum();
    println!("  {} quotes written, {} reads", written, reads);

    let mut sequential = MarketStore::default();
    for quote in quotes {
        sequential.record(quote);
    }

    assert_eq!(written, sequential.recorded());
    shared.read(|store| {
        assert_eq!(store.commodities(), sequential.commodities());
        for commodity in sequential.commodities() {
            assert_eq!(store.best_supply(commodity), sequential.best_supply(commodity));
            assert_eq!(store.best_demand(commodity), sequential.best_demand(commodity));
        }
    });
}
