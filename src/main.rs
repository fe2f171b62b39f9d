//! Galaxy Market - Binary Entry Point
//!
//! Loads the star chart, replays recorded feed history into the market store
//! and answers one query (or a stream of queries in interactive mode).
//! Logs go to stderr; stdout carries only report output.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use galaxy_market::error::MarketError;
use galaxy_market::feed::{replay_into, ReplayReader};
use galaxy_market::report;
use galaxy_market::types::price;
use galaxy_market::{MarketConfig, RouteEngine, SharedMarketStore, StarGraph};

use crate::cli_args::{Cli, Commands};

mod cli_args;
mod interactive;

fn main() -> Result<()> {
    let Cli {
        feed,
        ranking_depth,
        star_table,
        max_route_steps,
        command,
    } = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = MarketConfig {
        ranking_depth,
        max_route_steps,
    };
    config.validate().context("invalid market configuration")?;

    let galaxy = load_galaxy(star_table.as_deref())?;
    info!(systems = galaxy.len(), "star chart loaded");

    let market = SharedMarketStore::new(&config)?;
    let engine = RouteEngine::new(market.clone(), Arc::new(galaxy)).with_config(&config);

    if let Commands::Interactive = command {
        return interactive::run(&engine, feed);
    }

    if let Some(path) = feed {
        let reader = ReplayReader::open(&path)
            .with_context(|| format!("failed to open feed {}", path.display()))?;
        replay_into(reader, &market);
    }

    let mut out = io::stdout().lock();
    execute(&engine, command, &mut out)?;
    out.flush()?;
    Ok(())
}

fn load_galaxy(star_table: Option<&Path>) -> Result<StarGraph> {
    let Some(path) = star_table else {
        return Ok(StarGraph::builtin());
    };
    let file = File::open(path).with_context(|| format!("failed to open star table {}", path.display()))?;
    StarGraph::from_json_reader(BufReader::new(file))
        .with_context(|| format!("failed to load star table {}", path.display()))
}

/// Credit limit in fixed point; no value means no limit
pub(crate) fn credit_limit(credits: Option<f64>) -> Result<u64> {
    match credits {
        None => Ok(u64::MAX),
        Some(value) => price::from_f64(value).with_context(|| format!("invalid credit amount {value}")),
    }
}

/// Run one query against the engine, writing its report to `out`
///
/// Query failures the player can act on (unknown system, no route) are
/// reported as text; only output errors are returned.
pub(crate) fn execute(engine: &RouteEngine, command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Buy => {
            let text = engine.market().read(report::buy_report);
            out.write_all(text.as_bytes())?;
        }
        Commands::Sell => {
            let text = engine.market().read(report::sell_report);
            out.write_all(text.as_bytes())?;
        }
        Commands::BestTrades { credits, jump_range } => {
            let trades = engine.best_trades(credit_limit(credits)?, jump_range.unwrap_or(f64::INFINITY));
            match trades {
                Ok(trades) => out.write_all(report::best_trades_report(&trades).as_bytes())?,
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        Commands::Trade {
            station,
            credits,
            jump_range,
        } => {
            let jump_range = jump_range.unwrap_or(f64::INFINITY);
            match engine.best_trade(&station, credit_limit(credits)?, jump_range) {
                Ok(trade) => {
                    out.write_all(report::trade_lines(trade.as_ref()).as_bytes())?;
                    let charted = trade.filter(|trade| trade.distance.is_some() && !trade.is_local());
                    if let Some(trade) = charted {
                        write_path(out, engine.plan_delivery(&trade, jump_range))?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        Commands::Route { from, to, jump_range } => {
            write_path(out, engine.route(&from, &to, jump_range))?;
        }
        Commands::Interactive => warn!("interactive mode cannot be nested"),
    }
    Ok(())
}

fn write_path(out: &mut impl Write, path: Result<Vec<String>, MarketError>) -> io::Result<()> {
    match path {
        Ok(path) => writeln!(out, "{}", report::route_line(&path)),
        Err(err) => writeln!(out, "{err}"),
    }
}
