//! Interactive mode: the feed is replayed on a writer thread while queries
//! typed on stdin are answered against whatever has been recorded so far.
//!
//! Commands, one per line:
//!
//! ```text
//! buy
//! sell
//! best-trades [credits] [jump-range]
//! trade <credits|-> <jump-range|-> <station>
//! route <jump-range> <from> -> <to>
//! quit
//! ```
//!
//! `-` leaves credits or jump range unlimited. `quit` (or end of input) stops
//! the replay before the rest of the history is read.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{error, info};

use galaxy_market::feed::{replay_until_stopped, ReplayReader};
use galaxy_market::{RouteEngine, SharedMarketStore};

use crate::cli_args::Commands;

pub fn run(engine: &RouteEngine, feed: Option<PathBuf>) -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let writer = feed
        .map(|path| spawn_replay(engine.market().clone(), path, Arc::clone(&stop)))
        .transpose()?;

    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();
    for line in stdin.lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        match parse_command(line) {
            Ok(command) => crate::execute(engine, command, &mut out)?,
            Err(err) => writeln!(out, "{err}")?,
        }
        out.flush()?;
    }

    stop.store(true, Ordering::Relaxed);
    if let Some(writer) = writer {
        if writer.join().is_err() {
            error!("feed replay thread panicked");
        }
    }
    Ok(())
}

fn spawn_replay(market: SharedMarketStore, path: PathBuf, stop: Arc<AtomicBool>) -> Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("feed-replay".to_string())
        .spawn(move || match ReplayReader::open(&path) {
            Ok(reader) => {
                let stats = replay_until_stopped(reader, &market, &stop);
                info!(path = %path.display(), recorded = stats.recorded, "feed replay done");
            }
            Err(err) => error!(path = %path.display(), %err, "failed to open feed"),
        })
        .context("failed to spawn feed replay thread")
}

fn optional_number(token: Option<&str>, what: &str) -> Result<Option<f64>> {
    match token {
        None | Some("-") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("invalid {what}: {text}")),
    }
}

/// Parse one line of input into a query
pub(crate) fn parse_command(line: &str) -> Result<Commands> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "buy" => Ok(Commands::Buy),
        "sell" => Ok(Commands::Sell),
        "best-trades" => {
            let mut tokens = rest.split_whitespace();
            Ok(Commands::BestTrades {
                credits: optional_number(tokens.next(), "credits")?,
                jump_range: optional_number(tokens.next(), "jump range")?,
            })
        }
        "trade" => {
            let mut parts = rest.splitn(3, ' ');
            let credits = optional_number(parts.next(), "credits")?;
            let jump_range = optional_number(parts.next(), "jump range")?;
            let station = parts.next().map(str::trim).unwrap_or_default();
            if station.is_empty() {
                bail!("usage: trade <credits|-> <jump-range|-> <station>");
            }
            Ok(Commands::Trade {
                station: station.to_string(),
                credits,
                jump_range,
            })
        }
        "route" => {
            let (range, systems) = rest.split_once(' ').unwrap_or((rest, ""));
            let jump_range = optional_number(Some(range), "jump range")?
                .ok_or_else(|| anyhow!("route needs a jump range"))?;
            let Some((from, to)) = systems.split_once("->") else {
                bail!("usage: route <jump-range> <from> -> <to>");
            };
            Ok(Commands::Route {
                from: from.trim().to_string(),
                to: to.trim().to_string(),
                jump_range,
            })
        }
        other => bail!("unknown command: {other}"),
    }
}
