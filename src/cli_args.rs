use std::path::PathBuf;

use clap::{Parser, Subcommand};

use galaxy_market::config::DEFAULT_RANKING_DEPTH;

#[derive(Clone, Parser)]
#[command(name = "galaxy-market", version, about = "Trading queries over a galactic market feed")]
pub struct Cli {
    /// feed history to replay (JSON lines, optionally .gz)
    #[arg(long, env("GALAXY_MARKET_FEED"))]
    pub feed: Option<PathBuf>,

    /// quotes kept per commodity and direction
    #[arg(long, env("GALAXY_MARKET_RANKING_DEPTH"), default_value_t = DEFAULT_RANKING_DEPTH)]
    pub ranking_depth: usize,

    /// JSON star table replacing the built-in chart
    #[arg(long, env("GALAXY_MARKET_STAR_TABLE"))]
    pub star_table: Option<PathBuf>,

    /// stepping stones the planner may take before giving up
    #[arg(long, env("GALAXY_MARKET_MAX_ROUTE_STEPS"))]
    pub max_route_steps: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// best place to buy every commodity
    Buy,
    /// best place to sell every commodity
    Sell,
    /// best trade from every known station
    BestTrades {
        #[arg(long)]
        credits: Option<f64>,
        #[arg(long)]
        jump_range: Option<f64>,
    },
    /// best trade from one station and its jump path
    Trade {
        station: String,
        #[arg(long)]
        credits: Option<f64>,
        #[arg(long)]
        jump_range: Option<f64>,
    },
    /// jump path between two systems
    Route {
        from: String,
        to: String,
        #[arg(long)]
        jump_range: f64,
    },
    /// replay the feed in the background and answer commands from stdin
    Interactive,
}
