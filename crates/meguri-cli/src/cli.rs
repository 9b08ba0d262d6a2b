use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Meguri - Japanese address geocoding and sightseeing route planner
#[derive(Parser, Debug)]
#[command(name = "meguri")]
#[command(about = "Japanese address geocoding and sightseeing route planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a free-form Japanese address to ranked coordinates
    Geocode(GeocodeArgs),

    /// Plan a route over an ordered list of spots
    Route(RouteArgs),
}

#[derive(Parser, Debug)]
pub struct GeocodeArgs {
    /// The address to resolve (e.g. "東京都練馬区練馬1-1-1")
    pub address: String,

    /// Maximum number of candidates to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Start location as "LAT,LNG"
    #[arg(long)]
    pub start: String,

    /// Display name for the start location
    #[arg(long, default_value = "出発地")]
    pub start_name: String,

    /// A spot as "NAME:LAT:LNG" or "NAME:LAT:LNG:VISIT_MINUTES".
    /// Repeat for each stop; order is the visiting order.
    #[arg(long = "spot", value_name = "SPOT")]
    pub spots: Vec<String>,

    /// Transport mode (walking, cycling, driving)
    #[arg(long, default_value = "walking")]
    pub mode: String,

    /// Do not loop the route back to the start
    #[arg(long)]
    pub no_return: bool,

    /// Query the routing service instead of estimating from
    /// straight-line distance
    #[arg(long)]
    pub osrm: bool,
}
