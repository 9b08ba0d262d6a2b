//! Command implementations

mod geocode;
mod route;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = crate::config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Geocode(args) => geocode::execute(args, &config, &output).await,
        Commands::Route(args) => route::execute(args, &config, &output).await,
    }
}
