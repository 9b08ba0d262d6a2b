use crate::cli::GeocodeArgs;
use crate::output::OutputWriter;
use crate::output_types::CandidateRow;
use anyhow::{Context, Result};
use meguri_core::config::{ConfigSource, LayeredConfig};
use meguri_geocode::{NominatimLookup, Resolver, ResolverConfig};

pub async fn execute(
    args: GeocodeArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(limit) = args.limit {
        config.max_results.update(limit, ConfigSource::Cli);
    }

    let lookup =
        NominatimLookup::new(&config.geocoder_url.value, &config.user_agent.value);

    let resolver = Resolver::with_config(lookup, ResolverConfig::from_layered(&config));

    let results = resolver
        .resolve(&args.address)
        .await
        .with_context(|| format!("failed to resolve '{}'", args.address))?;

    if output.is_json() {
        output.result(&results)?;
    } else {
        output.section("Candidates");
        let rows: Vec<CandidateRow> = results
            .iter()
            .enumerate()
            .map(|(i, c)| CandidateRow::from_candidate(i + 1, c))
            .collect();
        output.table(rows);
        output.success(format!("{} candidate(s) for '{}'", results.len(), args.address));
    }

    Ok(())
}
