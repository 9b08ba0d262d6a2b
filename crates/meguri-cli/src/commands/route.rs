use crate::cli::RouteArgs;
use crate::output::OutputWriter;
use crate::output_types::RouteRow;
use anyhow::{anyhow, Context, Result};
use meguri_core::config::LayeredConfig;
use meguri_core::models::{Coordinates, RouteStop, StartLocation, TransportMode};
use meguri_route::{HaversineLegProvider, LegProvider, OsrmLegProvider, RouteAggregator};
use std::sync::Arc;

pub async fn execute(args: RouteArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mode: TransportMode = args.mode.parse()?;

    let start_coords = parse_latlng(&args.start)
        .with_context(|| format!("invalid --start '{}'", args.start))?;
    let start = StartLocation::new(start_coords, &args.start_name);

    let mut stops = vec![start.to_stop()];
    for spec in &args.spots {
        stops.push(parse_spot(spec).with_context(|| format!("invalid --spot '{}'", spec))?);
    }

    let provider: Arc<dyn LegProvider> = if args.osrm {
        Arc::new(OsrmLegProvider::new(&config.osrm_url.value))
    } else {
        Arc::new(HaversineLegProvider::new())
    };

    let aggregator = RouteAggregator::new(provider);
    let route = aggregator.aggregate(&stops, mode, !args.no_return).await?;

    if output.is_json() {
        output.result(&route)?;
        return Ok(());
    }

    output.section("Route");
    let rows: Vec<RouteRow> = route
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| RouteRow::from_point(i, p))
        .collect();
    output.table(rows);

    output.section("Summary");
    output.kv("Mode", mode);
    output.kv("Stops", route.summary.total_stops);
    output.kv("Distance", format!("{:.2} km", route.summary.total_distance_km));
    output.kv("Travel time", format!("{} min", route.summary.total_travel_time_minutes));
    output.kv("Visit time", format!("{} min", route.summary.total_visit_time_minutes));
    output.kv("Returns to start", route.summary.returns_to_start);

    if !args.osrm {
        output.warning("distances are straight-line estimates; pass --osrm for road routing");
    }

    Ok(())
}

/// Parse "LAT,LNG"
fn parse_latlng(s: &str) -> Result<Coordinates> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected LAT,LNG"))?;
    let latitude: f64 = lat.trim().parse().context("latitude is not a number")?;
    let longitude: f64 = lng.trim().parse().context("longitude is not a number")?;
    Ok(Coordinates::try_new(latitude, longitude)?)
}

/// Parse "NAME:LAT:LNG" or "NAME:LAT:LNG:VISIT_MINUTES"
fn parse_spot(s: &str) -> Result<RouteStop> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(anyhow!("expected NAME:LAT:LNG or NAME:LAT:LNG:VISIT_MINUTES"));
    }

    let latitude: f64 = parts[1].trim().parse().context("latitude is not a number")?;
    let longitude: f64 = parts[2].trim().parse().context("longitude is not a number")?;
    let mut stop = RouteStop::new(parts[0], Coordinates::try_new(latitude, longitude)?);

    if parts.len() == 4 {
        let minutes: u32 = parts[3].trim().parse().context("visit minutes is not a number")?;
        stop = stop.with_visit_duration(minutes);
    }

    Ok(stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latlng() {
        let coords = parse_latlng("35.7356, 139.6517").unwrap();
        assert_eq!(coords.latitude, 35.7356);
        assert_eq!(coords.longitude, 139.6517);
    }

    #[test]
    fn test_parse_latlng_rejects_garbage() {
        assert!(parse_latlng("35.7356").is_err());
        assert!(parse_latlng("north,east").is_err());
        assert!(parse_latlng("95.0,139.0").is_err());
    }

    #[test]
    fn test_parse_spot_without_duration() {
        let stop = parse_spot("豊玉氷川神社:35.7303:139.6601").unwrap();
        assert_eq!(stop.name, "豊玉氷川神社");
        assert_eq!(stop.visit_duration_minutes, 0);
    }

    #[test]
    fn test_parse_spot_with_duration() {
        let stop = parse_spot("練馬区立美術館:35.7442:139.6282:60").unwrap();
        assert_eq!(stop.visit_duration_minutes, 60);
        assert_eq!(stop.coordinates.latitude, 35.7442);
    }

    #[test]
    fn test_parse_spot_rejects_wrong_arity() {
        assert!(parse_spot("名前:35.7").is_err());
        assert!(parse_spot("名前:35.7:139.6:60:extra").is_err());
    }
}
