use std::sync::Arc;

use meguri_core::config::LayeredConfig;
use meguri_geocode::{GeocodeLookup, NominatimLookup, Resolver, ResolverConfig};
use meguri_route::{HaversineLegProvider, LegProvider, OsrmLegProvider};

/// Shared handler state: the resolver plus the two leg providers.
///
/// The OSRM provider is the primary route source; the haversine
/// estimator stands in when OSRM is unavailable or explicitly bypassed.
pub struct AppState {
    pub resolver: Resolver<Arc<dyn GeocodeLookup>>,
    pub router_provider: Arc<dyn LegProvider>,
    pub fallback_provider: Arc<dyn LegProvider>,
}

impl AppState {
    pub fn new(
        lookup: Arc<dyn GeocodeLookup>,
        resolver_config: ResolverConfig,
        router_provider: Arc<dyn LegProvider>,
        fallback_provider: Arc<dyn LegProvider>,
    ) -> Self {
        Self {
            resolver: Resolver::with_config(lookup, resolver_config),
            router_provider,
            fallback_provider,
        }
    }

    /// Wire up the default adapters from layered configuration
    pub fn from_config(config: &LayeredConfig) -> Self {
        let lookup: Arc<dyn GeocodeLookup> = Arc::new(NominatimLookup::new(
            &config.geocoder_url.value,
            &config.user_agent.value,
        ));

        Self::new(
            lookup,
            ResolverConfig::from_layered(config),
            Arc::new(OsrmLegProvider::new(&config.osrm_url.value)),
            Arc::new(HaversineLegProvider::new()),
        )
    }
}
