//! Candidate-loop geocoding resolver

use meguri_core::address::{self, RankingWeights};
use meguri_core::config::LayeredConfig;
use meguri_core::models::{GeocodeCandidate, RankedCandidate, DEDUP_EPSILON_DEG};
use std::time::Duration;

use crate::error::GeocodeError;
use crate::ports::GeocodeLookup;

/// Tuning knobs for [`Resolver`].
///
/// Defaults are the observed heuristics: stop once 3 results have
/// accumulated, return at most 5, keep lookups at least 100 ms apart to
/// respect third-party usage policy.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub weights: RankingWeights,
    /// Ranked candidates returned at most
    pub max_results: usize,
    /// Stop trying generalized queries once this many results accumulated
    pub accumulate_target: usize,
    /// Minimum delay between consecutive lookups (plain delay, no backoff)
    pub throttle: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            weights: RankingWeights::default(),
            max_results: 5,
            accumulate_target: 3,
            throttle: Duration::from_millis(100),
        }
    }
}

impl ResolverConfig {
    /// Carry every resolver knob over from layered configuration
    pub fn from_layered(config: &LayeredConfig) -> Self {
        Self {
            weights: config.ranking_weights(),
            max_results: config.max_results.value,
            accumulate_target: config.accumulate_target.value,
            throttle: Duration::from_millis(config.throttle_ms.value),
        }
    }
}

/// Resolves a free-form address into ranked coordinate candidates.
///
/// Lookups are intentionally sequential: the literal query short-circuits
/// the generalized fallbacks, and the throttle spaces out external calls.
/// Dropping the returned future cancels the resolution; no partial result
/// set ever escapes.
pub struct Resolver<L: GeocodeLookup> {
    lookup: L,
    config: ResolverConfig,
}

impl<L: GeocodeLookup> Resolver<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_config(lookup, ResolverConfig::default())
    }

    pub fn with_config(lookup: L, config: ResolverConfig) -> Self {
        Self { lookup, config }
    }

    /// Resolve an address against the lookup port.
    ///
    /// Tries each candidate query in priority order, merging results and
    /// skipping places within ~1e-4° of an already-accumulated one. If
    /// the literal (first) query yields anything, no fallback query runs.
    pub async fn resolve(&self, address: &str) -> Result<Vec<RankedCandidate>, GeocodeError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyInput);
        }

        let queries = address::candidates(trimmed);
        let mut accumulated: Vec<GeocodeCandidate> = Vec::new();
        let mut failed_lookups = 0usize;
        let mut last_failure: Option<String> = None;

        for (attempt, query) in queries.iter().enumerate() {
            if attempt > 0 && !self.config.throttle.is_zero() {
                tokio::time::sleep(self.config.throttle).await;
            }

            tracing::debug!(attempt = attempt + 1, query = %query, "geocode lookup");

            let places = match self.lookup.search(query).await {
                Ok(places) => places,
                Err(e) => {
                    tracing::warn!(query = %query, error = %e, "lookup failed, trying next candidate");
                    failed_lookups += 1;
                    last_failure = Some(e.0);
                    continue;
                }
            };

            let literal_hit = attempt == 0 && !places.is_empty();

            for place in places {
                let duplicate = accumulated
                    .iter()
                    .any(|c| c.coordinates.is_near(&place.coordinates, DEDUP_EPSILON_DEG));
                if duplicate {
                    continue;
                }
                let formatted_address = address::format_japanese_address(&place.display_name);
                accumulated.push(GeocodeCandidate {
                    coordinates: place.coordinates,
                    display_name: place.display_name,
                    formatted_address,
                });
            }

            // The literal address matched: precise beats generalized.
            if literal_hit {
                break;
            }

            if accumulated.len() >= self.config.accumulate_target {
                break;
            }
        }

        if accumulated.is_empty() {
            if failed_lookups == queries.len() {
                return Err(GeocodeError::Network {
                    reason: last_failure.unwrap_or_else(|| "all lookups failed".to_string()),
                });
            }
            return Err(GeocodeError::NotFound);
        }

        let mut ranked: Vec<RankedCandidate> = accumulated
            .into_iter()
            .map(|candidate| {
                let relevance_score = address::relevance_score(
                    trimmed,
                    &candidate.formatted_address,
                    &self.config.weights,
                );
                RankedCandidate { candidate, relevance_score }
            })
            .collect();

        // sort_by is stable: equal scores keep accumulation order
        ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        ranked.truncate(self.config.max_results);

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{LookupError, RawPlace};
    use async_trait::async_trait;
    use meguri_core::models::Coordinates;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Lookup stub that pops one scripted response per call and counts
    /// invocations. Once the script runs out it keeps returning misses.
    struct ScriptedLookup {
        responses: Mutex<VecDeque<Result<Vec<RawPlace>, LookupError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedLookup {
        fn new(responses: Vec<Result<Vec<RawPlace>, LookupError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GeocodeLookup for ScriptedLookup {
        async fn search(&self, _query: &str) -> Result<Vec<RawPlace>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn place(latitude: f64, longitude: f64, display_name: &str) -> RawPlace {
        RawPlace {
            coordinates: Coordinates::new(latitude, longitude),
            display_name: display_name.to_string(),
        }
    }

    fn no_throttle() -> ResolverConfig {
        ResolverConfig { throttle: Duration::ZERO, ..ResolverConfig::default() }
    }

    // Expands to six candidate queries; used wherever the fallback loop matters.
    const BLOCK_ADDRESS: &str = "東京都練馬区練馬1丁目1番1号";

    #[test]
    fn layered_config_feeds_every_knob() {
        let mut layered = meguri_core::config::LayeredConfig::with_defaults();
        layered.max_results.value = 7;
        layered.accumulate_target.value = 2;
        layered.throttle_ms.value = 50;
        layered.containment_weight.value = 250;

        let config = ResolverConfig::from_layered(&layered);

        assert_eq!(config.max_results, 7);
        assert_eq!(config.accumulate_target, 2);
        assert_eq!(config.throttle, Duration::from_millis(50));
        assert_eq!(config.weights.containment, 250);
        assert_eq!(config.weights.numeric_token, 20);
    }

    #[tokio::test]
    async fn empty_input_fails_before_any_lookup() {
        let lookup = ScriptedLookup::new(vec![]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let err = resolver.resolve("   ").await.unwrap_err();

        assert_eq!(err, GeocodeError::EmptyInput);
        assert_eq!(lookup.call_count(), 0);
    }

    #[tokio::test]
    async fn literal_hit_short_circuits_fallback_queries() {
        let lookup = ScriptedLookup::new(vec![Ok(vec![place(
            35.7356,
            139.6517,
            "練馬, 練馬区, 東京都, 日本",
        )])]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let results = resolver.resolve(BLOCK_ADDRESS).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(lookup.call_count(), 1);
        assert_eq!(results[0].candidate.formatted_address, "東京都練馬区練馬");
    }

    #[tokio::test]
    async fn nearby_results_collapse_to_one() {
        let lookup = ScriptedLookup::new(vec![Ok(vec![
            place(35.73560, 139.65170, "練馬, 練馬区, 東京都, 日本"),
            place(35.73565, 139.65174, "練馬一丁目, 練馬区, 東京都, 日本"),
            place(35.74000, 139.65170, "練馬二丁目, 練馬区, 東京都, 日本"),
        ])]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let results = resolver.resolve(BLOCK_ADDRESS).await.unwrap();

        assert_eq!(results.len(), 2);
        // first occurrence wins
        assert_eq!(results.iter().filter(|r| r.candidate.formatted_address.contains("練馬一丁目")).count(), 0);
    }

    #[tokio::test]
    async fn fallback_queries_accumulate_until_target() {
        let lookup = ScriptedLookup::new(vec![
            Ok(vec![]),
            Ok(vec![place(35.70, 139.60, "a, b, 日本")]),
            Ok(vec![place(35.71, 139.61, "c, d, 日本")]),
            Ok(vec![place(35.72, 139.62, "e, f, 日本")]),
        ]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let results = resolver.resolve(BLOCK_ADDRESS).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(lookup.call_count(), 4);
    }

    #[tokio::test]
    async fn failed_lookup_is_skipped_not_fatal() {
        let lookup = ScriptedLookup::new(vec![
            Err(LookupError("connection reset".to_string())),
            Ok(vec![place(35.7356, 139.6517, "練馬, 練馬区, 東京都, 日本")]),
        ]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let results = resolver.resolve(BLOCK_ADDRESS).await.unwrap();

        assert_eq!(results.len(), 1);
        assert!(lookup.call_count() >= 2);
    }

    #[tokio::test]
    async fn all_lookups_failing_surfaces_network_error() {
        let responses = (0..10)
            .map(|_| Err(LookupError("unreachable".to_string())))
            .collect();
        let lookup = ScriptedLookup::new(responses);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let err = resolver.resolve(BLOCK_ADDRESS).await.unwrap_err();

        assert!(matches!(err, GeocodeError::Network { .. }));
    }

    #[tokio::test]
    async fn exhausted_misses_surface_not_found() {
        let lookup = ScriptedLookup::new(vec![]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let err = resolver.resolve(BLOCK_ADDRESS).await.unwrap_err();

        assert_eq!(err, GeocodeError::NotFound);
        assert_eq!(lookup.call_count(), 6);
    }

    #[tokio::test]
    async fn ranking_is_stable_and_relevance_first() {
        // Three unrelated places (score 0) followed by one containing the
        // query text. The relevant one must rank first; the ties keep
        // their accumulation order.
        let lookup = ScriptedLookup::new(vec![Ok(vec![
            place(10.0, 10.0, "alpha, one, country"),
            place(20.0, 20.0, "beta, two, country"),
            place(30.0, 30.0, "gamma, three, country"),
            place(40.0, 40.0, "xyz street, four, country"),
        ])]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let results = resolver.resolve("xyz").await.unwrap();

        assert_eq!(results.len(), 4);
        assert!(results[0].candidate.formatted_address.to_lowercase().contains("xyz"));
        assert!(results[0].relevance_score > 0);
        assert_eq!(results[1].candidate.display_name, "alpha, one, country");
        assert_eq!(results[2].candidate.display_name, "beta, two, country");
        assert_eq!(results[3].candidate.display_name, "gamma, three, country");
    }

    #[tokio::test]
    async fn results_truncate_to_max() {
        let places = (0..7)
            .map(|i| place(10.0 + i as f64, 10.0, &format!("p{}, q, country", i)))
            .collect();
        let lookup = ScriptedLookup::new(vec![Ok(places)]);
        let resolver = Resolver::with_config(&lookup, no_throttle());

        let results = resolver.resolve("anywhere").await.unwrap();

        assert_eq!(results.len(), 5);
    }
}
