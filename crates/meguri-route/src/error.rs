use thiserror::Error;

/// Expected failure modes of route aggregation.
///
/// A provider failure on any single leg fails the whole aggregation;
/// partial routes are never returned. Retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Route requires at least one stop")]
    EmptyItinerary,

    #[error("Route calculation failed: {reason}")]
    Provider { reason: String },
}
