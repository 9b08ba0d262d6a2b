use thiserror::Error;

/// Expected failure modes of a resolution.
///
/// Per-lookup network errors are logged and skipped inside the resolver;
/// `Network` is surfaced only when every candidate lookup failed and
/// nothing was accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    #[error("No address was provided")]
    EmptyInput,

    #[error("Address not found. Check the notation, or retry with a coarser address (city or ward level)")]
    NotFound,

    #[error("Geocoding failed: {reason}. Check the network connection")]
    Network { reason: String },
}
