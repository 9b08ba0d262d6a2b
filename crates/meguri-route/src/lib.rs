//! Meguri Route - Itinerary aggregation over a pluggable leg provider
//!
//! Turns an ordered list of stops into annotated route points and a
//! derived summary. Per-leg distance/time comes from an injected
//! [`ports::LegProvider`]; a straight-line haversine estimator and an
//! OSRM HTTP adapter are provided.

pub mod aggregator;
pub mod error;
pub mod haversine;
pub mod models;
pub mod osrm;
pub mod ports;

pub use aggregator::{RouteAggregator, RETURN_TO_START_LABEL};
pub use error::RouteError;
pub use haversine::HaversineLegProvider;
pub use models::PlannedRoute;
pub use osrm::OsrmLegProvider;
pub use ports::{Leg, LegProvider, ProviderError};
