//! Domain models shared across all meguri crates

pub mod geocode;
pub mod location;
pub mod route;

pub use geocode::{GeocodeCandidate, RankedCandidate};
pub use location::{Coordinates, StartLocation, DEDUP_EPSILON_DEG};
pub use route::{RoutePoint, RouteStop, RouteSummary, TransportMode};
