mod request;
mod response;

pub use request::{GeocodeParams, RouteRequest, SpotRequest, StartRequest};
pub use response::{GeocodeResponse, HealthResponse, RouteResponse};
